mod payload;
mod payment_allocation;
mod payment_draft;
mod request;

pub use payload::{BillPaymentEntry, BulkPaymentPayload};
pub use payment_allocation::{BillReference, PaymentAllocation};
pub use payment_draft::{BulkPaymentDraft, PaymentField, PaymentHeader};
pub use request::{BulkPaymentRequest, PaymentPreview, SelectedBill};
