// Payments module: bulk vendor payments allocated across outstanding bills

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{BillReference, BulkPaymentDraft, BulkPaymentPayload, PaymentAllocation, PaymentField};
pub use services::{PaymentApportioner, PaymentBreakdown, PaymentService};
