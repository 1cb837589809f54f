mod document;
mod payload;
mod request;

pub use document::{parse_date, DocumentDraft, DocumentHeader, DocumentKind, HeaderField, DATE_FORMAT};
pub use payload::{BillPayload, DocumentPayload, InvoicePayload};
pub use request::{DocumentPreview, DocumentRequest};
