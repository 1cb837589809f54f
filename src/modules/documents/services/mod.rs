mod aggregator;
mod document_service;
mod document_validator;

pub use aggregator::{DocumentAggregator, DocumentTotals};
pub use document_service::DocumentService;
pub use document_validator::DocumentValidator;
