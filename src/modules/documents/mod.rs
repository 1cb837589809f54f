// Documents module: bill and invoice drafts built on the shared line engine

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{DocumentDraft, DocumentKind, DocumentPayload, HeaderField};
pub use services::{DocumentAggregator, DocumentService, DocumentTotals};
