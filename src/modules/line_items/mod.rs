// Line items module: the shared line model and per-line arithmetic used by
// bills, invoices and bulk payments

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{EditOutcome, LineEdit, LineField, LineItem, LineItemInput};
pub use services::{compute_line_total, LineBreakdown, LineCalculator, LineCollection};
