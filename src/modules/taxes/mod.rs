pub mod models;
pub mod services;

pub use models::{GstRate, GstSplit, TaxJurisdiction};
pub use services::TaxCalculator;
