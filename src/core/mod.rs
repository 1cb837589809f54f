pub mod coerce;
pub mod currency;
pub mod error;
pub mod validation;

pub use currency::{round_half_up, Currency};
pub use error::{AppError, Result};
pub use validation::ValidationErrors;
