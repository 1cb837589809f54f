mod apportionment;
mod payment_service;
mod payment_validator;

pub use apportionment::{Apportionment, CreditApplication, PaymentApportioner, PaymentBreakdown};
pub use payment_service::PaymentService;
pub use payment_validator::PaymentValidator;
