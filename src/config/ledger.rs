use std::env;

use rust_decimal::Decimal;

use crate::core::{AppError, Currency, Result};
use crate::modules::taxes::GstRate;

/// Settings shared by every document the service computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerConfig {
    /// Currency used for aggregate rounding and display formatting
    pub currency: Currency,
    /// GST slab given to newly created lines
    pub default_tax_rate: GstRate,
}

impl LedgerConfig {
    pub fn from_env() -> Result<Self> {
        let currency = env::var("LEDGER_CURRENCY").unwrap_or_else(|_| "INR".to_string());
        let default_tax = env::var("LEDGER_DEFAULT_TAX").unwrap_or_else(|_| "18".to_string());

        Self::from_values(&currency, &default_tax)
    }

    /// Parse raw setting values
    pub fn from_values(currency: &str, default_tax: &str) -> Result<Self> {
        let currency = currency
            .parse::<Currency>()
            .map_err(|e| AppError::configuration(format!("LEDGER_CURRENCY: {}", e)))?;

        // Strict parse: a junk value must not silently become the 0% slab
        let percent = default_tax.trim().parse::<Decimal>().map_err(|_| {
            AppError::configuration(format!("LEDGER_DEFAULT_TAX: not a number: {}", default_tax))
        })?;
        let default_tax_rate = GstRate::try_from(percent)
            .map_err(|e| AppError::configuration(format!("LEDGER_DEFAULT_TAX: {}", e)))?;

        Ok(Self {
            currency,
            default_tax_rate,
        })
    }
}
