use rust_decimal::Decimal;

use crate::core::Currency;
use crate::modules::taxes::models::{GstSplit, TaxJurisdiction};

/// TaxCalculator handles per-line GST amounts and their jurisdiction split
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Tax on a taxable amount at a percentage rate
    ///
    /// Formula: tax_amount = taxable_amount × (tax_percent / 100)
    /// Unrounded: callers round once at the end of their own computation.
    pub fn calculate_tax(&self, taxable_amount: Decimal, tax_percent: Decimal) -> Decimal {
        taxable_amount * (tax_percent / Decimal::ONE_HUNDRED)
    }

    /// Split a (document-level) tax amount into its GST components
    ///
    /// Intra-state: CGST is half the tax rounded half-up, SGST takes the rest
    /// so the two always add back to `tax_amount` exactly.
    /// Inter-state: the whole amount is IGST.
    pub fn split(
        &self,
        tax_amount: Decimal,
        jurisdiction: TaxJurisdiction,
        currency: Currency,
    ) -> GstSplit {
        match jurisdiction {
            TaxJurisdiction::IntraState => {
                let cgst = currency.round(tax_amount / Decimal::TWO);
                GstSplit {
                    cgst,
                    sgst: tax_amount - cgst,
                    igst: Decimal::ZERO,
                }
            }
            TaxJurisdiction::InterState => GstSplit {
                cgst: Decimal::ZERO,
                sgst: Decimal::ZERO,
                igst: tax_amount,
            },
        }
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
