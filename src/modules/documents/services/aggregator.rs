use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::core::Currency;
use crate::modules::line_items::LineItem;
use crate::modules::taxes::{GstSplit, TaxCalculator, TaxJurisdiction};

/// Document-level amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    /// Σ taxable amount per line, rounded once at the end
    pub subtotal_before_tax: Decimal,
    /// Σ per-line tax, rounded once at the end
    pub total_tax: Decimal,
    /// Σ rounded line totals; never re-derived from subtotal + tax
    pub grand_total: Decimal,
    /// `grand_total − (subtotal_before_tax + total_tax)`, at most a paisa per line
    pub rounding_adjustment: Decimal,
    /// `total_tax` split by jurisdiction
    pub gst: GstSplit,
}

/// Aggregates a document's lines
pub struct DocumentAggregator;

impl DocumentAggregator {
    /// Σ quantity × unit_price × (1 − discount / 100), unrounded
    pub fn subtotal_before_tax(lines: &[LineItem]) -> Decimal {
        saturating_sum(lines.iter().map(|line| line.breakdown().taxable_amount))
    }

    /// Σ taxable × tax / 100 computed per line, unrounded
    pub fn total_tax(lines: &[LineItem]) -> Decimal {
        saturating_sum(lines.iter().map(|line| line.breakdown().tax_amount))
    }

    /// Σ line.total, exactly
    pub fn grand_total(lines: &[LineItem]) -> Decimal {
        saturating_sum(lines.iter().map(LineItem::total))
    }

    /// All aggregates for display and payloads
    ///
    /// An empty slice yields zeros everywhere.
    pub fn totals(
        lines: &[LineItem],
        jurisdiction: TaxJurisdiction,
        currency: Currency,
    ) -> DocumentTotals {
        let subtotal_before_tax = currency.round(Self::subtotal_before_tax(lines));
        let total_tax = currency.round(Self::total_tax(lines));
        let grand_total = Self::grand_total(lines);
        let gst = TaxCalculator::new().split(total_tax, jurisdiction, currency);

        let totals = DocumentTotals {
            subtotal_before_tax,
            total_tax,
            grand_total,
            rounding_adjustment: grand_total
                .saturating_sub(subtotal_before_tax.saturating_add(total_tax)),
            gst,
        };

        debug!(
            lines = lines.len(),
            subtotal = %totals.subtotal_before_tax,
            tax = %totals.total_tax,
            grand_total = %totals.grand_total,
            "Document totals recalculated"
        );

        totals
    }
}

/// Sum that pins at `Decimal::MAX` instead of overflowing
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}
