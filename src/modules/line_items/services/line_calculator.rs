use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::coerce::clamp;
use crate::core::{round_half_up, ValidationErrors};
use crate::modules::line_items::models::LineField;
use crate::modules::taxes::TaxCalculator;

/// Decimal places of a line total
pub const LINE_TOTAL_SCALE: u32 = 2;

/// Largest quantity a line accepts
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest unit price a line accepts (one lakh crore)
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Largest tax percentage a line accepts
pub const MAX_TAX_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Every intermediate value of a line computation
///
/// Only `total` is rounded; the other fields are exact so aggregates can be
/// built from them without compounding rounding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBreakdown {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Calculator for a single document line
pub struct LineCalculator;

impl LineCalculator {
    /// Compute all amounts for one line
    ///
    /// Inputs are clamped first: quantity, price and tax into `[0, MAX_*]`,
    /// discount into [0, 100]. With those bounds no step can leave the
    /// `Decimal` range. Order of operations is fixed:
    ///
    /// ```text
    /// subtotal        = quantity × unit_price
    /// discount_amount = subtotal × discount% / 100
    /// taxable_amount  = subtotal − discount_amount
    /// tax_amount      = taxable_amount × tax% / 100
    /// total           = round_half_up(taxable_amount + tax_amount, 2)
    /// ```
    pub fn breakdown(
        quantity: Decimal,
        unit_price: Decimal,
        discount_percent: Decimal,
        tax_percent: Decimal,
    ) -> LineBreakdown {
        let quantity = clamp(quantity, Decimal::ZERO, MAX_QUANTITY);
        let unit_price = clamp(unit_price, Decimal::ZERO, MAX_UNIT_PRICE);
        let discount_percent = clamp(discount_percent, Decimal::ZERO, Decimal::ONE_HUNDRED);
        let tax_percent = clamp(tax_percent, Decimal::ZERO, MAX_TAX_PERCENT);

        let subtotal = quantity * unit_price;
        let discount_amount = subtotal * (discount_percent / Decimal::ONE_HUNDRED);
        let taxable_amount = subtotal - discount_amount;
        let tax_amount = TaxCalculator::new().calculate_tax(taxable_amount, tax_percent);
        let total = round_half_up(taxable_amount + tax_amount, LINE_TOTAL_SCALE);

        LineBreakdown {
            subtotal,
            discount_amount,
            taxable_amount,
            tax_amount,
            total,
        }
    }

    /// Record an error for every amount above the calculator's limits
    ///
    /// `breakdown` caps such values silently, so callers that accept input
    /// run this first and refuse the line.
    pub fn check_limits(
        quantity: Decimal,
        unit_price: Decimal,
        tax_percent: Decimal,
        errors: &mut ValidationErrors,
        key: impl Fn(LineField) -> String,
    ) {
        if quantity > MAX_QUANTITY {
            errors.add(
                key(LineField::Quantity),
                format!("Quantity cannot exceed {}", MAX_QUANTITY),
            );
        }
        if unit_price > MAX_UNIT_PRICE {
            errors.add(
                key(LineField::UnitPrice),
                format!("Price cannot exceed {}", MAX_UNIT_PRICE),
            );
        }
        if tax_percent > MAX_TAX_PERCENT {
            errors.add(
                key(LineField::TaxPercent),
                format!("Tax cannot exceed {}%", MAX_TAX_PERCENT),
            );
        }
    }
}

/// Rounded total of one line; see [`LineCalculator::breakdown`]
pub fn compute_line_total(
    quantity: Decimal,
    unit_price: Decimal,
    discount_percent: Decimal,
    tax_percent: Decimal,
) -> Decimal {
    LineCalculator::breakdown(quantity, unit_price, discount_percent, tax_percent).total
}
