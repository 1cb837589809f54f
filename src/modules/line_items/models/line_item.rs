// A line item is one row of a bill or invoice.
//
// The four editable amounts live behind setters; every setter recomputes the
// derived `total`, so a line can never be observed with a stale total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_edit::LineField;
use crate::core::coerce::{clamp, coerce_decimal, lenient_decimal, lenient_optional_decimal, non_negative};
use crate::modules::line_items::services::{LineBreakdown, LineCalculator};
use crate::modules::taxes::GstRate;

/// Represents a single line of a financial document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LineItemInput")]
pub struct LineItem {
    id: String,
    product: Option<String>,
    description: Option<String>,
    quantity: Decimal,
    unit_price: Decimal,
    discount_percent: Decimal,
    #[serde(rename = "taxPercent")]
    tax_rate: GstRate,
    total: Decimal,
}

/// Raw line as it arrives from a form or request body
///
/// Amounts are lenient: numbers, numeric strings, blanks and junk are all
/// accepted, junk and blanks becoming zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub product: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Missing quantity means the default of 1; a blank one means 0
    #[serde(default = "default_quantity", deserialize_with = "lenient_decimal")]
    pub quantity: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub unit_price: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub discount_percent: Decimal,

    /// Missing means the caller's default slab
    #[serde(default, deserialize_with = "lenient_optional_decimal")]
    pub tax_percent: Option<Decimal>,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl LineItem {
    /// New blank line: quantity 1, price 0, no discount, 18% GST
    pub fn new() -> Self {
        Self::with_tax_rate(GstRate::default())
    }

    /// New blank line with a specific default GST slab
    pub fn with_tax_rate(tax_rate: GstRate) -> Self {
        let mut line = Self {
            id: Uuid::new_v4().to_string(),
            product: None,
            description: None,
            quantity: Decimal::ONE,
            unit_price: Decimal::ZERO,
            discount_percent: Decimal::ZERO,
            tax_rate,
            total: Decimal::ZERO,
        };
        line.recalculate();
        line
    }

    /// Build a line from raw input
    ///
    /// # Returns
    /// * `Err` only when an explicit tax percentage is not a GST slab
    pub fn from_input(input: LineItemInput, default_rate: GstRate) -> Result<Self, String> {
        let tax_rate = match input.tax_percent {
            Some(percent) => GstRate::try_from(percent)?,
            None => default_rate,
        };

        let mut line = Self::with_tax_rate(tax_rate);
        if let Some(id) = input.id.filter(|id| !id.trim().is_empty()) {
            line.id = id;
        }
        line.product = normalize_text(input.product);
        line.description = normalize_text(input.description);
        line.quantity = non_negative(input.quantity);
        line.unit_price = non_negative(input.unit_price);
        line.discount_percent = clamp(input.discount_percent, Decimal::ZERO, Decimal::ONE_HUNDRED);
        line.recalculate();

        Ok(line)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    pub fn tax_rate(&self) -> GstRate {
        self.tax_rate
    }

    /// Derived total, always consistent with the other amounts
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Full computation for this line
    pub fn breakdown(&self) -> LineBreakdown {
        LineCalculator::breakdown(
            self.quantity,
            self.unit_price,
            self.discount_percent,
            self.tax_rate.percent(),
        )
    }

    pub fn set_product(&mut self, product: impl Into<String>) {
        self.product = normalize_text(Some(product.into()));
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = normalize_text(Some(description.into()));
    }

    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = non_negative(quantity);
        self.recalculate();
    }

    pub fn set_unit_price(&mut self, unit_price: Decimal) {
        self.unit_price = non_negative(unit_price);
        self.recalculate();
    }

    /// Discount is clamped into [0, 100]
    pub fn set_discount_percent(&mut self, discount_percent: Decimal) {
        self.discount_percent = clamp(discount_percent, Decimal::ZERO, Decimal::ONE_HUNDRED);
        self.recalculate();
    }

    pub fn set_tax_rate(&mut self, tax_rate: GstRate) {
        self.tax_rate = tax_rate;
        self.recalculate();
    }

    /// Apply a raw form value to one field
    ///
    /// # Returns
    /// * `false` when the value cannot be represented (an off-slab tax rate);
    ///   the line is left untouched in that case
    pub fn apply(&mut self, field: LineField, raw: &str) -> bool {
        match field {
            LineField::Product => self.set_product(raw),
            LineField::Description => self.set_description(raw),
            LineField::Quantity => self.set_quantity(coerce_decimal(raw)),
            LineField::UnitPrice => self.set_unit_price(coerce_decimal(raw)),
            LineField::DiscountPercent => self.set_discount_percent(coerce_decimal(raw)),
            LineField::TaxPercent => match GstRate::from_percent(coerce_decimal(raw)) {
                Some(rate) => self.set_tax_rate(rate),
                None => return false,
            },
        }
        true
    }

    fn recalculate(&mut self) {
        self.total = self.breakdown().total;
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = String;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        Self::from_input(input, GstRate::default())
    }
}

fn normalize_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
