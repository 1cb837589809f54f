use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::coerce::lenient_text;

/// Editable field of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineField {
    Product,
    Description,
    Quantity,
    #[serde(alias = "price")]
    UnitPrice,
    #[serde(alias = "discount")]
    DiscountPercent,
    #[serde(alias = "tax")]
    TaxPercent,
}

impl LineField {
    /// Name used in payloads and error keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Description => "description",
            Self::Quantity => "quantity",
            Self::UnitPrice => "unitPrice",
            Self::DiscountPercent => "discountPercent",
            Self::TaxPercent => "taxPercent",
        }
    }
}

impl fmt::Display for LineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(line_index, field, value)` edit coming from a form control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineEdit {
    pub line_index: usize,
    pub field: LineField,
    #[serde(default, deserialize_with = "lenient_text")]
    pub value: String,
}

impl LineEdit {
    pub fn new(line_index: usize, field: LineField, value: impl Into<String>) -> Self {
        Self {
            line_index,
            field,
            value: value.into(),
        }
    }
}

/// Result of applying a [`LineEdit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// No line at the given index; nothing changed
    IndexOutOfRange,
    /// Value not representable for the field; nothing changed
    Rejected,
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
