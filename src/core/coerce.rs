//! Lenient numeric input handling.
//!
//! Form controls hand over whatever the user typed. Anything that is not a
//! number becomes zero so that arithmetic downstream never sees garbage.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse user-entered text into a decimal, falling back to zero
pub fn coerce_decimal(raw: &str) -> Decimal {
    let trimmed = raw.trim().replace(',', "");
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&trimmed)
        .or_else(|_| Decimal::from_scientific(&trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Coerce a JSON value (number, string, null, anything else) into a decimal
pub fn coerce_json_decimal(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => coerce_decimal(&n.to_string()),
        Value::String(s) => coerce_decimal(s),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => Decimal::ZERO,
    }
}

/// Clamp a value into `[min, max]`
pub fn clamp(value: Decimal, min: Decimal, max: Decimal) -> Decimal {
    value.max(min).min(max)
}

/// Clamp a value so it is never negative
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// serde helper: `#[serde(deserialize_with = "lenient_decimal")]`
pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_json_decimal(&value))
}

/// serde helper for optional amounts; missing, null and blank stay `None`
pub fn lenient_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => Some(coerce_json_decimal(other)),
    })
}

/// serde helper: accept text or a bare number for a free-form field value
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}
