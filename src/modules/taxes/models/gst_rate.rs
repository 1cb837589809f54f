use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::core::coerce::coerce_json_decimal;

/// GST slab applied to a line
///
/// Only the statutory slabs are representable; a line can never carry an
/// arbitrary percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum GstRate {
    /// Exempt / nil-rated supplies
    Zero,
    Five,
    Twelve,
    /// Standard rate for most services
    #[default]
    Eighteen,
    /// Luxury and sin goods
    TwentyEight,
}

impl GstRate {
    pub const ALL: [GstRate; 5] = [
        GstRate::Zero,
        GstRate::Five,
        GstRate::Twelve,
        GstRate::Eighteen,
        GstRate::TwentyEight,
    ];

    /// Rate as a percentage (18 for 18%)
    pub fn percent(&self) -> Decimal {
        Decimal::from(self.as_u8())
    }

    /// Rate as a whole-number percentage
    pub fn as_u8(&self) -> u8 {
        match self {
            GstRate::Zero => 0,
            GstRate::Five => 5,
            GstRate::Twelve => 12,
            GstRate::Eighteen => 18,
            GstRate::TwentyEight => 28,
        }
    }

    /// Look up the slab for a percentage; `None` for anything off-slab
    pub fn from_percent(percent: Decimal) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|rate| rate.percent() == percent)
    }
}

impl fmt::Display for GstRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

impl TryFrom<Decimal> for GstRate {
    type Error = String;

    fn try_from(percent: Decimal) -> Result<Self, Self::Error> {
        Self::from_percent(percent)
            .ok_or_else(|| format!("Unsupported GST rate: {}%", percent))
    }
}

// Serialized as the bare percentage so payloads carry `"taxPercent": 18`
impl Serialize for GstRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for GstRate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let percent = coerce_json_decimal(&value);
        GstRate::try_from(percent).map_err(serde::de::Error::custom)
    }
}

/// Where the supply happens relative to the supplier's state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxJurisdiction {
    /// Same state: tax is split into CGST and SGST
    #[default]
    IntraState,
    /// Different states: tax is charged as IGST
    InterState,
}

/// Component breakdown of a tax amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GstSplit {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl GstSplit {
    pub fn total(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}
