use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies with their precision and display rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee (2 decimal places, lakh/crore digit grouping)
    #[default]
    INR,
    /// US Dollar (2 decimal places, thousands grouping)
    USD,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::INR | Currency::USD => 2,
        }
    }

    /// Rounds a value half-up to the scale of this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        round_half_up(amount, self.scale())
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
        }
    }

    /// Formats an amount for display with symbol, grouping and fixed decimals
    ///
    /// INR groups the last three integer digits, then pairs:
    /// `1234567.8` renders as `₹12,34,567.80`.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rounded = self.round(amount);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let fixed = format!("{:.width$}", rounded.abs(), width = self.scale() as usize);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i.to_string(), Some(f.to_string())),
            None => (fixed.clone(), None),
        };

        let grouped = match self {
            Currency::INR => group_indian(&int_part),
            Currency::USD => group_thousands(&int_part),
        };

        match frac_part {
            Some(frac) => format!("{}{}{}.{}", sign, self.symbol(), grouped, frac),
            None => format!("{}{}{}", sign, self.symbol(), grouped),
        }
    }
}

/// Half-up rounding to exactly `dp` decimal places
///
/// `Decimal::round_dp` uses banker's rounding; ledger totals must round
/// midpoints away from zero. The result always carries `dp` digits of scale,
/// so `1062` comes back as `1062.00`.
pub fn round_half_up(amount: Decimal, dp: u32) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

fn group_thousands(digits: &str) -> String {
    let bytes: Vec<char> = digits.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let head_chars: Vec<char> = head.chars().collect();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, ch) in head_chars.iter().enumerate() {
        if i > 0 && (head_chars.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.push(',');
    out.push_str(last_three);
    out
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::INR => write!(f, "INR"),
            Currency::USD => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INR" => Ok(Currency::INR),
            "USD" => Ok(Currency::USD),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}
