use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::coerce::{clamp, coerce_decimal, lenient_decimal, non_negative};
use crate::core::round_half_up;

/// Decimal places of an entered payment amount
const PAYMENT_SCALE: u32 = 2;

/// Outstanding bill as offered for payment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillReference {
    pub bill_id: String,

    #[serde(default)]
    pub bill_number: Option<String>,

    /// Amount still outstanding on the bill
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub due_amount: Decimal,

    /// Original grand total of the bill
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub final_amount: Decimal,

    #[serde(
        default,
        rename = "totalBeforeGST",
        alias = "totalBeforeGst",
        deserialize_with = "lenient_decimal"
    )]
    pub total_before_gst: Decimal,

    #[serde(
        default,
        rename = "totalGST",
        alias = "totalGst",
        deserialize_with = "lenient_decimal"
    )]
    pub total_gst: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub tds_applied: Decimal,
}

impl BillReference {
    /// Upper bound for a payment against this bill
    pub fn payable_limit(&self) -> Decimal {
        non_negative(self.due_amount)
    }
}

/// A selected bill and the amount being paid against it
///
/// The amount is clamped into `[0, due_amount]` whenever it is set, so a
/// stored allocation can never exceed what is outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAllocation {
    bill: BillReference,
    payment_amount: Decimal,
}

impl PaymentAllocation {
    /// New allocation paying the full outstanding amount
    pub fn new(bill: BillReference) -> Self {
        let payment_amount = bill.payable_limit();
        Self {
            bill,
            payment_amount,
        }
    }

    pub fn bill(&self) -> &BillReference {
        &self.bill
    }

    pub fn bill_id(&self) -> &str {
        &self.bill.bill_id
    }

    pub fn payment_amount(&self) -> Decimal {
        self.payment_amount
    }

    /// Set the amount, clamping into `[0, due_amount]`
    ///
    /// # Returns
    /// * The amount actually stored
    pub fn set_payment_amount(&mut self, amount: Decimal) -> Decimal {
        let rounded = round_half_up(amount, PAYMENT_SCALE);
        self.payment_amount = clamp(rounded, Decimal::ZERO, self.bill.payable_limit());
        self.payment_amount
    }

    /// Set the amount from raw form text; junk becomes 0
    pub fn handle_payment_amount_change(&mut self, raw: &str) -> Decimal {
        self.set_payment_amount(coerce_decimal(raw))
    }
}
