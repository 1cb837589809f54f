use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::payment_allocation::{BillReference, PaymentAllocation};
use crate::core::coerce::{lenient_decimal, lenient_optional_decimal};
use crate::core::ValidationErrors;
use crate::modules::payments::services::{Apportionment, PaymentBreakdown};

/// A ticked bill as posted by the payment form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedBill {
    #[serde(flatten)]
    pub bill: BillReference,

    /// Missing means "pay the full due amount"
    #[serde(default, deserialize_with = "lenient_optional_decimal")]
    pub payment_amount: Option<Decimal>,
}

/// Bulk payment form as posted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPaymentRequest {
    #[serde(default)]
    pub vendor_id: Option<String>,

    #[serde(default)]
    pub payment_date: Option<String>,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[serde(default)]
    pub bank_account: Option<String>,

    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub bills: Vec<SelectedBill>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub available_credit: Decimal,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub applied_credit: Decimal,
}

/// Recomputed view of a bulk payment
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPreview {
    pub allocations: Vec<PaymentAllocation>,
    pub apportionments: Vec<Apportionment>,
    pub breakdown: PaymentBreakdown,
    pub formatted_final_amount: String,
    pub errors: ValidationErrors,
    pub can_submit: bool,
}
