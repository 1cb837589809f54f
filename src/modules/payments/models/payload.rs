use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentEntry {
    pub bill_id: String,
    pub paid_amount: Decimal,
}

/// Bulk payment submission body handed to the persistence API
///
/// Bills with a zero payment are left out of `bill_payments`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPaymentPayload {
    pub vendor_id: String,
    pub payment_date: NaiveDate,
    pub payment_method: String,
    pub bank_account: String,
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub bill_payments: Vec<BillPaymentEntry>,
    /// Σ paid amounts before credit
    pub total_amount: Decimal,
    pub applied_credit: Decimal,
    /// total_amount − applied_credit, never negative
    pub final_payment_amount: Decimal,
    pub subtotal: Decimal,
    pub gst_amount: Decimal,
    pub tds_amount: Decimal,
}
