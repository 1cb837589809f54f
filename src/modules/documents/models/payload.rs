use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::line_items::LineItem;
use crate::modules::taxes::{GstSplit, TaxJurisdiction};

/// Bill submission body handed to the persistence API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub vendor_id: String,
    pub bill_number: String,
    pub bill_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub tax_jurisdiction: TaxJurisdiction,
    pub notes: Option<String>,
    pub bill_lines: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub gst: GstSplit,
    /// Sum of the rounded line totals
    pub total_amount: Decimal,
}

/// Invoice submission body handed to the persistence API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePayload {
    pub customer_id: String,
    pub invoice_number: String,
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub tax_jurisdiction: TaxJurisdiction,
    pub notes: Option<String>,
    pub invoice_lines: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub gst: GstSplit,
    /// Sum of the rounded line totals
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DocumentPayload {
    Bill(BillPayload),
    Invoice(InvoicePayload),
}

impl DocumentPayload {
    pub fn total_amount(&self) -> Decimal {
        match self {
            Self::Bill(bill) => bill.total_amount,
            Self::Invoice(invoice) => invoice.total_amount,
        }
    }
}
