use serde::{Deserialize, Serialize};

use super::document::DocumentKind;
use crate::core::ValidationErrors;
use crate::modules::documents::services::DocumentTotals;
use crate::modules::line_items::{LineEdit, LineItem, LineItemInput};

/// Bill or invoice as posted by a form
///
/// Header names follow the document kind (`vendorId`/`billNumber`/`billDate`
/// for bills, `customerId`/`invoiceNumber`/`invoiceDate` for invoices); the
/// neutral names are accepted for both.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    #[serde(default, alias = "vendorId", alias = "customerId")]
    pub party_id: Option<String>,

    #[serde(default, alias = "billNumber", alias = "invoiceNumber")]
    pub reference_number: Option<String>,

    #[serde(default, alias = "billDate", alias = "invoiceDate")]
    pub document_date: Option<String>,

    #[serde(default)]
    pub due_date: Option<String>,

    #[serde(default)]
    pub tax_jurisdiction: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default, alias = "billLines", alias = "invoiceLines")]
    pub lines: Vec<LineItemInput>,

    /// Edits applied in order after the lines are built
    #[serde(default)]
    pub edits: Vec<LineEdit>,
}

/// Recomputed view of a draft
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPreview {
    pub kind: DocumentKind,
    pub lines: Vec<LineItem>,
    pub totals: DocumentTotals,
    pub formatted_total: String,
    pub errors: ValidationErrors,
    pub can_submit: bool,
}
