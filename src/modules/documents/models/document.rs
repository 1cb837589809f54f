// Bill and invoice drafts.
//
// Both documents share one shape: a party (vendor or customer), a reference
// number, dates, a tax jurisdiction and a never-empty list of lines. They only
// differ in field names, which surface in error keys and payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

use super::payload::{BillPayload, DocumentPayload, InvoicePayload};
use crate::config::LedgerConfig;
use crate::core::{Currency, ValidationErrors};
use crate::modules::documents::services::{DocumentAggregator, DocumentTotals, DocumentValidator};
use crate::modules::line_items::{EditOutcome, LineCollection, LineEdit, LineField, LineItem};
use crate::modules::taxes::TaxJurisdiction;

/// Date format accepted from form inputs
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which kind of document a draft is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Purchase bill received from a vendor
    Bill,
    /// Sales invoice issued to a customer
    Invoice,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bill => "Bill",
            Self::Invoice => "Invoice",
        }
    }

    pub fn party_label(&self) -> &'static str {
        match self {
            Self::Bill => "Vendor",
            Self::Invoice => "Customer",
        }
    }

    /// Prefix of per-line error keys (`billLine_0_product`)
    pub fn line_prefix(&self) -> &'static str {
        match self {
            Self::Bill => "billLine",
            Self::Invoice => "invoiceLine",
        }
    }

    /// Key for a whole-collection error (`billLines`)
    pub fn lines_key(&self) -> &'static str {
        match self {
            Self::Bill => "billLines",
            Self::Invoice => "invoiceLines",
        }
    }

    pub fn line_error_key(&self, index: usize, field: LineField) -> String {
        format!("{}_{}_{}", self.line_prefix(), index, field.as_str())
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bill => write!(f, "bill"),
            Self::Invoice => write!(f, "invoice"),
        }
    }
}

/// Editable header field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    /// Vendor for bills, customer for invoices
    Party,
    ReferenceNumber,
    DocumentDate,
    DueDate,
    Jurisdiction,
    Notes,
}

impl HeaderField {
    /// Error/payload key for this field on a given document kind
    pub fn key(&self, kind: DocumentKind) -> &'static str {
        match (self, kind) {
            (Self::Party, DocumentKind::Bill) => "vendorId",
            (Self::Party, DocumentKind::Invoice) => "customerId",
            (Self::ReferenceNumber, DocumentKind::Bill) => "billNumber",
            (Self::ReferenceNumber, DocumentKind::Invoice) => "invoiceNumber",
            (Self::DocumentDate, DocumentKind::Bill) => "billDate",
            (Self::DocumentDate, DocumentKind::Invoice) => "invoiceDate",
            (Self::DueDate, _) => "dueDate",
            (Self::Jurisdiction, _) => "taxJurisdiction",
            (Self::Notes, _) => "notes",
        }
    }
}

/// Header values of a bill or invoice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentHeader {
    pub party_id: Option<String>,
    pub reference_number: Option<String>,
    pub document_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub jurisdiction: TaxJurisdiction,
    pub notes: Option<String>,
    /// Date fields whose last input was not a `YYYY-MM-DD` date
    pub malformed_dates: Vec<HeaderField>,
}

impl DocumentHeader {
    pub fn is_malformed(&self, field: HeaderField) -> bool {
        self.malformed_dates.contains(&field)
    }

    fn set_date(&mut self, field: HeaderField, text: &str) {
        let date = parse_date(text);
        match field {
            HeaderField::DocumentDate => self.document_date = date,
            HeaderField::DueDate => self.due_date = date,
            _ => return,
        }

        self.malformed_dates.retain(|f| *f != field);
        if date.is_none() && !text.is_empty() {
            self.malformed_dates.push(field);
        }
    }
}

/// A bill or invoice being edited
///
/// Stays a draft until every required field passes validation; submission
/// is then allowed. Any later status lives outside this crate.
#[derive(Debug, Clone)]
pub struct DocumentDraft {
    kind: DocumentKind,
    header: DocumentHeader,
    lines: LineCollection,
    errors: ValidationErrors,
    currency: Currency,
}

impl DocumentDraft {
    /// Empty draft with one blank line
    pub fn new(kind: DocumentKind, config: &LedgerConfig) -> Self {
        Self {
            kind,
            header: DocumentHeader::default(),
            lines: LineCollection::new(config.default_tax_rate),
            errors: ValidationErrors::new(),
            currency: config.currency,
        }
    }

    /// Draft from existing header and lines
    pub fn from_parts(
        kind: DocumentKind,
        header: DocumentHeader,
        lines: Vec<LineItem>,
        config: &LedgerConfig,
    ) -> Self {
        Self {
            kind,
            header,
            lines: LineCollection::from_lines(lines, config.default_tax_rate),
            errors: ValidationErrors::new(),
            currency: config.currency,
        }
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn header(&self) -> &DocumentHeader {
        &self.header
    }

    pub fn lines(&self) -> &LineCollection {
        &self.lines
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Errors from the last submission attempt, minus fields edited since
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Set a header field from raw form text
    ///
    /// Blank text clears the field. A malformed date clears the value and
    /// records an error on that field right away. An unknown jurisdiction is
    /// ignored and leaves the field's error in place; any applied value
    /// clears it.
    pub fn set_header(&mut self, field: HeaderField, raw: &str) {
        let text = raw.trim();
        let value = (!text.is_empty()).then(|| text.to_string());

        match field {
            HeaderField::Party => self.header.party_id = value,
            HeaderField::ReferenceNumber => self.header.reference_number = value,
            HeaderField::DocumentDate | HeaderField::DueDate => self.header.set_date(field, text),
            HeaderField::Jurisdiction => match parse_jurisdiction(text) {
                Some(jurisdiction) => self.header.jurisdiction = jurisdiction,
                None => {
                    warn!(value = %text, "Ignoring unknown tax jurisdiction");
                    return;
                }
            },
            HeaderField::Notes => self.header.notes = value,
        }

        self.errors.clear(field.key(self.kind));
        if self.header.is_malformed(field) {
            debug!(field = field.key(self.kind), value = %text, "Malformed date");
            self.errors.add(
                field.key(self.kind),
                DocumentValidator::malformed_date_message(self.kind, field),
            );
        }
        // A date change can resolve the due-date ordering rule
        if field == HeaderField::DocumentDate && !self.header.is_malformed(HeaderField::DueDate) {
            self.errors.clear(HeaderField::DueDate.key(self.kind));
        }
    }

    /// Apply a line edit and clear that cell's error
    pub fn edit_line(&mut self, edit: &LineEdit) -> EditOutcome {
        let outcome = self.lines.apply_edit(edit);
        if outcome.is_applied() {
            self.errors
                .clear(&self.kind.line_error_key(edit.line_index, edit.field));
        }
        outcome
    }

    /// Append a blank line and return its index
    pub fn add_line(&mut self) -> usize {
        let index = self.lines.add_line();
        self.errors.clear(self.kind.lines_key());
        index
    }

    /// Remove a line; removing the only line is a no-op
    ///
    /// Line indices shift after a removal, so all per-line errors are dropped.
    pub fn remove_line(&mut self, index: usize) -> bool {
        let removed = self.lines.remove_line(index);
        if removed {
            self.errors
                .clear_prefix(&format!("{}_", self.kind.line_prefix()));
        }
        removed
    }

    pub fn totals(&self) -> DocumentTotals {
        DocumentAggregator::totals(self.lines.lines(), self.header.jurisdiction, self.currency)
    }

    /// Current violations, without touching the stored error map
    pub fn validate(&self) -> ValidationErrors {
        DocumentValidator::validate(self.kind, &self.header, self.lines.lines())
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_empty()
    }

    /// Attempt submission
    ///
    /// # Returns
    /// * `Ok(payload)` ready for the HTTP layer when every rule passes
    /// * `Err(errors)` with every violation; they are also kept on the draft
    pub fn submit(&mut self) -> Result<DocumentPayload, ValidationErrors> {
        let errors = self.validate();
        self.errors = errors.clone();

        if !errors.is_empty() {
            warn!(
                kind = %self.kind,
                violations = errors.len(),
                "Submission blocked by validation"
            );
            return Err(errors);
        }

        let payload = self.build_payload();
        info!(kind = %self.kind, lines = self.lines.len(), "Submission payload built");
        Ok(payload)
    }

    fn build_payload(&self) -> DocumentPayload {
        let totals = self.totals();
        debug!(grand_total = %totals.grand_total, "Document totals");

        let header = &self.header;
        let party_id = header.party_id.clone().unwrap_or_default();
        let reference_number = header.reference_number.clone().unwrap_or_default();
        let document_date = header.document_date.unwrap_or_default();
        let lines = self.lines.lines().to_vec();

        match self.kind {
            DocumentKind::Bill => DocumentPayload::Bill(BillPayload {
                vendor_id: party_id,
                bill_number: reference_number,
                bill_date: document_date,
                due_date: header.due_date,
                tax_jurisdiction: header.jurisdiction,
                notes: header.notes.clone(),
                bill_lines: lines,
                subtotal: totals.subtotal_before_tax,
                tax_amount: totals.total_tax,
                gst: totals.gst,
                total_amount: totals.grand_total,
            }),
            DocumentKind::Invoice => DocumentPayload::Invoice(InvoicePayload {
                customer_id: party_id,
                invoice_number: reference_number,
                invoice_date: document_date,
                due_date: header.due_date,
                tax_jurisdiction: header.jurisdiction,
                notes: header.notes.clone(),
                invoice_lines: lines,
                subtotal: totals.subtotal_before_tax,
                tax_amount: totals.total_tax,
                gst: totals.gst,
                total_amount: totals.grand_total,
            }),
        }
    }
}

/// Parse a form date, `None` for blank or malformed text
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

fn parse_jurisdiction(raw: &str) -> Option<TaxJurisdiction> {
    match raw.to_lowercase().replace('-', "_").as_str() {
        "intra_state" | "intrastate" => Some(TaxJurisdiction::IntraState),
        "inter_state" | "interstate" => Some(TaxJurisdiction::InterState),
        _ => None,
    }
}
