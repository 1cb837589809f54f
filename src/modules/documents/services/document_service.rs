use tracing::{info, instrument};

use crate::config::LedgerConfig;
use crate::core::{AppError, Result};
use crate::modules::documents::models::{
    DocumentDraft, DocumentHeader, DocumentKind, DocumentPayload, DocumentPreview,
    DocumentRequest, HeaderField,
};
use crate::modules::line_items::LineItem;

/// Service turning posted bill/invoice forms into previews and payloads
pub struct DocumentService {
    config: LedgerConfig,
}

impl DocumentService {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Build a draft from a request: lines first, then header, then edits
    ///
    /// Only an explicit off-slab tax rate is refused; every other oddity is
    /// coerced or left for validation to report.
    pub fn build_draft(&self, kind: DocumentKind, request: DocumentRequest) -> Result<DocumentDraft> {
        let lines = request
            .lines
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                LineItem::from_input(input, self.config.default_tax_rate)
                    .map_err(|e| AppError::validation(format!("Line {}: {}", index, e)))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut draft =
            DocumentDraft::from_parts(kind, DocumentHeader::default(), lines, &self.config);

        let header_values = [
            (HeaderField::Party, request.party_id),
            (HeaderField::ReferenceNumber, request.reference_number),
            (HeaderField::DocumentDate, request.document_date),
            (HeaderField::DueDate, request.due_date),
            (HeaderField::Jurisdiction, request.tax_jurisdiction),
            (HeaderField::Notes, request.notes),
        ];
        for (field, value) in header_values {
            if let Some(value) = value {
                draft.set_header(field, &value);
            }
        }

        for edit in &request.edits {
            draft.edit_line(edit);
        }

        Ok(draft)
    }

    /// Recompute a draft for display without attempting submission
    #[instrument(skip(self, request))]
    pub fn preview(&self, kind: DocumentKind, request: DocumentRequest) -> Result<DocumentPreview> {
        let draft = self.build_draft(kind, request)?;
        let totals = draft.totals();
        let errors = draft.validate();

        Ok(DocumentPreview {
            kind,
            lines: draft.lines().lines().to_vec(),
            formatted_total: draft.currency().format_amount(totals.grand_total),
            totals,
            can_submit: errors.is_empty(),
            errors,
        })
    }

    /// Validate and produce the submission payload
    ///
    /// # Returns
    /// * `AppError::InvalidDocument` carrying every violated field
    #[instrument(skip(self, request))]
    pub fn submit(&self, kind: DocumentKind, request: DocumentRequest) -> Result<DocumentPayload> {
        let mut draft = self.build_draft(kind, request)?;
        let payload = draft.submit()?;

        info!(total = %payload.total_amount(), "Document accepted");
        Ok(payload)
    }
}
