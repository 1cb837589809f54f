use rust_decimal::Decimal;

use crate::core::ValidationErrors;
use crate::modules::documents::models::{DocumentHeader, DocumentKind, HeaderField};
use crate::modules::line_items::{LineCalculator, LineField, LineItem};

/// Required-field and cross-field rules for bills and invoices
pub struct DocumentValidator;

impl DocumentValidator {
    /// Run every rule and return all violations together
    pub fn validate(
        kind: DocumentKind,
        header: &DocumentHeader,
        lines: &[LineItem],
    ) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        Self::validate_header(kind, header, &mut errors);
        Self::validate_lines(kind, lines, &mut errors);

        errors
    }

    /// Message for a date field holding text that is not `YYYY-MM-DD`
    pub fn malformed_date_message(kind: DocumentKind, field: HeaderField) -> String {
        match field {
            HeaderField::DueDate => "Due date is not a valid date (YYYY-MM-DD)".to_string(),
            _ => format!("{} date is not a valid date (YYYY-MM-DD)", kind.label()),
        }
    }

    fn validate_header(kind: DocumentKind, header: &DocumentHeader, errors: &mut ValidationErrors) {
        for field in &header.malformed_dates {
            errors.add(field.key(kind), Self::malformed_date_message(kind, *field));
        }

        if is_blank(header.party_id.as_deref()) {
            errors.add(
                HeaderField::Party.key(kind),
                format!("{} is required", kind.party_label()),
            );
        }

        if is_blank(header.reference_number.as_deref()) {
            errors.add(
                HeaderField::ReferenceNumber.key(kind),
                format!("{} number is required", kind.label()),
            );
        }

        match (header.document_date, header.due_date) {
            (None, _) => errors.add(
                HeaderField::DocumentDate.key(kind),
                format!("{} date is required", kind.label()),
            ),
            (Some(document_date), Some(due_date)) if due_date < document_date => errors.add(
                HeaderField::DueDate.key(kind),
                format!(
                    "Due date cannot be before the {} date",
                    kind.label().to_lowercase()
                ),
            ),
            _ => {}
        }
    }

    fn validate_lines(kind: DocumentKind, lines: &[LineItem], errors: &mut ValidationErrors) {
        if lines.is_empty() {
            errors.add(kind.lines_key(), "At least one line item is required");
            return;
        }

        for (index, line) in lines.iter().enumerate() {
            if is_blank(line.product()) {
                errors.add(
                    kind.line_error_key(index, LineField::Product),
                    "Product is required",
                );
            }

            if line.quantity() <= Decimal::ZERO {
                errors.add(
                    kind.line_error_key(index, LineField::Quantity),
                    "Quantity must be greater than 0",
                );
            }

            if line.unit_price() < Decimal::ZERO {
                errors.add(
                    kind.line_error_key(index, LineField::UnitPrice),
                    "Price cannot be negative",
                );
            }

            LineCalculator::check_limits(
                line.quantity(),
                line.unit_price(),
                line.tax_rate().percent(),
                errors,
                |field| kind.line_error_key(index, field),
            );
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
