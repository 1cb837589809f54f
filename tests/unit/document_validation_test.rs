// Bill and invoice validation tests
//
// Every violation is reported at once, keyed by field, and each key clears as
// soon as its field is edited.

use ledgerline::config::LedgerConfig;
use ledgerline::documents::services::DocumentValidator;
use ledgerline::documents::{DocumentDraft, DocumentKind, DocumentPayload, HeaderField};
use ledgerline::line_items::{LineEdit, LineField};
use rust_decimal_macros::dec;

fn filled_bill() -> DocumentDraft {
    let mut draft = DocumentDraft::new(DocumentKind::Bill, &LedgerConfig::default());
    draft.set_header(HeaderField::Party, "vendor-1");
    draft.set_header(HeaderField::ReferenceNumber, "BILL-2024-001");
    draft.set_header(HeaderField::DocumentDate, "2024-06-01");
    draft.set_header(HeaderField::DueDate, "2024-06-30");
    draft.edit_line(&LineEdit::new(0, LineField::Product, "Steel rods"));
    draft.edit_line(&LineEdit::new(0, LineField::Quantity, "2"));
    draft.edit_line(&LineEdit::new(0, LineField::UnitPrice, "500"));
    draft
}

#[test]
fn test_blank_bill_reports_every_violation() {
    let mut draft = DocumentDraft::new(DocumentKind::Bill, &LedgerConfig::default());
    let errors = draft.submit().unwrap_err();

    assert_eq!(errors.len(), 4);
    assert_eq!(errors.get("vendorId"), Some("Vendor is required"));
    assert_eq!(errors.get("billNumber"), Some("Bill number is required"));
    assert_eq!(errors.get("billDate"), Some("Bill date is required"));
    assert_eq!(errors.get("billLine_0_product"), Some("Product is required"));
    assert!(!draft.can_submit());
}

#[test]
fn test_invoice_keys_use_invoice_names() {
    let mut draft = DocumentDraft::new(DocumentKind::Invoice, &LedgerConfig::default());
    let errors = draft.submit().unwrap_err();

    assert_eq!(errors.get("customerId"), Some("Customer is required"));
    assert!(errors.contains("invoiceNumber"));
    assert!(errors.contains("invoiceDate"));
    assert!(errors.contains("invoiceLine_0_product"));
}

#[test]
fn test_editing_a_field_clears_only_its_error() {
    let mut draft = DocumentDraft::new(DocumentKind::Bill, &LedgerConfig::default());
    draft.submit().unwrap_err();
    assert_eq!(draft.errors().len(), 4);

    draft.set_header(HeaderField::Party, "vendor-1");
    assert!(!draft.errors().contains("vendorId"));
    assert_eq!(draft.errors().len(), 3);

    draft.edit_line(&LineEdit::new(0, LineField::Product, "Cement"));
    assert!(!draft.errors().contains("billLine_0_product"));
    assert_eq!(draft.errors().len(), 2);
}

#[test]
fn test_due_date_before_bill_date() {
    let mut draft = filled_bill();
    draft.set_header(HeaderField::DueDate, "2024-05-15");

    let errors = draft.submit().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("dueDate"),
        Some("Due date cannot be before the bill date")
    );

    // Moving the bill date clears the dependent error
    draft.set_header(HeaderField::DocumentDate, "2024-05-01");
    assert!(draft.errors().is_empty());
    assert!(draft.can_submit());
}

#[test]
fn test_malformed_bill_date_is_reported() {
    let mut draft = filled_bill();
    draft.set_header(HeaderField::DocumentDate, "31/06/2024");
    assert_eq!(draft.header().document_date, None);

    let errors = draft.submit().unwrap_err();
    assert_eq!(
        errors.get("billDate"),
        Some("Bill date is not a valid date (YYYY-MM-DD)")
    );
}

#[test]
fn test_malformed_due_date_is_not_dropped() {
    let mut draft = filled_bill();
    draft.set_header(HeaderField::DueDate, "next friday");
    assert!(draft.errors().contains("dueDate"));

    let errors = draft.submit().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get("dueDate"),
        Some("Due date is not a valid date (YYYY-MM-DD)")
    );

    draft.set_header(HeaderField::DueDate, "2024-06-30");
    assert!(draft.errors().is_empty());
    assert!(draft.can_submit());
}

#[test]
fn test_zero_quantity_line_is_rejected() {
    let mut draft = filled_bill();
    draft.edit_line(&LineEdit::new(0, LineField::Quantity, "0"));

    let errors = draft.submit().unwrap_err();
    assert_eq!(
        errors.get("billLine_0_quantity"),
        Some("Quantity must be greater than 0")
    );
}

#[test]
fn test_removing_a_line_drops_line_errors() {
    let mut draft = filled_bill();
    draft.add_line();
    draft.submit().unwrap_err();
    assert!(draft.errors().contains("billLine_1_product"));

    assert!(draft.remove_line(1));
    assert!(draft.errors().is_empty());
}

#[test]
fn test_empty_line_list_is_rejected() {
    let draft = filled_bill();
    let errors = DocumentValidator::validate(DocumentKind::Bill, draft.header(), &[]);

    assert_eq!(
        errors.get("billLines"),
        Some("At least one line item is required")
    );
}

#[test]
fn test_valid_bill_produces_payload() {
    let mut draft = filled_bill();
    let payload = draft.submit().unwrap();

    match payload {
        DocumentPayload::Bill(bill) => {
            assert_eq!(bill.vendor_id, "vendor-1");
            assert_eq!(bill.bill_number, "BILL-2024-001");
            assert_eq!(bill.bill_lines.len(), 1);
            assert_eq!(bill.subtotal, dec!(1000));
            assert_eq!(bill.tax_amount, dec!(180));
            assert_eq!(bill.total_amount, dec!(1180));
        }
        other => panic!("expected a bill payload, got {:?}", other),
    }
}
