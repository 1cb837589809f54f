use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use crate::config::LedgerConfig;
use crate::core::Result;
use crate::modules::payments::models::{
    BulkPaymentDraft, BulkPaymentPayload, BulkPaymentRequest, PaymentField, PaymentPreview,
};
use crate::modules::payments::services::PaymentApportioner;

/// Service turning posted bulk payment forms into previews and payloads
pub struct PaymentService {
    config: LedgerConfig,
}

impl PaymentService {
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// Replay a posted form onto a fresh draft
    ///
    /// The vendor is set first because changing it resets the bill selection.
    pub fn build_draft(&self, request: BulkPaymentRequest) -> BulkPaymentDraft {
        let mut draft = BulkPaymentDraft::new(&self.config);

        if let Some(vendor_id) = &request.vendor_id {
            draft.change_vendor(vendor_id);
        }

        let header_values = [
            (PaymentField::PaymentDate, request.payment_date),
            (PaymentField::PaymentMethod, request.payment_method),
            (PaymentField::BankAccount, request.bank_account),
            (PaymentField::Reference, request.reference),
            (PaymentField::Notes, request.notes),
        ];
        for (field, value) in header_values {
            if let Some(value) = value {
                draft.set_header(field, &value);
            }
        }

        for selected in request.bills {
            let bill_id = selected.bill.bill_id.clone();

            if !draft.select_bill(selected.bill) {
                warn!(bill_id = %bill_id, "Bill selected twice, keeping the first");
                continue;
            }
            if let Some(amount) = selected.payment_amount {
                draft.set_payment_amount_value(&bill_id, amount);
            }
        }

        draft.set_available_credit(request.available_credit);
        draft.set_requested_credit(request.applied_credit);

        draft
    }

    #[instrument(skip(self, request))]
    pub fn preview(&self, request: BulkPaymentRequest) -> PaymentPreview {
        let draft = self.build_draft(request);
        let breakdown = draft.breakdown();
        let errors = draft.validate();

        PaymentPreview {
            apportionments: draft
                .allocations()
                .iter()
                .filter(|a| a.payment_amount() > Decimal::ZERO)
                .map(PaymentApportioner::apportion)
                .collect(),
            allocations: draft.allocations().to_vec(),
            formatted_final_amount: draft
                .currency()
                .format_amount(breakdown.final_payment_amount),
            breakdown,
            can_submit: errors.is_empty(),
            errors,
        }
    }

    /// Validate and produce the bulk payment payload
    ///
    /// # Returns
    /// * `AppError::InvalidDocument` carrying every violated field
    #[instrument(skip(self, request))]
    pub fn submit(&self, request: BulkPaymentRequest) -> Result<BulkPaymentPayload> {
        let mut draft = self.build_draft(request);
        let payload = draft.submit()?;

        info!(
            vendor_id = %payload.vendor_id,
            final_amount = %payload.final_payment_amount,
            "Bulk payment accepted"
        );
        Ok(payload)
    }
}
