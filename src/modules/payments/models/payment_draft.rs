// Bulk vendor payment being prepared.
//
// Lifecycle: pick a vendor, tick bills (each defaults to paying its full due
// amount), adjust amounts, fill the header, submit. Changing the vendor throws
// away every selection.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::payload::{BillPaymentEntry, BulkPaymentPayload};
use super::payment_allocation::{BillReference, PaymentAllocation};
use crate::config::LedgerConfig;
use crate::core::coerce::{coerce_decimal, non_negative};
use crate::core::{Currency, ValidationErrors};
use crate::modules::documents::models::parse_date;
use crate::modules::payments::services::{PaymentApportioner, PaymentBreakdown, PaymentValidator};

/// Field of a bulk payment form, used for error keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentField {
    Vendor,
    Bills,
    PaymentAmount,
    PaymentDate,
    PaymentMethod,
    BankAccount,
    Reference,
    Notes,
}

impl PaymentField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Vendor => "vendorId",
            Self::Bills => "bills",
            Self::PaymentAmount => "paymentAmount",
            Self::PaymentDate => "paymentDate",
            Self::PaymentMethod => "paymentMethod",
            Self::BankAccount => "bankAccount",
            Self::Reference => "reference",
            Self::Notes => "notes",
        }
    }
}

/// Header values of a bulk payment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentHeader {
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub bank_account: Option<String>,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BulkPaymentDraft {
    vendor_id: Option<String>,
    header: PaymentHeader,
    allocations: Vec<PaymentAllocation>,
    available_credit: Decimal,
    requested_credit: Decimal,
    errors: ValidationErrors,
    currency: Currency,
}

impl BulkPaymentDraft {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            vendor_id: None,
            header: PaymentHeader::default(),
            allocations: Vec::new(),
            available_credit: Decimal::ZERO,
            requested_credit: Decimal::ZERO,
            errors: ValidationErrors::new(),
            currency: config.currency,
        }
    }

    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor_id.as_deref()
    }

    pub fn header(&self) -> &PaymentHeader {
        &self.header
    }

    pub fn allocations(&self) -> &[PaymentAllocation] {
        &self.allocations
    }

    pub fn allocation(&self, bill_id: &str) -> Option<&PaymentAllocation> {
        self.allocations.iter().find(|a| a.bill_id() == bill_id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Switch vendor; every bill selection and credit entry is discarded
    pub fn change_vendor(&mut self, vendor_id: &str) {
        let vendor_id = vendor_id.trim();
        let next = (!vendor_id.is_empty()).then(|| vendor_id.to_string());
        if next == self.vendor_id {
            return;
        }

        debug!(
            from = ?self.vendor_id,
            to = ?next,
            dropped = self.allocations.len(),
            "Vendor changed, resetting bill selection"
        );

        self.vendor_id = next;
        self.allocations.clear();
        self.available_credit = Decimal::ZERO;
        self.requested_credit = Decimal::ZERO;
        for field in [
            PaymentField::Vendor,
            PaymentField::Bills,
            PaymentField::PaymentAmount,
        ] {
            self.errors.clear(field.key());
        }
    }

    /// Credit the vendor currently holds in the payer's favour
    pub fn set_available_credit(&mut self, amount: Decimal) {
        self.available_credit = non_negative(amount);
    }

    /// Credit the user wants to use, from raw form text
    pub fn set_applied_credit(&mut self, raw: &str) {
        self.set_requested_credit(coerce_decimal(raw));
    }

    /// Credit the user wants to use; negatives become 0
    pub fn set_requested_credit(&mut self, amount: Decimal) {
        self.requested_credit = non_negative(amount);
    }

    /// Set a header field from raw form text and clear its error
    pub fn set_header(&mut self, field: PaymentField, raw: &str) {
        let text = raw.trim();
        let value = (!text.is_empty()).then(|| text.to_string());

        match field {
            PaymentField::PaymentDate => self.header.payment_date = parse_date(text),
            PaymentField::PaymentMethod => self.header.payment_method = value,
            PaymentField::BankAccount => self.header.bank_account = value,
            PaymentField::Reference => self.header.reference = value,
            PaymentField::Notes => self.header.notes = value,
            PaymentField::Vendor => {
                self.change_vendor(text);
                return;
            }
            PaymentField::Bills | PaymentField::PaymentAmount => {
                warn!(field = field.key(), "Not a header field");
                return;
            }
        }
        self.errors.clear(field.key());
    }

    /// Tick a bill; its payment defaults to the full due amount
    ///
    /// # Returns
    /// * `false` if the bill was already selected
    pub fn select_bill(&mut self, bill: BillReference) -> bool {
        if self.allocation(&bill.bill_id).is_some() {
            return false;
        }

        self.allocations.push(PaymentAllocation::new(bill));
        self.errors.clear(PaymentField::Bills.key());
        self.errors.clear(PaymentField::PaymentAmount.key());
        true
    }

    /// Untick a bill, discarding its allocation
    pub fn deselect_bill(&mut self, bill_id: &str) -> bool {
        let before = self.allocations.len();
        self.allocations.retain(|a| a.bill_id() != bill_id);
        self.allocations.len() != before
    }

    /// Change the amount paid against a selected bill
    ///
    /// # Returns
    /// * The clamped amount stored, or `None` if the bill is not selected
    pub fn set_payment_amount(&mut self, bill_id: &str, raw: &str) -> Option<Decimal> {
        let stored = self
            .allocation_mut(bill_id)?
            .handle_payment_amount_change(raw);
        self.errors.clear(PaymentField::PaymentAmount.key());
        Some(stored)
    }

    /// [`set_payment_amount`](Self::set_payment_amount) for an already parsed amount
    pub fn set_payment_amount_value(&mut self, bill_id: &str, amount: Decimal) -> Option<Decimal> {
        let stored = self.allocation_mut(bill_id)?.set_payment_amount(amount);
        self.errors.clear(PaymentField::PaymentAmount.key());
        Some(stored)
    }

    fn allocation_mut(&mut self, bill_id: &str) -> Option<&mut PaymentAllocation> {
        self.allocations.iter_mut().find(|a| a.bill_id() == bill_id)
    }

    pub fn breakdown(&self) -> PaymentBreakdown {
        PaymentApportioner::summarize(
            &self.allocations,
            self.requested_credit,
            self.available_credit,
            self.currency,
        )
    }

    pub fn validate(&self) -> ValidationErrors {
        PaymentValidator::validate(self.vendor_id.as_deref(), &self.header, &self.allocations)
    }

    pub fn can_submit(&self) -> bool {
        self.validate().is_empty()
    }

    /// Attempt submission; on failure every violation is returned and kept
    pub fn submit(&mut self) -> Result<BulkPaymentPayload, ValidationErrors> {
        let errors = self.validate();
        self.errors = errors.clone();

        if !errors.is_empty() {
            warn!(violations = errors.len(), "Bulk payment blocked by validation");
            return Err(errors);
        }

        let breakdown = self.breakdown();
        let bill_payments = self
            .allocations
            .iter()
            .filter(|a| a.payment_amount() > Decimal::ZERO)
            .map(|a| BillPaymentEntry {
                bill_id: a.bill_id().to_string(),
                paid_amount: a.payment_amount(),
            })
            .collect::<Vec<_>>();

        info!(
            bills = bill_payments.len(),
            final_amount = %breakdown.final_payment_amount,
            "Bulk payment payload built"
        );

        Ok(BulkPaymentPayload {
            vendor_id: self.vendor_id.clone().unwrap_or_default(),
            payment_date: self.header.payment_date.unwrap_or_default(),
            payment_method: self.header.payment_method.clone().unwrap_or_default(),
            bank_account: self.header.bank_account.clone().unwrap_or_default(),
            reference: self.header.reference.clone(),
            notes: self.header.notes.clone(),
            bill_payments,
            total_amount: breakdown.gross_amount,
            applied_credit: breakdown.credit.applied,
            final_payment_amount: breakdown.final_payment_amount,
            subtotal: breakdown.subtotal,
            gst_amount: breakdown.gst,
            tds_amount: breakdown.tds,
        })
    }
}
