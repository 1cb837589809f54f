use rust_decimal::Decimal;

use crate::core::ValidationErrors;
use crate::modules::payments::models::{PaymentAllocation, PaymentField, PaymentHeader};

/// Submission rules for a bulk vendor payment
pub struct PaymentValidator;

impl PaymentValidator {
    /// Run every rule and return all violations together
    pub fn validate(
        vendor_id: Option<&str>,
        header: &PaymentHeader,
        allocations: &[PaymentAllocation],
    ) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        if is_blank(vendor_id) {
            errors.add(PaymentField::Vendor.key(), "Please select a vendor");
        }

        if allocations.is_empty() {
            errors.add(PaymentField::Bills.key(), "Select at least one bill to pay");
        } else if allocations
            .iter()
            .all(|a| a.payment_amount() <= Decimal::ZERO)
        {
            errors.add(
                PaymentField::PaymentAmount.key(),
                "Enter a payment amount for at least one bill",
            );
        }

        if header.payment_date.is_none() {
            errors.add(PaymentField::PaymentDate.key(), "Payment date is required");
        }

        if is_blank(header.payment_method.as_deref()) {
            errors.add(PaymentField::PaymentMethod.key(), "Payment method is required");
        }

        if is_blank(header.bank_account.as_deref()) {
            errors.add(PaymentField::BankAccount.key(), "Bank account is required");
        }

        errors
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
