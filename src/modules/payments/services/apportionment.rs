use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::core::coerce::non_negative;
use crate::core::Currency;
use crate::modules::payments::models::PaymentAllocation;

/// Share of one bill's components covered by a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Apportionment {
    pub bill_id: String,
    pub ratio: Decimal,
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub tds: Decimal,
}

/// How much vendor credit offsets the payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditApplication {
    pub available: Decimal,
    pub requested: Decimal,
    /// min(requested, available, gross payment)
    pub applied: Decimal,
    /// Requested credit that could not be applied; still paid by the payer
    pub shortfall: Decimal,
}

/// Reported breakdown of a bulk payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub tds: Decimal,
    /// Σ payment amounts
    pub gross_amount: Decimal,
    pub credit: CreditApplication,
    /// Amount the payer still has to send: gross − applied credit, never negative
    pub final_payment_amount: Decimal,
}

/// Proportional split of bill components across partial payments
pub struct PaymentApportioner;

impl PaymentApportioner {
    /// payment_amount / final_amount, or 0 when the bill total is 0
    ///
    /// A quotient beyond `Decimal` range saturates at `Decimal::MAX`.
    pub fn ratio(payment_amount: Decimal, final_amount: Decimal) -> Decimal {
        if final_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        payment_amount
            .checked_div(final_amount)
            .unwrap_or(Decimal::MAX)
    }

    /// Unrounded share of one bill's subtotal, GST and TDS
    pub fn apportion(allocation: &PaymentAllocation) -> Apportionment {
        let bill = allocation.bill();
        let ratio = Self::ratio(allocation.payment_amount(), bill.final_amount);

        Apportionment {
            bill_id: bill.bill_id.clone(),
            ratio,
            subtotal: bill.total_before_gst.saturating_mul(ratio),
            gst: bill.total_gst.saturating_mul(ratio),
            tds: bill.tds_applied.saturating_mul(ratio),
        }
    }

    /// Apply credit to a gross amount
    pub fn apply_credit(
        gross_amount: Decimal,
        requested: Decimal,
        available: Decimal,
    ) -> CreditApplication {
        let requested = non_negative(requested);
        let available = non_negative(available);
        let applied = requested.min(available).min(non_negative(gross_amount));

        CreditApplication {
            available,
            requested,
            applied,
            shortfall: requested - applied,
        }
    }

    /// Sum apportioned components over every allocation and apply credit
    ///
    /// Component sums are rounded once, at currency scale.
    pub fn summarize(
        allocations: &[PaymentAllocation],
        requested_credit: Decimal,
        available_credit: Decimal,
        currency: Currency,
    ) -> PaymentBreakdown {
        let mut subtotal = Decimal::ZERO;
        let mut gst = Decimal::ZERO;
        let mut tds = Decimal::ZERO;
        let mut gross_amount = Decimal::ZERO;

        for allocation in allocations {
            let share = Self::apportion(allocation);
            subtotal = subtotal.saturating_add(share.subtotal);
            gst = gst.saturating_add(share.gst);
            tds = tds.saturating_add(share.tds);
            gross_amount = gross_amount.saturating_add(allocation.payment_amount());
        }

        let credit = Self::apply_credit(gross_amount, requested_credit, available_credit);
        let final_payment_amount = non_negative(gross_amount - credit.applied);

        debug!(
            bills = allocations.len(),
            gross = %gross_amount,
            credit = %credit.applied,
            final_amount = %final_payment_amount,
            "Payment breakdown recalculated"
        );

        PaymentBreakdown {
            subtotal: currency.round(subtotal),
            gst: currency.round(gst),
            tds: currency.round(tds),
            gross_amount,
            credit,
            final_payment_amount,
        }
    }
}
