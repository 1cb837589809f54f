// Property-based tests for the per-line calculation
//
// Properties tested:
// 1. identical inputs always give identical totals
// 2. zero quantity or zero price gives a zero total
// 3. a 100% discount gives a zero total
// 4. raising the tax percentage never lowers the total
// 5. totals are never negative, even for out-of-range inputs

use ledgerline::line_items::services::{MAX_QUANTITY, MAX_UNIT_PRICE};
use ledgerline::line_items::{compute_line_total, LineCalculator, LineEdit, LineField, LineItem};
use ledgerline::taxes::GstRate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn quantity() -> impl Strategy<Value = Decimal> {
    (0i64..=100_000).prop_map(|n| Decimal::new(n, 2))
}

fn price() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn discount() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000).prop_map(|n| Decimal::new(n, 2))
}

fn tax() -> impl Strategy<Value = Decimal> {
    (0i64..=5_000).prop_map(|n| Decimal::new(n, 2))
}

proptest! {
    #[test]
    fn prop_line_total_is_deterministic(q in quantity(), p in price(), d in discount(), t in tax()) {
        prop_assert_eq!(compute_line_total(q, p, d, t), compute_line_total(q, p, d, t));
    }

    #[test]
    fn prop_zero_quantity_or_price_is_zero(q in quantity(), p in price(), d in discount(), t in tax()) {
        prop_assert_eq!(compute_line_total(Decimal::ZERO, p, d, t), Decimal::ZERO);
        prop_assert_eq!(compute_line_total(q, Decimal::ZERO, d, t), Decimal::ZERO);
    }

    #[test]
    fn prop_full_discount_is_zero(q in quantity(), p in price(), t in tax()) {
        prop_assert_eq!(compute_line_total(q, p, dec!(100), t), Decimal::ZERO);
    }

    #[test]
    fn prop_higher_tax_never_lowers_total(
        q in quantity(),
        p in price(),
        d in discount(),
        t in tax(),
        extra in tax(),
    ) {
        prop_assert!(compute_line_total(q, p, d, t + extra) >= compute_line_total(q, p, d, t));
    }

    #[test]
    fn prop_total_never_negative(
        q in -1_000i64..=1_000,
        p in -100_000i64..=100_000,
        d in -200i64..=200,
        t in -50i64..=50,
    ) {
        let total = compute_line_total(
            Decimal::from(q),
            Decimal::new(p, 2),
            Decimal::from(d),
            Decimal::from(t),
        );
        prop_assert!(total >= Decimal::ZERO);
    }

    #[test]
    fn prop_total_has_two_decimal_places(q in quantity(), p in price(), d in discount(), t in tax()) {
        let total = compute_line_total(q, p, d, t);
        prop_assert_eq!(total.scale(), 2);
        prop_assert_eq!(total, total.round_dp(2));
    }
}

#[test]
fn test_discounted_line_breakdown() {
    let breakdown = LineCalculator::breakdown(dec!(2), dec!(500), dec!(10), dec!(18));

    assert_eq!(breakdown.subtotal, dec!(1000));
    assert_eq!(breakdown.discount_amount, dec!(100));
    assert_eq!(breakdown.taxable_amount, dec!(900));
    assert_eq!(breakdown.tax_amount, dec!(162));
    assert_eq!(breakdown.total, dec!(1062.00));
    assert_eq!(breakdown.total.to_string(), "1062.00");
}

#[test]
fn test_blank_line_totals_zero() {
    assert_eq!(compute_line_total(dec!(1), dec!(0), dec!(0), dec!(18)), dec!(0.00));
    assert_eq!(LineItem::new().total(), Decimal::ZERO);
}

#[test]
fn test_discount_above_hundred_is_clamped() {
    assert_eq!(compute_line_total(dec!(3), dec!(40), dec!(150), dec!(5)), Decimal::ZERO);
}

#[test]
fn test_line_total_follows_field_edits() {
    let mut line = LineItem::with_tax_rate(GstRate::Twelve);
    line.set_quantity(dec!(4));
    line.set_unit_price(dec!(250));
    assert_eq!(line.total(), dec!(1120));

    assert!(line.apply(LineField::DiscountPercent, "25"));
    assert_eq!(line.total(), dec!(840));

    // Off-slab tax is refused and the line keeps its total
    assert!(!line.apply(LineField::TaxPercent, "7"));
    assert_eq!(line.tax_rate(), GstRate::Twelve);
    assert_eq!(line.total(), dec!(840));

    // Junk quantity coerces to zero
    assert!(line.apply(LineField::Quantity, "four"));
    assert_eq!(line.total(), Decimal::ZERO);
}

#[test]
fn test_edit_value_accepts_formatted_numbers() {
    let edit = LineEdit::new(0, LineField::UnitPrice, "1,250.50");
    let mut line = LineItem::with_tax_rate(GstRate::Zero);
    assert!(line.apply(edit.field, &edit.value));
    assert_eq!(line.total(), dec!(1250.50));
}

#[test]
fn test_amounts_beyond_limits_are_capped() {
    let huge = Decimal::from_scientific("1e20").unwrap();
    let total = compute_line_total(huge, huge, dec!(0), dec!(18));

    assert_eq!(
        total,
        compute_line_total(MAX_QUANTITY, MAX_UNIT_PRICE, dec!(0), dec!(18))
    );
    assert!(total > Decimal::ZERO);
}
