//! Property-based tests for schedule math.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::amortization::{level_payment, monthly_rate, round_money};
use super::dates::add_months;

/// Strategy to generate financed principals (0.01 to 10,000,000.00).
fn principal() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate installment counts (1 to 360).
fn installments() -> impl Strategy<Value = u32> {
    1u32..=360
}

/// Strategy to generate annual rates in percent (0.01 to 60.00).
fn annual_rate() -> impl Strategy<Value = Decimal> {
    (1i64..6_000i64).prop_map(|bp| Decimal::new(bp, 2))
}

/// Strategy to generate arbitrary dates within the engine's working range.
fn working_date() -> impl Strategy<Value = chrono::NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        chrono::NaiveDate::from_ymd_opt(y, m, d).expect("day <= 28 always exists")
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A zero-rate schedule sums back to the principal within one cent per
    /// installment (drift is never redistributed).
    #[test]
    fn prop_zero_rate_sum_within_cent_per_installment(
        principal in principal(),
        n in installments(),
    ) {
        let payment = level_payment(principal, Decimal::ZERO, n);
        let sum = payment * Decimal::from(n);
        let tolerance = Decimal::new(1, 2) * Decimal::from(n);
        prop_assert!(
            (sum - principal).abs() <= tolerance,
            "sum {} strayed more than {} from principal {}",
            sum, tolerance, principal
        );
    }

    /// Level payments are always rounded to at most 2 decimal places.
    #[test]
    fn prop_level_payment_has_money_scale(
        principal in principal(),
        rate in annual_rate(),
        n in installments(),
    ) {
        let payment = level_payment(principal, monthly_rate(rate), n);
        prop_assert_eq!(payment, round_money(payment));
    }

    /// An interest-bearing payment is never below the interest-free one.
    #[test]
    fn prop_interest_never_lowers_payment(
        principal in principal(),
        rate in annual_rate(),
        n in installments(),
    ) {
        let with_interest = level_payment(principal, monthly_rate(rate), n);
        let without = level_payment(principal, Decimal::ZERO, n);
        prop_assert!(with_interest >= without);
    }

    /// The payment function is deterministic.
    #[test]
    fn prop_level_payment_is_deterministic(
        principal in principal(),
        rate in annual_rate(),
        n in installments(),
    ) {
        let a = level_payment(principal, monthly_rate(rate), n);
        let b = level_payment(principal, monthly_rate(rate), n);
        prop_assert_eq!(a, b);
    }

    /// Month stepping is additive for days that exist in every month.
    #[test]
    fn prop_add_months_is_additive_below_day_29(
        date in working_date(),
        a in 0u32..60,
        b in 0u32..60,
    ) {
        prop_assert_eq!(
            add_months(add_months(date, a), b),
            add_months(date, a + b)
        );
    }

    /// Stepping by one month never moves backwards and never skips a month.
    #[test]
    fn prop_add_one_month_moves_forward(date in working_date()) {
        use chrono::Datelike;
        let next = add_months(date, 1);
        prop_assert!(next > date);
        let months = (i64::from(next.year()) * 12 + i64::from(next.month0()))
            - (i64::from(date.year()) * 12 + i64::from(date.month0()));
        prop_assert_eq!(months, 1);
    }
}
