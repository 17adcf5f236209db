//! French (level-payment) amortization math.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places for monetary amounts.
const MONEY_DP: u32 = 2;

/// Rounds a monetary amount to 2 decimal places.
///
/// Uses `MidpointAwayFromZero` (round half away from zero), the single
/// rounding policy of the engine. Rounding drift is NOT redistributed
/// across installments: the last installment of a schedule does not absorb
/// the remainder, so a schedule's sum may differ from the financed amount
/// by less than one cent per installment.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Converts a simple nominal annual rate (in percent) to a monthly rate.
///
/// `monthly_rate(12)` is `0.01`; a zero rate stays zero (no financing cost).
#[must_use]
pub fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED / Decimal::from(12)
}

/// Computes the fixed periodic payment for a fully amortizing loan.
///
/// Standard annuity formula `P*i*(1+i)^n / ((1+i)^n - 1)`. Degrades to
/// straight division when `rate` is zero and to zero when `periods` is
/// zero. The result is rounded with [`round_money`].
#[must_use]
pub fn level_payment(principal: Decimal, rate: Decimal, periods: u32) -> Decimal {
    if periods == 0 {
        return Decimal::ZERO;
    }
    if rate.is_zero() {
        return round_money(principal / Decimal::from(periods));
    }
    let factor = compound_factor(rate, periods);
    round_money(principal * rate * factor / (factor - Decimal::ONE))
}

/// `(1 + rate)^periods` by repeated multiplication.
///
/// Schedules are bounded (tens of periods, hundreds at the extreme), so a
/// loop is exact enough and avoids pulling in the decimal maths feature.
fn compound_factor(rate: Decimal, periods: u32) -> Decimal {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(2.005)), dec!(2.01));
        assert_eq!(round_money(dec!(-2.005)), dec!(-2.01));
        assert_eq!(round_money(dec!(2.004)), dec!(2.00));
        assert_eq!(round_money(dec!(1066.185465)), dec!(1066.19));
    }

    #[test]
    fn test_monthly_rate_zero_stays_zero() {
        assert_eq!(monthly_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[rstest]
    #[case(dec!(12), dec!(0.01))]
    #[case(dec!(6), dec!(0.005))]
    #[case(dec!(24), dec!(0.02))]
    fn test_monthly_rate_divides_nominal_annual(#[case] annual: Decimal, #[case] expected: Decimal) {
        assert_eq!(monthly_rate(annual), expected);
    }

    #[test]
    fn test_level_payment_zero_rate_is_straight_division() {
        assert_eq!(level_payment(dec!(12000), Decimal::ZERO, 12), dec!(1000.00));
        assert_eq!(level_payment(dec!(100), Decimal::ZERO, 3), dec!(33.33));
    }

    #[test]
    fn test_level_payment_zero_periods_is_zero() {
        assert_eq!(level_payment(dec!(12000), dec!(0.01), 0), Decimal::ZERO);
        assert_eq!(level_payment(dec!(12000), Decimal::ZERO, 0), Decimal::ZERO);
    }

    #[test]
    fn test_level_payment_matches_closed_form_annuity() {
        // 12,000 financed at 12% nominal annual (1% monthly) over 12 months.
        let payment = level_payment(dec!(12000), monthly_rate(dec!(12)), 12);
        assert_eq!(payment, dec!(1066.19));
    }

    #[test]
    fn test_level_payment_exceeds_interest_free_payment() {
        let with_interest = level_payment(dec!(50000), monthly_rate(dec!(18)), 36);
        let without = level_payment(dec!(50000), Decimal::ZERO, 36);
        assert!(with_interest > without);
    }

    #[test]
    fn test_rounding_drift_is_not_redistributed() {
        // 100 / 3 = 33.33 per installment; the schedule sums to 99.99, one
        // cent short. Accepted approximation, not silently fixed.
        let payment = level_payment(dec!(100), Decimal::ZERO, 3);
        assert_eq!(payment * Decimal::from(3), dec!(99.99));
    }
}
