use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sale_terms() -> SaleTerms {
    SaleTerms {
        total_price: dec!(15000),
        down_payment: dec!(3000),
        installment_count: 12,
        first_due_date: d(2024, 2, 10),
        annual_interest_rate: Decimal::ZERO,
    }
}

fn rental_terms(end: Option<NaiveDate>) -> RentalTerms {
    RentalTerms {
        monthly_rent: dec!(450.00),
        deposit: dec!(450.00),
        start_date: d(2024, 1, 15),
        end_date: end,
    }
}

// ===== Sale schedules =====

#[test]
fn test_sale_schedule_example_scenario() {
    // 12,000 financed over 12 months at zero rate: 12 rows of 1000.00.
    let rows = ScheduleGenerator::sale_schedule(&sale_terms()).unwrap();

    assert_eq!(rows.len(), 12);
    for (i, row) in rows.iter().enumerate() {
        let i = u32::try_from(i).unwrap();
        assert_eq!(row.period, ObligationPeriod::Installment(i + 1));
        assert_eq!(row.due_date, crate::calendar::add_months(d(2024, 2, 10), i));
        assert_eq!(row.amount, dec!(1000.00));
    }
}

#[test]
fn test_sale_schedule_periods_strictly_increase() {
    let rows = ScheduleGenerator::sale_schedule(&sale_terms()).unwrap();
    for pair in rows.windows(2) {
        assert!(pair[0].period < pair[1].period);
        assert!(pair[0].due_date < pair[1].due_date);
    }
}

#[test]
fn test_sale_schedule_with_interest_uses_level_payment() {
    let terms = SaleTerms {
        annual_interest_rate: dec!(12),
        ..sale_terms()
    };
    let rows = ScheduleGenerator::sale_schedule(&terms).unwrap();

    // 12,000 at 1% monthly over 12 periods.
    assert!(rows.iter().all(|r| r.amount == dec!(1066.19)));
}

#[test]
fn test_sale_schedule_month_end_first_due_date_clamps() {
    let terms = SaleTerms {
        first_due_date: d(2024, 1, 31),
        installment_count: 3,
        ..sale_terms()
    };
    let rows = ScheduleGenerator::sale_schedule(&terms).unwrap();
    let dates: Vec<_> = rows.iter().map(|r| r.due_date).collect();
    assert_eq!(dates, vec![d(2024, 1, 31), d(2024, 2, 29), d(2024, 3, 31)]);
}

#[test]
fn test_sale_schedule_oversized_down_payment_clamps_to_zero() {
    // Financed amount never goes negative; the schedule degenerates to
    // zero-amount rows rather than crediting the buyer.
    let terms = SaleTerms {
        down_payment: dec!(20000),
        ..sale_terms()
    };
    assert_eq!(terms.financed_amount(), Decimal::ZERO);
    let rows = ScheduleGenerator::sale_schedule(&terms).unwrap();
    assert!(rows.iter().all(|r| r.amount == Decimal::ZERO));
}

#[test]
fn test_sale_terms_validation() {
    let zero_price = SaleTerms {
        total_price: Decimal::ZERO,
        ..sale_terms()
    };
    assert!(matches!(
        ScheduleGenerator::sale_schedule(&zero_price),
        Err(ScheduleError::NonPositivePrice)
    ));

    let zero_installments = SaleTerms {
        installment_count: 0,
        ..sale_terms()
    };
    assert!(matches!(
        ScheduleGenerator::sale_schedule(&zero_installments),
        Err(ScheduleError::ZeroInstallments)
    ));

    let negative_rate = SaleTerms {
        annual_interest_rate: dec!(-1),
        ..sale_terms()
    };
    assert!(matches!(
        ScheduleGenerator::sale_schedule(&negative_rate),
        Err(ScheduleError::NegativeRate)
    ));

    let negative_down = SaleTerms {
        down_payment: dec!(-100),
        ..sale_terms()
    };
    assert!(matches!(
        ScheduleGenerator::sale_schedule(&negative_down),
        Err(ScheduleError::NegativeDownPayment)
    ));
}

// ===== Rental schedules =====

#[test]
fn test_fixed_horizon_generates_through_end_date() {
    let rows =
        ScheduleGenerator::rental_schedule(&rental_terms(Some(d(2024, 6, 15)))).unwrap();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].period, ObligationPeriod::RentMonth(d(2024, 1, 15)));
    assert_eq!(rows[5].period, ObligationPeriod::RentMonth(d(2024, 6, 15)));
    assert!(rows.iter().all(|r| r.amount == dec!(450.00)));
    assert!(rows.iter().all(|r| {
        matches!(r.period, ObligationPeriod::RentMonth(p) if p == r.due_date)
    }));
}

#[test]
fn test_fixed_horizon_never_passes_end_date() {
    // End date falls between periods: 2024-06-10 excludes the June 15 row.
    let rows =
        ScheduleGenerator::rental_schedule(&rental_terms(Some(d(2024, 6, 10)))).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4].due_date, d(2024, 5, 15));
}

#[test]
fn test_fixed_horizon_single_period_when_end_equals_start() {
    let rows =
        ScheduleGenerator::rental_schedule(&rental_terms(Some(d(2024, 1, 15)))).unwrap();
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_fixed_horizon_caps_at_sixty_periods() {
    // A ten-year lease still generates at most the safety ceiling.
    let rows =
        ScheduleGenerator::rental_schedule(&rental_terms(Some(d(2034, 1, 15)))).unwrap();
    assert_eq!(rows.len(), FIXED_HORIZON_CAP as usize);
}

#[test]
fn test_rolling_window_generates_exactly_twelve_periods() {
    let rows = ScheduleGenerator::rental_schedule(&rental_terms(None)).unwrap();
    assert_eq!(rows.len(), ROLLING_WINDOW_PERIODS as usize);
    assert_eq!(rows[0].due_date, d(2024, 1, 15));
    assert_eq!(rows[11].due_date, d(2024, 12, 15));
}

#[test]
fn test_rental_terms_validation() {
    let zero_rent = RentalTerms {
        monthly_rent: Decimal::ZERO,
        ..rental_terms(None)
    };
    assert!(matches!(
        ScheduleGenerator::rental_schedule(&zero_rent),
        Err(ScheduleError::NonPositiveRent)
    ));

    let negative_deposit = RentalTerms {
        deposit: dec!(-1),
        ..rental_terms(None)
    };
    assert!(matches!(
        ScheduleGenerator::rental_schedule(&negative_deposit),
        Err(ScheduleError::NegativeDeposit)
    ));

    let inverted = rental_terms(Some(d(2023, 12, 31)));
    assert!(matches!(
        ScheduleGenerator::rental_schedule(&inverted),
        Err(ScheduleError::EndBeforeStart { .. })
    ));
}

#[test]
fn test_horizon_strategy_selection() {
    assert_eq!(
        rental_terms(Some(d(2025, 1, 15))).horizon(),
        HorizonStrategy::FixedHorizon(d(2025, 1, 15))
    );
    assert_eq!(rental_terms(None).horizon(), HorizonStrategy::RollingWindow);
}
