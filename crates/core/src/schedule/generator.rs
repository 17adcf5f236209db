//! Schedule generation from agreement terms.

use crate::calendar::{add_months, level_payment, monthly_rate};

use super::error::ScheduleError;
use super::types::{HorizonStrategy, ObligationPeriod, RentalTerms, SaleTerms, ScheduleRow};

/// Hard safety ceiling on rows generated for a fixed-horizon rental.
pub const FIXED_HORIZON_CAP: u32 = 60;

/// Periods generated for an open-ended rental (one rolling year).
pub const ROLLING_WINDOW_PERIODS: u32 = 12;

/// Pure generator producing the full, ordered schedule for an agreement.
///
/// Either every row is produced or the terms are rejected; a partial
/// schedule is never emitted.
pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Builds the installment schedule for a sale.
    ///
    /// Every installment carries the same level-payment amount; the engine
    /// tracks payment amount and due date only, not a principal/interest
    /// split.
    pub fn sale_schedule(terms: &SaleTerms) -> Result<Vec<ScheduleRow>, ScheduleError> {
        terms.validate()?;

        let rate = monthly_rate(terms.annual_interest_rate);
        let amount = level_payment(terms.financed_amount(), rate, terms.installment_count);

        let rows = (0..terms.installment_count)
            .map(|i| ScheduleRow {
                period: ObligationPeriod::Installment(i + 1),
                due_date: add_months(terms.first_due_date, i),
                amount,
            })
            .collect();
        Ok(rows)
    }

    /// Builds the monthly period schedule for a rental.
    ///
    /// The horizon strategy is selected by the presence of an end date; see
    /// [`HorizonStrategy`].
    pub fn rental_schedule(terms: &RentalTerms) -> Result<Vec<ScheduleRow>, ScheduleError> {
        terms.validate()?;

        let count = match terms.horizon() {
            HorizonStrategy::FixedHorizon(end) => {
                let mut periods = 0;
                while periods < FIXED_HORIZON_CAP && add_months(terms.start_date, periods) <= end {
                    periods += 1;
                }
                periods
            }
            HorizonStrategy::RollingWindow => ROLLING_WINDOW_PERIODS,
        };

        let rows = (0..count)
            .map(|i| {
                let period_date = add_months(terms.start_date, i);
                ScheduleRow {
                    period: ObligationPeriod::RentMonth(period_date),
                    due_date: period_date,
                    amount: terms.monthly_rent,
                }
            })
            .collect();
        Ok(rows)
    }
}
