//! Schedule data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ScheduleError;

/// Position of an obligation within its agreement's schedule.
///
/// Installments are numbered from 1; rent periods are identified by the
/// first day of the period. The derived ordering sorts installments by
/// number and rent periods by date (a single agreement only ever holds one
/// variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObligationPeriod {
    /// 1-based installment number of a sale schedule.
    Installment(u32),
    /// Period date of a rental schedule.
    RentMonth(NaiveDate),
}

/// One generated schedule row, before it becomes a persisted obligation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Position within the schedule.
    pub period: ObligationPeriod,
    /// Due date of the payment.
    pub due_date: NaiveDate,
    /// Amount due, rounded to 2 decimal places.
    pub amount: Decimal,
}

/// Terms of an installment sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleTerms {
    /// Total sale price.
    pub total_price: Decimal,
    /// Amount paid up front.
    pub down_payment: Decimal,
    /// Number of monthly installments.
    pub installment_count: u32,
    /// Due date of installment 1; later installments step monthly from it.
    pub first_due_date: NaiveDate,
    /// Simple nominal annual interest rate, in percent. Zero means no
    /// financing cost.
    pub annual_interest_rate: Decimal,
}

impl SaleTerms {
    /// Validates the terms. Called before any write.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.total_price <= Decimal::ZERO {
            return Err(ScheduleError::NonPositivePrice);
        }
        if self.down_payment < Decimal::ZERO {
            return Err(ScheduleError::NegativeDownPayment);
        }
        if self.installment_count == 0 {
            return Err(ScheduleError::ZeroInstallments);
        }
        if self.annual_interest_rate < Decimal::ZERO {
            return Err(ScheduleError::NegativeRate);
        }
        Ok(())
    }

    /// The amount carried into installments: price minus down payment,
    /// clamped to zero so an oversized down payment never goes negative.
    #[must_use]
    pub fn financed_amount(&self) -> Decimal {
        (self.total_price - self.down_payment).max(Decimal::ZERO)
    }
}

/// Terms of a monthly rental.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalTerms {
    /// Monthly rent amount.
    pub monthly_rent: Decimal,
    /// Security deposit. Recorded on the agreement, never scheduled.
    pub deposit: Decimal,
    /// First rent period.
    pub start_date: NaiveDate,
    /// Last covered date; `None` means the lease is open-ended.
    pub end_date: Option<NaiveDate>,
}

impl RentalTerms {
    /// Validates the terms. Called before any write.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.monthly_rent <= Decimal::ZERO {
            return Err(ScheduleError::NonPositiveRent);
        }
        if self.deposit < Decimal::ZERO {
            return Err(ScheduleError::NegativeDeposit);
        }
        if let Some(end) = self.end_date
            && end < self.start_date
        {
            return Err(ScheduleError::EndBeforeStart {
                start: self.start_date,
                end,
            });
        }
        Ok(())
    }

    /// Horizon strategy implied by the terms.
    #[must_use]
    pub fn horizon(&self) -> HorizonStrategy {
        match self.end_date {
            Some(end) => HorizonStrategy::FixedHorizon(end),
            None => HorizonStrategy::RollingWindow,
        }
    }
}

/// How far a rental schedule reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizonStrategy {
    /// Generate every monthly period from the start date up to (and
    /// including, when it lands on a period) the end date, capped at
    /// [`super::FIXED_HORIZON_CAP`] rows.
    FixedHorizon(NaiveDate),
    /// Open-ended lease: generate exactly
    /// [`super::ROLLING_WINDOW_PERIODS`] periods. Extending coverage as
    /// time passes is an external periodic job's responsibility, not this
    /// engine's.
    RollingWindow,
}
