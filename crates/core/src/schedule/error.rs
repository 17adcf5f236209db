//! Schedule validation errors.

use chrono::NaiveDate;
use thiserror::Error;

use parcela_shared::AppError;

/// Errors raised while validating agreement terms, before any write.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Total price must be positive.
    #[error("Total price must be positive")]
    NonPositivePrice,

    /// Down payment cannot be negative.
    #[error("Down payment cannot be negative")]
    NegativeDownPayment,

    /// Installment count must be greater than zero.
    #[error("Installment count must be greater than zero")]
    ZeroInstallments,

    /// Interest rate cannot be negative.
    #[error("Interest rate cannot be negative")]
    NegativeRate,

    /// Monthly rent must be positive.
    #[error("Monthly rent must be positive")]
    NonPositiveRent,

    /// Deposit cannot be negative.
    #[error("Deposit cannot be negative")]
    NegativeDeposit,

    /// The rental end date precedes the start date.
    #[error("End date {end} is before start date {start}")]
    EndBeforeStart {
        /// Rental start date.
        start: NaiveDate,
        /// Offending end date.
        end: NaiveDate,
    },
}

impl ScheduleError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositivePrice => "NON_POSITIVE_PRICE",
            Self::NegativeDownPayment => "NEGATIVE_DOWN_PAYMENT",
            Self::ZeroInstallments => "ZERO_INSTALLMENTS",
            Self::NegativeRate => "NEGATIVE_RATE",
            Self::NonPositiveRent => "NON_POSITIVE_RENT",
            Self::NegativeDeposit => "NEGATIVE_DEPOSIT",
            Self::EndBeforeStart { .. } => "END_BEFORE_START",
        }
    }

    /// Returns the HTTP status code for this error. Always a client error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        400
    }
}

impl From<ScheduleError> for AppError {
    fn from(err: ScheduleError) -> Self {
        Self::Validation(err.to_string())
    }
}
