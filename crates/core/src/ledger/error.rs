//! Ledger errors.

use thiserror::Error;

use parcela_shared::AppError;

use crate::store::StoreError;

/// Errors raised by settlement and rollup operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The agreement has no unpaid obligation left to settle.
    #[error("No pending obligation to settle")]
    NothingPending,

    /// Underlying storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NothingPending => "NOTHING_PENDING",
            Self::Store(err) => err.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::NothingPending => 409,
            Self::Store(err) => err.http_status_code(),
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::NothingPending => Self::Conflict(err.to_string()),
            LedgerError::Store(inner) => inner.into(),
        }
    }
}
