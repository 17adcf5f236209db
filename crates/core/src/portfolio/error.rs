//! Portfolio view errors.

use thiserror::Error;

use parcela_shared::AppError;
use parcela_shared::types::ObligationId;

use crate::store::StoreError;

/// Errors raised while assembling portfolio views.
#[derive(Debug, Error)]
pub enum PortfolioError {
    /// Receipt details were requested for an obligation that has never
    /// been settled.
    #[error("Obligation {0} has no receipt")]
    Unsettled(ObligationId),

    /// Underlying storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PortfolioError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unsettled(_) => "RECEIPT_NOT_FOUND",
            Self::Store(err) => err.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::Unsettled(_) => 404,
            Self::Store(err) => err.http_status_code(),
        }
    }
}

impl From<PortfolioError> for AppError {
    fn from(err: PortfolioError) -> Self {
        match err {
            PortfolioError::Unsettled(_) => Self::NotFound(err.to_string()),
            PortfolioError::Store(inner) => inner.into(),
        }
    }
}
