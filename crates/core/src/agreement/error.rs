//! Agreement lifecycle errors.

use thiserror::Error;

use parcela_shared::AppError;
use parcela_shared::types::{LotId, PropertyId};

use crate::schedule::ScheduleError;
use crate::store::StoreError;

/// Errors raised while registering entities or opening agreements.
#[derive(Debug, Error)]
pub enum AgreementError {
    /// The lot already carries an active sale.
    #[error("Lot {0} is not available for sale")]
    LotUnavailable(LotId),

    /// The property already carries an active rental.
    #[error("Property {0} is not available for rent")]
    PropertyUnavailable(PropertyId),

    /// The agreement terms failed validation.
    #[error(transparent)]
    InvalidTerms(#[from] ScheduleError),

    /// Client registration is missing a name or phone number.
    #[error("Client name and phone are required")]
    IncompleteClient,

    /// Underlying storage failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AgreementError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::LotUnavailable(_) => "LOT_UNAVAILABLE",
            Self::PropertyUnavailable(_) => "PROPERTY_UNAVAILABLE",
            Self::InvalidTerms(err) => err.error_code(),
            Self::IncompleteClient => "INCOMPLETE_CLIENT",
            Self::Store(err) => err.error_code(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::LotUnavailable(_) | Self::PropertyUnavailable(_) => 409,
            Self::InvalidTerms(err) => err.http_status_code(),
            Self::IncompleteClient => 400,
            Self::Store(err) => err.http_status_code(),
        }
    }
}

impl From<AgreementError> for AppError {
    fn from(err: AgreementError) -> Self {
        match err {
            AgreementError::LotUnavailable(_) | AgreementError::PropertyUnavailable(_) => {
                Self::AssetUnavailable(err.to_string())
            }
            AgreementError::IncompleteClient => Self::Validation(err.to_string()),
            AgreementError::InvalidTerms(inner) => inner.into(),
            AgreementError::Store(inner) => inner.into(),
        }
    }
}
