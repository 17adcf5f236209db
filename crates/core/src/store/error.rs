//! Storage errors.

use thiserror::Error;
use uuid::Uuid;

use parcela_shared::AppError;

/// Errors surfaced by a [`super::Store`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity kind, e.g. `"client"` or `"obligation"`.
        entity: &'static str,
        /// The missing ID.
        id: Uuid,
    },

    /// The asset already has an active agreement attached.
    #[error("Asset {id} is not available")]
    AssetUnavailable {
        /// The contended asset's ID.
        id: Uuid,
    },
}

impl StoreError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::AssetUnavailable { .. } => "ASSET_UNAVAILABLE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::AssetUnavailable { .. } => 409,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::AssetUnavailable { .. } => Self::AssetUnavailable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_into_app_error() {
        let err = StoreError::NotFound {
            entity: "lot",
            id: Uuid::nil(),
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::NotFound(_)));
        assert_eq!(app.status_code(), 404);

        let err = StoreError::AssetUnavailable { id: Uuid::nil() };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::AssetUnavailable(_)));
        assert_eq!(app.status_code(), 409);
    }
}
