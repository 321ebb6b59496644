//! Application-level errors.

use thiserror::Error;

use ecommerce_core::DomainError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The domain rejected the operation.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A repository had no entry for the requested id.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Storage backend failure (e.g. poisoned lock).
    #[error("storage failure: {0}")]
    Storage(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}
