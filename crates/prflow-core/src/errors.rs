//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`prflow_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    ApiError {
        source: prflow_ghapi_interface::ApiError,
    },

    /// Wraps [`prflow_chat_interface::ChatError`].
    #[error("Chat error: {source}")]
    ChatError {
        source: prflow_chat_interface::ChatError,
    },
}

impl From<prflow_ghapi_interface::ApiError> for DomainError {
    fn from(e: prflow_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

impl From<prflow_chat_interface::ChatError> for DomainError {
    fn from(e: prflow_chat_interface::ChatError) -> Self {
        Self::ChatError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
