//! Chat errors.

use thiserror::Error;

/// Chat error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat service replied with an error: {error}")]
    SlackError { error: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ChatError`.
pub type Result<T, E = ChatError> = core::result::Result<T, E>;
