//! Tokalign error types

/// Tokalign error types
#[derive(Debug, thiserror::Error)]
pub enum TokalignError {
    /// Caller-supplied parameters that an operation cannot honour, e.g. a
    /// truncation stride that does not fit inside the window.
    ///
    /// The receiver of the failed call is left unmodified.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Failure reported by a [`TokenizerProvider`](crate::TokenizerProvider).
    #[error("tokenization failed: {0}")]
    Tokenization(String),
}

/// Result type alias for Tokalign operations
pub type Result<T> = std::result::Result<T, TokalignError>;
