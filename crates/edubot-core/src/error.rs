use thiserror::Error;

/// A convenience `Result` alias using [`EdubotError`].
pub type EdubotResult<T> = Result<T, EdubotError>;

/// Top-level error type for EduBot.
///
/// Each variant corresponds to one failure class of the answer pipeline.
#[derive(Error, Debug)]
pub enum EdubotError {
    /// The request was malformed (empty question, unknown model). Terminal:
    /// no provider is invoked and no fallback is attempted.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A configured provider was reached but returned an error, timed out or
    /// sent an unreadable payload.
    #[error("Provider {provider} failed: {message}")]
    ProviderFailure {
        /// Identifier of the provider that failed.
        provider: String,
        /// Error text extracted from the provider response.
        message: String,
    },

    /// The chat server could not be reached or answered with an error.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A submitted question was blank after trimming.
    #[error("Question is empty")]
    EmptyQuestion,

    /// Another question is still waiting for its answer.
    #[error("A request is already in flight")]
    Busy,

    /// Transcript persistence failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration could not be read or is inconsistent.
    #[error("Config error: {0}")]
    Config(String),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EdubotError {
    /// Shorthand for building a [`EdubotError::ProviderFailure`].
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderFailure {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// The human-facing part of the error, without the variant prefix.
    ///
    /// This is what ends up in the `error` field of HTTP error bodies.
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidRequest(msg) | Self::Transport(msg) => msg.clone(),
            Self::ProviderFailure { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Whether this error is the caller's fault rather than an upstream one.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}
