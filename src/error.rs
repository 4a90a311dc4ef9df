//! Error types.

use thiserror::Error;

/// Failure to obtain a reply from the reply service.
///
/// Every variant is surfaced to the user the same way; the variants only
/// exist so the log line says what actually went wrong.
#[derive(Error, Debug)]
pub enum ReplyError {
    /// The request could not be sent or the body could not be decoded.
    #[error("reply request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("reply service returned {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The configured base URL cannot carry the chat path.
    #[error("invalid reply service URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A name that does not match any known option.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Unknown assistant mode.
    #[error("unknown assistant mode: {0}")]
    UnknownMode(String),

    /// Unknown colour theme.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),
}
