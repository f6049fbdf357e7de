//! Error types for fortuna-client.

use thiserror::Error;

/// Result type alias using fortuna-client's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when requesting an image analysis.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The configured endpoint could not be combined into a valid request
    /// URL. This is a configuration error; it never occurs with a valid
    /// endpoint setting.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure: connection, TLS, or request timeout.
    #[error("Transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The remote API answered with a non-200 status. The raw body is kept
    /// for diagnostics and is logged, never shown to end users.
    #[error("Remote API returned HTTP {status}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body did not match the expected
    /// `candidates[0].content.parts[0].text` shape.
    #[error("Malformed response: {context}")]
    Malformed {
        /// What was wrong with the body.
        context: String,
    },
}

impl Error {
    /// Create a malformed-response error.
    pub fn malformed(context: impl Into<String>) -> Self {
        Self::Malformed {
            context: context.into(),
        }
    }
}
