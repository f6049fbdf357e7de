//! Error types for fortuna-service.

use thiserror::Error;

/// Result type alias using fortuna-service's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the reading service.
///
/// Every variant maps to a short user-displayable message via
/// [`Error::user_message`]; raw diagnostics (status codes, response bodies)
/// stay in the log.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// No image was provided.
    #[error("No image provided")]
    InvalidInput,

    /// The analysis call failed.
    #[error("Analysis failed: {0}")]
    Analysis(#[from] fortuna_client::Error),

    /// The store failed.
    #[error("Storage failed: {0}")]
    Storage(#[from] fortuna_store::Error),
}

impl Error {
    /// Short user-facing message for this error.
    ///
    /// Messages are generic "try again" framings and never contain raw
    /// diagnostic payloads.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::InvalidInput => "Please choose a photo first.",
            Error::Analysis(e) => match e {
                fortuna_client::Error::Transport(_) => {
                    "Network trouble. Check your connection and try again."
                }
                fortuna_client::Error::Remote { .. } => {
                    "The reading service is unavailable right now. Try again shortly."
                }
                fortuna_client::Error::Malformed { .. } => {
                    "We received an unexpected reply. Please try again."
                }
                fortuna_client::Error::InvalidUrl(_) => "The service is misconfigured.",
                _ => "The reading could not be completed. Please try again.",
            },
            Error::Storage(fortuna_store::Error::NotFound(_)) => {
                "The saved photo could not be found."
            }
            Error::Storage(_) => "Your reading could not be saved. Please try again.",
        }
    }
}
