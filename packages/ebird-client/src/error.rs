use thiserror::Error;

/// Errors returned by [`crate::EbirdClient`].
#[derive(Debug, Error)]
pub enum EbirdError {
    /// The request could not complete (connection, timeout, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("eBird API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The body was not a JSON array of observations.
    #[error("failed to decode observations: {0}")]
    Decode(#[from] serde_json::Error),
}

impl EbirdError {
    /// True for failures of the network call itself, as opposed to a bad body.
    pub fn is_transport(&self) -> bool {
        matches!(self, EbirdError::Http(_) | EbirdError::Api { .. })
    }
}

pub type Result<T> = std::result::Result<T, EbirdError>;
