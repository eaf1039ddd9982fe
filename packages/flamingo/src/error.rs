use birdguide::GuideError;
use ebird_client::EbirdError;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced to whoever dispatched a command. None of them are retried.
#[derive(Debug, Error)]
pub enum FlamingoError {
    /// Network or HTTP failure, including an expired request timeout
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Response body did not have the expected shape
    #[error("decode error: {0}")]
    Decode(#[source] BoxError),

    /// The guide has no page for the requested species
    #[error("species not found: {url}")]
    NotFound { url: String },

    /// A fact was requested from a profile without facts
    #[error("no facts available")]
    EmptyFacts,

    /// The location selector is not in the configured table
    #[error("'{0}' is not a valid location")]
    UnknownLocation(String),

    /// A client could not be built locally (TLS backend, builder options)
    #[error("client setup failed: {0}")]
    Setup(#[source] BoxError),
}

impl FlamingoError {
    /// Text shown to the end user in place of the command's normal reply.
    pub fn user_message(&self) -> String {
        format!("Error: {self}")
    }

    pub(crate) fn setup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        FlamingoError::Setup(Box::new(err))
    }
}

impl From<EbirdError> for FlamingoError {
    fn from(err: EbirdError) -> Self {
        if err.is_transport() {
            FlamingoError::Transport(Box::new(err))
        } else {
            FlamingoError::Decode(Box::new(err))
        }
    }
}

impl From<GuideError> for FlamingoError {
    fn from(err: GuideError) -> Self {
        FlamingoError::Transport(Box::new(err))
    }
}

impl From<tokio::time::error::Elapsed> for FlamingoError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        FlamingoError::Transport(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, FlamingoError>;
