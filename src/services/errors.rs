//! Service errors.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed transport failure from a collaborator.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Infrastructure failures reported by collaborators.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The remote side could not be reached or answered garbage.
    #[error("transport error")]
    Transport(#[source] BoxError),

    /// The remote side refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl ServiceError {
    /// Wraps any error as a transport failure.
    pub fn transport(error: impl Into<BoxError>) -> Self {
        Self::Transport(error.into())
    }
}
