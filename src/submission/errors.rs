//! Submission errors.

use thiserror::Error;

use crate::services::ServiceError;

/// Infrastructure failures that stopped a submission.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// A variant code could not be checked.
    #[error("code availability check failed")]
    CodeCheck(#[source] ServiceError),

    /// The pending image could not be uploaded.
    #[error("image upload failed")]
    Upload(#[source] ServiceError),

    /// The item could not be saved.
    #[error("saving the item failed")]
    Persist(#[source] ServiceError),
}
