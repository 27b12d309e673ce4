//! Submission
//!
//! Runs validation, the optional image upload and persistence in order, and
//! refuses overlapping or too-early repeat submissions.

use tokio::time::Instant;

pub mod coordinator;
pub mod errors;

pub use coordinator::SubmissionCoordinator;
pub use errors::SubmissionError;

/// Where the coordinator is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// Ready to accept a submission.
    Idle,

    /// Checking the draft.
    Validating,

    /// Uploading the pending image.
    Uploading,

    /// Waiting on the persistence collaborator.
    Persisting,

    /// A submission finished recently; new ones are refused until `until`.
    CoolingDown {
        /// When submission is re-enabled
        until: Instant,
    },
}

/// How a submit request ended, when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The item was persisted and the form reset.
    Submitted,

    /// Validation found problems; see the form's error tree.
    Invalid,

    /// Another submission was running or cooling down.
    Ignored,

    /// The form was dropped before the submission could start.
    Detached,
}
