//! Services
//!
//! Collaborators the form talks to but does not own. They are handed to the
//! form explicitly through [`FormServices`].

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::items::{ImageFile, ItemDraft};

pub mod errors;
pub mod reserved;

pub use errors::ServiceError;
pub use reserved::ReservedCodes;

/// Availability of a variant code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStatus {
    /// `false` when another item already uses the code
    pub available: bool,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation completed
    Success,

    /// Operation failed
    Error,
}

/// Remote lookup of variant code availability.
#[automock]
#[async_trait]
pub trait CodeAvailability: Send + Sync {
    /// Checks whether `code` is free for use.
    async fn check_code(&self, code: &str) -> Result<CodeStatus, ServiceError>;
}

/// Image storage.
#[automock]
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Uploads `image`, returning its storage key when the store assigned one.
    async fn upload_image(&self, image: &ImageFile) -> Result<Option<String>, ServiceError>;
}

/// Caller-supplied persistence of a finished draft.
#[automock]
#[async_trait]
pub trait ItemSubmitter: Send + Sync {
    /// Persists `item`.
    async fn submit(&self, item: ItemDraft) -> Result<(), ServiceError>;
}

/// Fire-and-forget notification sink.
#[automock]
pub trait Notifier: Send + Sync {
    /// Shows `message` to the user.
    fn notify(&self, message: &str, severity: Severity);
}

/// Fire-and-forget navigation.
#[automock]
pub trait Navigator: Send + Sync {
    /// Returns the user to the item listing.
    fn go_to_listing(&self);
}

/// Collaborators used by an item form.
#[derive(Clone)]
pub struct FormServices {
    /// Variant code availability
    pub codes: Arc<dyn CodeAvailability>,

    /// Image storage
    pub images: Arc<dyn ImageUploader>,

    /// Persistence of the submitted item
    pub submitter: Arc<dyn ItemSubmitter>,

    /// Notification sink
    pub notifier: Arc<dyn Notifier>,

    /// Navigation
    pub navigator: Arc<dyn Navigator>,
}

impl Debug for FormServices {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FormServices").finish_non_exhaustive()
    }
}
