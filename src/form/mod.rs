//! Item Form
//!
//! [`ItemForm`] is what a UI binds to: draft mutations, standalone
//! validation, submission and cancel, over a [`FormStore`] shared with the
//! submission coordinator.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;

use crate::{
    config::FormConfig,
    items::{DraftError, DraftField, ImageFile, ItemDraft, StockField},
    services::{FormServices, ServiceError},
    submission::{SubmissionCoordinator, SubmissionError, SubmissionState, SubmitOutcome},
    validation::{DraftErrors, validate},
};

pub mod store;

pub use store::FormStore;

/// Form controller for creating or editing one item.
#[derive(Debug)]
pub struct ItemForm {
    store: Arc<Mutex<FormStore>>,
    services: FormServices,
    coordinator: SubmissionCoordinator,
}

impl ItemForm {
    /// Form for a new item, starting from the blank draft.
    pub fn new(services: FormServices, config: &FormConfig) -> Self {
        Self::with_store(FormStore::new(), services, config)
    }

    /// Form editing `existing`. Variant codes left as they were in
    /// `existing` are not re-checked for availability.
    pub fn edit(existing: ItemDraft, services: FormServices, config: &FormConfig) -> Self {
        Self::with_store(FormStore::seeded(existing), services, config)
    }

    fn with_store(store: FormStore, services: FormServices, config: &FormConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            coordinator: SubmissionCoordinator::new(services.clone(), config),
            services,
        }
    }

    /// Snapshot of the current draft.
    pub fn draft(&self) -> ItemDraft {
        self.store.lock().draft().clone()
    }

    /// Snapshot of the current error tree.
    pub fn errors(&self) -> DraftErrors {
        self.store.lock().errors().clone()
    }

    /// Image waiting to be uploaded, if any.
    pub fn pending_image(&self) -> Option<ImageFile> {
        self.store.lock().image().cloned()
    }

    /// Submission state.
    pub fn submission_state(&self) -> SubmissionState {
        self.coordinator.state()
    }

    /// `true` while the submit control should stay disabled.
    pub fn is_submitting(&self) -> bool {
        self.coordinator.is_busy()
    }

    /// Replaces a top-level scalar.
    pub fn set_field(&self, field: DraftField) {
        self.store.lock().set_field(field);
    }

    /// Sets the colour of a variant.
    ///
    /// # Errors
    ///
    /// Returns an error when `variant` is out of range.
    pub fn set_variant_color(&self, variant: usize, color: &str) -> Result<(), DraftError> {
        self.store.lock().set_variant_color(variant, color)
    }

    /// Sets the code of a variant.
    ///
    /// # Errors
    ///
    /// Returns an error when `variant` is out of range.
    pub fn set_variant_code(&self, variant: usize, code: &str) -> Result<(), DraftError> {
        self.store.lock().set_variant_code(variant, code)
    }

    /// Sets a stock entry's size or quantity from raw input.
    ///
    /// # Errors
    ///
    /// Returns an error when either index is out of range.
    pub fn set_stock_field(
        &self,
        variant: usize,
        entry: usize,
        field: StockField,
        value: &str,
    ) -> Result<(), DraftError> {
        self.store
            .lock()
            .set_stock_field(variant, entry, field, value)
    }

    /// Appends a blank variant.
    pub fn add_variant(&self) {
        self.store.lock().add_variant();
    }

    /// Appends a blank stock entry to a variant.
    ///
    /// # Errors
    ///
    /// Returns an error when `variant` is out of range.
    pub fn add_stock_entry(&self, variant: usize) -> Result<(), DraftError> {
        self.store.lock().add_stock_entry(variant)
    }

    /// Removes a variant.
    ///
    /// # Errors
    ///
    /// Returns an error when `variant` is out of range.
    pub fn remove_variant(&self, variant: usize) -> Result<(), DraftError> {
        self.store.lock().remove_variant(variant)
    }

    /// Removes a stock entry.
    ///
    /// # Errors
    ///
    /// Returns an error when either index is out of range.
    pub fn remove_stock_entry(&self, variant: usize, entry: usize) -> Result<(), DraftError> {
        self.store.lock().remove_stock_entry(variant, entry)
    }

    /// Stores or clears the image to upload on submit.
    pub fn set_image(&self, image: Option<ImageFile>) {
        self.store.lock().set_image(image);
    }

    /// Validates the current draft and stores the resulting error tree.
    ///
    /// Returns whether the draft, as it was when validation started, is
    /// valid. The tree is not stored if a variant or stock entry was removed
    /// while the code checks ran.
    ///
    /// # Errors
    ///
    /// Returns the code checker's error when a remote check fails.
    pub async fn validate(&self) -> Result<bool, ServiceError> {
        let (draft, baseline, revision) = {
            let store = self.store.lock();

            (store.draft().clone(), store.baseline().cloned(), store.revision())
        };

        let errors = validate(&draft, baseline.as_ref(), self.services.codes.as_ref()).await?;
        let valid = errors.is_valid();

        self.store.lock().set_errors_from(revision, errors);

        Ok(valid)
    }

    /// Starts a submission.
    ///
    /// The returned future does not borrow the form and may be spawned. If
    /// the form is dropped before it finishes, its remaining draft updates
    /// are skipped.
    pub fn submit(
        &self,
    ) -> impl Future<Output = Result<SubmitOutcome, SubmissionError>> + Send + use<> {
        let coordinator = self.coordinator.clone();
        let store = Arc::downgrade(&self.store);

        async move { coordinator.submit(&store).await }
    }

    /// Abandons the edit and returns to the listing. The draft is kept.
    pub fn cancel(&self) {
        info!("item edit cancelled");

        self.services.navigator.go_to_listing();
    }
}
