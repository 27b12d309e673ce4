//! Submission coordinator.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::{
    config::FormConfig,
    form::FormStore,
    items::{DraftField, ImageFile, ItemDraft},
    services::{FormServices, Severity},
    submission::{SubmissionError, SubmissionState, SubmitOutcome},
    validation::validate,
};

/// Drives one form's submissions.
///
/// Clones share the same state, so a clone moved into a spawned task still
/// refuses submissions started from the original.
#[derive(Debug, Clone)]
pub struct SubmissionCoordinator {
    services: FormServices,
    resubmit_delay: Duration,
    success_message: Arc<str>,
    failure_message: Arc<str>,
    state: Arc<Mutex<SubmissionState>>,
}

impl SubmissionCoordinator {
    /// Creates an idle coordinator.
    pub fn new(services: FormServices, config: &FormConfig) -> Self {
        Self {
            services,
            resubmit_delay: config.resubmit_delay(),
            success_message: config.success_message.as_str().into(),
            failure_message: config.failure_message.as_str().into(),
            state: Arc::new(Mutex::new(SubmissionState::Idle)),
        }
    }

    /// Current state, with an elapsed cooldown reported as [`SubmissionState::Idle`].
    pub fn state(&self) -> SubmissionState {
        match *self.state.lock() {
            SubmissionState::CoolingDown { until } if Instant::now() >= until => {
                SubmissionState::Idle
            }
            state => state,
        }
    }

    /// `true` while a submission runs or its cooldown has not elapsed.
    pub fn is_busy(&self) -> bool {
        self.state() != SubmissionState::Idle
    }

    /// Validates, uploads and persists the draft held by `store`.
    ///
    /// Requests arriving while another submission runs or cools down are
    /// ignored. Store updates are skipped once the store has been dropped.
    ///
    /// # Errors
    ///
    /// Returns the failing collaborator's error. The coordinator is back to
    /// idle (or cooling down) whenever this returns.
    pub async fn submit(
        &self,
        store: &Weak<Mutex<FormStore>>,
    ) -> Result<SubmitOutcome, SubmissionError> {
        if !self.try_begin() {
            warn!(state = ?self.state(), "submission already in progress, ignoring");

            return Ok(SubmitOutcome::Ignored);
        }

        let Some((draft, baseline, image, revision)) = with_store(store, |store| {
            (
                store.draft().clone(),
                store.baseline().cloned(),
                store.image().cloned(),
                store.revision(),
            )
        }) else {
            debug!("form dropped before submission started");
            self.set_state(SubmissionState::Idle);

            return Ok(SubmitOutcome::Detached);
        };

        info!(name = %draft.name, "validating draft");

        let errors = match validate(&draft, baseline.as_ref(), self.services.codes.as_ref()).await {
            Ok(errors) => errors,
            Err(source) => {
                error!(error = ?source, "code availability check failed");

                self.set_state(SubmissionState::Idle);
                self.notify_failure();

                return Err(SubmissionError::CodeCheck(source));
            }
        };

        let valid = errors.is_valid();

        with_store(store, |store| store.set_errors_from(revision, errors));

        if !valid {
            info!("draft has validation errors");
            self.set_state(SubmissionState::Idle);

            return Ok(SubmitOutcome::Invalid);
        }

        let result = self.upload_and_persist(store, draft, image).await;

        match &result {
            Ok(()) => self.finish(store),
            Err(error) => {
                error!(?error, "submission failed");
                self.notify_failure();
            }
        }

        self.cool_down();

        result.map(|()| SubmitOutcome::Submitted)
    }

    async fn upload_and_persist(
        &self,
        store: &Weak<Mutex<FormStore>>,
        mut item: ItemDraft,
        image: Option<ImageFile>,
    ) -> Result<(), SubmissionError> {
        if let Some(image) = image {
            self.set_state(SubmissionState::Uploading);

            info!(file_name = %image.file_name, "uploading image");

            let key = self
                .services
                .images
                .upload_image(&image)
                .await
                .map_err(SubmissionError::Upload)?
                .unwrap_or_default();

            with_store(store, |store| store.set_field(DraftField::PhotoKey(key.clone())));

            item.photo_key = key;
        }

        self.set_state(SubmissionState::Persisting);

        info!(name = %item.name, variants = item.variants.len(), "persisting item");

        self.services
            .submitter
            .submit(item)
            .await
            .map_err(SubmissionError::Persist)
    }

    fn finish(&self, store: &Weak<Mutex<FormStore>>) {
        info!("item submitted");

        self.services.navigator.go_to_listing();
        self.services
            .notifier
            .notify(&self.success_message, Severity::Success);

        if with_store(store, FormStore::reset).is_none() {
            debug!("form dropped before reset");
        }
    }

    fn notify_failure(&self) {
        self.services
            .notifier
            .notify(&self.failure_message, Severity::Error);
    }

    fn try_begin(&self) -> bool {
        let mut state = self.state.lock();

        let ready = match *state {
            SubmissionState::Idle => true,
            SubmissionState::CoolingDown { until } => Instant::now() >= until,
            SubmissionState::Validating
            | SubmissionState::Uploading
            | SubmissionState::Persisting => false,
        };

        if ready {
            *state = SubmissionState::Validating;
        }

        ready
    }

    fn cool_down(&self) {
        self.set_state(SubmissionState::CoolingDown {
            until: Instant::now() + self.resubmit_delay,
        });
    }

    fn set_state(&self, state: SubmissionState) {
        debug!(?state, "submission state");

        *self.state.lock() = state;
    }
}

fn with_store<R>(
    store: &Weak<Mutex<FormStore>>,
    update: impl FnOnce(&mut FormStore) -> R,
) -> Option<R> {
    let store = store.upgrade()?;
    let result = update(&mut store.lock());

    Some(result)
}
