//! Form Store
//!
//! Owns the draft, the pending image and the last error tree. Every mutation
//! builds the next draft from the current one and swaps it in whole, so a
//! reader never sees a half-applied edit.
//!
//! Removals and resets bump a structural revision. An error tree computed
//! from an older revision no longer lines up with the draft's indices and is
//! not stored.

use tracing::{debug, warn};

use crate::{
    items::{DraftError, DraftField, ImageFile, ItemDraft, StockField},
    validation::DraftErrors,
};

/// Draft state of one item form.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    draft: ItemDraft,
    baseline: Option<ItemDraft>,
    image: Option<ImageFile>,
    errors: DraftErrors,
    revision: u64,
}

impl FormStore {
    /// Store holding the blank draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded from an existing item, which also becomes the baseline
    /// for code re-validation.
    pub fn seeded(existing: ItemDraft) -> Self {
        let draft = existing.normalized();

        Self {
            baseline: Some(draft.clone()),
            draft,
            ..Self::default()
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    /// Item the edit started from, if any.
    pub fn baseline(&self) -> Option<&ItemDraft> {
        self.baseline.as_ref()
    }

    /// Image waiting to be uploaded on submit.
    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    /// Errors from the last validation, minus entries invalidated by removals.
    pub fn errors(&self) -> &DraftErrors {
        &self.errors
    }

    /// Structural revision of the draft, bumped whenever indices shift.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces a top-level scalar.
    pub fn set_field(&mut self, field: DraftField) {
        debug!(?field, "set field");

        self.draft = self.draft.with_field(field);
    }

    /// Sets the colour of a variant.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the draft untouched, when `variant` is out of range.
    pub fn set_variant_color(&mut self, variant: usize, color: &str) -> Result<(), DraftError> {
        self.apply(|draft| draft.with_variant_color(variant, color))
    }

    /// Sets the code of a variant.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the draft untouched, when `variant` is out of range.
    pub fn set_variant_code(&mut self, variant: usize, code: &str) -> Result<(), DraftError> {
        self.apply(|draft| draft.with_variant_code(variant, code))
    }

    /// Sets the size or quantity of a stock entry from raw input.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the draft untouched, when either index is out of range.
    pub fn set_stock_field(
        &mut self,
        variant: usize,
        entry: usize,
        field: StockField,
        value: &str,
    ) -> Result<(), DraftError> {
        self.apply(|draft| draft.with_stock_field(variant, entry, field, value))
    }

    /// Appends a blank variant.
    pub fn add_variant(&mut self) {
        self.draft = self.draft.with_added_variant();

        debug!(variants = self.draft.variants.len(), "added variant");
    }

    /// Appends a blank stock entry to a variant.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the draft untouched, when `variant` is out of range.
    pub fn add_stock_entry(&mut self, variant: usize) -> Result<(), DraftError> {
        self.apply(|draft| draft.with_added_stock_entry(variant))
    }

    /// Removes a variant, clearing error entries that no longer line up.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the draft untouched, when `variant` is out of range.
    pub fn remove_variant(&mut self, variant: usize) -> Result<(), DraftError> {
        self.apply(|draft| draft.without_variant(variant))?;
        self.errors.discard_variants_from(variant);
        self.revision += 1;

        Ok(())
    }

    /// Removes a stock entry, clearing error entries that no longer line up.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the draft untouched, when either index is out of range.
    pub fn remove_stock_entry(&mut self, variant: usize, entry: usize) -> Result<(), DraftError> {
        self.apply(|draft| draft.without_stock_entry(variant, entry))?;
        self.errors.discard_stock_from(variant, entry);
        self.revision += 1;

        Ok(())
    }

    /// Stores or clears the pending image. Nothing is uploaded here.
    pub fn set_image(&mut self, image: Option<ImageFile>) {
        debug!(?image, "set image");

        self.image = image;
    }

    /// Replaces the error tree with a fresh validation result.
    pub fn set_errors(&mut self, errors: DraftErrors) {
        self.errors = errors;
    }

    /// Stores `errors` if they were computed at the current revision.
    ///
    /// Returns `false`, keeping the current tree, when the draft was
    /// restructured since `revision`.
    pub fn set_errors_from(&mut self, revision: u64, errors: DraftErrors) -> bool {
        if revision != self.revision {
            debug!(revision, current = self.revision, "discarding stale validation errors");

            return false;
        }

        self.errors = errors;

        true
    }

    /// Returns to a fresh blank form: no image, no errors and no baseline.
    pub fn reset(&mut self) {
        self.draft = ItemDraft::blank();
        self.baseline = None;
        self.image = None;
        self.errors = DraftErrors::default();
        self.revision += 1;
    }

    fn apply(
        &mut self,
        edit: impl FnOnce(&ItemDraft) -> Result<ItemDraft, DraftError>,
    ) -> Result<(), DraftError> {
        match edit(&self.draft) {
            Ok(next) => {
                self.draft = next;

                Ok(())
            }
            Err(error) => {
                warn!(%error, "rejected draft edit");

                Err(error)
            }
        }
    }
}
