//! Item form prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::FormConfig,
    form::{FormStore, ItemForm},
    items::{
        DraftError, DraftField, ImageFile, ItemDraft, ProductCategory, StockEntry, StockField,
        Variant,
    },
    services::{
        CodeAvailability, CodeStatus, FormServices, ImageUploader, ItemSubmitter, Navigator,
        Notifier, ReservedCodes, ServiceError, Severity,
    },
    submission::{SubmissionError, SubmissionState, SubmitOutcome},
    validation::{DraftErrors, StockErrors, VariantErrors, validate},
};
