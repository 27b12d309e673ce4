//! Validation
//!
//! Walks a draft depth-first, left to right, and reports violations as a
//! [`DraftErrors`] tree. Variant codes are checked remotely one at a time in
//! variant order; a code equal to the baseline draft's code at the same index
//! is not re-checked.

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    items::{ItemDraft, StockEntry, Variant},
    services::{CodeAvailability, ServiceError},
};

pub mod errors;

pub use errors::{DraftErrors, StockErrors, VariantErrors};

/// Validates `draft`.
///
/// `baseline` is the item an edit flow started from; its codes are treated
/// as already accepted for the matching variant index.
///
/// # Errors
///
/// Returns the code checker's error unchanged when a remote check fails.
/// Content problems are never errors; they are reported in the returned tree.
pub async fn validate(
    draft: &ItemDraft,
    baseline: Option<&ItemDraft>,
    codes: &dyn CodeAvailability,
) -> Result<DraftErrors, ServiceError> {
    let mut errors = DraftErrors {
        name: is_blank(&draft.name),
        wholesale_price: draft.wholesale_price < Decimal::ZERO,
        selling_price: draft.selling_price < Decimal::ZERO,
        ..DraftErrors::default()
    };

    for (index, variant) in draft.variants.iter().enumerate() {
        let previous = baseline.and_then(|item| item.variants.get(index));

        let variant_errors = validate_variant(variant, previous, codes).await?;

        errors.insert_variant(index, variant_errors);
    }

    debug!(valid = errors.is_valid(), "validated draft");

    Ok(errors)
}

async fn validate_variant(
    variant: &Variant,
    previous: Option<&Variant>,
    codes: &dyn CodeAvailability,
) -> Result<VariantErrors, ServiceError> {
    let mut errors = VariantErrors {
        color: is_blank(&variant.color),
        code: !code_is_acceptable(variant, previous, codes).await?,
        ..VariantErrors::default()
    };

    for (index, entry) in variant.stock.iter().enumerate() {
        errors.insert_entry(index, validate_entry(entry));
    }

    Ok(errors)
}

async fn code_is_acceptable(
    variant: &Variant,
    previous: Option<&Variant>,
    codes: &dyn CodeAvailability,
) -> Result<bool, ServiceError> {
    if is_blank(&variant.code) {
        return Ok(false);
    }

    if previous.is_some_and(|previous| previous.code == variant.code) {
        debug!(code = %variant.code, "code unchanged from baseline, skipping check");

        return Ok(true);
    }

    let status = codes.check_code(&variant.code).await?;

    debug!(code = %variant.code, available = status.available, "checked code");

    Ok(status.available)
}

fn validate_entry(entry: &StockEntry) -> StockErrors {
    StockErrors {
        size: is_blank(&entry.size),
        quantity: entry.quantity < 0,
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
