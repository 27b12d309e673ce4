//! Draft edit errors.

use thiserror::Error;

/// Index-addressed edits that point outside the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    /// No variant at the given index.
    #[error("variant {index} out of range (draft has {len})")]
    VariantOutOfRange {
        /// Requested variant index
        index: usize,
        /// Number of variants in the draft
        len: usize,
    },

    /// No stock entry at the given index within the variant.
    #[error("stock entry {index} of variant {variant} out of range (variant has {len})")]
    StockEntryOutOfRange {
        /// Variant index
        variant: usize,
        /// Requested stock entry index
        index: usize,
        /// Number of stock entries in the variant
        len: usize,
    },
}
