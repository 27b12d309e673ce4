//! Items
//!
//! The editable draft of an inventory item: top-level scalars plus an ordered
//! list of colour variants, each holding its own ordered stock entries.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub mod category;
pub mod edits;
pub mod errors;

pub use category::ProductCategory;
pub use edits::{DraftField, StockField, parse_quantity};
pub use errors::DraftError;

/// Item draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ItemDraft {
    /// Display name
    pub name: String,

    /// Price paid to the supplier
    pub wholesale_price: Decimal,

    /// Price charged to the customer
    pub selling_price: Decimal,

    /// Storage key of the uploaded photo, empty until an image is uploaded
    pub photo_key: String,

    /// Product category
    pub category: ProductCategory,

    /// Colour variants in display order
    pub variants: Vec<Variant>,
}

impl ItemDraft {
    /// Returns the blank draft a new item form starts from: one blank variant
    /// holding one blank stock entry.
    pub fn blank() -> Self {
        Self {
            name: String::new(),
            wholesale_price: Decimal::ZERO,
            selling_price: Decimal::ZERO,
            photo_key: String::new(),
            category: ProductCategory::default(),
            variants: vec![Variant::blank()],
        }
    }

    /// Returns the draft with a blank variant seeded if it has none.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.variants.is_empty() {
            self.variants.push(Variant::blank());
        }

        self
    }
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self::blank()
    }
}

/// A colour grouping of an item with its own code and stock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variant {
    /// Colour name
    pub color: String,

    /// Variant code, unique across every item in the catalogue
    pub code: String,

    /// Stock per size, in display order
    pub stock: Vec<StockEntry>,
}

impl Variant {
    /// Blank variant with one blank stock entry.
    pub fn blank() -> Self {
        Self {
            color: String::new(),
            code: String::new(),
            stock: vec![StockEntry::default()],
        }
    }
}

/// Quantity on hand for one size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockEntry {
    /// Size label
    pub size: String,

    /// Quantity on hand. Negative values are representable so that
    /// validation can flag them.
    pub quantity: i64,
}

/// An image picked by the user, held until submission uploads it.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    /// Original file name
    pub file_name: String,

    /// MIME type reported by the picker
    pub content_type: String,

    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Creates a new image file.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

impl Debug for ImageFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn blank_draft_has_one_blank_variant_with_one_blank_entry() {
        let draft = ItemDraft::blank();

        assert_eq!(draft.variants, vec![Variant::blank()]);
        assert_eq!(draft.variants.first().map(|v| v.stock.len()), Some(1));
        assert_eq!(draft.category, ProductCategory::Other);
        assert!(draft.photo_key.is_empty());
    }

    #[test]
    fn normalized_reseeds_empty_variants() {
        let draft = ItemDraft {
            variants: Vec::new(),
            ..ItemDraft::blank()
        }
        .normalized();

        assert_eq!(draft.variants.len(), 1);
    }

    #[test]
    fn draft_deserializes_with_missing_fields_defaulted() -> TestResult {
        let draft: ItemDraft = serde_norway::from_str(
            "name: Shoe\nsellingPrice: 49.90\nvariants:\n  - color: Red\n    code: SHOE-RED\n",
        )?;

        assert_eq!(draft.name, "Shoe");
        assert_eq!(draft.selling_price, Decimal::new(4990, 2));
        assert_eq!(draft.wholesale_price, Decimal::ZERO);
        assert_eq!(draft.variants.len(), 1);
        assert!(draft.variants.iter().all(|v| v.stock.is_empty()));

        Ok(())
    }

    #[test]
    fn image_debug_omits_contents() {
        let image = ImageFile::new("shoe.png", "image/png", vec![1, 2, 3]);

        assert_eq!(
            format!("{image:?}"),
            r#"ImageFile { file_name: "shoe.png", content_type: "image/png", len: 3 }"#
        );
    }
}
