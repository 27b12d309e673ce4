//! Draft Edits
//!
//! Every edit takes the current draft by reference and returns a new one.
//! Only the levels on the path to the touched value are rebuilt; the caller
//! swaps the result in as a single replacement.

use rust_decimal::Decimal;

use crate::items::{DraftError, ItemDraft, ProductCategory, StockEntry, Variant};

/// A top-level scalar of the draft together with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftField {
    /// Item name
    Name(String),

    /// Wholesale price
    WholesalePrice(Decimal),

    /// Selling price
    SellingPrice(Decimal),

    /// Uploaded photo storage key
    PhotoKey(String),

    /// Category
    Category(ProductCategory),
}

/// Editable field of a stock entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockField {
    /// Size label, stored as typed
    Size,

    /// Quantity, parsed with [`parse_quantity`]
    Quantity,
}

/// Parses raw quantity input the way a lenient number field would.
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit, and anything without a leading integer (or too large for
/// `i64`) yields `0`.
pub fn parse_quantity(input: &str) -> i64 {
    let trimmed = input.trim_start();

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .try_fold(0_i64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
        })
        .unwrap_or(0);

    if negative { -magnitude } else { magnitude }
}

impl ItemDraft {
    /// Replaces one top-level scalar.
    #[must_use]
    pub fn with_field(&self, field: DraftField) -> Self {
        let mut next = self.clone();

        match field {
            DraftField::Name(name) => next.name = name,
            DraftField::WholesalePrice(price) => next.wholesale_price = price,
            DraftField::SellingPrice(price) => next.selling_price = price,
            DraftField::PhotoKey(key) => next.photo_key = key,
            DraftField::Category(category) => next.category = category,
        }

        next
    }

    /// Replaces the colour of the variant at `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::VariantOutOfRange`] when no such variant exists.
    pub fn with_variant_color(&self, variant: usize, color: &str) -> Result<Self, DraftError> {
        self.map_variant(variant, |current| Variant {
            color: color.to_owned(),
            ..current.clone()
        })
    }

    /// Replaces the code of the variant at `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::VariantOutOfRange`] when no such variant exists.
    pub fn with_variant_code(&self, variant: usize, code: &str) -> Result<Self, DraftError> {
        self.map_variant(variant, |current| Variant {
            code: code.to_owned(),
            ..current.clone()
        })
    }

    /// Sets the size or quantity of one stock entry from raw text input.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error when either index does not exist.
    pub fn with_stock_field(
        &self,
        variant: usize,
        entry: usize,
        field: StockField,
        value: &str,
    ) -> Result<Self, DraftError> {
        self.try_map_variant(variant, |current| {
            current.map_entry(variant, entry, |stock| match field {
                StockField::Size => StockEntry {
                    size: value.to_owned(),
                    ..stock.clone()
                },
                StockField::Quantity => StockEntry {
                    quantity: parse_quantity(value),
                    ..stock.clone()
                },
            })
        })
    }

    /// Appends a blank variant.
    #[must_use]
    pub fn with_added_variant(&self) -> Self {
        let mut next = self.clone();
        next.variants.push(Variant::blank());
        next
    }

    /// Appends a blank stock entry to the variant at `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::VariantOutOfRange`] when no such variant exists.
    pub fn with_added_stock_entry(&self, variant: usize) -> Result<Self, DraftError> {
        self.map_variant(variant, |current| {
            let mut next = current.clone();
            next.stock.push(StockEntry::default());
            next
        })
    }

    /// Removes the variant at `variant`; later variants shift down by one.
    ///
    /// Removing the only variant leaves a single blank variant in its place.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::VariantOutOfRange`] when no such variant exists.
    pub fn without_variant(&self, variant: usize) -> Result<Self, DraftError> {
        self.check_variant(variant)?;

        let mut next = self.clone();
        next.variants.remove(variant);

        Ok(next.normalized())
    }

    /// Removes one stock entry; later entries of that variant shift down by one.
    ///
    /// # Errors
    ///
    /// Returns an out-of-range error when either index does not exist.
    pub fn without_stock_entry(&self, variant: usize, entry: usize) -> Result<Self, DraftError> {
        self.try_map_variant(variant, |current| {
            current.check_entry(variant, entry)?;

            let mut next = current.clone();
            next.stock.remove(entry);

            Ok(next)
        })
    }

    fn check_variant(&self, variant: usize) -> Result<&Variant, DraftError> {
        self.variants
            .get(variant)
            .ok_or(DraftError::VariantOutOfRange {
                index: variant,
                len: self.variants.len(),
            })
    }

    fn map_variant(
        &self,
        variant: usize,
        edit: impl FnOnce(&Variant) -> Variant,
    ) -> Result<Self, DraftError> {
        self.try_map_variant(variant, |current| Ok(edit(current)))
    }

    fn try_map_variant(
        &self,
        variant: usize,
        edit: impl FnOnce(&Variant) -> Result<Variant, DraftError>,
    ) -> Result<Self, DraftError> {
        let replacement = edit(self.check_variant(variant)?)?;

        let mut next = self.clone();

        if let Some(slot) = next.variants.get_mut(variant) {
            *slot = replacement;
        }

        Ok(next)
    }
}

impl Variant {
    fn check_entry(&self, variant: usize, entry: usize) -> Result<&StockEntry, DraftError> {
        self.stock
            .get(entry)
            .ok_or(DraftError::StockEntryOutOfRange {
                variant,
                index: entry,
                len: self.stock.len(),
            })
    }

    fn map_entry(
        &self,
        variant: usize,
        entry: usize,
        edit: impl FnOnce(&StockEntry) -> StockEntry,
    ) -> Result<Self, DraftError> {
        let replacement = edit(self.check_entry(variant, entry)?);

        let mut next = self.clone();

        if let Some(slot) = next.stock.get_mut(entry) {
            *slot = replacement;
        }

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn two_variant_draft() -> TestResult<ItemDraft> {
        let draft = ItemDraft::blank()
            .with_variant_color(0, "Red")?
            .with_variant_code(0, "SHOE-RED")?
            .with_added_variant()
            .with_variant_color(1, "Blue")?
            .with_variant_code(1, "SHOE-BLUE")?
            .with_added_stock_entry(1)?
            .with_stock_field(1, 1, StockField::Size, "43")?;

        Ok(draft)
    }

    #[test]
    fn parse_quantity_takes_leading_integer() {
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity("  12abc"), 12);
        assert_eq!(parse_quantity("3.9"), 3);
        assert_eq!(parse_quantity("+7"), 7);
        assert_eq!(parse_quantity("-4"), -4);
    }

    #[test]
    fn parse_quantity_coerces_garbage_to_zero() {
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("-"), 0);
        assert_eq!(parse_quantity("99999999999999999999999"), 0);
    }

    #[test]
    fn with_field_replaces_only_that_scalar() {
        let draft = ItemDraft::blank();

        let named = draft.with_field(DraftField::Name("Shoe".to_owned()));
        let priced = named.with_field(DraftField::SellingPrice(Decimal::new(4990, 2)));

        assert_eq!(priced.name, "Shoe");
        assert_eq!(priced.selling_price, Decimal::new(4990, 2));
        assert_eq!(priced.variants, draft.variants);
        assert_eq!(draft.name, "", "original draft must be untouched");
    }

    #[test]
    fn quantity_text_is_coerced() -> TestResult {
        let draft = ItemDraft::blank()
            .with_stock_field(0, 0, StockField::Quantity, "5")?
            .with_stock_field(0, 0, StockField::Quantity, "abc")?;

        let quantity = draft
            .variants
            .first()
            .and_then(|v| v.stock.first())
            .map(|s| s.quantity);

        assert_eq!(quantity, Some(0));

        Ok(())
    }

    #[test]
    fn add_then_remove_last_variant_restores_sequence() -> TestResult {
        let draft = two_variant_draft()?;

        let grown = draft.with_added_variant();
        let restored = grown.without_variant(grown.variants.len() - 1)?;

        assert_eq!(grown.variants.len(), 3);
        assert_eq!(restored.variants, draft.variants);

        Ok(())
    }

    #[test]
    fn removing_variant_shifts_later_variants_down() -> TestResult {
        let draft = two_variant_draft()?.with_added_variant();

        let next = draft.without_variant(0)?;

        let codes: Vec<&str> = next.variants.iter().map(|v| v.code.as_str()).collect();

        assert_eq!(codes, vec!["SHOE-BLUE", ""]);

        Ok(())
    }

    #[test]
    fn removing_only_variant_reseeds_blank() -> TestResult {
        let draft = ItemDraft::blank().with_variant_code(0, "A1")?;

        let next = draft.without_variant(0)?;

        assert_eq!(next.variants, vec![Variant::blank()]);

        Ok(())
    }

    #[test]
    fn removing_stock_entry_shifts_and_may_empty() -> TestResult {
        let draft = two_variant_draft()?;

        let next = draft.without_stock_entry(1, 0)?;
        let sizes: Vec<&str> = next
            .variants
            .get(1)
            .map(|v| v.stock.iter().map(|s| s.size.as_str()).collect())
            .unwrap_or_default();

        assert_eq!(sizes, vec!["43"]);

        let emptied = next.without_stock_entry(1, 0)?;

        assert_eq!(emptied.variants.get(1).map(|v| v.stock.len()), Some(0));
        assert_eq!(emptied.variants.first(), draft.variants.first());

        Ok(())
    }

    #[test]
    fn out_of_range_variant_is_rejected() -> TestResult {
        let draft = two_variant_draft()?;

        assert_eq!(
            draft.with_variant_color(2, "Green"),
            Err(DraftError::VariantOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            draft.without_variant(5),
            Err(DraftError::VariantOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(
            draft.with_added_stock_entry(9),
            Err(DraftError::VariantOutOfRange { index: 9, len: 2 })
        );

        Ok(())
    }

    #[test]
    fn out_of_range_stock_entry_is_rejected() -> TestResult {
        let draft = two_variant_draft()?;

        assert_eq!(
            draft.with_stock_field(0, 1, StockField::Size, "40"),
            Err(DraftError::StockEntryOutOfRange {
                variant: 0,
                index: 1,
                len: 1
            })
        );
        assert_eq!(
            draft.without_stock_entry(1, 2),
            Err(DraftError::StockEntryOutOfRange {
                variant: 1,
                index: 2,
                len: 2
            })
        );

        Ok(())
    }
}
