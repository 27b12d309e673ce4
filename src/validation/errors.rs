//! Error Tree
//!
//! A sparse report shaped like the draft: an index appears only when the
//! variant or stock entry at that same index has at least one violation.

use std::collections::BTreeMap;

use serde::Serialize;

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "serde skip predicates receive the field by reference"
)]
fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Violations of the draft's top-level fields and its variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftErrors {
    /// Name is blank
    #[serde(skip_serializing_if = "is_false")]
    pub name: bool,

    /// Wholesale price is negative
    #[serde(skip_serializing_if = "is_false")]
    pub wholesale_price: bool,

    /// Selling price is negative
    #[serde(skip_serializing_if = "is_false")]
    pub selling_price: bool,

    /// Violations keyed by variant index
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<usize, VariantErrors>,
}

/// Violations of one variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariantErrors {
    /// Colour is blank
    #[serde(skip_serializing_if = "is_false")]
    pub color: bool,

    /// Code is blank or already taken
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,

    /// Violations keyed by stock entry index
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub stock: BTreeMap<usize, StockErrors>,
}

/// Violations of one stock entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StockErrors {
    /// Size is blank
    #[serde(skip_serializing_if = "is_false")]
    pub size: bool,

    /// Quantity is negative
    #[serde(skip_serializing_if = "is_false")]
    pub quantity: bool,
}

impl DraftErrors {
    /// `true` when nothing was flagged.
    pub fn is_empty(&self) -> bool {
        !self.name && !self.wholesale_price && !self.selling_price && self.variants.is_empty()
    }

    /// Alias of [`DraftErrors::is_empty`] that reads better at call sites.
    pub fn is_valid(&self) -> bool {
        self.is_empty()
    }

    /// Errors for the variant at `index`, if any.
    pub fn variant(&self, index: usize) -> Option<&VariantErrors> {
        self.variants.get(&index)
    }

    /// Records `errors` for the variant at `index` unless it is empty.
    pub fn insert_variant(&mut self, index: usize, errors: VariantErrors) {
        if !errors.is_empty() {
            self.variants.insert(index, errors);
        }
    }

    /// Drops entries for variant indices `>= from`. Used after a removal
    /// shifts later variants onto new indices.
    pub fn discard_variants_from(&mut self, from: usize) {
        self.variants.retain(|&index, _| index < from);
    }

    /// Drops the stock entries of variant `variant` with indices `>= from`,
    /// and the variant's own entry if nothing remains.
    pub fn discard_stock_from(&mut self, variant: usize, from: usize) {
        let Some(errors) = self.variants.get_mut(&variant) else {
            return;
        };

        errors.stock.retain(|&index, _| index < from);

        if errors.is_empty() {
            self.variants.remove(&variant);
        }
    }

    /// Dotted paths of every flagged field, in draft order.
    ///
    /// ```
    /// use item_form::validation::{DraftErrors, VariantErrors};
    ///
    /// let mut errors = DraftErrors { name: true, ..DraftErrors::default() };
    /// errors.insert_variant(1, VariantErrors { code: true, ..VariantErrors::default() });
    ///
    /// assert_eq!(errors.paths(), vec!["name", "variants[1].code"]);
    /// ```
    pub fn paths(&self) -> Vec<String> {
        let mut paths = Vec::new();

        for (flagged, field) in [
            (self.name, "name"),
            (self.wholesale_price, "wholesalePrice"),
            (self.selling_price, "sellingPrice"),
        ] {
            if flagged {
                paths.push(field.to_owned());
            }
        }

        for (index, variant) in &self.variants {
            let prefix = format!("variants[{index}]");

            if variant.color {
                paths.push(format!("{prefix}.color"));
            }

            if variant.code {
                paths.push(format!("{prefix}.code"));
            }

            for (entry, stock) in &variant.stock {
                if stock.size {
                    paths.push(format!("{prefix}.stock[{entry}].size"));
                }

                if stock.quantity {
                    paths.push(format!("{prefix}.stock[{entry}].quantity"));
                }
            }
        }

        paths
    }
}

impl VariantErrors {
    /// `true` when neither the variant nor any of its stock entries was flagged.
    pub fn is_empty(&self) -> bool {
        !self.color && !self.code && self.stock.is_empty()
    }

    /// Errors for the stock entry at `index`, if any.
    pub fn entry(&self, index: usize) -> Option<&StockErrors> {
        self.stock.get(&index)
    }

    /// Records `errors` for the stock entry at `index` unless it is empty.
    pub fn insert_entry(&mut self, index: usize, errors: StockErrors) {
        if !errors.is_empty() {
            self.stock.insert(index, errors);
        }
    }
}

impl StockErrors {
    /// `true` when nothing was flagged.
    pub fn is_empty(&self) -> bool {
        !self.size && !self.quantity
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn sample() -> DraftErrors {
        let mut errors = DraftErrors::default();

        for index in 0..3 {
            let mut variant = VariantErrors {
                code: true,
                ..VariantErrors::default()
            };

            variant.insert_entry(
                index,
                StockErrors {
                    size: true,
                    quantity: false,
                },
            );

            errors.insert_variant(index, variant);
        }

        errors
    }

    #[test]
    fn empty_entries_are_not_recorded() {
        let mut errors = DraftErrors::default();

        errors.insert_variant(0, VariantErrors::default());

        let mut variant = VariantErrors::default();
        variant.insert_entry(0, StockErrors::default());
        errors.insert_variant(1, variant);

        assert!(errors.is_valid());
        assert!(errors.variants.is_empty());
    }

    #[test]
    fn discard_variants_from_keeps_lower_indices() {
        let mut errors = sample();

        errors.discard_variants_from(1);

        assert_eq!(errors.variants.keys().copied().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn discard_stock_from_prunes_empty_variant() {
        let mut errors = DraftErrors::default();

        let mut variant = VariantErrors::default();
        variant.insert_entry(
            0,
            StockErrors {
                size: true,
                quantity: true,
            },
        );
        errors.insert_variant(0, variant);

        errors.discard_stock_from(0, 0);

        assert!(errors.is_valid());
    }

    #[test]
    fn discard_stock_from_keeps_variant_level_flags() {
        let mut errors = sample();

        errors.discard_stock_from(2, 0);

        assert_eq!(
            errors.variant(2),
            Some(&VariantErrors {
                code: true,
                ..VariantErrors::default()
            })
        );
    }

    #[test]
    fn serializes_sparsely() -> TestResult {
        let mut errors = DraftErrors {
            selling_price: true,
            ..DraftErrors::default()
        };

        let mut variant = VariantErrors::default();
        variant.insert_entry(
            2,
            StockErrors {
                size: false,
                quantity: true,
            },
        );
        errors.insert_variant(1, variant);

        let yaml = serde_norway::to_string(&errors)?;

        assert_eq!(
            yaml,
            "sellingPrice: true\nvariants:\n  1:\n    stock:\n      2:\n        quantity: true\n"
        );

        Ok(())
    }

    #[test]
    fn paths_follow_draft_order() {
        let errors = sample();

        assert_eq!(
            errors.paths(),
            vec![
                "variants[0].code",
                "variants[0].stock[0].size",
                "variants[1].code",
                "variants[1].stock[1].size",
                "variants[2].code",
                "variants[2].stock[2].size",
            ]
        );
    }
}
