//! Product Categories

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Product category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    /// Garments
    Clothing,

    /// Shoes and boots
    Footwear,

    /// Bags, belts, jewellery
    Accessories,

    /// Anything not covered above
    #[default]
    Other,
}

impl Display for ProductCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Clothing => "clothing",
            Self::Footwear => "footwear",
            Self::Accessories => "accessories",
            Self::Other => "other",
        };

        f.write_str(label)
    }
}
