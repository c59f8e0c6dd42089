use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::tax_rate::TaxRate;

/// A product category and the two tax rates it carries.
///
/// Categories with a zero-amount basic rate cover exempt goods (books, food,
/// medical products). Both references arrive resolved from the record store;
/// referential integrity is the store's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: Uuid,
    pub name: String,
    pub basic_tax_rate: TaxRate,
    /// Applied only when a product in this category is imported
    pub additional_tax_rate: TaxRate,
}

impl ProductCategory {
    pub fn new(
        name: impl Into<String>,
        basic_tax_rate: TaxRate,
        additional_tax_rate: TaxRate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            basic_tax_rate,
            additional_tax_rate,
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
