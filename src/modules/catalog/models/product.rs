use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

use super::product_category::ProductCategory;

/// A sellable product.
///
/// Whether `base_price` includes tax is governed by the store-wide tax
/// settings, not by the product itself. A product is considered imported by
/// the store before selling it; duties tied to international shipping after
/// the sale are out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// Two fractional digits, never negative
    pub base_price: Decimal,
    /// Price shown to customers, typically base price with taxes applied
    pub display_price: Option<Decimal>,
    pub is_imported: bool,
    pub category: ProductCategory,
}

impl Product {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        base_price: Decimal,
        category: ProductCategory,
    ) -> Result<Self> {
        if base_price < Decimal::ZERO {
            return Err(AppError::validation("Product base price cannot be negative"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            description: None,
            base_price,
            display_price: None,
            is_imported: false,
            category,
        })
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} - {}", self.code, self.name, self.base_price)
    }
}
