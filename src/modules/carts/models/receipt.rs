use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Currency;
use crate::modules::catalog::models::Product;

/// One receipt line: a product's exportable attributes plus the tax owed on
/// it. Each exported record type declares its own fixed field list rather
/// than reflecting over the entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub base_price: Decimal,
    pub display_price: Option<Decimal>,
    pub currency: Currency,
    /// Category name
    pub category: String,
    pub base_tax_amount: Decimal,
    pub additional_tax_amount: Decimal,
}

impl ReceiptLine {
    /// Map a product and its computed taxes into a line record
    pub fn from_product(
        product: &Product,
        currency: Currency,
        base_tax_amount: Decimal,
        additional_tax_amount: Decimal,
    ) -> Self {
        Self {
            code: product.code.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            base_price: product.base_price,
            display_price: product.display_price,
            currency,
            category: product.category.name.clone(),
            base_tax_amount,
            additional_tax_amount,
        }
    }
}

/// The aggregated receipt view over a cart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub total_price: Decimal,
    pub total_tax_amount: Decimal,
    pub items: Vec<ReceiptLine>,
}
