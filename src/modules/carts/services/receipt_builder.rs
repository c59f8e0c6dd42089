use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::modules::carts::models::{Cart, Receipt, ReceiptLine};
use crate::modules::settings::services::TaxSettings;
use crate::modules::taxes::services::TaxCalculator;

/// Builds receipts by aggregating per-line tax amounts over a cart
pub struct ReceiptBuilder {
    calculator: TaxCalculator,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self {
            calculator: TaxCalculator::new(),
        }
    }

    /// Walk the cart's items in stored order and aggregate line records plus
    /// `(total_price, total_tax_amount)`.
    ///
    /// Totals are rounded to 2 decimals with standard rounding, independent
    /// of the 5-cent ceiling applied to each line's tax amounts. The base
    /// price enters the running total once per line while tax is computed
    /// per quantity, matching the pricing rules as shipped.
    pub fn build(
        &self,
        cart: &Cart,
        settings: &TaxSettings,
    ) -> Result<(Vec<ReceiptLine>, Decimal, Decimal), AppError> {
        let mut lines = Vec::with_capacity(cart.items.len());
        let mut total_price = Decimal::ZERO;
        let mut total_tax_amount = Decimal::ZERO;

        for item in &cart.items {
            let product = &item.product;
            let (base_tax_amount, additional_tax_amount) =
                self.calculator
                    .applicable_taxes(product, item.quantity, settings)?;

            lines.push(ReceiptLine::from_product(
                product,
                settings.currency,
                base_tax_amount,
                additional_tax_amount,
            ));

            total_price += product.base_price + base_tax_amount + additional_tax_amount;
            total_tax_amount += base_tax_amount + additional_tax_amount;
        }

        Ok((lines, total_price.round_dp(2), total_tax_amount.round_dp(2)))
    }

    /// Wrap the aggregation into the serializable receipt view
    pub fn receipt(&self, cart: &Cart, settings: &TaxSettings) -> Result<Receipt, AppError> {
        let (items, total_price, total_tax_amount) = self.build(cart, settings)?;

        Ok(Receipt {
            total_price,
            total_tax_amount,
            items,
        })
    }
}

impl Default for ReceiptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
