use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::core::rounding::{round_up_nearest, TAX_ROUNDING_STEP};
use crate::modules::catalog::models::{Product, TaxRate, FIXED, PERCENTUAL};
use crate::modules::settings::services::{CalculationMode, TaxSettings};

/// TaxCalculator handles per-product tax amounts and their composition.
///
/// Every entry point is a pure function over its inputs: same arguments,
/// same result, no shared state. Each computed amount is rounded up to the
/// nearest 5 cents before it is returned.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Tax owed on a tax-exclusive price.
    ///
    /// Percentual rates tax `price * quantity`; fixed rates charge their
    /// amount once per unit, independent of the price.
    pub fn tax_on_exclusive_price(
        &self,
        price: Decimal,
        quantity: i32,
        tax_rate: &TaxRate,
    ) -> Result<Decimal, AppError> {
        let raw = match tax_rate.mode.as_str() {
            PERCENTUAL => price * Decimal::from(quantity) * tax_rate.amount / Decimal::ONE_HUNDRED,
            FIXED => Decimal::from(quantity) * tax_rate.amount,
            other => return Err(AppError::invalid_tax_rate_mode(other)),
        };

        Ok(round_up_nearest(raw, TAX_ROUNDING_STEP))
    }

    /// Tax already contained in a tax-inclusive price.
    ///
    /// For percentual rates this back-computes the included portion; for
    /// fixed rates the rate amount itself is the tax, with no quantity
    /// applied. Not yet wired into [`Self::applicable_taxes`]: a store
    /// configured with tax-inclusive base prices currently reports zero tax
    /// instead of back-computing the included amount.
    pub fn tax_on_inclusive_price(
        &self,
        price: Decimal,
        tax_rate: &TaxRate,
    ) -> Result<Decimal, AppError> {
        let raw = match tax_rate.mode.as_str() {
            PERCENTUAL => price - price / (Decimal::ONE + tax_rate.amount / Decimal::ONE_HUNDRED),
            FIXED => tax_rate.amount,
            other => return Err(AppError::invalid_tax_rate_mode(other)),
        };

        Ok(round_up_nearest(raw, TAX_ROUNDING_STEP))
    }

    /// Applicable `(basic, additional)` tax amounts for a product.
    ///
    /// The additional rate applies only to imported products. In cascade
    /// mode its basis includes the basic tax already owed; in sum mode it is
    /// the bare base price. The basic rate never cascades on itself.
    pub fn applicable_taxes(
        &self,
        product: &Product,
        quantity: i32,
        settings: &TaxSettings,
    ) -> Result<(Decimal, Decimal), AppError> {
        if settings.base_price_includes_taxes {
            return Ok((Decimal::ZERO, Decimal::ZERO));
        }

        let base_tax_amount = self.tax_on_exclusive_price(
            product.base_price,
            quantity,
            &product.category.basic_tax_rate,
        )?;

        let mut additional_tax_amount = Decimal::ZERO;
        if product.is_imported {
            let price_basis = match settings.calculation_mode {
                CalculationMode::Sum => product.base_price,
                CalculationMode::Cascade => product.base_price + base_tax_amount,
            };
            additional_tax_amount = self.tax_on_exclusive_price(
                price_basis,
                quantity,
                &product.category.additional_tax_rate,
            )?;
        }

        Ok((base_tax_amount, additional_tax_amount))
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
