use std::sync::Arc;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::catalog::repositories::CatalogRepository;
use crate::modules::settings::repositories::SettingsRepository;
use crate::modules::settings::services::TaxSettings;

use super::tax_calculator::TaxCalculator;

/// Service resolving applicable taxes for stored products
pub struct ProductTaxService {
    catalog_repo: Arc<dyn CatalogRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    calculator: TaxCalculator,
}

impl ProductTaxService {
    pub fn new(
        catalog_repo: Arc<dyn CatalogRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            catalog_repo,
            settings_repo,
            calculator: TaxCalculator::new(),
        }
    }

    /// Compute the `(basic, additional)` tax amounts for a stored product.
    ///
    /// Settings are resolved once per call, so the result depends only on
    /// the values visible to the store at that moment.
    pub async fn taxes_for_product(
        &self,
        product_id: Uuid,
        quantity: i32,
    ) -> Result<(Decimal, Decimal), AppError> {
        let product = self
            .catalog_repo
            .find_product(product_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product {}", product_id)))?;

        let settings = TaxSettings::resolve(self.settings_repo.as_ref()).await?;
        let (base_tax_amount, additional_tax_amount) =
            self.calculator.applicable_taxes(&product, quantity, &settings)?;

        tracing::debug!(
            product = %product.code,
            quantity,
            base_tax = %base_tax_amount,
            additional_tax = %additional_tax_amount,
            "computed applicable taxes"
        );

        Ok((base_tax_amount, additional_tax_amount))
    }
}
