use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::carts::models::Receipt;
use crate::modules::carts::repositories::CartRepository;
use crate::modules::settings::repositories::SettingsRepository;
use crate::modules::settings::services::TaxSettings;

use super::receipt_builder::ReceiptBuilder;

/// Service producing receipts for stored carts
pub struct ReceiptService {
    cart_repo: Arc<dyn CartRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    builder: ReceiptBuilder,
}

impl ReceiptService {
    pub fn new(
        cart_repo: Arc<dyn CartRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            cart_repo,
            settings_repo,
            builder: ReceiptBuilder::new(),
        }
    }

    /// Load a cart snapshot, resolve the tax settings once and build its
    /// receipt. Invocations share no mutable state and may run concurrently;
    /// each one reflects the settings visible at that call.
    pub async fn receipt_for_cart(&self, cart_id: Uuid) -> Result<Receipt, AppError> {
        let cart = self
            .cart_repo
            .find_by_id(cart_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Cart {}", cart_id)))?;

        let settings = TaxSettings::resolve(self.settings_repo.as_ref()).await?;
        let receipt = self.builder.receipt(&cart, &settings)?;

        tracing::info!(
            cart = %cart_id,
            items = receipt.items.len(),
            total_price = %receipt.total_price,
            total_tax = %receipt.total_tax_amount,
            "built receipt"
        );

        Ok(receipt)
    }
}
