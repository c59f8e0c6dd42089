use async_trait::async_trait;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::catalog::models::Product;

/// Read seam to the product catalog.
///
/// Implementations must return products with the category and both of its
/// tax rates resolved; a dangling reference is a store-level failure, not
/// something this crate guards against.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Find a product by ID
    async fn find_product(&self, id: Uuid) -> Result<Option<Product>>;
}
