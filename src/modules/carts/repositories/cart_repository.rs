use async_trait::async_trait;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::carts::models::Cart;

/// Read seam to the cart store.
///
/// Implementations return the cart with its items in insertion order and
/// every item's product resolved down to the tax rates. Cascade deletion of
/// items with their cart is a persistence concern, not visible here.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Find a cart snapshot by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Cart>>;
}
