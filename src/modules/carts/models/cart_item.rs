use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::models::Product;

/// One cart line: a product and a quantity.
///
/// A meaningful tax computation needs `quantity >= 1`; enforcing that is the
/// caller's job before the cart reaches this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product: Product,
    pub quantity: i32,
}

impl CartItem {
    pub fn new(cart_id: Uuid, product: Product, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            cart_id,
            product,
            quantity,
        }
    }
}
