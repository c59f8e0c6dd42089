use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::cart_item::CartItem;

/// A shopping cart snapshot with its line items resolved.
///
/// Cart mutation (adding and removing items, expiry handling) lives in the
/// cart-management collaborator; this crate only reads a loaded snapshot.
/// Timestamps serialize as ISO-8601 strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: Uuid,
    pub session_id: String,
    pub customer_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    /// Insertion-ordered; iteration is stable for a given snapshot
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(session_id: impl Into<String>) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            session_id: session_id.into(),
            customer_id: None,
            created_at: now,
            updated_at: now,
            expires_at: None,
            items: Vec::new(),
        }
    }
}
