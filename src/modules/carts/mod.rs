pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Cart, CartItem, Receipt, ReceiptLine};
pub use repositories::CartRepository;
pub use services::{ReceiptBuilder, ReceiptService};
