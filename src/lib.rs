//! TaxCart Sales-Tax Engine
//!
//! This library computes sales tax for the products in a shopping cart and
//! produces receipts summarizing per-item and total tax. It is pure domain
//! logic: persistence, HTTP views and the admin screens are external
//! collaborators wired in through the repository traits under each module.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::carts;
pub use modules::catalog;
pub use modules::settings;
pub use modules::taxes;
