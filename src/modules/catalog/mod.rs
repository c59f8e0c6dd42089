pub mod models;
pub mod repositories;

pub use models::{Product, ProductCategory, TaxRate};
pub use repositories::CatalogRepository;
