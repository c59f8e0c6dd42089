pub mod product;
pub mod product_category;
pub mod tax_rate;

pub use product::Product;
pub use product_category::ProductCategory;
pub use tax_rate::{TaxRate, FIXED, PERCENTUAL};
