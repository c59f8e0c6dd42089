pub mod product_tax_service;
pub mod tax_calculator;

pub use product_tax_service::ProductTaxService;
pub use tax_calculator::TaxCalculator;
