pub mod services;

pub use services::{ProductTaxService, TaxCalculator};
