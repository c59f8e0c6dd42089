pub mod settings_resolver;

pub use settings_resolver::{CalculationMode, TaxSettings};
