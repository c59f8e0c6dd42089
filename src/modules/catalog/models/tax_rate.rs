use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat amount per unit
pub const FIXED: &str = "fixed";

/// Percentage of the price
pub const PERCENTUAL: &str = "percentual";

/// A named tax rate from the catalog.
///
/// Immutable reference data, maintained administratively. `mode` is carried
/// as stored text: the recognized values are [`FIXED`] and [`PERCENTUAL`],
/// and anything else surfaces as `InvalidTaxRateMode` when the rate is used
/// in a computation, so bad catalog data fails loudly at the point it
/// matters instead of being unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    /// Non-negative; conventionally one fractional digit
    pub amount: Decimal,
    pub mode: String,
}

impl TaxRate {
    /// A percentage-of-price rate (e.g. 10.0 for a 10% basic sales tax)
    pub fn percentual(code: impl Into<String>, name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            amount,
            mode: PERCENTUAL.to_string(),
        }
    }

    /// A flat amount-per-unit rate
    pub fn fixed(code: impl Into<String>, name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            amount,
            mode: FIXED.to_string(),
        }
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
