use serde::{Deserialize, Serialize};

/// Setting code: whether product base prices already include taxes
pub const SETTING_BASE_PRICE_INCLUDES_TAXES: &str = "base_price_includes_taxes";

/// Setting code: the store-wide currency
pub const SETTING_CURRENCY: &str = "currency";

/// Setting code: how a product's two tax rates compose (`sum` or `cascade`)
pub const SETTING_TAX_RATES_CALCULATION_MODE: &str = "tax_rates_calculation_mode";

/// Grouping of stored settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingCategory {
    Tax,
    Stock,
}

impl std::fmt::Display for SettingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingCategory::Tax => write!(f, "tax"),
            SettingCategory::Stock => write!(f, "stock"),
        }
    }
}

impl std::str::FromStr for SettingCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "tax" => Ok(SettingCategory::Tax),
            "stock" => Ok(SettingCategory::Stock),
            _ => Err(format!("Invalid setting category: {}", s)),
        }
    }
}

/// One stored setting row, as persisted by the collaborating record store.
/// Read-only from this crate's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSetting {
    pub setting_code: String,
    pub setting_value: String,
    pub category: SettingCategory,
}

impl GeneralSetting {
    pub fn new(
        setting_code: impl Into<String>,
        setting_value: impl Into<String>,
        category: SettingCategory,
    ) -> Self {
        Self {
            setting_code: setting_code.into(),
            setting_value: setting_value.into(),
            category,
        }
    }
}
