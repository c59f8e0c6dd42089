use serde::{Deserialize, Serialize};

use crate::core::{AppError, Currency, Result};
use crate::modules::settings::models::{
    SETTING_BASE_PRICE_INCLUDES_TAXES, SETTING_CURRENCY, SETTING_TAX_RATES_CALCULATION_MODE,
};
use crate::modules::settings::repositories::SettingsRepository;

/// How a product's two tax rates compose for imported goods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Additional tax computed on the untaxed base price
    Sum,
    /// Additional tax computed on the base price plus the basic tax already
    /// owed, modeling duty-on-duty regimes
    Cascade,
}

impl Default for CalculationMode {
    fn default() -> Self {
        CalculationMode::Sum
    }
}

impl std::fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationMode::Sum => write!(f, "sum"),
            CalculationMode::Cascade => write!(f, "cascade"),
        }
    }
}

impl std::str::FromStr for CalculationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "sum" => Ok(CalculationMode::Sum),
            "cascade" => Ok(CalculationMode::Cascade),
            _ => Err(format!("Invalid tax rates calculation mode: {}", s)),
        }
    }
}

/// Typed view over the stored tax settings.
///
/// Each recognized code carries a compile-time default, so an unset key can
/// never fall through to an unusable value. Resolution happens once per
/// computation and reflects whatever the store returns at that call; this
/// crate does no memoization of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSettings {
    /// When true, product base prices already contain tax
    pub base_price_includes_taxes: bool,
    pub currency: Currency,
    pub calculation_mode: CalculationMode,
}

impl Default for TaxSettings {
    fn default() -> Self {
        Self {
            base_price_includes_taxes: false,
            currency: Currency::USD,
            calculation_mode: CalculationMode::Sum,
        }
    }
}

impl TaxSettings {
    /// Resolve the three recognized tax settings from the store, falling
    /// back to the defaults for absent keys. A stored value that fails to
    /// parse is a configuration error, not a silent fallback.
    pub async fn resolve(repo: &dyn SettingsRepository) -> Result<TaxSettings> {
        let mut settings = TaxSettings::default();

        if let Some(raw) = repo.find_value(SETTING_BASE_PRICE_INCLUDES_TAXES).await? {
            settings.base_price_includes_taxes = parse_bool(&raw)?;
        }
        if let Some(raw) = repo.find_value(SETTING_CURRENCY).await? {
            settings.currency = raw.parse().map_err(AppError::Configuration)?;
        }
        if let Some(raw) = repo.find_value(SETTING_TAX_RATES_CALCULATION_MODE).await? {
            settings.calculation_mode = raw.parse().map_err(AppError::Configuration)?;
        }

        tracing::debug!(
            base_price_includes_taxes = settings.base_price_includes_taxes,
            currency = %settings.currency,
            calculation_mode = %settings.calculation_mode,
            "resolved tax settings"
        );

        Ok(settings)
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(AppError::configuration(format!(
            "Invalid boolean setting value: {}",
            other
        ))),
    }
}
