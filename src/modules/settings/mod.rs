pub mod models;
pub mod repositories;
pub mod services;

pub use models::{GeneralSetting, SettingCategory};
pub use repositories::SettingsRepository;
pub use services::{CalculationMode, TaxSettings};
