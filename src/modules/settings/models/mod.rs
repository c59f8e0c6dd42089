pub mod general_setting;

pub use general_setting::{
    GeneralSetting, SettingCategory, SETTING_BASE_PRICE_INCLUDES_TAXES, SETTING_CURRENCY,
    SETTING_TAX_RATES_CALCULATION_MODE,
};
