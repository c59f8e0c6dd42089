pub mod currency;
pub mod error;
pub mod rounding;

pub use currency::Currency;
pub use error::{AppError, Result};
pub use rounding::{round_up_nearest, TAX_ROUNDING_STEP};
