pub mod carts;
pub mod catalog;
pub mod settings;
pub mod taxes;
