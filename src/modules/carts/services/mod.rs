pub mod receipt_builder;
pub mod receipt_service;

pub use receipt_builder::ReceiptBuilder;
pub use receipt_service::ReceiptService;
