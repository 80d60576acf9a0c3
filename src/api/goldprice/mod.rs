pub mod client;
pub mod models;

pub use client::GoldPriceClient;
pub use models::{ApiError, GoldPrice};
