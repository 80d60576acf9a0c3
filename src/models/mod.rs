//! Data models for goldtrend commands and services
//!
//! Chart geometry produced by the trend service and the immutable view
//! state shared by the fetch commands.

pub mod chart;
pub mod state;

// Re-export commonly used types for convenience
pub use chart::{ChartOptions, ChartPoint, TrendLayout};
pub use state::{FetchData, FetchOutcome, FetchSequence, ViewState};
