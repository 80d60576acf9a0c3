pub mod chart_service;
pub mod trend_service;
