use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One timestamped gold-price quote as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldPrice {
    pub id: i64,
    pub base_price: f64,
    pub official_price: f64,
    pub sale_price: f64,
    /// ISO-8601 timestamp string from the backend
    pub update_time: String,
}

impl GoldPrice {
    /// Parse `update_time`, accepting RFC 3339 or a bare timestamp
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.update_time) {
            return Some(dt.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(&self.update_time, "%Y-%m-%dT%H:%M:%S")
            .or_else(|_| NaiveDateTime::parse_from_str(&self.update_time, "%Y-%m-%d %H:%M:%S"))
            .ok()
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
    }
}

/// Comprehensive error type for API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_quote() {
        let raw = r#"{
            "id": 42,
            "basePrice": 512.5,
            "officialPrice": 515.0,
            "salePrice": 520.25,
            "updateTime": "2024-05-01T10:30:00"
        }"#;

        let quote: GoldPrice = serde_json::from_str(raw).unwrap();
        assert_eq!(quote.id, 42);
        assert_eq!(quote.base_price, 512.5);
        assert_eq!(quote.official_price, 515.0);
        assert_eq!(quote.sale_price, 520.25);
        assert_eq!(quote.update_time, "2024-05-01T10:30:00");
    }

    #[test]
    fn test_updated_at_accepts_common_formats() {
        let mut quote = GoldPrice {
            id: 1,
            base_price: 500.0,
            official_price: 500.0,
            sale_price: 500.0,
            update_time: "2024-05-01T10:30:00Z".to_string(),
        };
        assert!(quote.updated_at().is_some());

        quote.update_time = "2024-05-01T10:30:00".to_string();
        assert!(quote.updated_at().is_some());

        quote.update_time = "2024-05-01 10:30:00".to_string();
        assert!(quote.updated_at().is_some());

        quote.update_time = "not a timestamp".to_string();
        assert!(quote.updated_at().is_none());
    }
}
