use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Client as HttpClient;
use super::models::{ApiError, GoldPrice};
use tracing::warn;

/// GoldPrice API client for fetching quotes and price history
pub struct GoldPriceClient {
    http_client: HttpClient,
    admin_token: String,
    base_url: String,
}

impl GoldPriceClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.gz4nna.com";

    /// Create a new client against the default base URL
    pub fn new(admin_token: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            admin_token,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create a new client with a custom base URL
    pub fn with_base_url(admin_token: String, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            admin_token,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create default headers with the admin token
    fn create_headers(&self) -> Result<HeaderMap, String> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let token_value = HeaderValue::from_str(&self.admin_token)
            .map_err(|e| format!("Failed to create admin token header: {}", e))?;
        headers.insert(HeaderName::from_static("x-admin-token"), token_value);

        Ok(headers)
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => {
                // Try to parse JSON error
                if let Ok(err_json) = serde_json::from_str::<serde_json::Value>(&body_text) {
                    let message = err_json
                        .get("message")
                        .and_then(|v| v.as_str())
                        .unwrap_or(&body_text);
                    ApiError::BadRequest(message.to_string())
                } else {
                    ApiError::BadRequest(body_text)
                }
            }
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            500..=599 => {
                warn!("Server error {}: {}", status_code, body_text);
                ApiError::ServerError(status_code, body_text)
            }
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// GET /api/GoldPrice/latest
    ///
    /// Retrieves the most recent gold-price quote.
    ///
    /// # Returns
    /// * `Ok(GoldPrice)` - The latest quote
    /// * `Err(ApiError)` - Error with detailed error type
    pub async fn latest_price(&self) -> Result<GoldPrice, ApiError> {
        let url = format!("{}/api/GoldPrice/latest", self.base_url);
        let headers = self.create_headers().map_err(ApiError::RequestError)?;

        let response = self.http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<GoldPrice>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }

    /// GET /api/GoldPrice/history?days={N}[&records={M}]
    ///
    /// Retrieves historical quotes for the last `days` days, newest first.
    /// `records` optionally caps the number of returned rows.
    ///
    /// # Returns
    /// * `Ok(Vec<GoldPrice>)` - History in descending time order
    /// * `Err(ApiError)` - Error with detailed error type
    pub async fn price_history(
        &self,
        days: u32,
        records: Option<u32>,
    ) -> Result<Vec<GoldPrice>, ApiError> {
        let mut url = format!("{}/api/GoldPrice/history?days={}", self.base_url, days);
        if let Some(records) = records {
            url.push_str(&format!("&records={}", records));
        }
        let headers = self.create_headers().map_err(ApiError::RequestError)?;

        let response = self.http_client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        response
            .json::<Vec<GoldPrice>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_defaults_and_overrides() {
        let client = GoldPriceClient::new("token".to_string());
        assert_eq!(client.base_url(), "https://api.gz4nna.com");

        let client = GoldPriceClient::with_base_url(
            "token".to_string(),
            "https://gold.example.com".to_string(),
        );
        assert_eq!(client.base_url(), "https://gold.example.com");
    }

    #[test]
    fn test_create_headers_includes_admin_token() {
        let client = GoldPriceClient::new("tok123".to_string());
        let headers = client.create_headers().unwrap();
        assert_eq!(headers.get("x-admin-token").unwrap(), "tok123");
    }
}
