use crate::config::Config;
use crate::models::{
    error::AppError,
    order::{CustomerId, Order},
};

// API CONFIGURATION
/// Configuration for the orders service client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// URL of the full order listing.
    pub fn list_url(&self) -> String {
        format!("{}/getAll", self.base_url)
    }

    /// URL that deletes the order with the given id.
    pub fn delete_url(&self, customer_id: &CustomerId) -> String {
        format!("{}/delete/{customer_id}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// ORDER API
/// Remote operations the order list depends on.
#[allow(async_fn_in_trait)]
pub trait OrderApi {
    /// Fetches the complete order collection.
    async fn fetch_orders(&self) -> Result<Vec<Order>, AppError>;

    /// Deletes one order. Succeeds only on HTTP 200.
    async fn delete_order(&self, customer_id: &CustomerId) -> Result<(), AppError>;
}

// ORDERS CLIENT
/// HTTP client for the orders service.
pub struct OrdersClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl OrdersClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl OrderApi for OrdersClient {
    async fn fetch_orders(&self) -> Result<Vec<Order>, AppError> {
        let response = self
            .http
            .get(self.config.list_url())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    async fn delete_order(&self, customer_id: &CustomerId) -> Result<(), AppError> {
        let response = self
            .http
            .delete(self.config.delete_url(customer_id))
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            return Ok(());
        }

        if status.is_success() {
            return Err(AppError::DeleteRejected {
                customer_id: customer_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(self.error_for_status(status, &body))
    }
}
