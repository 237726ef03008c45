/*
[INPUT]:  HTTP configuration (base URL, timeouts, app credentials)
[OUTPUT]: Configured reqwest client ready for service calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{IdportError, Result};

/// Base URL for the IdPort service
const SERVICE_BASE_URL: &str = "https://service.idport.io";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// App credentials issued at registration time
#[derive(Debug, Clone)]
pub struct AppCredentials {
    pub app_id: String,
    pub api_key: String,
}

/// Error body shape used by the service for non-success responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Main HTTP client for the IdPort service
#[derive(Debug, Clone)]
pub struct IdportClient {
    http_client: Client,
    base_url: Url,
    credentials: AppCredentials,
}

impl IdportClient {
    /// Create a new client with default configuration
    pub fn new(credentials: AppCredentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: AppCredentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, SERVICE_BASE_URL)
    }

    /// Create a new client against an explicit base URL (used by tests)
    pub fn with_config_and_base_url(
        credentials: AppCredentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credentials,
        })
    }

    /// Get the app credentials
    pub fn credentials(&self) -> &AppCredentials {
        &self.credentials
    }

    /// Build full URL for a service endpoint
    fn service_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for a service endpoint with app auth headers
    pub(crate) fn service_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.service_url(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .header("api-key", &self.credentials.api_key)
            .header("app-id", &self.credentials.app_id))
    }

    /// Send a request and deserialize the JSON response.
    ///
    /// Non-2xx statuses map to `IdportError::Api`; the message is taken from
    /// a JSON `{"message": ...}` body when present, else the raw body.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.message)
                .unwrap_or(body);
            return Err(IdportError::api_error(status, message));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_credentials() -> AppCredentials {
        AppCredentials {
            app_id: "demo_app".to_string(),
            api_key: "demo_key".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = IdportClient::new(demo_credentials()).unwrap();
        assert_eq!(client.credentials().app_id, "demo_app");
    }

    #[test]
    fn test_service_url_join() {
        let client = IdportClient::with_config_and_base_url(
            demo_credentials(),
            ClientConfig::default(),
            "http://127.0.0.1:3000",
        )
        .unwrap();
        let url = client.service_url("/api/account/user").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:3000/api/account/user");
    }
}
