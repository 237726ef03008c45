/*
[INPUT]:  Login/discover requests and account identifiers
[OUTPUT]: Login responses, user records, discovery results
[POS]:    HTTP layer - account endpoints
[UPDATE]: When account endpoints or their schema change
*/

use reqwest::Method;
use tracing::debug;

use crate::http::{IdportClient, Result};
use crate::types::{DiscoverRequest, DiscoverResponse, LoginRequest, LoginResponse, UserData};

impl IdportClient {
    /// Request a login for a named provider
    ///
    /// POST /api/account/login
    pub async fn request_login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        debug!(provider = request.provider.as_str(), "requesting login");
        let builder = self.service_request(Method::POST, "/api/account/login")?;
        self.send_json(builder.json(request)).await
    }

    /// Fetch the full user record by account name
    ///
    /// GET /api/account/user?account={account}
    pub async fn get_user_info_from_api(&self, account: &str) -> Result<UserData> {
        let endpoint = format!("/api/account/user?account={}", account);
        let builder = self.service_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }

    /// Ask the service to scan a connected wallet for unregistered keys
    ///
    /// POST /api/account/discover
    pub async fn discover(&self, request: &DiscoverRequest) -> Result<DiscoverResponse> {
        debug!(
            provider = request.provider.as_str(),
            account = %request.account,
            "requesting wallet discovery"
        );
        let builder = self.service_request(Method::POST, "/api/account/discover")?;
        self.send_json(builder.json(request)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{AppCredentials, ClientConfig, IdportClient, IdportError};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> IdportClient {
        IdportClient::with_config_and_base_url(
            AppCredentials {
                app_id: "demo_app".to_string(),
                api_key: "demo_key".to_string(),
            },
            ClientConfig::default(),
            base_url,
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_user_info_from_api() {
        let server = MockServer::start().await;
        let mock_response = r#"{
            "accountName": "alice",
            "name": "Alice Example",
            "username": "alice01",
            "email": "alice@example.com",
            "picture": "https://cdn.example.com/alice.png",
            "permissions": [
                {
                    "chainAccount": "alice.eos",
                    "chainNetwork": "eos_main",
                    "permission": "active"
                }
            ]
        }"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/account/user"))
            .and(query_param("account", "alice"))
            .and(header("api-key", "demo_key"))
            .and(header("app-id", "demo_app"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let user = client
            .get_user_info_from_api("alice")
            .await
            .expect("get_user_info_from_api failed");

        assert_eq!(user.account_name, "alice");
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
        assert_eq!(user.permissions.len(), 1);
        assert_eq!(user.permissions[0].permission, "active");
    }

    #[tokio::test]
    async fn test_api_error_mapping() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/account/user"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(serde_json::json!({"message": "account not found"})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.get_user_info_from_api("nobody").await.unwrap_err();

        match err {
            IdportError::Api { code, message } => {
                assert_eq!(code, 404);
                assert_eq!(message, "account not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
