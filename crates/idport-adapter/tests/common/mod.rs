/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for idport-adapter tests

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use url::Url;
use uuid::Uuid;
use wiremock::MockServer;

use idport_adapter::{
    AppCredentials, ClientConfig, Coordinator, CoordinatorConfig, IdportClient, SessionCache,
};

pub const AUTH_CALLBACK_URL: &str = "https://demo.example.com/authcallback";
pub const SIGN_CALLBACK_URL: &str = "https://demo.example.com/signcallback";
pub const APP_ORIGIN: &str = "https://demo.example.com/";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a temp directory for a per-test session cache
pub fn temp_cache_dir() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("idport-test-{}", Uuid::new_v4()));
    fs::create_dir_all(&path).unwrap();
    path
}

/// Build a client pointed at the mock server
pub fn test_client(base_url: &str) -> IdportClient {
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

/// Build a coordinator against the mock server with a temp session cache
pub fn test_coordinator(base_url: &str, cache_dir: &PathBuf) -> Coordinator {
    let config = CoordinatorConfig {
        auth_callback_url: Url::parse(AUTH_CALLBACK_URL).unwrap(),
        sign_callback_url: Url::parse(SIGN_CALLBACK_URL).unwrap(),
        app_origin: Url::parse(APP_ORIGIN).unwrap(),
        background_color: Some("3F7BC7".to_string()),
    };
    Coordinator::with_cache(test_client(base_url), config, SessionCache::in_dir(cache_dir))
}

/// Full user record as the service would return it
pub fn sample_user_json(account: &str) -> serde_json::Value {
    serde_json::json!({
        "accountName": account,
        "name": "Alice Example",
        "username": "alice01",
        "email": "alice@example.com",
        "picture": "https://cdn.example.com/alice.png",
        "permissions": [
            {
                "chainAccount": "alice.eos",
                "chainNetwork": "eos_main",
                "permission": "active",
                "accountType": "native"
            },
            {
                "chainAccount": "FROMADDR",
                "chainNetwork": "algo_test",
                "permission": "active",
                "externalWalletType": "algosigner"
            }
        ]
    })
}
