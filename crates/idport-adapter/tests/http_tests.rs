/*
[INPUT]:  Mock service endpoints
[OUTPUT]: Test results for the HTTP client layer
[POS]:    Integration tests - endpoint request/response shapes
[UPDATE]: When endpoints or their schema change
*/

mod common;

use common::{setup_mock_server, test_client};
use idport_adapter::{
    AuthProvider, ChainNetwork, IdportError, LoginRequest, SignProvider, SignRequest,
};
use tokio_test::assert_ok;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_request_login_sends_app_headers_and_body() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/account/login"))
        .and(header("api-key", "demo_key"))
        .and(header("app-id", "demo_app"))
        .and(body_partial_json(serde_json::json!({
            "provider": "google",
            "chainNetwork": "algo_test",
            "callbackUrl": common::AUTH_CALLBACK_URL,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "loginUrl": "https://provider.example.com/x",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = LoginRequest {
        provider: AuthProvider::Google,
        chain_network: Some(ChainNetwork::AlgoTest),
        callback_url: common::AUTH_CALLBACK_URL.to_string(),
        state: "nonce-1".to_string(),
        background_color: None,
    };

    let response = assert_ok!(client.request_login(&request).await);
    assert_eq!(
        response.login_url.as_deref(),
        Some("https://provider.example.com/x")
    );
}

#[tokio::test]
async fn test_sign_endpoint_round_trip() {
    let server = setup_mock_server().await;

    Mock::given(method("POST"))
        .and(path("/api/transaction/sign"))
        .and(body_partial_json(serde_json::json!({
            "provider": "algosigner",
            "chainNetwork": "algo_test",
            "broadcast": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "signUrl": "https://service.example.com/sign/abc",
            "state": "abc",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = SignRequest {
        account: "alice".to_string(),
        provider: SignProvider::Wallet(idport_adapter::ExternalWalletType::Algosigner),
        chain_account: "FROMADDR".to_string(),
        chain_network: ChainNetwork::AlgoTest,
        transaction: "e30=".to_string(),
        broadcast: true,
        return_signed_transaction: false,
        prevent_auto_sign: false,
        callback_url: common::SIGN_CALLBACK_URL.to_string(),
        state: Some("abc".to_string()),
        multi_sig_chain_accounts: None,
        expire_seconds: None,
    };

    let response = assert_ok!(client.sign(&request).await);
    assert_eq!(
        response.sign_url.as_deref(),
        Some("https://service.example.com/sign/abc")
    );
    assert_eq!(response.state.as_deref(), Some("abc"));
    assert!(response.errors.is_none());
}

#[tokio::test]
async fn test_get_network_config() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/services/config"))
        .and(query_param("network", "algo_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "network": "algo_test",
            "host": "testnet-api.example.com",
            "protocol": "https",
            "chainId": "testnet-v1.0",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let config = assert_ok!(client.get_network_config(ChainNetwork::AlgoTest).await);

    assert_eq!(config.network, ChainNetwork::AlgoTest);
    assert_eq!(config.endpoint_url(), "https://testnet-api.example.com");
    assert_eq!(config.chain_id.as_deref(), Some("testnet-v1.0"));
}

#[tokio::test]
async fn test_non_json_error_body_is_preserved() {
    let server = setup_mock_server().await;

    Mock::given(method("GET"))
        .and(path("/api/services/config"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .get_network_config(ChainNetwork::EosMain)
        .await
        .unwrap_err();

    match err {
        IdportError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
