/*
[INPUT]:  Service schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with deserialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When response schema changes or new endpoints are added
*/

use serde::{Deserialize, Serialize};

/// Response to a login request.
///
/// Carries either `login_url` (an external OAuth hop is required) or the
/// synchronous completion fields. Inline `errors` are a normal response, not
/// a transport failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_logged_in: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Response to a sign request; same two-outcome contract as login.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_url: Option<String>,
    /// Base64-encoded JSON of the signed transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_transaction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_redirect_shape() {
        let json = r#"{"loginUrl": "https://provider.example.com/x"}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.login_url.as_deref(),
            Some("https://provider.example.com/x")
        );
        assert!(response.account.is_none());
        assert!(response.errors.is_none());
    }

    #[test]
    fn test_sign_response_synchronous_shape() {
        let json = r#"{
            "signedTransaction": "eyJzaWciOiJhYmMifQ==",
            "transactionId": "123",
            "state": "abc"
        }"#;
        let response: SignResponse = serde_json::from_str(json).unwrap();
        assert!(response.sign_url.is_none());
        assert_eq!(response.transaction_id.as_deref(), Some("123"));
        assert_eq!(response.state.as_deref(), Some("abc"));
    }
}
