/*
[INPUT]:  Service schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When request schema changes or new endpoints are added
*/

use serde::{Deserialize, Serialize};

use super::enums::{AuthProvider, ChainNetwork, ExternalWalletType, SignProvider};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub provider: AuthProvider,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_network: Option<ChainNetwork>,
    pub callback_url: String,
    /// Opaque nonce echoed back on the callback.
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub account: String,
    pub provider: SignProvider,
    pub chain_account: String,
    pub chain_network: ChainNetwork,
    /// Base64-encoded JSON transaction object.
    pub transaction: String,
    pub broadcast: bool,
    pub return_signed_transaction: bool,
    pub prevent_auto_sign: bool,
    pub callback_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_sig_chain_accounts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverRequest {
    pub provider: ExternalWalletType,
    pub chain_network: ChainNetwork,
    pub account: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_omits_absent_fields() {
        let request = LoginRequest {
            provider: AuthProvider::Google,
            chain_network: None,
            callback_url: "https://demo.example.com/authcallback".to_string(),
            state: "nonce".to_string(),
            background_color: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["provider"], "google");
        assert_eq!(json["callbackUrl"], "https://demo.example.com/authcallback");
        assert!(json.get("chainNetwork").is_none());
        assert!(json.get("backgroundColor").is_none());
    }

    #[test]
    fn test_sign_request_camel_case() {
        let request = SignRequest {
            account: "alice".to_string(),
            provider: SignProvider::Service,
            chain_account: "alice.eos".to_string(),
            chain_network: ChainNetwork::EosMain,
            transaction: "e30=".to_string(),
            broadcast: true,
            return_signed_transaction: false,
            prevent_auto_sign: false,
            callback_url: "https://demo.example.com/signcallback".to_string(),
            state: Some("abc".to_string()),
            multi_sig_chain_accounts: None,
            expire_seconds: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["provider"], "idport");
        assert_eq!(json["chainAccount"], "alice.eos");
        assert_eq!(json["preventAutoSign"], false);
        assert!(json.get("multiSigChainAccounts").is_none());
    }
}
