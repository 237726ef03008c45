/*
[INPUT]:  Service schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for user and chain data
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the user or chain-config schema changes
*/

use serde::{Deserialize, Serialize};

use super::enums::{AccountType, ChainNetwork, ExternalWalletType};

/// Full user record as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl UserData {
    /// A user record carrying only the account name.
    ///
    /// Synchronous login responses return the account before the full
    /// profile has been fetched.
    pub fn with_account(account_name: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            ..Self::default()
        }
    }
}

/// One registered chain account/key under the user's identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub chain_account: String,
    pub chain_network: ChainNetwork,
    pub permission: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_wallet_type: Option<ExternalWalletType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Connection details for a chain network registered with the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub network: ChainNetwork,
    pub host: String,
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl NetworkConfig {
    /// Render the chain endpoint URL from protocol, host, and port.
    pub fn endpoint_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.protocol, self.host, port),
            None => format!("{}://{}", self.protocol, self.host),
        }
    }
}
