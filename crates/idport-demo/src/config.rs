/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed demo application configuration
[POS]:    Configuration layer - app registration and callback URLs
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};

use idport_adapter::ChainNetwork;

/// Top-level configuration for the demo application
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    /// App id issued at registration
    pub app_id: String,
    /// API key issued at registration
    pub api_key: String,
    /// Service base URL override (defaults to the production service)
    #[serde(default)]
    pub service_url: Option<String>,
    /// Pre-registered auth callback URL
    pub auth_callback_url: String,
    /// Pre-registered sign callback URL
    pub sign_callback_url: String,
    /// Application origin logout navigates back to
    pub app_origin: String,
    /// Chain network used for login hints and discovery
    pub chain_network: ChainNetwork,
    /// Receiving account for the sample transfer
    pub transfer_to: String,
    /// Background color shown during the hosted login flow
    #[serde(default)]
    pub background_color: Option<String>,
}

impl DemoConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
