/*
[INPUT]:  Chain network identifiers
[OUTPUT]: Chain connection configuration
[POS]:    HTTP layer - service configuration endpoint
[UPDATE]: When the config endpoint or its schema changes
*/

use reqwest::Method;

use crate::http::{IdportClient, Result};
use crate::types::{ChainNetwork, NetworkConfig};

impl IdportClient {
    /// Fetch connection details for a chain network
    ///
    /// GET /api/services/config?network={network}
    pub async fn get_network_config(&self, network: ChainNetwork) -> Result<NetworkConfig> {
        let endpoint = format!("/api/services/config?network={}", network.as_str());
        let builder = self.service_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}
