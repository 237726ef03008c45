/*
[INPUT]:  Sign requests carrying base64-encoded transactions
[OUTPUT]: Sign responses (redirect URL or signed transaction)
[POS]:    HTTP layer - transaction signing endpoint
[UPDATE]: When the sign endpoint or its schema changes
*/

use reqwest::Method;
use tracing::debug;

use crate::http::{IdportClient, Result};
use crate::types::{SignRequest, SignResponse};

impl IdportClient {
    /// Submit a transaction for signing
    ///
    /// POST /api/transaction/sign
    pub async fn sign(&self, request: &SignRequest) -> Result<SignResponse> {
        debug!(
            provider = request.provider.as_str(),
            chain_account = %request.chain_account,
            chain_network = request.chain_network.as_str(),
            broadcast = request.broadcast,
            "submitting sign request"
        );
        let builder = self.service_request(Method::POST, "/api/transaction/sign")?;
        self.send_json(builder.json(request)).await
    }
}
