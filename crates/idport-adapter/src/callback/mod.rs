/*
[INPUT]:  Callback URLs carrying provider result data in the query string
[OUTPUT]: Parsed auth/sign callback parameters
[POS]:    Callback layer - redirect handshake parsing, no ambient state
[UPDATE]: When the service adds callback parameters
*/

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use url::Url;

use crate::http::{IdportError, Result};

/// Parameters carried back on the auth callback query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthCallbackParams {
    pub account: Option<String>,
    pub state: Option<String>,
    pub process_id: Option<String>,
    pub errors: Vec<String>,
}

/// Parameters carried back on the sign callback query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignCallbackParams {
    pub signed_transaction: Option<serde_json::Value>,
    pub transaction_id: Option<String>,
    pub state: Option<String>,
    pub errors: Vec<String>,
}

/// Check whether `current` addresses the configured callback URL.
///
/// Scheme, host, port, and path must match; query string and fragment are
/// ignored. An unparseable `current` never matches.
pub fn matches_callback_url(current: &str, configured: &Url) -> bool {
    let Ok(current) = Url::parse(current) else {
        return false;
    };

    current.scheme() == configured.scheme()
        && current.host_str() == configured.host_str()
        && current.port_or_known_default() == configured.port_or_known_default()
        && current.path() == configured.path()
}

/// Parse provider result data from an auth callback URL.
pub fn parse_auth_callback(url: &str) -> Result<AuthCallbackParams> {
    let url = Url::parse(url)?;
    let mut params = AuthCallbackParams::default();

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "account" => params.account = Some(value.into_owned()),
            "state" => params.state = Some(value.into_owned()),
            "process_id" => params.process_id = Some(value.into_owned()),
            "errors" => append_errors(&mut params.errors, &value),
            _ => {}
        }
    }

    Ok(params)
}

/// Parse provider result data from a sign callback URL.
///
/// `signed_transaction` arrives base64-encoded and is decoded to JSON here.
pub fn parse_sign_callback(url: &str) -> Result<SignCallbackParams> {
    let url = Url::parse(url)?;
    let mut params = SignCallbackParams::default();

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "signed_transaction" => {
                params.signed_transaction = Some(decode_signed_transaction(&value)?)
            }
            "transaction_id" => params.transaction_id = Some(value.into_owned()),
            "state" => params.state = Some(value.into_owned()),
            "errors" => append_errors(&mut params.errors, &value),
            _ => {}
        }
    }

    Ok(params)
}

/// Decode a base64-encoded JSON transaction payload.
pub fn decode_signed_transaction(encoded: &str) -> Result<serde_json::Value> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
        IdportError::InvalidResponse(format!("invalid signed transaction base64: {e}"))
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

// The errors parameter may appear repeated or as a single comma-joined value.
fn append_errors(errors: &mut Vec<String>, value: &str) {
    for part in value.split(',') {
        let part = part.trim();
        if !part.is_empty() {
            errors.push(part.to_string());
        }
    }
}
