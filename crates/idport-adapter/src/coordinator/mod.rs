/*
[INPUT]:  User actions (login, sign, discover, logout) and callback URLs
[OUTPUT]: Redirect targets or completed results reflected into session state
[POS]:    Coordinator layer - drives the redirect handshake against the service
[UPDATE]: When the handshake contract or an operation's semantics change
*/

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

use crate::callback::{decode_signed_transaction, matches_callback_url, parse_auth_callback, parse_sign_callback};
use crate::http::{IdportClient, IdportError, Result};
use crate::session::{SessionCache, SessionManager};
use crate::tx;
use crate::types::{
    AuthProvider, ChainNetwork, DiscoverRequest, ExternalWalletType, LoginRequest, SignProvider,
    SignRequest, UserData,
};

/// Static configuration for the redirect handshake.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Pre-registered URL the service redirects to after a login flow.
    pub auth_callback_url: Url,
    /// Pre-registered URL the service redirects to after a sign flow.
    pub sign_callback_url: Url,
    /// Where logout navigates back to, dropping callback query parameters.
    pub app_origin: Url,
    /// Background color shown by the hosted login flow.
    pub background_color: Option<String>,
}

/// Outcome of a login request.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginFlow {
    /// The caller must navigate to this URL; no local state was touched.
    Redirect(Url),
    /// Login completed synchronously; the session is now set.
    Completed { account: String },
}

/// Outcome of a sign request.
#[derive(Debug, Clone, PartialEq)]
pub enum SignFlow {
    /// The caller must navigate to this URL; no local state was touched.
    Redirect(Url),
    /// Signing completed synchronously.
    Completed(SignOutcome),
}

/// Synchronous sign result; every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignOutcome {
    pub signed_transaction: Option<Value>,
    pub transaction_id: Option<String>,
    pub state: Option<String>,
}

/// Result of handing a URL to a callback handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The URL does not address this callback; nothing happened.
    NotMatched,
    /// The callback was parsed and reflected into session state.
    Handled,
}

/// Caller-facing signing options; the coordinator fills in account,
/// callback URL, and multisig accounts.
#[derive(Debug, Clone)]
pub struct SignOptions {
    pub provider: SignProvider,
    pub chain_account: String,
    pub chain_network: ChainNetwork,
    /// Bare transaction object; wrapped in an actions envelope when the
    /// service itself signs.
    pub transaction: Value,
    pub broadcast: bool,
    pub return_signed_transaction: bool,
    pub prevent_auto_sign: bool,
    /// Anything the caller wants to remember after the callback.
    pub state: Option<String>,
}

/// Drives the two one-shot request/redirect/callback cycles (login and
/// signing) against the identity service, reflecting results into a single
/// session state.
///
/// All provider calls are best-effort, single-attempt; every failure is
/// recorded in the UI error slot before the `Err` propagates.
#[derive(Debug)]
pub struct Coordinator {
    client: IdportClient,
    config: CoordinatorConfig,
    session: SessionManager,
    cache: SessionCache,
}

impl Coordinator {
    /// Create a coordinator using the default session cache location.
    pub fn new(client: IdportClient, config: CoordinatorConfig) -> Self {
        Self::with_cache(client, config, SessionCache::default_location())
    }

    /// Create a coordinator with an explicit session cache.
    pub fn with_cache(
        client: IdportClient,
        config: CoordinatorConfig,
        cache: SessionCache,
    ) -> Self {
        Self {
            client,
            config,
            session: SessionManager::new(),
            cache,
        }
    }

    /// The session state this coordinator reflects into.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn config(&self) -> &CoordinatorConfig {
        &self.config
    }

    /// Restore a previously cached user on startup.
    pub fn load_user_from_cache(&self) {
        if let Some(user) = self.cache.load() {
            info!(account = %user.account_name, "restored session from cache");
            self.session.set_logged_in(user);
        }
    }

    /// Request a login for the given provider.
    ///
    /// A redirect URL in the response always wins over synchronous fields:
    /// the caller navigates away and no session state is touched until the
    /// auth callback comes back.
    pub async fn login(
        &self,
        provider: AuthProvider,
        chain_network: Option<ChainNetwork>,
    ) -> Result<LoginFlow> {
        self.session.clear_errors();
        self.session.set_busy(true, Some("logging in"));
        let result = self.login_inner(provider, chain_network).await;
        self.session.set_busy(false, None);
        self.record_failure(&result);
        result
    }

    async fn login_inner(
        &self,
        provider: AuthProvider,
        chain_network: Option<ChainNetwork>,
    ) -> Result<LoginFlow> {
        let request = LoginRequest {
            provider,
            chain_network,
            callback_url: self.config.auth_callback_url.to_string(),
            state: Uuid::new_v4().to_string(),
            background_color: self.config.background_color.clone(),
        };

        let response = self.client.request_login(&request).await?;

        if let Some(errors) = non_empty(response.errors) {
            return Err(IdportError::provider(errors));
        }

        if let Some(login_url) = response.login_url {
            let url = Url::parse(&login_url)?;
            info!(provider = provider.as_str(), %url, "login requires external redirect");
            return Ok(LoginFlow::Redirect(url));
        }

        match (response.is_logged_in, response.account) {
            (Some(true), Some(account)) => {
                info!(account = %account, "login completed synchronously");
                self.session.set_logged_in(UserData::with_account(&account));
                Ok(LoginFlow::Completed { account })
            }
            _ => Err(IdportError::InvalidResponse(
                "login response carried neither a login URL nor a completed session".to_string(),
            )),
        }
    }

    /// Handle a potential auth callback.
    ///
    /// Safe to call unconditionally on every page load: a URL that does not
    /// address the configured auth callback is a strict no-op.
    pub async fn handle_auth_callback(&self, current_url: &str) -> Result<CallbackOutcome> {
        let result = self.handle_auth_callback_inner(current_url).await;
        self.record_failure(&result);
        result
    }

    async fn handle_auth_callback_inner(&self, current_url: &str) -> Result<CallbackOutcome> {
        if !matches_callback_url(current_url, &self.config.auth_callback_url) {
            debug!(url = current_url, "url does not address the auth callback");
            return Ok(CallbackOutcome::NotMatched);
        }

        let params = parse_auth_callback(current_url)?;

        if let Some(state) = &params.state {
            debug!(state, "state returned with auth callback");
        }

        if !params.errors.is_empty() {
            warn!(errors = ?params.errors, "auth callback reported errors");
            self.session.record_error(params.errors.join(", "));
            return Ok(CallbackOutcome::Handled);
        }

        let account = params.account.ok_or_else(|| {
            IdportError::InvalidResponse("auth callback carried no account".to_string())
        })?;

        self.fetch_user(&account).await?;
        Ok(CallbackOutcome::Handled)
    }

    /// Fetch the full user record and make it the active session.
    pub async fn load_user_from_api(&self, account: &str) -> Result<()> {
        let result = self.fetch_user(account).await;
        self.record_failure(&result);
        result
    }

    async fn fetch_user(&self, account: &str) -> Result<()> {
        let user = self.client.get_user_info_from_api(account).await?;
        if let Err(err) = self.cache.save(&user) {
            warn!(error = %err, "failed to persist session cache");
        }
        info!(account = %user.account_name, permissions = user.permissions.len(), "user loaded");
        self.session.set_logged_in(user);
        Ok(())
    }

    /// Submit a transaction for signing.
    ///
    /// Same two-outcome contract as login: a `signUrl` in the response wins
    /// over synchronous fields and leaves local state untouched.
    pub async fn sign(&self, options: SignOptions) -> Result<SignFlow> {
        self.session.clear_errors();
        self.session.set_busy(true, Some("signing transaction"));
        let result = self.sign_inner(options).await;
        self.session.set_busy(false, None);
        self.record_failure(&result);
        result
    }

    async fn sign_inner(&self, options: SignOptions) -> Result<SignFlow> {
        let account = self.session.account_name().ok_or(IdportError::NotLoggedIn)?;
        let user = self.session.user_info().unwrap_or_default();

        let transaction = tx::wrap_for_provider(options.provider, options.transaction);
        let encoded = STANDARD.encode(serde_json::to_vec(&transaction)?);

        let request = SignRequest {
            account,
            provider: options.provider,
            chain_account: options.chain_account.clone(),
            chain_network: options.chain_network,
            transaction: encoded,
            broadcast: options.broadcast,
            return_signed_transaction: options.return_signed_transaction,
            prevent_auto_sign: options.prevent_auto_sign,
            callback_url: self.config.sign_callback_url.to_string(),
            state: options.state,
            multi_sig_chain_accounts: tx::multisig_chain_accounts(&user, &options.chain_account),
            expire_seconds: None,
        };

        let response = self.client.sign(&request).await?;

        if let Some(errors) = non_empty(response.errors) {
            return Err(IdportError::provider(errors));
        }

        if let Some(sign_url) = response.sign_url {
            let url = Url::parse(&sign_url)?;
            info!(%url, "signing requires external redirect");
            return Ok(SignFlow::Redirect(url));
        }

        let mut outcome = SignOutcome::default();
        if let Some(state) = response.state {
            self.session.set_sign_state(&state);
            outcome.state = Some(state);
        }
        if let Some(encoded) = response.signed_transaction {
            let signed = decode_signed_transaction(&encoded)?;
            self.session
                .set_signed_transaction(serde_json::to_string(&signed)?);
            outcome.signed_transaction = Some(signed);
        }
        if let Some(transaction_id) = response.transaction_id {
            self.session.set_transaction_id(&transaction_id);
            outcome.transaction_id = Some(transaction_id);
        }

        Ok(SignFlow::Completed(outcome))
    }

    /// Handle a potential sign callback; same no-op contract as
    /// [`handle_auth_callback`](Self::handle_auth_callback).
    pub async fn handle_sign_callback(&self, current_url: &str) -> Result<CallbackOutcome> {
        let result = self.handle_sign_callback_inner(current_url).await;
        self.record_failure(&result);
        result
    }

    async fn handle_sign_callback_inner(&self, current_url: &str) -> Result<CallbackOutcome> {
        if !matches_callback_url(current_url, &self.config.sign_callback_url) {
            debug!(url = current_url, "url does not address the sign callback");
            return Ok(CallbackOutcome::NotMatched);
        }

        let params = parse_sign_callback(current_url)?;

        if !params.errors.is_empty() {
            warn!(errors = ?params.errors, "sign callback reported errors");
            self.session.record_error(params.errors.join(", "));
            return Ok(CallbackOutcome::Handled);
        }

        // Absent fields skip the corresponding UI update.
        if let Some(state) = params.state {
            self.session.set_sign_state(state);
        }
        if let Some(signed) = params.signed_transaction {
            self.session
                .set_signed_transaction(serde_json::to_string(&signed)?);
        }
        if let Some(transaction_id) = params.transaction_id {
            self.session.set_transaction_id(transaction_id);
        }

        Ok(CallbackOutcome::Handled)
    }

    /// Clear the session and its local persistence.
    ///
    /// Returns the app origin for the caller to navigate to, dropping any
    /// callback query parameters from the visible URL.
    pub fn logout(&self) -> Result<Url> {
        self.session.clear_errors();
        self.session.clear_session();
        let result = self.cache.clear().map_err(IdportError::from);
        self.record_failure(&result);
        result?;
        info!("session cleared");
        Ok(self.config.app_origin.clone())
    }

    /// Ask the service to scan a connected wallet for unregistered keys,
    /// then refresh the user so new permissions show up.
    pub async fn discover(
        &self,
        provider: ExternalWalletType,
        chain_network: ChainNetwork,
    ) -> Result<()> {
        self.session.clear_errors();
        self.session.set_busy(true, Some("discovering wallet keys"));
        let result = self.discover_inner(provider, chain_network).await;
        self.session.set_busy(false, None);
        self.record_failure(&result);
        result
    }

    async fn discover_inner(
        &self,
        provider: ExternalWalletType,
        chain_network: ChainNetwork,
    ) -> Result<()> {
        let account = self.session.account_name().ok_or(IdportError::NotLoggedIn)?;

        let request = DiscoverRequest {
            provider,
            chain_network,
            account: account.clone(),
        };
        let response = self.client.discover(&request).await?;

        if let Some(errors) = non_empty(response.errors) {
            return Err(IdportError::provider(errors));
        }

        self.fetch_user(&account).await
    }

    /// Render the chain endpoint URL for a network via the service config.
    pub async fn get_chain_url(&self, chain_network: ChainNetwork) -> Result<String> {
        let config = self.client.get_network_config(chain_network).await?;
        Ok(config.endpoint_url())
    }

    fn record_failure<T>(&self, result: &Result<T>) {
        if let Err(err) = result {
            self.session.record_error(err.to_string());
        }
    }
}

fn non_empty(errors: Option<Vec<String>>) -> Option<Vec<String>> {
    errors.filter(|errors| !errors.is_empty())
}
