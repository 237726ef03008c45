/*
[INPUT]:  Login/sign outcomes and provider errors
[OUTPUT]: UI-visible session state snapshots
[POS]:    Session layer - single in-memory session per process
[UPDATE]: When adding UI-visible state fields
*/

pub mod cache;

use std::sync::{Arc, RwLock};

use crate::types::UserData;

pub use cache::SessionCache;

/// The UI-visible state the coordinator reflects into.
///
/// At most one of {logged in with user info} or {logged out} holds; both
/// error classes land in the single `error_message` slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub is_logged_in: bool,
    pub user_info: Option<UserData>,
    pub error_message: Option<String>,
    pub signed_transaction: Option<String>,
    pub transaction_id: Option<String>,
    pub sign_state: Option<String>,
    pub busy: bool,
    pub busy_message: Option<String>,
}

/// Thread-safe holder for the single active session.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    state: Arc<RwLock<UiState>>,
}

impl SessionManager {
    /// Create an empty, logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current state.
    pub fn snapshot(&self) -> UiState {
        self.state.read().unwrap().clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.read().unwrap().is_logged_in
    }

    pub fn account_name(&self) -> Option<String> {
        let guard = self.state.read().unwrap();
        guard
            .user_info
            .as_ref()
            .map(|user| user.account_name.clone())
            .filter(|name| !name.is_empty())
    }

    pub fn user_info(&self) -> Option<UserData> {
        self.state.read().unwrap().user_info.clone()
    }

    /// Transition to logged in with the given user record.
    pub fn set_logged_in(&self, user: UserData) {
        let mut guard = self.state.write().unwrap();
        guard.is_logged_in = true;
        guard.user_info = Some(user);
    }

    /// Transition to logged out, dropping the user record.
    pub fn clear_session(&self) {
        let mut guard = self.state.write().unwrap();
        guard.is_logged_in = false;
        guard.user_info = None;
    }

    /// Reset the error slot and any previous sign result.
    pub fn clear_errors(&self) {
        let mut guard = self.state.write().unwrap();
        guard.error_message = None;
        guard.signed_transaction = None;
        guard.transaction_id = None;
        guard.sign_state = None;
    }

    /// Surface a failure message in the UI error slot.
    pub fn record_error(&self, message: impl Into<String>) {
        let mut guard = self.state.write().unwrap();
        guard.error_message = Some(message.into());
    }

    pub fn set_sign_state(&self, state: impl Into<String>) {
        let mut guard = self.state.write().unwrap();
        guard.sign_state = Some(state.into());
    }

    pub fn set_signed_transaction(&self, json: impl Into<String>) {
        let mut guard = self.state.write().unwrap();
        guard.signed_transaction = Some(json.into());
    }

    pub fn set_transaction_id(&self, id: impl Into<String>) {
        let mut guard = self.state.write().unwrap();
        guard.transaction_id = Some(id.into());
    }

    pub fn set_busy(&self, busy: bool, message: Option<&str>) {
        let mut guard = self.state.write().unwrap();
        guard.busy = busy;
        guard.busy_message = message.map(str::to_string);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_logged_out() {
        let session = SessionManager::new();
        let state = session.snapshot();
        assert!(!state.is_logged_in);
        assert!(state.user_info.is_none());
        assert!(session.account_name().is_none());
    }

    #[test]
    fn test_login_logout_transition() {
        let session = SessionManager::new();
        session.set_logged_in(UserData::with_account("alice"));

        assert!(session.is_logged_in());
        assert_eq!(session.account_name().as_deref(), Some("alice"));

        session.clear_session();
        let state = session.snapshot();
        assert!(!state.is_logged_in);
        assert!(state.user_info.is_none());
    }

    #[test]
    fn test_clear_errors_resets_sign_result() {
        let session = SessionManager::new();
        session.record_error("boom");
        session.set_signed_transaction(r#"{"sig":"abc"}"#);
        session.set_transaction_id("123");
        session.set_sign_state("abc");

        session.clear_errors();
        let state = session.snapshot();
        assert!(state.error_message.is_none());
        assert!(state.signed_transaction.is_none());
        assert!(state.transaction_id.is_none());
        assert!(state.sign_state.is_none());
    }

    #[test]
    fn test_empty_account_name_is_filtered() {
        let session = SessionManager::new();
        session.set_logged_in(UserData::with_account(""));
        assert!(session.account_name().is_none());
    }
}
