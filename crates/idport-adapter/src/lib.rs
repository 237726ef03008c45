/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public IdPort adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod callback;
pub mod coordinator;
pub mod http;
pub mod session;
pub mod tx;
pub mod types;

// Re-export commonly used types from the callback layer
pub use callback::{
    AuthCallbackParams,
    SignCallbackParams,
    matches_callback_url,
    parse_auth_callback,
    parse_sign_callback,
};

// Re-export the coordinator surface
pub use coordinator::{
    CallbackOutcome,
    Coordinator,
    CoordinatorConfig,
    LoginFlow,
    SignFlow,
    SignOptions,
    SignOutcome,
};

// Re-export commonly used types from http
pub use http::{
    AppCredentials,
    ClientConfig,
    IdportClient,
    IdportError,
    Result,
};

// Re-export session state types
pub use session::{SessionCache, SessionManager, UiState};

// Re-export all schema types
pub use types::*;
