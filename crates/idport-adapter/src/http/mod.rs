/*
[INPUT]:  HTTP client configuration and service endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod client;
pub mod error;
pub mod network;
pub mod transaction;

pub use client::{AppCredentials, ClientConfig, IdportClient};
pub use error::{IdportError, Result};
