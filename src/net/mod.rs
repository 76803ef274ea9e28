//! Typed JSON requests over HTTPS.
//!
//! Each endpoint is a small struct implementing [`ApiRequest`], with path,
//! method, credential and payload declared in one place and executed by
//! [`ApiClient`]. Responses decode into typed DTOs; failures are typed
//! [`NetworkError`] values fed back into reducers as `Result` actions.

mod client;
mod error;
mod header;
mod request;

pub mod feed;
pub mod image;
pub mod profile;

pub use client::ApiClient;
pub use error::NetworkError;
pub use header::{build_auth_header, Authorization};
pub use request::{ApiRequest, Host};
