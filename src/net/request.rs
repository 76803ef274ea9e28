//! Declarative description of one API request.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::net::header::Authorization;

/// Which server a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// The feed/profile API.
    Api,
    /// The third-party image hosting service.
    ImageService,
}

/// A typed request: path, method, credential and payload in one place,
/// decoded into `Response` by the [`ApiClient`](crate::net::ApiClient).
pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn path(&self) -> String;

    fn method(&self) -> Method {
        Method::GET
    }

    fn host(&self) -> Host {
        Host::Api
    }

    fn authorization(&self) -> Authorization {
        Authorization::Bearer
    }

    /// JSON body for POST/PUT requests.
    fn body(&self) -> Option<serde_json::Value> {
        None
    }

    /// Query string parameters.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
