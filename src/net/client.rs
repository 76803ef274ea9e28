//! HTTP client executing typed requests.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::time::timeout;
use uuid::Uuid;

use crate::config::{Config, Session};
use crate::net::error::NetworkError;
use crate::net::header::{build_auth_header, ACCEPT, APPLICATION_JSON};
use crate::net::request::{ApiRequest, Host};

/// Best-effort shape of an error body from the API server.
#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

/// Thin wrapper over `reqwest` resolving [`ApiRequest`]s against the
/// configured hosts. Cheap to clone; clones share the connection pool and
/// the session.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Arc<Config>,
    session: Session,
}

impl ApiClient {
    pub fn new(config: Config, session: Session) -> Result<Self, NetworkError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(
                config.api.connect_timeout_seconds as u64,
            ))
            .build()
            .map_err(|e| NetworkError::Connection { source: e })?;

        Ok(Self {
            client,
            config: Arc::new(config),
            session,
        })
    }

    /// Execute `request` and decode the response.
    ///
    /// The whole exchange is bounded by the configured request timeout.
    /// Every failure path resolves to a typed [`NetworkError`]; nothing is
    /// thrown past this boundary.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, NetworkError> {
        let request_id = Uuid::new_v4();
        let total = Duration::from_secs(self.config.api.timeout_seconds as u64);

        match timeout(total, self.do_send(request, request_id)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(%request_id, path = %request.path(), "request timed out");
                Err(NetworkError::Timeout {
                    duration: total.as_secs(),
                })
            }
        }
    }

    async fn do_send<R: ApiRequest>(
        &self,
        request: &R,
        request_id: Uuid,
    ) -> Result<R::Response, NetworkError> {
        let base = match request.host() {
            Host::Api => &self.config.api.base_url,
            Host::ImageService => &self.config.image_service.base_url,
        };
        let url = format!("{}{}", base, request.path());
        tracing::debug!(%request_id, method = %request.method(), %url, "sending request");

        let mut builder = self
            .client
            .request(request.method(), &url)
            .header(ACCEPT, APPLICATION_JSON);

        let query = request.query();
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = request.body() {
            builder = builder.json(&body);
        }
        if let Some((name, value)) = build_auth_header(
            request.authorization(),
            &self.session,
            &self.config.image_service,
        )? {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| NetworkError::Connection { source: e })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ServerMessage>(&body)
                .map(|m| m.message)
                .unwrap_or(body);
            tracing::warn!(%request_id, status = status.as_u16(), "server error");
            return Err(NetworkError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<R::Response>().await.map_err(|e| {
            tracing::warn!(%request_id, "decode failure: {}", e);
            NetworkError::Decode {
                message: e.to_string(),
            }
        })
    }
}
