//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use std::sync::Arc;

use inkpost::clipboard::Pasteboard;
use inkpost::config::{Config, Session};
use inkpost::net::ApiClient;
use parking_lot::Mutex;

/// Config whose API and image service both point at `base_url`.
pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_seconds = 5;
    config.image_service.base_url = base_url.to_string();
    config.image_service.client_id = "test-client-id".to_string();
    config
}

/// Client with a signed-in session, pointed at a mock server.
pub fn test_client(base_url: &str) -> ApiClient {
    ApiClient::new(test_config(base_url), Session::with_token("test-token"))
        .expect("Failed to build test client")
}

/// Client that performs no I/O in the test (reducer construction only).
pub fn offline_client() -> ApiClient {
    ApiClient::new(Config::default(), Session::with_token("test-token"))
        .expect("Failed to build offline client")
}

/// Pasteboard double that records every write.
#[derive(Default)]
pub struct RecordingPasteboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingPasteboard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl Pasteboard for RecordingPasteboard {
    fn write(&self, text: &str) {
        self.writes.lock().push(text.to_string());
    }
}
