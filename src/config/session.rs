//! Shared access-token cell for authenticated requests.

use std::sync::Arc;

use parking_lot::RwLock;

/// The signed-in user's credentials, shared between the app shell and the
/// network layer. Cheap to clone; all clones observe the same token.
#[derive(Clone, Default)]
pub struct Session {
    access_token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session pre-seeded with a token (used by tests and sign-in flows).
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.set_access_token(token);
        session
    }

    pub fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write() = Some(token.into());
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token.read().clone()
    }

    /// Drop the token, e.g. on logout or expiry.
    pub fn clear(&self) {
        *self.access_token.write() = None;
    }
}
