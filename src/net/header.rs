//! Header construction for typed requests.

use crate::config::{ImageServiceSettings, Session};
use crate::net::error::NetworkError;

pub const AUTHORIZATION: &str = "Authorization";
pub const ACCEPT: &str = "Accept";

pub const APPLICATION_JSON: &str = "application/json";

/// Which credential a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// Public endpoint.
    None,
    /// `Bearer <access token>` from the current session.
    Bearer,
    /// `Client-ID <id>` for the image hosting service.
    ClientId,
}

/// Build the Authorization header for a request, or fail fast when the
/// required credential is missing.
pub fn build_auth_header(
    auth: Authorization,
    session: &Session,
    image_service: &ImageServiceSettings,
) -> Result<Option<(&'static str, String)>, NetworkError> {
    match auth {
        Authorization::None => Ok(None),
        Authorization::Bearer => {
            let token = session
                .access_token()
                .ok_or(NetworkError::MissingAccessToken)?;
            Ok(Some((AUTHORIZATION, format!("Bearer {token}"))))
        }
        Authorization::ClientId => {
            if image_service.client_id.is_empty() {
                return Err(NetworkError::InvalidRequest(
                    "image service client id not configured".to_string(),
                ));
            }
            Ok(Some((
                AUTHORIZATION,
                format!("Client-ID {}", image_service.client_id),
            )))
        }
    }
}
