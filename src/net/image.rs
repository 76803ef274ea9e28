//! Image upload against the third-party hosting service.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::net::header::Authorization;
use crate::net::request::{ApiRequest, Host};

#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImageDto {
    pub data: UploadedImageData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImageData {
    /// Public URL of the uploaded image.
    pub link: String,
}

/// Upload raw image bytes as a base64 payload.
pub struct UploadImageRequest {
    pub bytes: Vec<u8>,
}

impl ApiRequest for UploadImageRequest {
    type Response = UploadedImageDto;

    fn path(&self) -> String {
        "/image".to_string()
    }

    fn method(&self) -> Method {
        Method::POST
    }

    fn host(&self) -> Host {
        Host::ImageService
    }

    fn authorization(&self) -> Authorization {
        Authorization::ClientId
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(json!({
            "image": STANDARD.encode(&self.bytes),
            "type": "base64",
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_base64() {
        let request = UploadImageRequest {
            bytes: vec![0xde, 0xad, 0xbe, 0xef],
        };
        let body = request.body().unwrap();
        assert_eq!(body["image"], "3q2+7w==");
        assert_eq!(body["type"], "base64");
    }
}
