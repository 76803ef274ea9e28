use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiSettings,
    #[serde(default)]
    pub image_service: ImageServiceSettings,
}

/// Settings for the feed/profile API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the API server (scheme + host, no trailing slash).
    pub base_url: String,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings for the third-party image hosting service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageServiceSettings {
    /// Base URL of the image upload API.
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
    /// Client id sent as the `Authorization: Client-ID` credential.
    #[serde(default)]
    pub client_id: String,
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_image_base_url() -> String {
    "https://api.imgur.com/3".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiSettings::default(),
            image_service: ImageServiceSettings::default(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.inkpost.app".to_string(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ImageServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_image_base_url(),
            client_id: String::new(),
        }
    }
}
