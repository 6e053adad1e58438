use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub images: ImageConfig,
}

/// Generative content service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the Gemini API (e.g., "https://generativelanguage.googleapis.com").
    #[serde(default = "default_service_base_url")]
    pub base_url: String,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Direct API key. Falls back to the environment when unset.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Total request timeout in seconds (default: 60).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// What to ask the service for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Number of philosophers requested for the list screen.
    #[serde(default = "default_philosopher_count")]
    pub philosopher_count: u32,
}

/// Seeded portrait images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_image_base_url")]
    pub base_url: String,
}

fn default_service_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u32 {
    60
}

fn default_connect_timeout() -> u32 {
    10
}

fn default_philosopher_count() -> u32 {
    12
}

fn default_image_base_url() -> String {
    "https://picsum.photos".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_base_url(),
            model: default_model(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            philosopher_count: default_philosopher_count(),
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: default_image_base_url(),
        }
    }
}
