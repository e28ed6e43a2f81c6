//! Endpoint configuration.

/// Fixed endpoint path of the classification service.
pub const API_PATH: &str = "/api/bfhl";

/// Default base URL when none is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Where submissions are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the service, without the API path.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full submit URL, joining base URL and API path with a single slash.
    pub fn submit_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), API_PATH)
    }
}
