//! Settings types and configuration for BFHL Studio.
//!
//! User-configurable settings:
//! - General preferences (dark mode)
//! - Connection (endpoint base URL)

mod persistence;
pub mod ui;

pub use persistence::{load_settings, save_settings};

use serde::{Deserialize, Serialize};

use bfhl_client::ClientConfig;

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub connection: ConnectionSettings,
}

impl Settings {
    /// Client configuration for the current endpoint URL.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.connection.endpoint_url.clone())
    }
}

/// General application preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
}

/// Endpoint connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionSettings {
    /// Base URL of the classification service.
    pub endpoint_url: String,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            endpoint_url: ClientConfig::default().base_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_matches_client_default() {
        let settings = Settings::default();
        assert_eq!(
            settings.client_config().submit_url(),
            "http://localhost:3000/api/bfhl"
        );
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = Settings::default();
        settings.general.dark_mode = true;
        settings.connection.endpoint_url = "https://bfhl.example.com".to_string();

        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();

        assert_eq!(settings, parsed);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let parsed: Settings = toml::from_str("[general]\ndark_mode = true\n").unwrap();
        assert!(parsed.general.dark_mode);
        assert_eq!(
            parsed.connection.endpoint_url,
            ConnectionSettings::default().endpoint_url
        );
    }
}
