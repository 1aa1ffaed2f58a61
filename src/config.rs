// src/config.rs - Application configuration

use serde::{Deserialize, Serialize};

/// Environment variable holding the API root, e.g. `https://shop.example.com/api`.
pub const API_URL_ENV: &str = "VELUNA_API_URL";

/// Runtime configuration for the client.
///
/// The only knob today is the API root. Without a configured value the
/// application has no backend to talk to and every request fails with a
/// network error; the storefront then renders its build-time fallback
/// content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.into()),
        }
    }

    /// Resolves the configuration from the environment.
    ///
    /// On native targets the process environment is consulted first; both
    /// targets fall back to a value baked in at compile time, which is how
    /// the WASM bundle receives its API root.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var(API_URL_ENV) {
            return Self::new(url);
        }

        match option_env!("VELUNA_API_URL") {
            Some(url) => Self::new(url),
            None => Self::default(),
        }
    }

    pub fn has_backend(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_stripped() {
        let config = AppConfig::new("https://api.veluna.test/api///");
        assert_eq!(config.api_base_url, "https://api.veluna.test/api");
    }

    #[test]
    fn test_default_has_no_backend() {
        let config = AppConfig::default();
        assert!(!config.has_backend());
    }

    #[test]
    fn test_configured_backend() {
        let config = AppConfig::new("http://localhost:8000/api");
        assert!(config.has_backend());
    }
}
