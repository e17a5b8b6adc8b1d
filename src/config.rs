//! API Configuration
//!
//! The backend base URL, resolved once at startup from a window global and
//! injected into the panel as an explicit value.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Global the hosting page sets before the app loads, e.g.
/// `window.TODO_API_URL = "http://localhost:8080"`.
pub const API_URL_GLOBAL: &str = "TODO_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no global window object available")]
    MissingWindow,
    #[error("window.{} is not set to a string", API_URL_GLOBAL)]
    MissingBaseUrl,
}

/// Backend location for the `/todos` collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Trailing slashes are stripped so joined paths never double up.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `window.TODO_API_URL`.
    pub fn from_window() -> Result<Self, ConfigError> {
        let window = web_sys::window().ok_or(ConfigError::MissingWindow)?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(API_URL_GLOBAL))
            .ok()
            .and_then(|v| v.as_string())
            .ok_or(ConfigError::MissingBaseUrl)?;
        Ok(Self::new(value))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        assert_eq!(
            ApiConfig::new("http://localhost:8080/").base_url(),
            "http://localhost:8080"
        );
        assert_eq!(
            ApiConfig::new("http://localhost:8080//").base_url(),
            "http://localhost:8080"
        );
    }

    #[test]
    fn plain_base_url_is_kept() {
        assert_eq!(
            ApiConfig::new("http://localhost:8080/api").base_url(),
            "http://localhost:8080/api"
        );
    }

    #[test]
    fn missing_base_url_message_names_the_global() {
        assert_eq!(
            ConfigError::MissingBaseUrl.to_string(),
            "window.TODO_API_URL is not set to a string"
        );
    }
}
