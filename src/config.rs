//! Runtime Configuration
//!
//! Defaults can be overridden by a JSON document embedded in `index.html`:
//!
//! ```html
//! <script id="app-config" type="application/json">{ "page_size": 5 }</script>
//! ```

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

/// Id of the element holding the JSON overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local storage key of the task list
    pub tasks_key: String,
    /// Local storage key of the theme flag
    pub theme_key: String,
    /// Articles per page
    pub page_size: usize,
    /// Artificial latency of the article fetch
    pub fetch_delay_ms: u32,
    /// Numbered pagination buttons shown at most
    pub max_page_buttons: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tasks_key: "tasks".to_string(),
            theme_key: "theme".to_string(),
            page_size: 10,
            fetch_delay_ms: 500,
            max_page_buttons: 5,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Merge a (possibly partial) JSON document over the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults
    pub fn load() -> Self {
        let Some(json) = embedded_json() else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                // The logger is not up yet; report through the console directly.
                web_sys::console::warn_1(&format!("[CONFIG] {}, using defaults", e).into());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tasks_key.trim().is_empty() || self.theme_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage keys must not be empty".into()));
        }
        if self.tasks_key == self.theme_key {
            return Err(ConfigError::Invalid("storage keys must differ".into()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be positive".into()));
        }
        if self.max_page_buttons == 0 {
            return Err(ConfigError::Invalid("max_page_buttons must be positive".into()));
        }
        Ok(())
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

fn embedded_json() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.fetch_delay_ms, 500);
        assert_eq!(config.max_page_buttons, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{ "page_size": 4, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.page_size, 4);
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.tasks_key, "tasks");
        assert_eq!(config.fetch_delay_ms, 500);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            AppConfig::from_json(r#"{ "page_size": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "tasks_key": "same", "theme_key": "same" }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{ "theme_key": " " }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(AppConfig::from_json("{ page_size: 4"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            AppConfig::from_json(r#"{ "page_size": "ten" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = AppConfig::from_json(r#"{ "log_level": "chatty" }"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
