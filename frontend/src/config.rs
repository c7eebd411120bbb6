use log::{warn, Level};
use serde::Deserialize;
use thiserror::Error;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} must be a finite, non-negative number")]
    OutOfRange(&'static str),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Used when the nav bar cannot be measured.
    pub nav_height_fallback: f64,
    /// Added to the scroll offset before looking for the current section.
    pub scroll_lookahead: f64,
    /// Delay before scrolling to a section after switching back to home.
    pub deferred_scroll_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_height_fallback: 80.0,
            scroll_lookahead: 100.0,
            deferred_scroll_ms: 50,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        if !(config.nav_height_fallback.is_finite() && config.nav_height_fallback >= 0.0) {
            return Err(ConfigError::OutOfRange("nav_height_fallback"));
        }
        if !(config.scroll_lookahead.is_finite() && config.scroll_lookahead >= 0.0) {
            return Err(ConfigError::OutOfRange("scroll_lookahead"));
        }
        Ok(config)
    }

    /// Reads overrides embedded in the page, falling back to the defaults.
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                warn!("Ignoring site config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_keep_defaults() {
        let config = SiteConfig::from_json(r#"{"deferred_scroll_ms": 120}"#).unwrap();
        assert_eq!(config.deferred_scroll_ms, 120);
        assert_eq!(config.nav_height_fallback, 80.0);
        assert_eq!(config.scroll_lookahead, 100.0);
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            SiteConfig::from_json("{nav_height_fallback: 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_negative_offsets() {
        assert!(matches!(
            SiteConfig::from_json(r#"{"nav_height_fallback": -4.0}"#),
            Err(ConfigError::OutOfRange("nav_height_fallback"))
        ));
        assert!(matches!(
            SiteConfig::from_json(r#"{"scroll_lookahead": -1}"#),
            Err(ConfigError::OutOfRange("scroll_lookahead"))
        ));
    }
}
