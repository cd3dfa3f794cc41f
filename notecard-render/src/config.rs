//! Render configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Configuration for the preview rendering core.
///
/// Every field has a default, so an empty config document deserialises to
/// a usable value and `RenderConfig::default()` matches it.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Directory holding the bundled Noto face files.
    #[serde(default = "defaults::font_dir")]
    pub font_dir: PathBuf,

    /// Fall back to system-installed Noto families when the bundled
    /// directory cannot be loaded.
    #[serde(default = "defaults::bool_true")]
    pub system_font_fallback: bool,

    /// Time budget for all quote fetches in one expansion call, in seconds.
    #[serde(default = "defaults::quote_fetch_timeout_secs")]
    pub quote_fetch_timeout_secs: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_dir: defaults::font_dir(),
            system_font_fallback: defaults::bool_true(),
            quote_fetch_timeout_secs: defaults::quote_fetch_timeout_secs(),
        }
    }
}

impl RenderConfig {
    /// Quote-fetch budget as a [`Duration`].
    pub fn quote_fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.quote_fetch_timeout_secs)
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn font_dir() -> PathBuf {
        PathBuf::from("fonts")
    }

    pub fn bool_true() -> bool {
        true
    }

    pub fn quote_fetch_timeout_secs() -> u64 {
        3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_deserialises_to_defaults() {
        let config: RenderConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config.font_dir, PathBuf::from("fonts"));
        assert!(config.system_font_fallback);
        assert_eq!(config.quote_fetch_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn fields_override_defaults() {
        let config: RenderConfig =
            serde_json::from_str(r#"{"font_dir": "/srv/fonts", "quote_fetch_timeout_secs": 10}"#)
                .expect("valid config");
        assert_eq!(config.font_dir, PathBuf::from("/srv/fonts"));
        assert_eq!(config.quote_fetch_timeout(), Duration::from_secs(10));
    }
}
