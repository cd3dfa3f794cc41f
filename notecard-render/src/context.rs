//! Immutable per-process rendering context.
//!
//! The script table, font table, and language detector are built exactly
//! once, at startup, and shared read-only into every render call. Nothing
//! in here mutates after construction, so one context can serve concurrent
//! renders without locking.

use notecard_fonts::{FontTable, TextResolver};

use crate::config::RenderConfig;
use crate::error::RenderError;
use crate::quote::{self, Block, QuoteSource};

/// Everything a render call needs that outlives a single invocation.
pub struct RenderContext {
    resolver: TextResolver,
    config: RenderConfig,
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RenderContext {
    /// Build the context from configuration.
    ///
    /// Font loading failures are fatal here rather than surfacing per
    /// render; with `system_font_fallback` set, a failed bundled load is
    /// retried against the system font registry before giving up.
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        let fonts = match FontTable::load_from_dir(&config.font_dir) {
            Ok(fonts) => fonts,
            Err(err) if config.system_font_fallback => {
                log::warn!("bundled font load failed ({err}), trying system fonts");
                FontTable::load_from_system()?
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self {
            resolver: TextResolver::new(fonts),
            config,
        })
    }

    /// Per-paragraph script/direction/language/face resolution.
    pub fn resolver(&self) -> &TextResolver {
        &self.resolver
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Expand inline references in `content` into quoted blocks under the
    /// configured deadline.
    pub async fn expand_quotes<S: QuoteSource>(&self, content: &str, source: &S) -> Vec<Block> {
        let lines = quote::content_lines(content);
        quote::expand_quotes(&lines, source, self.config.quote_fetch_timeout()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fonts_fail_construction() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = RenderConfig {
            font_dir: dir.path().join("absent"),
            system_font_fallback: false,
            quote_fetch_timeout_secs: 3,
        };
        let err = RenderContext::new(config).unwrap_err();
        assert!(matches!(err, RenderError::Font(_)), "got {err:?}");
    }
}
