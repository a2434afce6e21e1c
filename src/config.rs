//! Analyzer configuration.
//!
//! Everything has a default: a zero-config embedder constructs
//! [`AnalyzerConfig::default`] and gets the stock selectors and timings.
//! Hosts that target a different page layout override the selectors, and
//! tests shorten the timings. Configs are plain YAML.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::page::{CODE_LINES_SELECTOR, LANGUAGE_SELECT_SELECTOR};

/// Default polling interval between extraction attempts.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Default watchdog ceiling after which polling stops for good.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default overlay lifetime before automatic removal.
pub const DEFAULT_OVERLAY_TTL_MS: u64 = 12_000;

/// Page selectors the analyzer reads from.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Selectors {
    /// Editor widget exposing the code lines.
    #[serde(default)]
    pub code_lines: Option<String>,
    /// Language dropdown control.
    #[serde(default)]
    pub language_select: Option<String>,
}

impl Selectors {
    pub fn code_lines(&self) -> &str {
        self.code_lines.as_deref().unwrap_or(CODE_LINES_SELECTOR)
    }

    pub fn language_select(&self) -> &str {
        self.language_select
            .as_deref()
            .unwrap_or(LANGUAGE_SELECT_SELECTOR)
    }
}

/// Top-level analyzer configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub selectors: Selectors,
    /// Milliseconds between extraction attempts.
    #[serde(default)]
    pub poll_interval_ms: Option<u64>,
    /// Milliseconds until the watchdog cancels polling.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    /// Milliseconds the overlay stays visible.
    #[serde(default)]
    pub overlay_ttl_ms: Option<u64>,
}

impl AnalyzerConfig {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        let config: AnalyzerConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS))
    }

    pub fn overlay_ttl(&self) -> Duration {
        Duration::from_millis(self.overlay_ttl_ms.unwrap_or(DEFAULT_OVERLAY_TTL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.selectors.code_lines(), CODE_LINES_SELECTOR);
        assert_eq!(
            config.selectors.language_select(),
            LANGUAGE_SELECT_SELECTOR
        );
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.overlay_ttl(), Duration::from_secs(12));
    }

    #[test]
    fn test_parse_partial_yaml_keeps_defaults() {
        let config = AnalyzerConfig::parse_str("poll_interval_ms: 250\n").unwrap();
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.selectors.code_lines(), CODE_LINES_SELECTOR);
    }

    #[test]
    fn test_parse_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("analyzer.yaml");
        std::fs::write(
            &path,
            "selectors:\n  code_lines: \".editor-lines\"\ntimeout_ms: 5000\n",
        )
        .unwrap();

        let config = AnalyzerConfig::parse_file(&path).unwrap();
        assert_eq!(config.selectors.code_lines(), ".editor-lines");
        assert_eq!(config.selectors.language_select(), LANGUAGE_SELECT_SELECTOR);
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_parse_invalid_yaml_is_an_error() {
        assert!(AnalyzerConfig::parse_str("poll_interval_ms: [oops\n").is_err());
    }
}
