//! Client configuration loaded from a TOML file and `GIFS_*` environment variables.
//!
//! ```toml
//! [giphy]
//! api_key = "..."
//!
//! [tenor]
//! api_key = "..."
//! timeout_secs = 10
//! ```
//!
//! Environment variables take precedence over the file, nested keys are
//! separated by a double underscore: `GIFS_TENOR__API_KEY`.

use crate::{Result, provider::ProviderConfig};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};

const ENV_PREFIX: &str = "GIFS";

/// Settings of every provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GifConfig {
    pub giphy: ProviderSettings,
    pub tenor: ProviderSettings,
}

/// Overrides for one provider; unset fields keep the provider defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub key_param: Option<String>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl GifConfig {
    /// Load from an optional TOML file, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        Self::build(builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        ))
    }

    /// Load from an inline TOML document
    pub fn from_toml(source: &str) -> Result<Self> {
        Self::build(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Giphy client configuration
    #[must_use]
    pub fn giphy(&self) -> ProviderConfig {
        self.giphy.apply(ProviderConfig::giphy())
    }

    /// Tenor client configuration
    #[must_use]
    pub fn tenor(&self) -> ProviderConfig {
        self.tenor.apply(ProviderConfig::tenor())
    }
}

impl ProviderSettings {
    /// Merge these settings over `defaults`
    #[must_use]
    pub fn apply(&self, mut defaults: ProviderConfig) -> ProviderConfig {
        if let Some(api_key) = &self.api_key {
            defaults.api_key = Some(api_key.clone());
        }
        if let Some(base_url) = &self.base_url {
            defaults.base_url = base_url.clone();
        }
        if let Some(key_param) = &self.key_param {
            defaults.key_param = key_param.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            defaults.user_agent = user_agent.clone();
        }
        if let Some(secs) = self.timeout_secs {
            defaults.timeout = Duration::from_secs(secs);
        }
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GifError;
    use std::io::Write;

    #[test]
    fn test_from_toml() {
        let config = GifConfig::from_toml(
            r#"
            [giphy]
            api_key = "giphy-key"

            [tenor]
            api_key = "tenor-key"
            base_url = "http://localhost:8080/v1"
            timeout_secs = 5
            "#,
        )
        .unwrap();

        let giphy = config.giphy();
        assert_eq!(giphy.api_key.as_deref(), Some("giphy-key"));
        assert_eq!(giphy.base_url, "https://api.giphy.com/v1");
        assert_eq!(giphy.timeout, Duration::from_secs(30));

        let tenor = config.tenor();
        assert_eq!(tenor.api_key.as_deref(), Some("tenor-key"));
        assert_eq!(tenor.base_url, "http://localhost:8080/v1");
        assert_eq!(tenor.key_param, "key");
        assert_eq!(tenor.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = GifConfig::from_toml("").unwrap();

        assert!(config.giphy().api_key.is_none());
        assert_eq!(config.tenor().base_url, "https://g.tenor.com/v1");
    }

    #[test]
    fn test_invalid_document() {
        let err = GifConfig::from_toml("[tenor]\ntimeout_secs = \"soon\"").unwrap_err();
        assert!(matches!(err, GifError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[giphy]\nuser_agent = \"custom/1.0\"").unwrap();

        let config = GifConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.giphy().user_agent, "custom/1.0");
    }

    #[test]
    fn test_load_missing_file() {
        let err = GifConfig::load(Some(Path::new("/nonexistent/gifs.toml"))).unwrap_err();
        assert!(matches!(err, GifError::Config(_)));
    }
}
