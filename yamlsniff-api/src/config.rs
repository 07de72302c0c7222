//! High-level configuration API

use yamlsniff_engine::{DecoderConfig, ErrorPolicy};

use crate::error::{ApiError, Result};

/// High-level configuration for decoding
///
/// The error policy is the only setting. With the `serde` feature it can be
/// read from TOML:
///
/// ```toml
/// errors = "replace"
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Config {
    /// How malformed byte sequences are handled
    pub errors: ErrorPolicy,
}

impl Config {
    /// Fail on the first malformed sequence
    pub fn strict() -> Self {
        Self::default()
    }

    /// Substitute U+FFFD for malformed sequences
    pub fn lenient() -> Self {
        Self {
            errors: ErrorPolicy::Replace,
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse a TOML configuration
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read a TOML configuration file
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }
}

impl From<Config> for DecoderConfig {
    fn from(config: Config) -> Self {
        DecoderConfig::with_policy(config.errors)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the error policy
    pub fn errors(mut self, policy: ErrorPolicy) -> Self {
        self.config.errors = policy;
        self
    }

    /// Set the error policy by name (`strict`, `ignore`, `replace`,
    /// `backslashreplace`, `surrogateescape`)
    pub fn errors_named(mut self, name: &str) -> Result<Self> {
        self.config.errors = name
            .parse()
            .map_err(|e: yamlsniff_engine::EngineError| ApiError::Config(e.to_string()))?;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        Ok(self.config)
    }
}
