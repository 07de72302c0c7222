//! Public API for YAML stream encoding detection and decoding
//!
//! Detects which of the UTF-8, UTF-16 and UTF-32 variants a byte stream is
//! written in, decodes it under a configurable error policy and splits it
//! into lines.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::path::Path;

use dto::Metadata;
use error::Result;
use yamlsniff_detect::detect_with_evidence;
use yamlsniff_engine::{Decoder, DecoderConfig, FsReader, LinesOf};

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Output};
pub use error::ApiError;
pub use yamlsniff_detect::{Detection, Evidence};
pub use yamlsniff_engine::{DecodeError, Encoding, EngineError, ErrorPolicy, MalformedKind};

/// Main entry point for decoding
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDecoder {
    inner: Decoder,
    config: Config,
}

impl TextDecoder {
    /// Create a strict decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: Decoder::with_config(DecoderConfig::from(config)),
            config,
        }
    }

    /// Create a decoder with the given error policy
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self::with_config(Config { errors: policy })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Decode the input after detecting its encoding
    pub fn process(&self, input: Input) -> Result<Output> {
        let bytes = input.read_bytes()?;
        self.decode_bytes(&bytes)
    }

    /// Decode `bytes` after detecting their encoding
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Output> {
        let detection = detect_with_evidence(bytes);
        let text = self.inner.decode(bytes, detection.encoding)?;

        let metadata = Metadata {
            encoding: detection.encoding.name().to_string(),
            detected_by: format!("{:?}", detection.evidence),
            uses_bom: detection.encoding.uses_bom(),
            total_bytes: bytes.len(),
            total_chars: text.chars().count(),
            line_count: yamlsniff_engine::split_lines(&text).count(),
            error_policy: self.config.errors.name().to_string(),
        };

        Ok(Output { text, metadata })
    }

    /// Lazily read, decode and split every file in `paths`
    pub fn lines_in_files<S>(&self, paths: S) -> LinesOf<S::IntoIter, FsReader>
    where
        S: IntoIterator,
        S::Item: AsRef<Path>,
    {
        self.inner.lines_of(paths)
    }
}

// Convenience functions

/// Detect the encoding of a YAML byte stream
pub fn detect_encoding(bytes: &[u8]) -> Encoding {
    yamlsniff_detect::detect(bytes)
}

/// Detect and decode `bytes`, failing on malformed input
pub fn auto_decode(bytes: &[u8]) -> Result<String> {
    auto_decode_with(bytes, ErrorPolicy::Strict)
}

/// Detect and decode `bytes` under the given error policy
pub fn auto_decode_with(bytes: &[u8], policy: ErrorPolicy) -> Result<String> {
    Ok(yamlsniff_engine::decode_auto(bytes, policy)?)
}

/// Lines of every file in `paths`, in order, failing on malformed input
pub fn lines_in_files<S>(paths: S) -> LinesOf<S::IntoIter, FsReader>
where
    S: IntoIterator,
    S::Item: AsRef<Path>,
{
    yamlsniff_engine::lines_of(paths, ErrorPolicy::Strict)
}
