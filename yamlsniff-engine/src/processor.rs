//! Decoder bundling a configuration with the pipeline operations

use std::path::Path;

use yamlsniff_detect::{detect, Encoding};

use crate::config::DecoderConfig;
use crate::decoder;
use crate::error::DecodeError;
use crate::policy::ErrorPolicy;
use crate::source::SourceReader;
use crate::stream::LinesOf;

/// Decoding pipeline with a fixed configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a strict decoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with the given configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Create a decoder with the given error policy
    pub fn with_policy(policy: ErrorPolicy) -> Self {
        Self::with_config(DecoderConfig::with_policy(policy))
    }

    /// Get the current configuration
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Detect the encoding of `bytes`
    pub fn detect(&self, bytes: &[u8]) -> Encoding {
        detect(bytes)
    }

    /// Decode `bytes` under an explicit encoding
    pub fn decode(&self, bytes: &[u8], encoding: Encoding) -> Result<String, DecodeError> {
        decoder::decode(bytes, encoding, self.config.error_policy)
    }

    /// Detect the encoding of `bytes` and decode them
    pub fn decode_auto(&self, bytes: &[u8]) -> Result<String, DecodeError> {
        decoder::decode_auto(bytes, self.config.error_policy)
    }

    /// Lazily read, decode and split every file in `paths`
    pub fn lines_of<S>(&self, paths: S) -> LinesOf<S::IntoIter>
    where
        S: IntoIterator,
        S::Item: AsRef<Path>,
    {
        LinesOf::new(paths, self.config.error_policy)
    }

    /// Like [`Decoder::lines_of`], reading through `reader`
    pub fn lines_with_reader<S, R>(&self, paths: S, reader: R) -> LinesOf<S::IntoIter, R>
    where
        S: IntoIterator,
        S::Item: AsRef<Path>,
        R: SourceReader,
    {
        LinesOf::with_reader(paths, reader, self.config.error_policy)
    }
}
