//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

use yamlsniff_engine::{split_lines, Lines};

/// Input source for decoding
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw bytes in any supported encoding
    Bytes(Vec<u8>),
    /// File path
    File(PathBuf),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input::Bytes(bytes.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the raw bytes of the input
    pub fn read_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Bytes(bytes) => Ok(bytes),
            Input::File(path) => fs::read(&path).map_err(ApiError::Io),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// Decoding metadata
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Canonical name of the detected encoding
    pub encoding: String,
    /// Which rule picked the encoding (`Bom`, `NullPattern` or `Fallback`)
    pub detected_by: String,
    /// Whether the encoding carries a byte order mark
    pub uses_bom: bool,
    /// Size of the input in bytes
    pub total_bytes: usize,
    /// Number of characters in the decoded text
    pub total_chars: usize,
    /// Number of lines in the decoded text
    pub line_count: usize,
    /// Error policy the input was decoded with
    pub error_policy: String,
}

/// Decoding result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Decoded text, BOM removed
    pub text: String,
    /// Decoding metadata
    pub metadata: Metadata,
}

impl Output {
    /// Lines of the decoded text
    pub fn lines(&self) -> Lines<'_> {
        split_lines(&self.text)
    }

    /// Serialize to JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to pretty-printed JSON
    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
