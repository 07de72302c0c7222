//! Layered error types

use std::path::PathBuf;

use thiserror::Error;
use yamlsniff_detect::Encoding;

/// Why a byte subsequence could not be decoded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Bytes that start no valid UTF-8 sequence, or an overlong/surrogate form
    #[error("invalid byte sequence")]
    InvalidSequence,
    /// A UTF-8 sequence cut off by the end of the input
    #[error("unexpected end of data")]
    TruncatedSequence,
    /// A UTF-16 surrogate without its partner
    #[error("unpaired surrogate")]
    UnpairedSurrogate,
    /// Trailing bytes too short to form a whole code unit
    #[error("truncated code unit")]
    TruncatedUnit,
    /// A UTF-32 unit holding a surrogate code point
    #[error("code point in surrogate range")]
    SurrogateCodepoint,
    /// A UTF-32 unit above U+10FFFF
    #[error("code point not in range(0x110000)")]
    OutOfRange,
}

/// Malformed input under the `strict` policy
///
/// Offsets are absolute in the decoded buffer, BOM included; `end` is
/// exclusive.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{encoding}' codec can't decode bytes in position {start}..{end}: {kind}")]
pub struct DecodeError {
    /// Encoding the bytes were decoded under
    pub encoding: Encoding,
    /// Offset of the first malformed byte
    pub start: usize,
    /// Offset one past the last malformed byte
    pub end: usize,
    /// What was wrong with them
    pub kind: MalformedKind,
}

impl DecodeError {
    /// Byte range of the malformed subsequence
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed bytes under the strict policy
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A source could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    Source {
        /// Path of the failing source
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl EngineError {
    /// Path of the source that failed, if the error came from one
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            EngineError::Source { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
