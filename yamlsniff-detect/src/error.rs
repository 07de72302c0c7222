//! Detection errors (deterministic only)

use core::fmt;

/// An encoding label that names none of the canonical encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownEncoding;

impl fmt::Display for UnknownEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown encoding label")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownEncoding {}
