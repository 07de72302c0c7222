//! Priority-ordered byte pattern classifier
//!
//! Patterns are tried in a fixed order and the first match wins. The order
//! matters: `FF FE 00 00` is both the UTF-32LE BOM and the UTF-16LE BOM
//! followed by a NUL, and `00 00 00 xx` would otherwise look like UTF-16BE.

use crate::encoding::{
    Encoding, BOM_UTF16_BE, BOM_UTF16_LE, BOM_UTF32_BE, BOM_UTF32_LE, BOM_UTF8,
};

/// What decided a detection result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// A byte order mark or UTF-8 signature
    Bom,
    /// Zero bytes in the code unit of a leading ASCII character
    NullPattern,
    /// Nothing matched, UTF-8 assumed
    Fallback,
}

/// Detected encoding together with the evidence for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    /// One of the eight canonical encodings
    pub encoding: Encoding,
    /// Pattern that matched
    pub evidence: Evidence,
}

impl Detection {
    fn new(encoding: Encoding, evidence: Evidence) -> Self {
        Self { encoding, evidence }
    }
}

/// Detect the encoding of a YAML stream from its first bytes.
///
/// Total and pure: every buffer, including the empty one, maps to one of the
/// canonical encodings. Streams that start with neither a BOM nor an ASCII
/// character may be misdetected, since the zero-byte heuristic relies on the
/// YAML rule that a stream begins with one of the two.
pub fn detect(bytes: &[u8]) -> Encoding {
    detect_with_evidence(bytes).encoding
}

/// Like [`detect`], also reporting which pattern matched.
pub fn detect_with_evidence(bytes: &[u8]) -> Detection {
    if bytes.starts_with(BOM_UTF32_BE) {
        Detection::new(Encoding::Utf32, Evidence::Bom)
    } else if bytes.starts_with(&[0x00, 0x00, 0x00]) && bytes.len() >= 4 {
        Detection::new(Encoding::Utf32Be, Evidence::NullPattern)
    } else if bytes.starts_with(BOM_UTF32_LE) {
        Detection::new(Encoding::Utf32, Evidence::Bom)
    } else if bytes.get(1..4) == Some(&[0x00, 0x00, 0x00][..]) {
        Detection::new(Encoding::Utf32Le, Evidence::NullPattern)
    } else if bytes.starts_with(BOM_UTF16_BE) {
        Detection::new(Encoding::Utf16, Evidence::Bom)
    } else if bytes.first() == Some(&0x00) && bytes.len() >= 2 {
        Detection::new(Encoding::Utf16Be, Evidence::NullPattern)
    } else if bytes.starts_with(BOM_UTF16_LE) {
        Detection::new(Encoding::Utf16, Evidence::Bom)
    } else if bytes.get(1) == Some(&0x00) {
        Detection::new(Encoding::Utf16Le, Evidence::NullPattern)
    } else if bytes.starts_with(BOM_UTF8) {
        Detection::new(Encoding::Utf8Sig, Evidence::Bom)
    } else {
        Detection::new(Encoding::Utf8, Evidence::Fallback)
    }
}
