//! Character encoding detection for YAML streams
//!
//! The YAML specification requires a stream to begin with either a byte order
//! mark or an ASCII character. That constraint is enough to tell the UTF-8,
//! UTF-16 and UTF-32 encoding forms apart by looking at no more than the first
//! four bytes: a BOM names the encoding outright, and without one the position
//! of the zero bytes in the first ASCII character's code unit reveals both the
//! unit width and the byte order.
//!
//! This crate is pure and allocation free (the `alloc` feature only adds the
//! encode transforms). Decoding lives in `yamlsniff-engine`.
//!
//! # Example
//!
//! ```rust
//! use yamlsniff_detect::{detect, Encoding};
//!
//! assert_eq!(detect(b"\xff\xfey\x00a\x00m\x00l\x00"), Encoding::Utf16);
//! assert_eq!(detect(b"\x00\x00\x00y"), Encoding::Utf32Be);
//! assert_eq!(detect(b""), Encoding::Utf8);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod detect;
#[cfg(feature = "alloc")]
pub mod encode;
pub mod encoding;
pub mod error;

pub use detect::{detect, detect_with_evidence, Detection, Evidence};
#[cfg(feature = "alloc")]
pub use encode::{encode, encode_scheme};
pub use encoding::{
    ByteOrder, Encoding, Family, Frame, Scheme, BOM_UTF16_BE, BOM_UTF16_LE, BOM_UTF32_BE,
    BOM_UTF32_LE, BOM_UTF8,
};
pub use error::UnknownEncoding;
