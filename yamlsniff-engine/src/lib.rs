//! Decoding pipeline for YAML streams of unknown UTF encoding
//!
//! Raw bytes flow through the detector in `yamlsniff-detect`, are decoded
//! under the detected encoding with a configurable [`ErrorPolicy`], and can
//! then be split into lines. [`LinesOf`] chains that over several files,
//! reading each one only when the previous one is exhausted.

#![warn(missing_docs)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod lines;
pub mod policy;
pub mod processor;
pub mod source;
pub mod stream;

// Re-export key types
pub use config::DecoderConfig;
pub use decoder::{decode, decode_auto};
pub use error::{DecodeError, EngineError, MalformedKind, Result};
pub use lines::{is_line_break, split_lines, Lines};
pub use policy::ErrorPolicy;
pub use processor::Decoder;
pub use source::{FsReader, SourceReader};
pub use stream::{lines_of, LinesOf};

// Re-export from detect for convenience
pub use yamlsniff_detect::{detect, ByteOrder, Encoding, Family, Scheme};
