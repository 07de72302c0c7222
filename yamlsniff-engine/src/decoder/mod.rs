//! Byte-to-text decoding under a known or detected encoding

mod utf16;
mod utf32;
mod utf8;

use yamlsniff_detect::{detect_with_evidence, Encoding, Scheme};

use crate::error::{DecodeError, MalformedKind};
use crate::policy::ErrorPolicy;

/// Text under construction plus what is needed to report malformed input
pub(crate) struct Output {
    pub(crate) text: String,
    encoding: Encoding,
    policy: ErrorPolicy,
    base: usize,
}

impl Output {
    fn new(encoding: Encoding, policy: ErrorPolicy, base: usize, capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            encoding,
            policy,
            base,
        }
    }

    /// Handle `bad`, found at `offset` within the body after the BOM.
    pub(crate) fn malformed(
        &mut self,
        bad: &[u8],
        offset: usize,
        kind: MalformedKind,
    ) -> Result<(), DecodeError> {
        if self.policy.substitute(bad, &mut self.text) {
            return Ok(());
        }
        let start = self.base + offset;
        Err(DecodeError {
            encoding: self.encoding,
            start,
            end: start + bad.len(),
            kind,
        })
    }
}

/// Decode `bytes` under `encoding`.
///
/// A BOM is consumed only for the BOM-implied identifiers (`UTF-16`,
/// `UTF-32`, `UTF-8-SIG`); see [`Encoding::frame`].
pub fn decode(bytes: &[u8], encoding: Encoding, policy: ErrorPolicy) -> Result<String, DecodeError> {
    let frame = encoding.frame(bytes);
    let body = &bytes[frame.bom_len..];
    let mut out = Output::new(encoding, policy, frame.bom_len, body.len());

    match frame.scheme {
        Scheme::Utf8 => utf8::decode(body, &mut out)?,
        Scheme::Utf16(order) => utf16::decode(body, order, &mut out)?,
        Scheme::Utf32(order) => utf32::decode(body, order, &mut out)?,
    }

    Ok(out.text)
}

/// Detect the encoding of `bytes` and decode them with it.
pub fn decode_auto(bytes: &[u8], policy: ErrorPolicy) -> Result<String, DecodeError> {
    let detection = detect_with_evidence(bytes);
    tracing::debug!(
        encoding = %detection.encoding,
        evidence = ?detection.evidence,
        len = bytes.len(),
        "detected stream encoding"
    );
    decode(bytes, detection.encoding, policy)
}
