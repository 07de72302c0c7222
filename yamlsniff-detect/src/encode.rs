//! Encode transforms, the inverse of decoding under a given identifier

use alloc::vec::Vec;

use crate::encoding::{ByteOrder, Encoding, Family, Scheme};

/// Encode `text` the way a stream in `encoding` is laid out on disk.
///
/// The BOM-implied `Utf16` and `Utf32` write a little-endian BOM followed by
/// little-endian code units. `Utf8Sig` prefixes the UTF-8 signature. Every
/// other identifier writes its fixed layout without a BOM.
pub fn encode(text: &str, encoding: Encoding) -> Vec<u8> {
    match encoding.fixed_scheme() {
        Some(scheme) => encode_scheme(text, scheme, encoding == Encoding::Utf8Sig),
        None => {
            let scheme = match encoding.family() {
                Family::Utf32 => Scheme::Utf32(ByteOrder::Little),
                _ => Scheme::Utf16(ByteOrder::Little),
            };
            encode_scheme(text, scheme, true)
        }
    }
}

/// Encode `text` in an explicit layout, optionally prefixed with its BOM.
pub fn encode_scheme(text: &str, scheme: Scheme, with_bom: bool) -> Vec<u8> {
    let unit_width = scheme.family().unit_width();
    let mut out = Vec::with_capacity(text.len() * unit_width + 4);
    if with_bom {
        out.extend_from_slice(scheme.bom());
    }

    match scheme {
        Scheme::Utf8 => out.extend_from_slice(text.as_bytes()),
        Scheme::Utf16(order) => {
            for unit in text.encode_utf16() {
                out.extend_from_slice(&match order {
                    ByteOrder::Big => unit.to_be_bytes(),
                    ByteOrder::Little => unit.to_le_bytes(),
                });
            }
        }
        Scheme::Utf32(order) => {
            for ch in text.chars() {
                let value = u32::from(ch);
                out.extend_from_slice(&match order {
                    ByteOrder::Big => value.to_be_bytes(),
                    ByteOrder::Little => value.to_le_bytes(),
                });
            }
        }
    }
    out
}
