//! UTF-32 decoding, one four-byte unit at a time

use yamlsniff_detect::ByteOrder;

use super::Output;
use crate::error::{DecodeError, MalformedKind};

pub(super) fn decode(input: &[u8], order: ByteOrder, out: &mut Output) -> Result<(), DecodeError> {
    let mut units = input.chunks_exact(4);

    for (index, unit) in units.by_ref().enumerate() {
        let raw = [unit[0], unit[1], unit[2], unit[3]];
        let value = match order {
            ByteOrder::Big => u32::from_be_bytes(raw),
            ByteOrder::Little => u32::from_le_bytes(raw),
        };

        match char::from_u32(value) {
            Some(ch) => out.text.push(ch),
            None => {
                let kind = if (0xD800..0xE000).contains(&value) {
                    MalformedKind::SurrogateCodepoint
                } else {
                    MalformedKind::OutOfRange
                };
                out.malformed(unit, index * 4, kind)?;
            }
        }
    }

    let tail = units.remainder();
    if !tail.is_empty() {
        out.malformed(tail, input.len() - tail.len(), MalformedKind::TruncatedUnit)?;
    }
    Ok(())
}
