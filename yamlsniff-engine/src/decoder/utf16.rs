//! UTF-16 decoding via `encoding_rs`

use encoding_rs::{DecoderResult, UTF_16BE, UTF_16LE};
use yamlsniff_detect::ByteOrder;

use super::Output;
use crate::error::{DecodeError, MalformedKind};

pub(super) fn decode(input: &[u8], order: ByteOrder, out: &mut Output) -> Result<(), DecodeError> {
    let encoding = match order {
        ByteOrder::Big => UTF_16BE,
        ByteOrder::Little => UTF_16LE,
    };
    // BOM handling already happened in Encoding::frame
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut read_total = 0;

    loop {
        let remaining = input.len() - read_total;
        let needed = decoder
            .max_utf8_buffer_length_without_replacement(remaining)
            .unwrap_or(remaining * 3);
        out.text.reserve(needed.max(4));

        let (result, read) =
            decoder.decode_to_string_without_replacement(&input[read_total..], &mut out.text, true);
        read_total += read;

        match result {
            DecoderResult::InputEmpty => return Ok(()),
            DecoderResult::OutputFull => continue,
            DecoderResult::Malformed(bad_len, consumed_after) => {
                let end = read_total - usize::from(consumed_after);
                let start = end.saturating_sub(usize::from(bad_len));
                let kind = if (end - start) % 2 == 1 {
                    MalformedKind::TruncatedUnit
                } else {
                    MalformedKind::UnpairedSurrogate
                };
                out.malformed(&input[start..end], start, kind)?;
            }
        }
    }
}
