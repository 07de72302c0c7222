//! UTF-8 decoding over the standard library validator

use std::str;

use super::Output;
use crate::error::{DecodeError, MalformedKind};

pub(super) fn decode(input: &[u8], out: &mut Output) -> Result<(), DecodeError> {
    let mut offset = 0;
    let mut rest = input;

    loop {
        match str::from_utf8(rest) {
            Ok(valid) => {
                out.text.push_str(valid);
                return Ok(());
            }
            Err(err) => {
                let valid_len = err.valid_up_to();
                let (valid, tail) = rest.split_at(valid_len);
                if let Ok(valid) = str::from_utf8(valid) {
                    out.text.push_str(valid);
                }

                // error_len is None only for a sequence cut off by end of input
                let (bad_len, kind) = match err.error_len() {
                    Some(len) => (len, MalformedKind::InvalidSequence),
                    None => (tail.len(), MalformedKind::TruncatedSequence),
                };
                out.malformed(&tail[..bad_len], offset + valid_len, kind)?;

                offset += valid_len + bad_len;
                rest = &tail[bad_len..];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::decoder::decode;
    use crate::error::MalformedKind;
    use crate::policy::ErrorPolicy;
    use yamlsniff_detect::Encoding;

    #[test]
    fn test_invalid_start_byte() {
        let err = decode(b"ab\xffcd", Encoding::Utf8, ErrorPolicy::Strict).unwrap_err();
        assert_eq!(err.range(), 2..3);
        assert_eq!(err.kind, MalformedKind::InvalidSequence);
    }

    #[test]
    fn test_truncated_sequence() {
        // First two bytes of U+20AC
        let err = decode(b"x\xe2\x82", Encoding::Utf8, ErrorPolicy::Strict).unwrap_err();
        assert_eq!(err.range(), 1..3);
        assert_eq!(err.kind, MalformedKind::TruncatedSequence);
    }

    #[test]
    fn test_overlong_and_surrogate_rejected() {
        assert!(decode(b"\xc0\xaf", Encoding::Utf8, ErrorPolicy::Strict).is_err());
        assert!(decode(b"\xed\xa0\x80", Encoding::Utf8, ErrorPolicy::Strict).is_err());
    }

    #[test]
    fn test_lenient_policies_continue() {
        let input = b"a\xffb\xe2\x82";
        assert_eq!(decode(input, Encoding::Utf8, ErrorPolicy::Ignore).unwrap(), "ab");
        assert_eq!(
            decode(input, Encoding::Utf8, ErrorPolicy::Replace).unwrap(),
            "a\u{FFFD}b\u{FFFD}"
        );
        assert_eq!(
            decode(input, Encoding::Utf8, ErrorPolicy::BackslashReplace).unwrap(),
            "a\\xffb\\xe2\\x82"
        );
    }
}
