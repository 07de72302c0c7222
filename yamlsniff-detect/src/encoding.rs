//! Canonical encoding identifiers and their byte layouts

use core::fmt;
use core::str::FromStr;

use crate::error::UnknownEncoding;

/// UTF-32 big-endian byte order mark
pub const BOM_UTF32_BE: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];
/// UTF-32 little-endian byte order mark
pub const BOM_UTF32_LE: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];
/// UTF-16 big-endian byte order mark
pub const BOM_UTF16_BE: &[u8] = &[0xFE, 0xFF];
/// UTF-16 little-endian byte order mark
pub const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
/// UTF-8 signature
pub const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Byte order of a multi-byte code unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first
    Big,
    /// Least significant byte first
    Little,
}

/// Unicode encoding form an identifier reduces to once any BOM is stripped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// 8-bit code units
    Utf8,
    /// 16-bit code units
    Utf16,
    /// 32-bit code units
    Utf32,
}

impl Family {
    /// Size of one code unit in bytes
    pub fn unit_width(self) -> usize {
        match self {
            Family::Utf8 => 1,
            Family::Utf16 => 2,
            Family::Utf32 => 4,
        }
    }
}

/// Concrete byte layout used to encode or decode a stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// UTF-8
    Utf8,
    /// UTF-16 in the given byte order
    Utf16(ByteOrder),
    /// UTF-32 in the given byte order
    Utf32(ByteOrder),
}

impl Scheme {
    /// Encoding family of this layout
    pub fn family(self) -> Family {
        match self {
            Scheme::Utf8 => Family::Utf8,
            Scheme::Utf16(_) => Family::Utf16,
            Scheme::Utf32(_) => Family::Utf32,
        }
    }

    /// Byte order mark written in front of a stream in this layout
    pub fn bom(self) -> &'static [u8] {
        match self {
            Scheme::Utf8 => BOM_UTF8,
            Scheme::Utf16(ByteOrder::Big) => BOM_UTF16_BE,
            Scheme::Utf16(ByteOrder::Little) => BOM_UTF16_LE,
            Scheme::Utf32(ByteOrder::Big) => BOM_UTF32_BE,
            Scheme::Utf32(ByteOrder::Little) => BOM_UTF32_LE,
        }
    }
}

/// Layout resolved for a particular buffer, plus the length of the BOM to skip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Layout of the bytes after the BOM
    pub scheme: Scheme,
    /// Number of leading bytes that belong to the BOM
    pub bom_len: usize,
}

/// The eight canonical encodings a YAML stream can be detected as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// UTF-32, big-endian, no BOM
    Utf32Be,
    /// UTF-32, little-endian, no BOM
    Utf32Le,
    /// UTF-32 with the byte order taken from a leading BOM
    Utf32,
    /// UTF-16, big-endian, no BOM
    Utf16Be,
    /// UTF-16, little-endian, no BOM
    Utf16Le,
    /// UTF-16 with the byte order taken from a leading BOM
    Utf16,
    /// UTF-8, no signature
    Utf8,
    /// UTF-8 with a leading `EF BB BF` signature
    Utf8Sig,
}

impl Encoding {
    /// Every canonical identifier
    pub const ALL: [Encoding; 8] = [
        Encoding::Utf32Be,
        Encoding::Utf32Le,
        Encoding::Utf32,
        Encoding::Utf16Be,
        Encoding::Utf16Le,
        Encoding::Utf16,
        Encoding::Utf8,
        Encoding::Utf8Sig,
    ];

    /// Canonical label
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf32Be => "UTF-32BE",
            Encoding::Utf32Le => "UTF-32LE",
            Encoding::Utf32 => "UTF-32",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16 => "UTF-16",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf8Sig => "UTF-8-SIG",
        }
    }

    /// Base encoding form once any BOM is stripped
    pub fn family(self) -> Family {
        match self {
            Encoding::Utf32Be | Encoding::Utf32Le | Encoding::Utf32 => Family::Utf32,
            Encoding::Utf16Be | Encoding::Utf16Le | Encoding::Utf16 => Family::Utf16,
            Encoding::Utf8 | Encoding::Utf8Sig => Family::Utf8,
        }
    }

    /// Whether a stream in this encoding starts with a BOM
    pub fn uses_bom(self) -> bool {
        matches!(self, Encoding::Utf32 | Encoding::Utf16 | Encoding::Utf8Sig)
    }

    /// Layout for identifiers whose byte order does not depend on the data.
    ///
    /// `Utf16` and `Utf32` return `None`: their order is read from the BOM,
    /// see [`Encoding::frame`].
    pub fn fixed_scheme(self) -> Option<Scheme> {
        match self {
            Encoding::Utf32Be => Some(Scheme::Utf32(ByteOrder::Big)),
            Encoding::Utf32Le => Some(Scheme::Utf32(ByteOrder::Little)),
            Encoding::Utf16Be => Some(Scheme::Utf16(ByteOrder::Big)),
            Encoding::Utf16Le => Some(Scheme::Utf16(ByteOrder::Little)),
            Encoding::Utf8 | Encoding::Utf8Sig => Some(Scheme::Utf8),
            Encoding::Utf32 | Encoding::Utf16 => None,
        }
    }

    /// Resolve the layout and BOM length of `bytes` under this encoding.
    ///
    /// Only the BOM-implied identifiers consume a BOM. `Utf16` and `Utf32`
    /// fall back to big-endian when the BOM is missing; `Utf8Sig` tolerates
    /// a missing signature. Explicit-endian identifiers keep a leading
    /// U+FEFF as content.
    pub fn frame(self, bytes: &[u8]) -> Frame {
        if let Some(scheme) = self.fixed_scheme() {
            let bom_len = if self == Encoding::Utf8Sig && bytes.starts_with(BOM_UTF8) {
                BOM_UTF8.len()
            } else {
                0
            };
            return Frame { scheme, bom_len };
        }

        let (big, little) = match self.family() {
            Family::Utf32 => (
                Scheme::Utf32(ByteOrder::Big),
                Scheme::Utf32(ByteOrder::Little),
            ),
            Family::Utf16 | Family::Utf8 => (
                Scheme::Utf16(ByteOrder::Big),
                Scheme::Utf16(ByteOrder::Little),
            ),
        };

        [big, little]
            .into_iter()
            .find(|scheme| bytes.starts_with(scheme.bom()))
            .map(|scheme| Frame {
                scheme,
                bom_len: scheme.bom().len(),
            })
            .unwrap_or(Frame {
                scheme: big,
                bom_len: 0,
            })
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compare labels ignoring ASCII case and `-`/`_` separators
fn label_matches(label: &str, key: &str) -> bool {
    let mut label = label
        .bytes()
        .filter(|b| *b != b'-' && *b != b'_')
        .map(|b| b.to_ascii_lowercase());
    let mut key = key.bytes();
    loop {
        match (label.next(), key.next()) {
            (None, None) => return true,
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
    }
}

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const LABELS: [(&str, Encoding); 9] = [
            ("utf32be", Encoding::Utf32Be),
            ("utf32le", Encoding::Utf32Le),
            ("utf32", Encoding::Utf32),
            ("utf16be", Encoding::Utf16Be),
            ("utf16le", Encoding::Utf16Le),
            ("utf16", Encoding::Utf16),
            ("utf8", Encoding::Utf8),
            ("utf8sig", Encoding::Utf8Sig),
            ("utf8withsignature", Encoding::Utf8Sig),
        ];

        LABELS
            .iter()
            .find(|(key, _)| label_matches(s, key))
            .map(|(_, encoding)| *encoding)
            .ok_or(UnknownEncoding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_bom() {
        assert!(Encoding::Utf32.uses_bom());
        assert!(!Encoding::Utf32Be.uses_bom());
        assert!(!Encoding::Utf32Le.uses_bom());
        assert!(Encoding::Utf16.uses_bom());
        assert!(!Encoding::Utf16Be.uses_bom());
        assert!(!Encoding::Utf16Le.uses_bom());
        assert!(!Encoding::Utf8.uses_bom());
        assert!(Encoding::Utf8Sig.uses_bom());
    }

    #[test]
    fn test_family() {
        assert_eq!(Encoding::Utf32Le.family(), Family::Utf32);
        assert_eq!(Encoding::Utf16.family(), Family::Utf16);
        assert_eq!(Encoding::Utf8Sig.family(), Family::Utf8);
        assert_eq!(Family::Utf16.unit_width(), 2);
        assert_eq!(Family::Utf32.unit_width(), 4);
    }

    #[test]
    fn test_frame_reads_bom_order() {
        let frame = Encoding::Utf16.frame(&[0xFF, 0xFE, b'y', 0x00]);
        assert_eq!(frame.scheme, Scheme::Utf16(ByteOrder::Little));
        assert_eq!(frame.bom_len, 2);

        let frame = Encoding::Utf32.frame(&[0x00, 0x00, 0xFE, 0xFF]);
        assert_eq!(frame.scheme, Scheme::Utf32(ByteOrder::Big));
        assert_eq!(frame.bom_len, 4);

        // No BOM: big-endian, nothing skipped
        let frame = Encoding::Utf16.frame(&[0x00, b'y']);
        assert_eq!(frame.scheme, Scheme::Utf16(ByteOrder::Big));
        assert_eq!(frame.bom_len, 0);
    }

    #[test]
    fn test_frame_keeps_bom_for_explicit_order() {
        let frame = Encoding::Utf16Le.frame(&[0xFF, 0xFE, b'y', 0x00]);
        assert_eq!(frame.bom_len, 0);

        assert_eq!(Encoding::Utf8Sig.frame(b"\xEF\xBB\xBFa").bom_len, 3);
        assert_eq!(Encoding::Utf8Sig.frame(b"a").bom_len, 0);
        assert_eq!(Encoding::Utf8.frame(b"\xEF\xBB\xBFa").bom_len, 0);
    }

    #[test]
    fn test_scheme_bom_table() {
        assert_eq!(Scheme::Utf32(ByteOrder::Little).bom(), BOM_UTF32_LE);
        assert_eq!(Scheme::Utf16(ByteOrder::Big).bom(), BOM_UTF16_BE);
        assert_eq!(Scheme::Utf8.bom(), BOM_UTF8);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("UTF-8".parse(), Ok(Encoding::Utf8));
        assert_eq!("utf_8_sig".parse(), Ok(Encoding::Utf8Sig));
        assert_eq!("UTF-8-with-signature".parse(), Ok(Encoding::Utf8Sig));
        assert_eq!("utf_32_be".parse(), Ok(Encoding::Utf32Be));
        assert_eq!("Utf16".parse(), Ok(Encoding::Utf16));
        assert_eq!("latin-1".parse::<Encoding>(), Err(UnknownEncoding));
        assert_eq!("utf".parse::<Encoding>(), Err(UnknownEncoding));
    }

    #[test]
    fn test_name_round_trips_through_parse() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.name().parse(), Ok(encoding));
        }
    }
}
