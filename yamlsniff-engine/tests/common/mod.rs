//! Shared fixtures: every UTF layout a test stream can be written in

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use yamlsniff_detect::{encode, encode_scheme, ByteOrder, Encoding, Scheme};

pub const TEST_STRINGS: [&str; 4] = [
    "",
    "y",
    "yaml",
    "\u{1F1FE}\u{2060}\u{1F1E6}\u{2060}\u{1F1F2}\u{2060}\u{1F1F1}\u{2060}\u{2757}",
];

/// A way of writing a stream: one of the canonical encodings, or an
/// explicit-endian layout with a BOM that detection reports as the generic
/// `UTF-16`/`UTF-32`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Canonical(Encoding),
    Signed(Scheme),
}

impl Codec {
    pub fn all() -> Vec<Codec> {
        let mut codecs: Vec<Codec> = Encoding::ALL.into_iter().map(Codec::Canonical).collect();
        codecs.extend(
            [
                Scheme::Utf32(ByteOrder::Big),
                Scheme::Utf32(ByteOrder::Little),
                Scheme::Utf16(ByteOrder::Big),
                Scheme::Utf16(ByteOrder::Little),
            ]
            .map(Codec::Signed),
        );
        codecs
    }

    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Codec::Canonical(encoding) => encode(text, encoding),
            Codec::Signed(scheme) => encode_scheme(text, scheme, true),
        }
    }

    pub fn uses_bom(self) -> bool {
        match self {
            Codec::Canonical(encoding) => encoding.uses_bom(),
            Codec::Signed(_) => true,
        }
    }

    pub fn is_test_only(self) -> bool {
        matches!(self, Codec::Signed(_))
    }

    /// Identifier detection is expected to report for this codec
    pub fn canonical(self) -> Encoding {
        match self {
            Codec::Canonical(encoding) => encoding,
            Codec::Signed(Scheme::Utf32(_)) => Encoding::Utf32,
            Codec::Signed(Scheme::Utf16(_)) => Encoding::Utf16,
            Codec::Signed(Scheme::Utf8) => Encoding::Utf8Sig,
        }
    }

    pub fn file_name(self) -> String {
        match self {
            Codec::Canonical(encoding) => encoding.name().to_string(),
            Codec::Signed(scheme) => format!("{scheme:?}-sig"),
        }
    }
}

/// Whether `text` written with `codec` can be detected correctly
pub fn is_detectable(text: &str, codec: Codec) -> bool {
    codec.uses_bom() || text.chars().next().is_some_and(|ch| ch.is_ascii())
}

/// A temporary directory holding `text` written once per detectable codec
pub struct Workspace {
    pub dir: TempDir,
    pub files: Vec<(Codec, PathBuf)>,
}

impl Workspace {
    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|(_, path)| path.clone()).collect()
    }
}

pub fn workspace_in_many_codecs(text: &str) -> Workspace {
    let dir = TempDir::new().unwrap();
    let files = Codec::all()
        .into_iter()
        .filter(|codec| is_detectable(text, *codec))
        .map(|codec| {
            let path = dir.path().join(format!("{}.yaml", codec.file_name()));
            fs::write(&path, codec.encode(text)).unwrap();
            (codec, path)
        })
        .collect();
    Workspace { dir, files }
}
