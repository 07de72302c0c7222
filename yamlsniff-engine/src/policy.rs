//! Error handling policies for malformed input

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::EngineError;

/// First code point of the range `SurrogateEscape` maps bytes into
/// (Supplementary Private Use Area-B, last 256 code points)
pub const ESCAPE_BASE: u32 = 0x10_FF00;

/// What to do with a malformed byte subsequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ErrorPolicy {
    /// Fail with a `DecodeError`
    #[default]
    Strict,
    /// Drop the bytes
    Ignore,
    /// Emit one U+FFFD per malformed subsequence
    Replace,
    /// Emit `\xNN` per malformed byte
    #[cfg_attr(feature = "serde", serde(alias = "backslash-escape"))]
    BackslashReplace,
    /// Emit one private-use code point per malformed byte, see [`ESCAPE_BASE`]
    #[cfg_attr(feature = "serde", serde(alias = "surrogate-escape"))]
    SurrogateEscape,
}

impl ErrorPolicy {
    /// The policies that never fail
    pub const LENIENT: [ErrorPolicy; 4] = [
        ErrorPolicy::Ignore,
        ErrorPolicy::Replace,
        ErrorPolicy::BackslashReplace,
        ErrorPolicy::SurrogateEscape,
    ];

    /// Policy name as used in configuration
    pub fn name(self) -> &'static str {
        match self {
            ErrorPolicy::Strict => "strict",
            ErrorPolicy::Ignore => "ignore",
            ErrorPolicy::Replace => "replace",
            ErrorPolicy::BackslashReplace => "backslashreplace",
            ErrorPolicy::SurrogateEscape => "surrogateescape",
        }
    }

    /// Whether malformed input is substituted instead of rejected
    pub fn is_lenient(self) -> bool {
        self != ErrorPolicy::Strict
    }

    /// Byte a `SurrogateEscape` code point stands for
    pub fn escaped_byte(ch: char) -> Option<u8> {
        u32::from(ch)
            .checked_sub(ESCAPE_BASE)
            .and_then(|offset| u8::try_from(offset).ok())
    }

    /// Append the substitution for `bad` to `out`.
    ///
    /// Returns `false` under `Strict`, leaving `out` untouched.
    pub(crate) fn substitute(self, bad: &[u8], out: &mut String) -> bool {
        match self {
            ErrorPolicy::Strict => return false,
            ErrorPolicy::Ignore => {}
            ErrorPolicy::Replace => out.push(char::REPLACEMENT_CHARACTER),
            ErrorPolicy::BackslashReplace => {
                for byte in bad {
                    // Writing to a String cannot fail
                    let _ = write!(out, "\\x{byte:02x}");
                }
            }
            ErrorPolicy::SurrogateEscape => {
                out.extend(
                    bad.iter()
                        .filter_map(|byte| char::from_u32(ESCAPE_BASE + u32::from(*byte))),
                );
            }
        }
        true
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ErrorPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(ErrorPolicy::Strict),
            "ignore" => Ok(ErrorPolicy::Ignore),
            "replace" => Ok(ErrorPolicy::Replace),
            "backslashreplace" | "backslash-escape" => Ok(ErrorPolicy::BackslashReplace),
            "surrogateescape" | "surrogate-escape" => Ok(ErrorPolicy::SurrogateEscape),
            other => Err(EngineError::ConfigError(format!(
                "unknown error policy '{other}'"
            ))),
        }
    }
}
