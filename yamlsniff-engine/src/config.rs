//! Configuration types for the engine

use crate::policy::ErrorPolicy;

/// Decoder configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How malformed byte sequences are handled
    pub error_policy: ErrorPolicy,
}

impl DecoderConfig {
    /// Fail on the first malformed sequence
    pub fn strict() -> Self {
        Self::default()
    }

    /// Substitute U+FFFD for malformed sequences
    pub fn lenient() -> Self {
        Self {
            error_policy: ErrorPolicy::Replace,
        }
    }

    /// Use the given policy
    pub fn with_policy(error_policy: ErrorPolicy) -> Self {
        Self { error_policy }
    }
}
