use serde::{Deserialize, Serialize};

/// What to do when the input ends while a tag is still open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EofPolicy {
    /// Silently discard the unfinished tag. `<div` tokenizes to nothing.
    #[default]
    Drop,
    /// Fail with [`LexError::UnexpectedEof`](super::LexError::UnexpectedEof).
    Error,
}

/// Tokenizer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Handling of a tag left open at end of input.
    pub eof_policy: EofPolicy,
}

impl TokenizerOptions {
    /// Options that reject unterminated tags.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            eof_policy: EofPolicy::Error,
        }
    }
}
