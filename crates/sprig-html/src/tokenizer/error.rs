use thiserror::Error;

use super::machine::TokenizerState;

/// A fatal tokenization error.
///
/// Every variant except [`LexError::UnexpectedEof`] is raised at the offending
/// character; `position` is that character's zero-based index in the input,
/// counted in characters rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The character after `<` (or after `</`) is not an ASCII letter.
    #[error("invalid first character of tag name {found:?} at position {position}")]
    InvalidTagStart {
        /// The offending character.
        found: char,
        /// Character index of `found`.
        position: usize,
    },

    /// `</>`: an end tag was closed before any name was given.
    #[error("missing end tag name at position {position}")]
    MissingEndTagName {
        /// Character index of the `>`.
        position: usize,
    },

    /// A quoted attribute value is directly followed by another character,
    /// as in `<a b="c"d="e">`.
    #[error("missing whitespace between attributes: found {found:?} at position {position}")]
    MissingAttributeWhitespace {
        /// The offending character.
        found: char,
        /// Character index of `found`.
        position: usize,
    },

    /// A `/` inside a tag is followed by something other than `>`.
    #[error("unexpected solidus in tag: found {found:?} at position {position}")]
    UnexpectedSolidus {
        /// The offending character.
        found: char,
        /// Character index of `found`.
        position: usize,
    },

    /// Input ended inside a tag. Only raised with [`EofPolicy::Error`](super::EofPolicy::Error).
    #[error("unexpected end of input in {state} state")]
    UnexpectedEof {
        /// The state the tokenizer was in when the input ran out.
        state: TokenizerState,
    },
}

impl LexError {
    /// Character index of the offending character, if the error has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidTagStart { position, .. }
            | Self::MissingEndTagName { position }
            | Self::MissingAttributeWhitespace { position, .. }
            | Self::UnexpectedSolidus { position, .. } => Some(*position),
            Self::UnexpectedEof { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LexError::InvalidTagStart {
            found: '1',
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "invalid first character of tag name '1' at position 1"
        );

        let err = LexError::UnexpectedEof {
            state: TokenizerState::TagName,
        };
        assert_eq!(err.to_string(), "unexpected end of input in TagName state");
        assert_eq!(err.position(), None);
    }
}
