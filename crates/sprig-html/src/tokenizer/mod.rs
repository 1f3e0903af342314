//! HTML tokenizer module.
//!
//! A finite state machine over a small subset of HTML: text, start tags,
//! end tags, self-closing tags and double-quoted attributes.

/// Tokenizer errors.
pub mod error;
/// Helper methods for tokenizer state transitions.
pub mod helpers;
/// HTML tokenizer state machine implementation.
pub mod machine;
/// Tokenizer configuration.
pub mod options;
/// Token types produced by the tokenizer.
pub mod token;

pub use error::LexError;
pub use machine::{HTMLTokenizer, TokenizerState, tokenize, tokenize_with};
pub use options::{EofPolicy, TokenizerOptions};
pub use token::{Attribute, Token};
