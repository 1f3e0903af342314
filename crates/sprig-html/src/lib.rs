//! HTML tokenizer and template helper for sprig.
//!
//! # Scope
//!
//! This crate implements:
//! - **HTML Tokenizer** - a finite state machine producing character, start
//!   tag and end tag tokens
//!   - Data, tag open, end tag open and tag name states
//!   - Attribute states, double-quoted values only
//!   - Self-closing start tags
//!
//! - **Template helper** - joins literal markup with interpolated values and
//!   tokenizes the result
//!
//! # Not Implemented
//!
//! - Comments, DOCTYPE, CDATA
//! - Character references
//! - RCDATA, RAWTEXT and script data states
//! - Single-quoted attribute values
//! - Error recovery: every parse error is fatal

/// Interpolating markup templates.
pub mod template;
/// HTML tokenizer for converting input into tokens.
pub mod tokenizer;

pub use template::{Interpolation, render, tokenize_template};
pub use tokenizer::{
    Attribute, EofPolicy, HTMLTokenizer, LexError, Token, TokenizerOptions, TokenizerState,
    tokenize, tokenize_with,
};
