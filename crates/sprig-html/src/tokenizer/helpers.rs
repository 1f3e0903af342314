//! Helper functions for the HTML tokenizer.
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions ("Switch to", "Reconsume in")
//! - Input/character handling ("Consume the next input character")
//! - Token emission ("Emit the current token")
//! - Attribute helpers

use super::machine::{HTMLTokenizer, TokenizerState};
use super::token::Token;

// =============================================================================
// State Transition Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the X state"
    ///
    /// Transitions to a new state. The next character will be consumed on the
    /// next iteration of the main loop.
    #[allow(clippy::missing_const_for_fn)]
    pub(super) fn switch_to(&mut self, new_state: TokenizerState) {
        self.trace_transition(new_state, false);
        self.state = new_state;
    }

    /// "Reconsume in the X state"
    ///
    /// Transitions to a new state without consuming the current character.
    /// The same character will be processed again in the new state.
    #[allow(clippy::missing_const_for_fn)]
    pub(super) fn reconsume_in(&mut self, new_state: TokenizerState) {
        self.trace_transition(new_state, true);
        self.reconsume = true;
        self.state = new_state;
    }

    #[cfg(feature = "tokenizer-trace")]
    fn trace_transition(&self, new_state: TokenizerState, reconsume: bool) {
        let verb = if reconsume { "reconsume" } else { "switch" };
        eprintln!(
            "[sprig tokenizer] {:?} @ {}: {} -> {new_state} ({verb})",
            self.current_input_character,
            self.current_char_index(),
            self.state,
        );
    }

    #[cfg(not(feature = "tokenizer-trace"))]
    #[allow(clippy::unused_self)]
    const fn trace_transition(&self, _new_state: TokenizerState, _reconsume: bool) {}
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Consume the next input character"
    ///
    /// Returns the character at the current position and advances the position.
    /// Returns None if we've reached the end of input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        Some(c)
    }

    /// Character index of the current input character.
    ///
    /// `current_pos` is a byte offset just past the current character, so the
    /// index is recomputed by counting. This is only needed for error
    /// reporting and tracing.
    pub(super) fn current_char_index(&self) -> usize {
        self.input[..self.current_pos]
            .chars()
            .count()
            .saturating_sub(1)
    }

    /// Tag whitespace: U+0009 TAB, U+000A LF and U+0020 SPACE.
    ///
    /// NOTE: form feed and carriage return are not whitespace here; inside a
    /// tag they are ordinary name or value characters.
    pub(super) const fn is_whitespace_char(input_char: char) -> bool {
        matches!(input_char, ' ' | '\t' | '\n')
    }
}

// =============================================================================
// Token Emission Helpers
// =============================================================================

impl HTMLTokenizer {
    /// "Switch to the data state. Emit the current token."
    pub(super) fn emit_current_token(&mut self) {
        self.switch_to(TokenizerState::Data);
        if let Some(token) = self.current_token.take() {
            self.token_stream.push(token);
        }
    }

    /// "Emit the current input character as a character token."
    ///
    /// Emits a character token directly without going through `current_token`.
    pub(super) fn emit_character_token(&mut self, c: char) {
        self.token_stream.push(Token::new_character(c));
    }
}

// =============================================================================
// Attribute Helpers
// =============================================================================

impl HTMLTokenizer {
    /// Start a new attribute in the current tag token, named after `c`, and
    /// switch to the attribute name state.
    ///
    /// The character is consumed here rather than reconsumed, so an attribute
    /// name may start with any character that is not whitespace, `/` or `>`.
    pub(super) fn open_attribute(&mut self, c: char) {
        if let Some(ref mut token) = self.current_token {
            token.start_new_attribute(c);
        }
        self.switch_to(TokenizerState::AttributeName);
    }
}
