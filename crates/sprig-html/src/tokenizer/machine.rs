use strum_macros::Display;

use super::error::LexError;
use super::options::{EofPolicy, TokenizerOptions};
use super::token::Token;

/// The tokenizer state machine. Only the states needed for plain elements
/// with double-quoted attributes exist; there are no comment, doctype,
/// character reference or raw text states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Outside any tag. Every character other than `<` is emitted as-is.
    Data,
    /// Just consumed `<`.
    TagOpen,
    /// Just consumed `</`.
    EndTagOpen,
    /// Accumulating a tag name.
    TagName,
    /// Inside a tag, waiting for an attribute name.
    BeforeAttributeName,
    /// Accumulating an attribute name.
    AttributeName,
    /// After an attribute name and some whitespace.
    AfterAttributeName,
    /// After `=`, waiting for the opening quote.
    BeforeAttributeValue,
    /// Inside a double-quoted attribute value.
    AttributeValue,
    /// Just consumed the closing quote of an attribute value.
    AfterAttributeValue,
    /// Consumed `/` inside a tag; only `>` may follow.
    SelfClosingStartTag,
}

/// Tokenizer for a minimal subset of HTML.
///
/// Input is consumed strictly left to right, one character per step of the
/// main loop. The token under construction lives in `current_token` until a
/// `>` emits it; if the input runs out first it is dropped (or reported, see
/// [`EofPolicy`]).
///
/// ```
/// use sprig_html::{HTMLTokenizer, Token};
///
/// let mut tokenizer = HTMLTokenizer::new("<br/>");
/// tokenizer.run().unwrap();
/// assert!(matches!(
///     tokenizer.into_tokens().as_slice(),
///     [Token::StartTag { self_closing: true, .. }]
/// ));
/// ```
pub struct HTMLTokenizer {
    pub(super) state: TokenizerState,
    pub(super) options: TokenizerOptions,
    pub(super) input: String,
    pub(super) current_pos: usize,
    pub(super) current_input_character: Option<char>,
    pub(super) current_token: Option<Token>,
    pub(super) token_stream: Vec<Token>,
    // When true, the next iteration of the main loop will not consume a new character.
    // "Reconsume in the X state" sets this flag.
    pub(super) reconsume: bool,
    pub(super) dropped_incomplete_tag: bool,
}

impl HTMLTokenizer {
    /// Create a new tokenizer for the given input. The initial state is the
    /// data state.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_options(input, TokenizerOptions::default())
    }

    /// Create a new tokenizer with explicit options.
    #[must_use]
    pub fn with_options(input: impl Into<String>, options: TokenizerOptions) -> Self {
        Self {
            state: TokenizerState::Data,
            options,
            input: input.into(),
            current_pos: 0,
            current_input_character: None,
            current_token: None,
            token_stream: Vec::new(),
            reconsume: false,
            dropped_incomplete_tag: false,
        }
    }

    /// Consume the tokenizer and return the token stream.
    /// Call this after `run()` to collect the tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.token_stream
    }

    /// The tokens emitted so far.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.token_stream
    }

    /// The current state of the machine.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// True if the last run ended inside a tag and the unfinished tag was
    /// discarded.
    #[must_use]
    pub const fn dropped_incomplete_tag(&self) -> bool {
        self.dropped_incomplete_tag
    }

    fn handle_data_state(&mut self, c: char) {
        match c {
            // "<" - switch to the tag open state.
            '<' => self.switch_to(TokenizerState::TagOpen),
            // Anything else - emit the current input character as a character token.
            _ => self.emit_character_token(c),
        }
    }

    fn handle_tag_open_state(&mut self, c: char) -> Result<(), LexError> {
        match c {
            // "/" - switch to the end tag open state.
            '/' => {
                self.switch_to(TokenizerState::EndTagOpen);
                Ok(())
            }
            // ASCII alpha - create a new start tag token and reconsume in the
            // tag name state.
            c if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_start_tag());
                self.reconsume_in(TokenizerState::TagName);
                Ok(())
            }
            // Anything else, including "<" and ">".
            found => Err(LexError::InvalidTagStart {
                found,
                position: self.current_char_index(),
            }),
        }
    }

    fn handle_end_tag_open_state(&mut self, c: char) -> Result<(), LexError> {
        match c {
            // ASCII alpha - create a new end tag token and reconsume in the
            // tag name state.
            c if c.is_ascii_alphabetic() => {
                self.current_token = Some(Token::new_end_tag());
                self.reconsume_in(TokenizerState::TagName);
                Ok(())
            }
            // "</>"
            '>' => Err(LexError::MissingEndTagName {
                position: self.current_char_index(),
            }),
            found => Err(LexError::InvalidTagStart {
                found,
                position: self.current_char_index(),
            }),
        }
    }

    fn handle_tag_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
            }
            '/' => self.switch_to(TokenizerState::SelfClosingStartTag),
            '>' => self.emit_current_token(),
            // Anything else - append the lowercase character to the tag name.
            c => {
                if let Some(ref mut token) = self.current_token {
                    token.append_to_tag_name(c);
                }
            }
        }
    }

    fn handle_before_attribute_name_state(&mut self, c: char) {
        match c {
            // Ignore the character.
            c if Self::is_whitespace_char(c) => {}
            '/' => self.switch_to(TokenizerState::SelfClosingStartTag),
            '>' => self.emit_current_token(),
            // Anything else, "=" and quotes included, opens a new attribute
            // named after the current character.
            c => self.open_attribute(c),
        }
    }

    fn handle_attribute_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::AfterAttributeName);
            }
            '/' => self.switch_to(TokenizerState::SelfClosingStartTag),
            '=' => self.switch_to(TokenizerState::BeforeAttributeValue),
            '>' => self.emit_current_token(),
            c => {
                if let Some(ref mut token) = self.current_token {
                    token.append_to_current_attribute_name(c);
                }
            }
        }
    }

    fn handle_after_attribute_name_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {}
            '/' => self.switch_to(TokenizerState::SelfClosingStartTag),
            '=' => self.switch_to(TokenizerState::BeforeAttributeValue),
            '>' => self.emit_current_token(),
            // A valueless attribute was followed by another one.
            c => self.open_attribute(c),
        }
    }

    fn handle_before_attribute_value_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {}
            // The opening quote is consumed, not stored.
            '"' => self.switch_to(TokenizerState::AttributeValue),
            // "<a b=>" - the attribute keeps its empty value.
            '>' => self.emit_current_token(),
            // Unquoted values are read by the quoted value state and run
            // until the next `"`.
            _ => self.reconsume_in(TokenizerState::AttributeValue),
        }
    }

    fn handle_attribute_value_state(&mut self, c: char) {
        match c {
            '"' => self.switch_to(TokenizerState::AfterAttributeValue),
            // Anything else, ">" included, is part of the value.
            c => {
                if let Some(ref mut token) = self.current_token {
                    token.append_to_current_attribute_value(c);
                }
            }
        }
    }

    fn handle_after_attribute_value_state(&mut self, c: char) -> Result<(), LexError> {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.switch_to(TokenizerState::BeforeAttributeName);
                Ok(())
            }
            '/' => {
                self.switch_to(TokenizerState::SelfClosingStartTag);
                Ok(())
            }
            '>' => {
                self.emit_current_token();
                Ok(())
            }
            found => Err(LexError::MissingAttributeWhitespace {
                found,
                position: self.current_char_index(),
            }),
        }
    }

    fn handle_self_closing_start_tag_state(&mut self, c: char) -> Result<(), LexError> {
        match c {
            // ">" - set the self-closing flag of the current tag token and emit it.
            '>' => {
                if let Some(ref mut token) = self.current_token {
                    token.set_self_closing();
                }
                self.emit_current_token();
                Ok(())
            }
            found => Err(LexError::UnexpectedSolidus {
                found,
                position: self.current_char_index(),
            }),
        }
    }

    /// Run the tokenizer to completion.
    ///
    /// Processes the whole input and populates the token stream. Running a
    /// tokenizer a second time is a no-op: the input is already consumed.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`] encountered. Tokens emitted before the
    /// error remain in the stream but callers should treat the run as failed.
    pub fn run(&mut self) -> Result<(), LexError> {
        loop {
            // Each state begins by consuming the next input character,
            // unless we're reconsuming from a previous state transition.
            if self.reconsume {
                self.reconsume = false;
            } else {
                self.current_input_character = self.consume();
            }

            let Some(c) = self.current_input_character else {
                return self.handle_eof();
            };

            match self.state {
                TokenizerState::Data => self.handle_data_state(c),
                TokenizerState::TagOpen => self.handle_tag_open_state(c)?,
                TokenizerState::EndTagOpen => self.handle_end_tag_open_state(c)?,
                TokenizerState::TagName => self.handle_tag_name_state(c),
                TokenizerState::BeforeAttributeName => self.handle_before_attribute_name_state(c),
                TokenizerState::AttributeName => self.handle_attribute_name_state(c),
                TokenizerState::AfterAttributeName => self.handle_after_attribute_name_state(c),
                TokenizerState::BeforeAttributeValue => {
                    self.handle_before_attribute_value_state(c);
                }
                TokenizerState::AttributeValue => self.handle_attribute_value_state(c),
                TokenizerState::AfterAttributeValue => {
                    self.handle_after_attribute_value_state(c)?;
                }
                TokenizerState::SelfClosingStartTag => {
                    self.handle_self_closing_start_tag_state(c)?;
                }
            }
        }
    }

    /// End of input. In the data state there is nothing pending; anywhere
    /// else a tag is still open.
    fn handle_eof(&mut self) -> Result<(), LexError> {
        if self.state == TokenizerState::Data {
            return Ok(());
        }
        match self.options.eof_policy {
            EofPolicy::Drop => {
                self.current_token = None;
                self.dropped_incomplete_tag = true;
                self.switch_to(TokenizerState::Data);
                Ok(())
            }
            EofPolicy::Error => Err(LexError::UnexpectedEof { state: self.state }),
        }
    }
}

/// Tokenize `input` with the default options.
///
/// # Errors
///
/// Returns a [`LexError`] if the markup is malformed.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(input, TokenizerOptions::default())
}

/// Tokenize `input` with explicit options.
///
/// # Errors
///
/// Returns a [`LexError`] if the markup is malformed, or if the input ends
/// inside a tag under [`EofPolicy::Error`].
pub fn tokenize_with(input: &str, options: TokenizerOptions) -> Result<Vec<Token>, LexError> {
    let mut tokenizer = HTMLTokenizer::with_options(input, options);
    tokenizer.run()?;
    Ok(tokenizer.into_tokens())
}
