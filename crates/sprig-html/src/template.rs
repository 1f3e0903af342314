//! Interpolating markup templates.
//!
//! A template is a list of literal markup fragments with one value slot
//! between each pair of fragments, the shape of a JavaScript tagged template
//! literal. [`render`] joins them into a single markup string and
//! [`tokenize_template`] feeds that string straight into the tokenizer.
//!
//! ```
//! use sprig_html::{Interpolation, render};
//!
//! let items = vec!["<li>a</li>".to_string(), "<li>b</li>".to_string()];
//! let markup = render(
//!     &["<ul class=\"", "\">", "</ul>"],
//!     &[Interpolation::from("list"), Interpolation::from(items)],
//! );
//! assert_eq!(markup, "<ul class=\"list\"><li>a</li><li>b</li></ul>");
//! ```

use crate::tokenizer::{LexError, Token, tokenize};

/// A value substituted between two literal fragments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Inserted verbatim. An empty string inserts nothing.
    Text(String),
    /// Items inserted back to back with no separator.
    List(Vec<String>),
    /// Inserts nothing.
    #[default]
    Absent,
}

impl Interpolation {
    /// The text this value contributes to the rendered markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.concat(),
            Self::Absent => String::new(),
        }
    }
}

impl From<&str> for Interpolation {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Interpolation {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for Interpolation {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for Interpolation {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Join literal fragments and interpolated values.
///
/// Fragment `i` is followed by value `i`. Values without a following fragment
/// are ignored, and fragments without a value are appended as-is, so a
/// template with `n` fragments normally carries `n - 1` values.
#[must_use]
pub fn render(strings: &[&str], expressions: &[Interpolation]) -> String {
    strings
        .iter()
        .enumerate()
        .fold(String::new(), |mut result, (index, string)| {
            result.push_str(string);
            if let Some(expression) = expressions.get(index) {
                result.push_str(&expression.to_markup());
            }
            result
        })
}

/// Render a template and tokenize the resulting markup.
///
/// # Errors
///
/// Returns a [`LexError`] if the rendered markup is malformed.
pub fn tokenize_template(
    strings: &[&str],
    expressions: &[Interpolation],
) -> Result<Vec<Token>, LexError> {
    tokenize(&render(strings, expressions))
}
