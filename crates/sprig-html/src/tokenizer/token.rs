use std::fmt;

use serde::Serialize;

/// An attribute on a start tag token.
///
/// Attributes are kept in the order they were opened. Duplicate names are not
/// merged: each occurrence in the markup produces its own entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    /// Attribute name, lowercased as it is accumulated.
    pub name: String,
    /// Attribute value, lowercased as it is accumulated.
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// A lexical unit produced by the tokenizer.
///
/// The JSON form uses camelCase field names (`tagName`, `isSelfClosing`)
/// and a `type` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Token {
    /// A single character of text outside any tag.
    Character {
        /// The character itself.
        data: char,
    },

    /// An opening tag such as `<div class="x">` or `<br/>`.
    StartTag {
        /// Lowercased tag name. Never empty.
        #[serde(rename = "tagName")]
        name: String,
        /// Set when the tag was closed with `/>`.
        #[serde(rename = "isSelfClosing")]
        self_closing: bool,
        /// Attributes in source order.
        attributes: Vec<Attribute>,
    },

    /// A closing tag such as `</div>`.
    EndTag {
        /// Lowercased tag name. Never empty.
        #[serde(rename = "tagName")]
        name: String,
    },
}

impl Token {
    /// A start tag is created with an empty name, the self-closing flag unset
    /// and no attributes.
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// Create a new end tag token with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
        }
    }

    /// Create a character token with the given character.
    #[must_use]
    pub const fn new_character(c: char) -> Self {
        Self::Character { data: c }
    }

    /// Returns the tag name for start and end tags.
    #[must_use]
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => Some(name),
            Self::Character { .. } => None,
        }
    }

    /// Returns true if this is a character token.
    #[must_use]
    pub const fn is_character(&self) -> bool {
        matches!(self, Self::Character { .. })
    }

    // Mutation helpers for use during tokenization. Each one lowercases the
    // character it is given before appending it.
    //
    // End tags only ever keep their name: attribute and self-closing updates
    // on an end tag are discarded, so `</p class="x">` still yields a bare
    // `</p>`.

    /// Append the lowercase form of `c` to the tag name.
    pub fn append_to_tag_name(&mut self, c: char) {
        match self {
            Self::StartTag { name, .. } | Self::EndTag { name } => name.extend(c.to_lowercase()),
            Self::Character { .. } => {}
        }
    }

    /// Set the self-closing flag of a start tag.
    pub const fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    /// Open a new attribute whose name is the lowercase form of `c` and whose
    /// value is empty.
    pub fn start_new_attribute(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self {
            attributes.push(Attribute::new(c.to_lowercase().collect(), String::new()));
        }
    }

    /// Append the lowercase form of `c` to the name of the most recently
    /// opened attribute.
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        if let Some(attr) = self.current_attribute_mut() {
            attr.name.extend(c.to_lowercase());
        }
    }

    /// Append the lowercase form of `c` to the value of the most recently
    /// opened attribute.
    pub fn append_to_current_attribute_value(&mut self, c: char) {
        if let Some(attr) = self.current_attribute_mut() {
            attr.value.extend(c.to_lowercase());
        }
    }

    fn current_attribute_mut(&mut self) -> Option<&mut Attribute> {
        match self {
            Self::StartTag { attributes, .. } => attributes.last_mut(),
            Self::EndTag { .. } | Self::Character { .. } => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                for attr in attributes {
                    write!(f, " {}=\"{}\"", attr.name, attr.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => {
                write!(f, "</{name}>")
            }
            Self::Character { data } => {
                // Show whitespace characters explicitly
                match data {
                    '\n' => write!(f, "Character(\\n)"),
                    '\t' => write!(f, "Character(\\t)"),
                    ' ' => write!(f, "Character(SPACE)"),
                    c => write!(f, "Character({c})"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_name_is_lowercased() {
        let mut token = Token::new_start_tag();
        for c in "DiV".chars() {
            token.append_to_tag_name(c);
        }
        assert_eq!(token.tag_name(), Some("div"));
    }

    #[test]
    fn test_unicode_lowercase() {
        let mut token = Token::new_start_tag();
        token.start_new_attribute('T');
        for c in "ЗАРПЛАТА".chars() {
            token.append_to_current_attribute_value(c);
        }
        match token {
            Token::StartTag { attributes, .. } => {
                assert_eq!(attributes[0].name, "t");
                assert_eq!(attributes[0].value, "зарплата");
            }
            _ => panic!("Expected StartTag token"),
        }
    }

    #[test]
    fn test_end_tag_discards_attributes_and_flag() {
        let mut token = Token::new_end_tag();
        token.append_to_tag_name('p');
        token.start_new_attribute('c');
        token.append_to_current_attribute_name('l');
        token.append_to_current_attribute_value('x');
        token.set_self_closing();
        assert_eq!(
            token,
            Token::EndTag {
                name: "p".to_string()
            }
        );
    }

    #[test]
    fn test_value_appends_to_last_attribute() {
        let mut token = Token::new_start_tag();
        token.start_new_attribute('a');
        token.start_new_attribute('b');
        token.append_to_current_attribute_value('V');
        match token {
            Token::StartTag { attributes, .. } => {
                assert_eq!(attributes[0].value, "");
                assert_eq!(attributes[1].value, "v");
            }
            _ => panic!("Expected StartTag token"),
        }
    }

    #[test]
    fn test_display() {
        let token = Token::StartTag {
            name: "br".to_string(),
            self_closing: true,
            attributes: vec![Attribute::new("id".to_string(), "x".to_string())],
        };
        assert_eq!(token.to_string(), "<br id=\"x\" />");
        assert_eq!(Token::new_character(' ').to_string(), "Character(SPACE)");
        assert_eq!(
            Token::EndTag {
                name: "br".to_string()
            }
            .to_string(),
            "</br>"
        );
    }
}
