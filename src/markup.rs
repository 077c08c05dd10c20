//! The `:name:` markup form, in both directions.
//!
//! Finding emoji spans in free text is the tokenizer's job.  This module
//! starts from a token the tokenizer already matched, and ends at the markup
//! string a node serializes to.

use std::fmt::{self, Write};

use crate::nodes::{Node, NodeEmoji, NodeValue};

/// An emoji token as matched by an upstream markup tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The raw name between the colons, surrounding whitespace included.
    pub markup: String,
}

impl Token {
    /// Creates a token from the matched marker string.
    pub fn new(markup: impl Into<String>) -> Self {
        Token {
            markup: markup.into(),
        }
    }
}

/// Builds an emoji reference from a matched token.
///
/// The name is the trimmed marker string.  It is not checked against any
/// glyph table: unknown names are kept and left for rendering to deal with.
///
/// ```rust
/// # use emojinode::{parse_token, Token};
/// assert_eq!(parse_token(&Token::new(" tada ")).name.as_deref(), Some("tada"));
/// ```
pub fn parse_token(token: &Token) -> NodeEmoji {
    NodeEmoji {
        name: Some(token.markup.trim().to_string()),
        style: None,
    }
}

/// Writes the markup form of an emoji reference: `:name:`, or nothing when
/// the name is absent or empty.
pub fn write_markup(emoji: &NodeEmoji, output: &mut dyn Write) -> fmt::Result {
    if let Some(name) = emoji.truthy_name() {
        write!(output, ":{}:", name)?;
    }
    Ok(())
}

/// Returns the markup form of an emoji reference.
pub fn to_markup(emoji: &NodeEmoji) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_markup(emoji, &mut out);
    out
}

/// Formats a document back into markup.
pub fn format_document<'a>(root: Node<'a>, output: &mut dyn Write) -> fmt::Result {
    for node in root.children() {
        match node.data.borrow().value {
            NodeValue::Text(ref literal) => output.write_str(literal)?,
            NodeValue::Emoji(ref emoji) => write_markup(emoji, output)?,
            NodeValue::Document => (),
        }
    }
    Ok(())
}
