//! Plain-text extraction.

use crate::diagnostics::Diagnostic;
use crate::nodes::{Node, NodeEmoji, NodeValue};
use crate::options::Plugins;

/// Extracts the plain text of an emoji reference.
///
/// A reference without a name is reported once to the diagnostics sink and
/// yields `Some("")`.  Otherwise the result is whatever the glyph lookup
/// returns, so an unknown name yields `None`: unlike rendering, there is no
/// literal `:name:` fallback here.
pub fn to_plain_text(emoji: &NodeEmoji, plugins: &Plugins) -> Option<String> {
    let name = match emoji.truthy_name() {
        Some(name) => name,
        None => {
            plugins
                .diagnostics()
                .report(&Diagnostic::missing_name(emoji));
            return Some(String::new());
        }
    };

    plugins.glyphs().glyph(name)
}

/// Extracts the plain text of a whole document.
///
/// Emoji references whose lookup finds nothing contribute no text.
pub fn format_document<'a>(root: Node<'a>, plugins: &Plugins) -> String {
    let mut out = String::new();
    for node in root.children() {
        match node.data.borrow().value {
            NodeValue::Text(ref literal) => out.push_str(literal),
            NodeValue::Emoji(ref emoji) => {
                if let Some(text) = to_plain_text(emoji, plugins) {
                    out.push_str(&text);
                }
            }
            NodeValue::Document => (),
        }
    }
    out
}
