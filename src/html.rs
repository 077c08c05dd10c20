//! The HTML renderer for documents.

use std::fmt::{self, Write};

use crate::dom::{self, write_html};
use crate::nodes::{Node, NodeValue};
use crate::options::{Options, Plugins};
use crate::render::render_element;

/// Formats a document as HTML, modified by the given options.
pub fn format_document<'a>(
    root: Node<'a>,
    options: &Options,
    output: &mut dyn Write,
) -> fmt::Result {
    format_document_with_plugins(root, options, output, &Plugins::default())
}

/// Formats a document as HTML, modified by the given options. Accepts custom plugins.
pub fn format_document_with_plugins<'a>(
    root: Node<'a>,
    options: &Options,
    output: &mut dyn Write,
    plugins: &Plugins,
) -> fmt::Result {
    for node in root.children() {
        match node.data.borrow().value {
            NodeValue::Text(ref literal) => dom::escape(output, literal)?,
            NodeValue::Emoji(ref emoji) => {
                write_html(&render_element(emoji, options, plugins), output)?
            }
            NodeValue::Document => (),
        }
    }
    Ok(())
}
