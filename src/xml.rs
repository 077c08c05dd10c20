use std::cmp;
use std::fmt::{self, Write};

use crate::dom;
use crate::nodes::{Node, NodeValue};

const MAX_INDENT: u32 = 40;

/// Formats a document's AST as XML.
pub fn format_document<'a>(root: Node<'a>, output: &mut dyn Write) -> fmt::Result {
    output.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
    XmlFormatter { output, indent: 0 }.format(root)
}

struct XmlFormatter<'o> {
    output: &'o mut dyn Write,
    indent: u32,
}

impl<'o> XmlFormatter<'o> {
    fn format<'a>(&mut self, node: Node<'a>) -> fmt::Result {
        self.format_node(node, true)?;
        for child in node.children() {
            self.format(child)?;
        }
        self.format_node(node, false)
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..(cmp::min(self.indent, MAX_INDENT)) {
            self.output.write_str(" ")?;
        }
        Ok(())
    }

    fn format_node<'a>(&mut self, node: Node<'a>, entering: bool) -> fmt::Result {
        let ast = node.data.borrow();
        let name = ast.value.xml_node_name();

        if !entering {
            if node.first_child().is_some() {
                self.indent -= 2;
                self.indent()?;
                writeln!(self.output, "</{}>", name)?;
            }
            return Ok(());
        }

        self.indent()?;
        write!(self.output, "<{}", name)?;

        match ast.value {
            NodeValue::Document => (),
            NodeValue::Text(ref literal) => {
                self.output.write_str(" xml:space=\"preserve\">")?;
                dom::escape(self.output, literal)?;
                return writeln!(self.output, "</{}>", name);
            }
            NodeValue::Emoji(ref emoji) => {
                if let Some(ref name) = emoji.name {
                    self.output.write_str(" name=\"")?;
                    dom::escape(self.output, name)?;
                    self.output.write_str("\"")?;
                }
                if let Some(ref style) = emoji.style {
                    self.output.write_str(" style=\"")?;
                    dom::escape(self.output, style)?;
                    self.output.write_str("\"")?;
                }
            }
        }

        if node.first_child().is_some() {
            self.indent += 2;
        } else {
            self.output.write_str(" /")?;
        }
        self.output.write_str(">\n")
    }
}
