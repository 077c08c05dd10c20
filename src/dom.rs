//! Rendered element descriptions.
//!
//! An [`Element`] is what the render adapter produces and what
//! reconstruction consumes.  It is a description, not a live DOM: the host
//! decides how to materialise it.  [`write_html`] gives the HTML form.

use std::fmt::{self, Write};

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomNode {
    /// A nested element.
    Element(Element),
    /// A text run.
    Text(String),
}

/// An element with a tag, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// The tag name.
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Child nodes.
    pub children: Vec<DomNode>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attrs: vec![],
            children: vec![],
        }
    }

    /// Builder-style: sets an attribute, replacing any earlier value.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style: appends a text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(DomNode::Text(text.into()));
        self
    }

    /// Sets an attribute, replacing any earlier value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Returns an attribute's value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over the whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_ascii_whitespace()
    }

    /// Whether `class` appears in the `class` attribute.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// The concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            DomNode::Text(t) => out.push_str(t),
            DomNode::Element(e) => collect_text(e, out),
        }
    }
}

/// Writes `buffer` with `&`, `<`, `>` and `"` escaped.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    let mut offset = 0;
    for (i, byte) in buffer.bytes().enumerate() {
        let esc = match byte {
            b'"' => "&quot;",
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            _ => continue,
        };
        output.write_str(&buffer[offset..i])?;
        output.write_str(esc)?;
        offset = i + 1;
    }
    output.write_str(&buffer[offset..])
}

/// Formats an element as HTML.
pub fn write_html(element: &Element, output: &mut dyn Write) -> fmt::Result {
    write!(output, "<{}", element.tag)?;
    for (name, value) in &element.attrs {
        write!(output, " {}=\"", name)?;
        escape(output, value)?;
        output.write_str("\"")?;
    }
    output.write_str(">")?;
    for child in &element.children {
        match child {
            DomNode::Text(t) => escape(output, t)?,
            DomNode::Element(e) => write_html(e, output)?,
        }
    }
    write!(output, "</{}>", element.tag)
}
