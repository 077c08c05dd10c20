//! The structural schema of the emoji node, and reconstruction of a node from
//! a previously rendered element.

use crate::dom::Element;
use crate::nodes::NodeEmoji;
use crate::options::Options;

/// The node type name under which a host registers the spec.
pub const EMOJI_NODE_NAME: &str = "emoji";

/// An attribute declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttrSpec {
    /// The attribute's name.
    pub name: &'static str,
    /// The default value; `None` means the attribute is undefined by default.
    pub default: Option<&'static str>,
}

/// How whitespace inside a matched element is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreserveWhitespace {
    /// Collapse whitespace.
    Collapse,
    /// Keep whitespace, but normalise newlines to spaces.
    Preserve,
    /// Keep all whitespace verbatim.
    Full,
}

/// A rule matching rendered elements that should become this node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
    /// The tag to match.
    pub tag: &'static str,
    /// A class the element must carry.
    pub class: &'static str,
    /// Whitespace handling inside the matched element.
    pub preserve_whitespace: PreserveWhitespace,
}

/// The shape and constraints of a node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeSpec {
    /// The node type's name.
    pub name: &'static str,
    /// Declared attributes with their defaults.
    pub attrs: &'static [AttrSpec],
    /// Whether the node is inline.
    pub inline: bool,
    /// The content expression.
    pub content: &'static str,
    /// The marks allowed on the content; empty allows none.
    pub marks: &'static str,
    /// The group the node belongs to.
    pub group: &'static str,
    /// Whether the node can be selected as a whole.
    pub selectable: bool,
    /// Rules for reconstructing the node from rendered elements.
    pub parse_rules: &'static [ParseRule],
}

impl NodeSpec {
    /// Looks up an attribute declaration by name.
    pub fn attr(&self, name: &str) -> Option<&AttrSpec> {
        self.attrs.iter().find(|a| a.name == name)
    }

    /// Whether marks of any kind may be applied to the node's content.
    pub fn allows_marks(&self) -> bool {
        !self.marks.is_empty()
    }
}

static EMOJI_SPEC: NodeSpec = NodeSpec {
    name: EMOJI_NODE_NAME,
    attrs: &[
        AttrSpec {
            name: "style",
            default: Some(""),
        },
        AttrSpec {
            name: "data-name",
            default: None,
        },
    ],
    inline: true,
    content: "text*",
    marks: "",
    group: "inline",
    selectable: false,
    parse_rules: &[ParseRule {
        tag: "strong",
        class: "emoji",
        preserve_whitespace: PreserveWhitespace::Full,
    }],
};

/// The emoji node's spec, for registration with a host's schema.
pub fn emoji_spec() -> &'static NodeSpec {
    &EMOJI_SPEC
}

/// The outcome of trying to reconstruct an emoji reference from an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMatch {
    /// The element is an emoji reference with these attributes.
    Match(NodeEmoji),
    /// The element is not an emoji reference; the caller should interpret it
    /// some other way.
    NoMatch,
}

impl ParseMatch {
    /// Converts into an `Option`, dropping the distinction's name.
    pub fn into_option(self) -> Option<NodeEmoji> {
        match self {
            ParseMatch::Match(e) => Some(e),
            ParseMatch::NoMatch => None,
        }
    }

    /// Whether this is a match.
    pub fn is_match(&self) -> bool {
        matches!(*self, ParseMatch::Match(..))
    }
}

/// Reconstructs an emoji reference from a rendered element.
///
/// The element must have the configured tag, carry the marker class, and have
/// a non-empty name attribute.  Elements rendered through the unknown-name
/// fallback have no name attribute and therefore do not match; they read back
/// as their literal `:name:` text.
///
/// ```rust
/// # use emojinode::{parse_element, Element, NodeEmoji, Options, ParseMatch};
/// let options = Options::default();
/// let el = Element::new("strong")
///     .with_attr("class", "emoji smile")
///     .with_attr("data-name", "smile");
/// assert_eq!(parse_element(&el, &options), ParseMatch::Match(NodeEmoji::new("smile")));
///
/// let fallback = Element::new("strong").with_attr("class", "emoji").with_text(":nope:");
/// assert_eq!(parse_element(&fallback, &options), ParseMatch::NoMatch);
/// ```
pub fn parse_element(element: &Element, options: &Options) -> ParseMatch {
    let render = &options.render;
    if !element.tag.eq_ignore_ascii_case(&render.tag) || !element.has_class(&render.marker_class)
    {
        return ParseMatch::NoMatch;
    }

    match element.attr(&render.name_attribute) {
        Some(name) if !name.is_empty() => ParseMatch::Match(NodeEmoji::new(name)),
        _ => {
            tracing::debug!(tag = %element.tag, "emoji marker element without a name");
            ParseMatch::NoMatch
        }
    }
}
