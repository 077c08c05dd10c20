//! The document AST.

use crate::arena_tree;
use std::cell::RefCell;

/// The core AST node enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    /// The root of every document.  Contains **inlines**.
    Document,

    /// **Inline**.  Textual content.  All text in a document is contained in
    /// a `Text` node.
    Text(String),

    /// **Inline**.  An emoji reference, written `:name:` in markup.
    ///
    /// The content model permits plain text children, but in practice the
    /// node carries none; it occupies a single position in the document.
    Emoji(NodeEmoji),
}

impl NodeValue {
    /// Indicates whether this node is an inline node.
    pub fn inline(&self) -> bool {
        matches!(*self, NodeValue::Text(..) | NodeValue::Emoji(..))
    }

    /// Return a reference to the text of a `Text` inline, if this node is one.
    pub fn text(&self) -> Option<&String> {
        match *self {
            NodeValue::Text(ref t) => Some(t),
            _ => None,
        }
    }

    /// Return a reference to the emoji reference, if this node is one.
    pub fn emoji(&self) -> Option<&NodeEmoji> {
        match *self {
            NodeValue::Emoji(ref e) => Some(e),
            _ => None,
        }
    }

    /// The number of positions this node occupies in its parent.
    pub fn size(&self) -> usize {
        match *self {
            NodeValue::Document => 0,
            NodeValue::Text(ref t) => t.chars().count(),
            NodeValue::Emoji(..) => 1,
        }
    }

    pub(crate) fn xml_node_name(&self) -> &'static str {
        match *self {
            NodeValue::Document => "document",
            NodeValue::Text(..) => "text",
            NodeValue::Emoji(..) => "emoji",
        }
    }
}

/// The attributes of an emoji reference.
///
/// Both attributes are optional.  An absent `name` is a visible case in every
/// adapter: it renders as `:undefined:`, exports as nothing, and is reported
/// as a data-integrity problem by plain-text extraction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct NodeEmoji {
    /// The canonical emoji name, e.g. `smile`.
    pub name: Option<String>,

    /// A freeform presentation hint.  `None` stands for the default, `""`.
    pub style: Option<String>,
}

impl NodeEmoji {
    /// Creates a reference to the named emoji with no style hint.
    pub fn new(name: impl Into<String>) -> Self {
        NodeEmoji {
            name: Some(name.into()),
            style: None,
        }
    }

    /// The name, if it is present and non-empty.
    ///
    /// Every adapter branches on this rather than on `name` directly, so that
    /// `Some("")` and `None` behave alike.
    pub fn truthy_name(&self) -> Option<&str> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }

    /// The style hint, with the default applied.
    pub fn style(&self) -> &str {
        self.style.as_deref().unwrap_or("")
    }
}

/// A single node in the document AST.
///
/// The struct contains the node's value and nothing else; positions are
/// derived from the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    /// The node value itself.
    pub value: NodeValue,
}

impl Ast {
    /// Create a new AST node with the given value.
    pub fn new(value: NodeValue) -> Self {
        Ast { value }
    }
}

impl From<NodeValue> for Ast {
    fn from(value: NodeValue) -> Self {
        Ast::new(value)
    }
}

/// The type of a node within the document.
///
/// It is bound by the lifetime `'a`, which corresponds to the `Arena` nodes
/// are allocated in.  Child `Ast`s are wrapped in `RefCell` for interior
/// mutability.
pub type AstNode<'a> = arena_tree::Node<'a, RefCell<Ast>>;

/// A reference to a node in an arena.
pub type Node<'a> = &'a AstNode<'a>;

/// The arena nodes of a document are allocated in.
pub type Arena<'a> = typed_arena::Arena<AstNode<'a>>;

impl<'a> From<NodeValue> for AstNode<'a> {
    /// Create a new AST node with the given value.
    fn from(value: NodeValue) -> Self {
        arena_tree::Node::new(RefCell::new(Ast::new(value)))
    }
}

/// Validates whether a node of type `child` may be appended to `node`.
pub fn can_contain_type<'a>(node: Node<'a>, child: &NodeValue) -> bool {
    match node.data.borrow().value {
        NodeValue::Document => child.inline(),
        NodeValue::Emoji(..) => matches!(*child, NodeValue::Text(..)),
        NodeValue::Text(..) => false,
    }
}

/// Allocates an empty document root.
pub fn new_document<'a>(arena: &'a Arena<'a>) -> Node<'a> {
    arena.alloc(NodeValue::Document.into())
}

/// Appends a text run to `root`, merging it into a trailing text node.
pub fn append_text<'a>(arena: &'a Arena<'a>, root: Node<'a>, text: &str) -> Node<'a> {
    if let Some(last) = root.last_child() {
        if let NodeValue::Text(ref mut existing) = last.data.borrow_mut().value {
            existing.push_str(text);
            return last;
        }
    }
    let node = arena.alloc(NodeValue::Text(text.to_string()).into());
    root.append(node);
    node
}

/// Appends an emoji reference to `root`.
pub fn append_emoji<'a>(arena: &'a Arena<'a>, root: Node<'a>, emoji: NodeEmoji) -> Node<'a> {
    let node = arena.alloc(NodeValue::Emoji(emoji).into());
    root.append(node);
    node
}

/// The number of positions inside `root`.  Valid positions are
/// `0..=content_size(root)`.
pub fn content_size<'a>(root: Node<'a>) -> usize {
    root.children().map(|c| c.data.borrow().value.size()).sum()
}

/// Returns the position at which `node` starts within its parent.
pub fn position_of<'a>(node: Node<'a>) -> Option<usize> {
    let parent = node.parent()?;
    let mut pos = 0;
    for child in parent.children() {
        if child.same_node(node) {
            return Some(pos);
        }
        pos += child.data.borrow().value.size();
    }
    None
}

/// Collects every emoji reference under `root` with its position.
pub fn emojis<'a>(root: Node<'a>) -> Vec<(usize, NodeEmoji)> {
    let mut out = vec![];
    let mut pos = 0;
    for child in root.children() {
        let ast = child.data.borrow();
        if let NodeValue::Emoji(ref e) = ast.value {
            out.push((pos, e.clone()));
        }
        pos += ast.value.size();
    }
    out
}
