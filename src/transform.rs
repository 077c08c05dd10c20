//! Document mutations.
//!
//! Commands do not edit the document.  They describe the edit as a
//! [`Transaction`] and hand it to the host, which owns application, undo and
//! history.  [`Transaction::apply`] is a straightforward host-side
//! application against this crate's document tree.

use smallvec::SmallVec;
use thiserror::Error;

use crate::nodes::{can_contain_type, content_size, Arena, Node, NodeValue};

/// A single atomic edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Insert an inline node at a document position.
    Insert {
        /// The position to insert at.
        pos: usize,
        /// The node to insert.
        value: NodeValue,
    },
}

/// Why a transaction could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// The step's position lies outside the document.
    #[error("position {pos} is outside the document (size {size})")]
    OutOfRange {
        /// The offending position.
        pos: usize,
        /// The document's content size at that step.
        size: usize,
    },

    /// The document root may not contain the node being inserted.
    #[error("a {0} node cannot be inserted into the document")]
    InvalidContent(&'static str),
}

/// An ordered group of steps, applied all together or not at all.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transaction {
    steps: SmallVec<[Step; 1]>,
}

impl Transaction {
    /// Creates an empty transaction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an insertion of `value` at `pos`.
    pub fn insert(mut self, pos: usize, value: NodeValue) -> Self {
        self.steps.push(Step::Insert { pos, value });
        self
    }

    /// The steps, in application order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether the transaction changes anything.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Applies every step to the document under `root`.
    ///
    /// All steps are checked against the document before any is applied, so
    /// on error the document is unchanged.  An insertion that falls inside a
    /// text node splits it.
    pub fn apply<'a>(&self, arena: &'a Arena<'a>, root: Node<'a>) -> Result<(), StepError> {
        let mut size = content_size(root);
        for step in &self.steps {
            match *step {
                Step::Insert { pos, ref value } => {
                    if !can_contain_type(root, value) {
                        return Err(StepError::InvalidContent(value.xml_node_name()));
                    }
                    if pos > size {
                        return Err(StepError::OutOfRange { pos, size });
                    }
                    size += value.size();
                }
            }
        }

        for step in &self.steps {
            match *step {
                Step::Insert { pos, ref value } => insert_at(arena, root, pos, value.clone()),
            }
        }

        Ok(())
    }
}

fn insert_at<'a>(arena: &'a Arena<'a>, root: Node<'a>, pos: usize, value: NodeValue) {
    let new_node: Node<'a> = arena.alloc(value.into());

    let mut start = 0;
    for child in root.children() {
        if pos == start {
            child.insert_before(new_node);
            return;
        }

        let child_size = child.data.borrow().value.size();
        if pos < start + child_size {
            // Strictly inside a child; only text has interior positions.
            let tail = split_text(&mut child.data.borrow_mut().value, pos - start);
            let tail_node: Node<'a> = arena.alloc(NodeValue::Text(tail).into());
            child.insert_after(tail_node);
            child.insert_after(new_node);
            return;
        }

        start += child_size;
    }

    root.append(new_node);
}

fn split_text(value: &mut NodeValue, at: usize) -> String {
    match *value {
        NodeValue::Text(ref mut literal) => {
            let byte = literal
                .char_indices()
                .nth(at)
                .map_or(literal.len(), |(i, _)| i);
            literal.split_off(byte)
        }
        _ => String::new(),
    }
}
