//! Editing commands.

use crate::nodes::{content_size, Node, NodeEmoji, NodeValue};
use crate::transform::Transaction;

/// The current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A collapsed selection at a position.
    Caret(usize),
    /// A non-empty range; `from < to`.
    Range {
        /// The start of the range.
        from: usize,
        /// The end of the range.
        to: usize,
    },
}

impl Selection {
    /// The selection between `anchor` and `head`, in either direction.
    pub fn text(anchor: usize, head: usize) -> Self {
        if anchor == head {
            Selection::Caret(head)
        } else {
            Selection::Range {
                from: anchor.min(head),
                to: anchor.max(head),
            }
        }
    }

    /// Where an inserted node goes: the caret, or the end of the range.
    pub fn insertion_point(&self) -> usize {
        match *self {
            Selection::Caret(pos) => pos,
            Selection::Range { to, .. } => to,
        }
    }
}

/// The editor state a command runs against.
#[derive(Debug, Clone, Copy)]
pub struct EditorState<'a> {
    /// The document root.
    pub doc: Node<'a>,
    /// The selection, if there is one.
    pub selection: Option<Selection>,
}

impl<'a> EditorState<'a> {
    /// The position an insertion would target, if one can be determined.
    pub fn insertion_point(&self) -> Option<usize> {
        let pos = self.selection?.insertion_point();
        (pos <= content_size(self.doc)).then(|| pos)
    }
}

/// Inserts a new emoji reference with the given attributes at the selection.
///
/// Returns `false`, without dispatching anything, when no insertion point can
/// be determined.  Otherwise the insertion is dispatched as a single
/// transaction and the command returns `true`.  Passing `None` for `dispatch`
/// only asks whether the command applies.  The selection is not moved; that
/// is left to the host.
///
/// ```rust
/// # use emojinode::{insert_emoji, new_document, Arena, EditorState, NodeEmoji, Selection, Transaction};
/// let arena = Arena::new();
/// let doc = new_document(&arena);
/// let state = EditorState { doc, selection: Some(Selection::Caret(0)) };
///
/// let mut dispatched: Vec<Transaction> = vec![];
/// let mut dispatch = |tr: Transaction| dispatched.push(tr);
/// assert!(insert_emoji(&NodeEmoji::new("tada"), &state, Some(&mut dispatch)));
/// assert_eq!(dispatched.len(), 1);
///
/// let state = EditorState { doc, selection: None };
/// assert!(!insert_emoji(&NodeEmoji::new("tada"), &state, None));
/// ```
pub fn insert_emoji<'a>(
    attrs: &NodeEmoji,
    state: &EditorState<'a>,
    dispatch: Option<&mut dyn FnMut(Transaction)>,
) -> bool {
    let pos = match state.insertion_point() {
        Some(pos) => pos,
        None => return false,
    };

    if let Some(dispatch) = dispatch {
        dispatch(Transaction::new().insert(pos, NodeValue::Emoji(attrs.clone())));
    }
    true
}
