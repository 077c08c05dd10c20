use super::*;
use crate::nodes::{can_contain_type, emojis, position_of};
use pretty_assertions::assert_eq;

#[test]
fn adjacent_text_merges() {
    let arena = Arena::new();
    let root = new_document(&arena);
    let first = append_text(&arena, root, "ab");
    let second = append_text(&arena, root, "cd");
    assert!(first.same_node(second));
    assert_eq!(root.children().count(), 1);
    assert_eq!(first.data.borrow().value.text().map(String::as_str), Some("abcd"));
}

#[test]
fn positions_count_chars_and_atomic_emoji() {
    let arena = Arena::new();
    let root = build(&arena, &["日本", ":smile:", "語", ":tada:"]);
    assert_eq!(content_size(root), 5);

    let positions: Vec<_> = root.children().map(|c| position_of(c).unwrap()).collect();
    assert_eq!(positions, vec![0, 2, 3, 4]);
    assert_eq!(
        emojis(root),
        vec![(2, NodeEmoji::new("smile")), (4, NodeEmoji::new("tada"))]
    );
    assert_eq!(position_of(root), None);
}

#[test]
fn content_rules() {
    let arena = Arena::new();
    let root = new_document(&arena);
    let text = append_text(&arena, root, "a");
    let emoji = append_emoji(&arena, root, NodeEmoji::new("smile"));

    let text_value = NodeValue::Text("x".to_string());
    let emoji_value = NodeValue::Emoji(NodeEmoji::default());

    assert!(can_contain_type(root, &text_value));
    assert!(can_contain_type(root, &emoji_value));
    assert!(!can_contain_type(root, &NodeValue::Document));
    assert!(can_contain_type(emoji, &text_value));
    assert!(!can_contain_type(emoji, &emoji_value));
    assert!(!can_contain_type(text, &text_value));
}

#[test]
fn truthy_name_and_style_default() {
    assert_eq!(NodeEmoji::new("x").truthy_name(), Some("x"));
    assert_eq!(NodeEmoji::default().truthy_name(), None);
    assert_eq!(NodeEmoji::new("").truthy_name(), None);
    assert_eq!(NodeEmoji::default().style(), "");
    assert!(NodeValue::Emoji(NodeEmoji::default()).inline());
    assert!(!NodeValue::Document.inline());
}
