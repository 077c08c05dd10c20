use super::*;
use ntest::timeout;

#[test]
#[timeout(4000)]
fn many_emoji() {
    let n = 50_000;
    let table = lookup();
    let arena = Arena::new();
    let root = new_document(&arena);
    for _ in 0..n {
        append_text(&arena, root, "x");
        append_emoji(&arena, root, NodeEmoji::new("tada"));
    }

    assert_eq!(content_size(root), 2 * n);
    assert_eq!(markup_of(root).len(), n * ("x".len() + ":tada:".len()));
    assert!(html_of(root, &table).ends_with("🎉</strong>"));
}

#[test]
#[timeout(4000)]
fn long_text_split() {
    let arena = Arena::new();
    let text = "a".repeat(1_000_000);
    let root = build(&arena, &[text.as_str()]);
    Transaction::new()
        .insert(500_000, NodeValue::Emoji(NodeEmoji::new("smile")))
        .apply(&arena, root)
        .unwrap();
    assert_eq!(root.children().count(), 3);
    assert_eq!(content_size(root), 1_000_001);
}
