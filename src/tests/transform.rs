use super::*;
use pretty_assertions::assert_eq;

#[test]
fn splits_text_on_char_boundaries() {
    let arena = Arena::new();
    let doc = build(&arena, &["héllo"]);
    Transaction::new()
        .insert(2, NodeValue::Emoji(NodeEmoji::new("smile")))
        .apply(&arena, doc)
        .unwrap();

    assert_eq!(markup_of(doc), "hé:smile:llo");
    assert_eq!(doc.children().count(), 3);
    assert_eq!(content_size(doc), 6);
}

#[test]
fn steps_apply_in_order() {
    let arena = Arena::new();
    let doc = build(&arena, &["ab"]);
    Transaction::new()
        .insert(1, NodeValue::Emoji(NodeEmoji::new("tada")))
        .insert(3, NodeValue::Text("!".to_string()))
        .apply(&arena, doc)
        .unwrap();
    assert_eq!(markup_of(doc), "a:tada:b!");
}

#[test]
fn failure_leaves_document_unchanged() {
    let arena = Arena::new();
    let doc = build(&arena, &["ab"]);
    let err = Transaction::new()
        .insert(1, NodeValue::Emoji(NodeEmoji::new("tada")))
        .insert(9, NodeValue::Emoji(NodeEmoji::new("tada")))
        .apply(&arena, doc)
        .unwrap_err();

    assert_eq!(err, StepError::OutOfRange { pos: 9, size: 3 });
    assert_eq!(
        err.to_string(),
        "position 9 is outside the document (size 3)"
    );
    assert_eq!(markup_of(doc), "ab");
}

#[test]
fn document_cannot_be_inserted() {
    let arena = Arena::new();
    let doc = build(&arena, &["ab"]);
    let err = Transaction::new()
        .insert(0, NodeValue::Document)
        .apply(&arena, doc)
        .unwrap_err();
    assert_eq!(err, StepError::InvalidContent("document"));
    assert_eq!(
        err.to_string(),
        "a document node cannot be inserted into the document"
    );
}

#[test]
fn empty_transaction() {
    let arena = Arena::new();
    let doc = build(&arena, &["ab"]);
    let tr = Transaction::new();
    assert!(tr.is_empty());
    tr.apply(&arena, doc).unwrap();
    assert_eq!(markup_of(doc), "ab");
}
