use super::*;
use pretty_assertions::assert_eq;

#[test]
fn document_html() {
    let table = lookup();
    let arena = Arena::new();
    let root = build(&arena, &["Hello, happy days! ", ":smile:", ":smile:"]);
    assert_eq!(
        html_of(root, &table),
        concat!(
            "Hello, happy days! ",
            "<strong class=\"emoji smile\" data-name=\"smile\">😄</strong>",
            "<strong class=\"emoji smile\" data-name=\"smile\">😄</strong>"
        )
    );
}

#[test]
fn document_html_mixed() {
    let table = lookup();
    let arena = Arena::new();
    let root = build(&arena, &["1 < 2 ", ":diego:", " & ", ":tada:"]);
    assert_eq!(
        html_of(root, &table),
        concat!(
            "1 &lt; 2 <strong class=\"emoji\">:diego:</strong>",
            " &amp; <strong class=\"emoji tada\" data-name=\"tada\">🎉</strong>"
        )
    );
}

#[test]
fn empty_document() {
    let table = lookup();
    let arena = Arena::new();
    let root = new_document(&arena);
    assert_eq!(html_of(root, &table), "");
    assert_eq!(markup_of(root), "");
}
