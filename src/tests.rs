use std::cell::RefCell;

use crate::*;

mod document;
mod html;
mod pathological;
mod schema;
mod transform;

/// A small emoji set, so tests do not depend on the `emojis` feature.
fn lookup() -> GlyphTable {
    [("smile", "😄"), ("tada", "🎉"), ("+1", "👍")]
        .into_iter()
        .collect()
}

/// Builds a document from parts the way a host would after tokenizing:
/// `:name:` parts become emoji references, everything else is text.
fn build<'a>(arena: &'a Arena<'a>, parts: &[&str]) -> Node<'a> {
    let root = new_document(arena);
    for part in parts {
        if part.len() > 1 && part.starts_with(':') && part.ends_with(':') {
            let token = Token::new(&part[1..part.len() - 1]);
            append_emoji(arena, root, parse_token(&token));
        } else {
            append_text(arena, root, part);
        }
    }
    root
}

fn markup_of<'a>(root: Node<'a>) -> String {
    let mut out = String::new();
    format_markup(root, &mut out).unwrap();
    out
}

fn html_of<'a>(root: Node<'a>, table: &GlyphTable) -> String {
    let mut out = String::new();
    format_html_with_plugins(
        root,
        &Options::default(),
        &mut out,
        &Plugins::with_glyph_lookup(table),
    )
    .unwrap();
    out
}

fn xml_of<'a>(root: Node<'a>) -> String {
    let mut out = String::new();
    format_xml(root, &mut out).unwrap();
    out
}

/// Collects diagnostics instead of logging them.
#[derive(Default)]
struct Recorder(RefCell<Vec<Diagnostic>>);

impl DiagnosticSink for Recorder {
    fn report(&self, diagnostic: &Diagnostic) {
        self.0.borrow_mut().push(diagnostic.clone());
    }
}

impl Recorder {
    fn count(&self) -> usize {
        self.0.borrow().len()
    }
}
