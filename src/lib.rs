//! An emoji reference node for structured text documents.
//!
//! An emoji reference moves losslessly between three forms: the `:name:`
//! markup token, a [`NodeEmoji`] in the document tree, and a rendered
//! [`Element`].  Names the glyph table does not know are never dropped; they
//! render as their literal markup.
//!
//! ```rust
//! use emojinode::{
//!     append_emoji, append_text, format_html, format_markup, new_document, parse_token,
//!     Arena, Options, Token,
//! };
//!
//! let arena = Arena::new();
//! let root = new_document(&arena);
//! append_text(&arena, root, "Hello ");
//! append_emoji(&arena, root, parse_token(&Token::new("wave")));
//! append_text(&arena, root, " and ");
//! append_emoji(&arena, root, parse_token(&Token::new("not-an-emoji")));
//!
//! let mut markup = String::new();
//! format_markup(root, &mut markup).unwrap();
//! assert_eq!(markup, "Hello :wave: and :not-an-emoji:");
//!
//! let mut html = String::new();
//! format_html(root, &Options::default(), &mut html).unwrap();
//! assert!(html.ends_with(" and <strong class=\"emoji\">:not-an-emoji:</strong>"));
//! ```
//!
//! The host editor owns everything around the node: tokenizing free text,
//! schema registration, and applying the [`Transaction`]s that
//! [`insert_emoji`] dispatches.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces
)]

pub mod arena_tree;
mod commands;
mod diagnostics;
mod dom;
mod glyph;
pub mod html;
pub mod markup;
pub mod nodes;
mod options;
pub mod plaintext;
mod render;
mod schema;
#[cfg(test)]
mod tests;
mod transform;
mod xml;

pub use commands::{insert_emoji, EditorState, Selection};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, TracingSink};
pub use dom::{write_html, DomNode, Element};
#[cfg(feature = "emojis")]
pub use glyph::EmojisLookup;
pub use glyph::{GlyphLookup, GlyphTable, NoGlyphs};
pub use html::format_document as format_html;
pub use html::format_document_with_plugins as format_html_with_plugins;
pub use markup::format_document as format_markup;
pub use markup::{parse_token, to_markup, write_markup, Token};
pub use nodes::{
    append_emoji, append_text, content_size, new_document, Arena, AstNode, Node, NodeEmoji,
    NodeValue,
};
pub use options::{Options, Plugins, Render, RenderPlugins};
pub use plaintext::format_document as format_plain_text;
pub use plaintext::to_plain_text;
pub use render::render_element;
pub use schema::{
    emoji_spec, parse_element, AttrSpec, NodeSpec, ParseMatch, ParseRule, PreserveWhitespace,
    EMOJI_NODE_NAME,
};
pub use transform::{Step, StepError, Transaction};
pub use xml::format_document as format_xml;

/// Render a single emoji reference to HTML, with the default glyph lookup.
pub fn emoji_to_html(emoji: &NodeEmoji, options: &Options) -> String {
    emoji_to_html_with_plugins(emoji, options, &Plugins::default())
}

/// Render a single emoji reference to HTML. Accepts custom plugins.
pub fn emoji_to_html_with_plugins(
    emoji: &NodeEmoji,
    options: &Options,
    plugins: &Plugins,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_html(&render_element(emoji, options, plugins), &mut out);
    out
}
