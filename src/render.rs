//! Emoji reference → rendered element.

use crate::dom::Element;
use crate::nodes::NodeEmoji;
use crate::options::{Options, Plugins};

/// The text shown for a reference whose name is absent.
const UNDEFINED_NAME: &str = "undefined";

/// Renders an emoji reference.
///
/// A name the lookup resolves yields
/// `<strong class="emoji NAME" data-name="NAME">GLYPH</strong>`.  Anything
/// else keeps the intended name visible as `:NAME:` inside an element that
/// carries only the marker class.
pub fn render_element(emoji: &NodeEmoji, options: &Options, plugins: &Plugins) -> Element {
    let render = &options.render;

    if let Some(name) = emoji.truthy_name() {
        if let Some(glyph) = plugins.glyphs().glyph(name) {
            return Element::new(render.tag.as_str())
                .with_attr("class", format!("{} {}", render.marker_class, name))
                .with_attr(render.name_attribute.as_str(), name)
                .with_text(glyph);
        }
    }

    tracing::debug!(name = ?emoji.name, "rendering emoji reference through fallback");

    let shown = emoji.name.as_deref().unwrap_or(UNDEFINED_NAME);
    Element::new(render.tag.as_str())
        .with_attr("class", render.marker_class.as_str())
        .with_text(format!(":{}:", shown))
}
