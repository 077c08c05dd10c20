//! Configuration for rendering and reconstruction.

#[cfg(feature = "bon")]
use bon::Builder;

use crate::diagnostics::{self, DiagnosticSink};
use crate::glyph::{self, GlyphLookup};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Configure the rendered element shape.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: Render,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// The shape of the element an emoji reference renders to.
///
/// Reconstruction from a rendered element reads the same settings, so an
/// element produced under some `Render` is recognised under that `Render`.
pub struct Render {
    /// The element's tag name.
    ///
    /// ```rust
    /// # use emojinode::{emoji_to_html, NodeEmoji, Options};
    /// let mut options = Options::default();
    /// options.render.tag = "span".to_string();
    /// assert_eq!(emoji_to_html(&NodeEmoji::new("nope-not-real"), &options),
    ///            "<span class=\"emoji\">:nope-not-real:</span>");
    /// ```
    #[cfg_attr(feature = "bon", builder(into, default = "strong".to_string()))]
    pub tag: String,

    /// The class every emoji element carries, resolved or not.
    #[cfg_attr(feature = "bon", builder(into, default = "emoji".to_string()))]
    pub marker_class: String,

    /// The attribute holding the canonical name on resolved elements.
    #[cfg_attr(feature = "bon", builder(into, default = "data-name".to_string()))]
    pub name_attribute: String,
}

impl Default for Render {
    fn default() -> Self {
        Render {
            tag: "strong".to_string(),
            marker_class: "emoji".to_string(),
            name_attribute: "data-name".to_string(),
        }
    }
}

/// Umbrella plugins struct.
#[derive(Default, Debug, Clone, Copy)]
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    pub render: RenderPlugins<'p>,
}

/// Plugins consulted while converting emoji references.
#[derive(Default, Debug, Clone, Copy)]
pub struct RenderPlugins<'p> {
    /// The name-to-glyph table.  Falls back to the `emojis` crate's shortcode
    /// set when that feature is enabled, and to no glyphs at all otherwise.
    pub glyph_lookup: Option<&'p dyn GlyphLookup>,

    /// Where data-integrity diagnostics go.  Defaults to a `tracing` sink.
    pub diagnostics: Option<&'p dyn DiagnosticSink>,
}

impl<'p> Plugins<'p> {
    /// Plugins that use `lookup` for glyphs and the default diagnostics sink.
    pub fn with_glyph_lookup(lookup: &'p dyn GlyphLookup) -> Self {
        Plugins {
            render: RenderPlugins {
                glyph_lookup: Some(lookup),
                diagnostics: None,
            },
        }
    }

    pub(crate) fn glyphs(&self) -> &'p dyn GlyphLookup {
        match self.render.glyph_lookup {
            Some(lookup) => lookup,
            None => glyph::default_lookup(),
        }
    }

    pub(crate) fn diagnostics(&self) -> &'p dyn DiagnosticSink {
        match self.render.diagnostics {
            Some(sink) => sink,
            None => diagnostics::default_sink(),
        }
    }
}
