//! Name-to-glyph lookup.
//!
//! The lookup table is owned outside this crate.  Lookups are pure: the same
//! name always yields the same glyph, and nothing here caches the result on a
//! node.

use rustc_hash::FxHashMap;
use std::fmt::{self, Debug, Formatter};
use std::panic::RefUnwindSafe;

/// Maps a canonical emoji name to its glyph.
///
/// Implemented for closures, so a host can pass its own table inline:
///
/// ```rust
/// # use emojinode::{GlyphLookup};
/// let lookup = |name: &str| (name == "tada").then(|| "🎉".to_string());
/// assert_eq!(lookup.glyph("tada").as_deref(), Some("🎉"));
/// assert_eq!(lookup.glyph("nope"), None);
/// ```
pub trait GlyphLookup: RefUnwindSafe + Send + Sync {
    /// Returns the glyph for `name`, or `None` if the table has no entry.
    fn glyph(&self, name: &str) -> Option<String>;
}

impl<'c> Debug for dyn GlyphLookup + 'c {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        formatter.write_str("<dyn GlyphLookup>")
    }
}

impl<F> GlyphLookup for F
where
    F: Fn(&str) -> Option<String>,
    F: RefUnwindSafe + Send + Sync,
{
    fn glyph(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Looks names up in the GitHub shortcode set shipped by the `emojis` crate.
#[cfg(feature = "emojis")]
#[cfg_attr(docsrs, doc(cfg(feature = "emojis")))]
#[derive(Debug, Default, Clone, Copy)]
pub struct EmojisLookup;

#[cfg(feature = "emojis")]
impl GlyphLookup for EmojisLookup {
    fn glyph(&self, name: &str) -> Option<String> {
        Some(emojis::get_by_shortcode(name)?.as_str().to_string())
    }
}

/// A lookup that never finds anything.  Every reference renders through the
/// literal `:name:` fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoGlyphs;

impl GlyphLookup for NoGlyphs {
    fn glyph(&self, _name: &str) -> Option<String> {
        None
    }
}

/// A host-supplied emoji set.
///
/// ```rust
/// # use emojinode::{GlyphLookup, GlyphTable};
/// let table: GlyphTable = [("parrot", "🦜")].into_iter().collect();
/// assert_eq!(table.glyph("parrot").as_deref(), Some("🦜"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct GlyphTable {
    entries: FxHashMap<String, String>,
}

impl GlyphTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the glyph for `name`.
    pub fn insert(&mut self, name: impl Into<String>, glyph: impl Into<String>) {
        self.entries.insert(name.into(), glyph.into());
    }

    /// The number of names in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, G> FromIterator<(N, G)> for GlyphTable
where
    N: Into<String>,
    G: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, G)>>(iter: I) -> Self {
        let mut table = GlyphTable::new();
        for (name, glyph) in iter {
            table.insert(name, glyph);
        }
        table
    }
}

impl GlyphLookup for GlyphTable {
    fn glyph(&self, name: &str) -> Option<String> {
        self.entries.get(name).cloned()
    }
}

/// The lookup used when a caller configures none.
pub(crate) fn default_lookup() -> &'static dyn GlyphLookup {
    #[cfg(feature = "emojis")]
    {
        static LOOKUP: EmojisLookup = EmojisLookup;
        &LOOKUP
    }
    #[cfg(not(feature = "emojis"))]
    {
        static LOOKUP: NoGlyphs = NoGlyphs;
        &LOOKUP
    }
}
