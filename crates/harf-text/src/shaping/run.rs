//! Shaped text run

use std::fmt;

use super::PresentationForm;

/// One output unit of the shaper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShapedGlyph {
    /// Logical character this glyph came from
    pub source: char,
    /// Output code point (presentation form, or `source` unchanged)
    pub glyph: char,
    /// Selected form for Arabic letters
    pub form: Option<PresentationForm>,
    /// Character index in the caller's input, counting stripped harakat
    pub cluster: usize,
}

impl ShapedGlyph {
    /// A character copied through unshaped
    pub fn passthrough(c: char, cluster: usize) -> Self {
        Self {
            source: c,
            glyph: c,
            form: None,
            cluster,
        }
    }

    /// Whether the output differs from the input
    pub fn is_reshaped(&self) -> bool {
        self.glyph != self.source
    }
}

/// A run of shaped glyphs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShapedRun {
    /// The shaped glyphs
    pub glyphs: Vec<ShapedGlyph>,
}

impl ShapedRun {
    /// Create a new shaped run
    pub fn new(glyphs: Vec<ShapedGlyph>) -> Self {
        Self { glyphs }
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate over the selected forms, `None` for unshaped characters
    pub fn forms(&self) -> impl Iterator<Item = Option<PresentationForm>> + '_ {
        self.glyphs.iter().map(|g| g.form)
    }

    /// Number of glyphs replaced by a presentation form
    pub fn reshaped_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.is_reshaped()).count()
    }
}

impl fmt::Display for ShapedRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for glyph in &self.glyphs {
            f.write_char(glyph.glyph)?;
        }
        Ok(())
    }
}

impl FromIterator<ShapedGlyph> for ShapedRun {
    fn from_iter<I: IntoIterator<Item = ShapedGlyph>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
