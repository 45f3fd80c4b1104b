use core::ops::Range;

use swash::GlyphId;

/// Logical direction of a shaped run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// A run of text shaped with a single font, ready to paint.
///
/// Glyphs are stored in the order they are painted from the pen position,
/// which for right-to-left runs is the reverse of the text order.
#[derive(Debug, Clone, Default)]
pub struct ShapedGlyphRun {
    /// Byte range in the shaped text.
    pub text_range: Range<usize>,
    /// Glyph IDs in paint order.
    pub glyphs: Vec<GlyphId>,
    /// Glyph positions (x, y offsets from pen position).
    pub positions: Vec<GlyphPosition>,
    /// Glyph advances in pixels.
    pub advances: Vec<f32>,
    /// Byte offset of each glyph's cluster, relative to `text_range.start`.
    /// Multiple glyphs can map to the same cluster (ligatures).
    pub clusters: Vec<u32>,
    /// Advance width of the run in pixels.
    pub width: f32,
    /// Ascent of the run's font in pixels (positive).
    pub ascent: f32,
    /// Descent of the run's font in pixels (positive).
    pub descent: f32,
    /// BiDi embedding level.
    pub bidi_level: u8,
}

impl ShapedGlyphRun {
    pub fn direction(&self) -> Direction {
        if self.bidi_level % 2 == 1 {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    /// Sum of every glyph's advance. Differs from `width` when the shaper
    /// reports a rounded natural advance.
    pub fn effective_width(&self) -> f32 {
        self.advances.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphPosition {
    pub x_offset: f32,
    pub y_offset: f32,
}
