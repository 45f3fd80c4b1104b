//! rune-text: fonts, bidi analysis and text shaping for word rendering.
//!
//! - font: font faces loaded from bytes or disk, sized `Font` handles
//! - bidi: embedding levels and visual reordering (UAX-9)
//! - shaping: itemization and shaping into glyph runs in visual order

pub mod bidi;
pub mod font;
pub mod shaping;

pub use font::{Font, FontError, FontFace, FontMetrics, ScaledFontMetrics};

pub use shaping::{
    Direction, FixedAdvanceShaper, FixedFont, GlyphPosition, GlyphShaper, HarfrustShaper,
    ShapeError, ShapedGlyphRun, ShapingEngine,
};
