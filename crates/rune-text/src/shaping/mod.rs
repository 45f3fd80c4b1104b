//! Shaping pipeline: itemization, per-run shaping and visual reordering.

pub mod engine;
pub mod itemize;
pub mod shaped_run;
pub mod shaper;

pub use engine::ShapingEngine;
pub use itemize::{LayoutData, TextItem};
pub use shaped_run::{Direction, GlyphPosition, ShapedGlyphRun};
pub use shaper::{FixedAdvanceShaper, FixedFont, GlyphShaper, HarfrustShaper};

/// Errors raised while building a shaper or shaping a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("font data cannot be read by the shaper")]
    InvalidFont,
}
