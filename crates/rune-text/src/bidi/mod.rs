//! Bidirectional (BiDi) text support built on `unicode-bidi`.
//!
//! - Embedding levels per byte (with line rule L1)
//! - Visual reordering of level runs

pub mod levels;
pub mod reorder;

pub use levels::line_levels;
pub use reorder::visual_order;
pub use unicode_bidi::Level;
