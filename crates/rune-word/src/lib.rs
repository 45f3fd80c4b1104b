//! rune-word: paints single words of a text line with selection and
//! highlight overlays.
//!
//! A word's text is partitioned into [`Segment`]s (see [`overlay`]), each
//! segment is shaped into glyph runs in visual order by
//! [`rune_text::ShapingEngine`], and [`WordRenderer`] paints fills, glyphs and
//! emoji images onto a [`DrawSurface`] while advancing a pen.

pub mod color;
pub mod config;
pub mod overlay;
pub mod renderer;
pub mod segment;
pub mod services;
pub mod surface;
pub mod word;

pub use color::{Color, ColorParseError};
pub use config::{RendererConfig, VerticalAnchor};
pub use overlay::Segments;
pub use renderer::WordRenderer;
pub use segment::{FillOverlay, FillSpan, Segment};
pub use services::{EmojiImage, EmojiProvider, FixedMetrics, ShapedMetrics, TextMetrics};
pub use surface::{Command, DisplayList, DrawSurface, Point, Rect};
pub use word::{EmojiSpec, LinksVisible, TextWord, WordView};
