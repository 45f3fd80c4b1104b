use rune_config::WordConfig;

pub use rune_config::VerticalAnchor;

use crate::color::{Color, ColorParseError};

/// Construction-time settings of a [`crate::WordRenderer`].
///
/// Every color is optional; an unset color disables the overlay it drives.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    pub line_height: f32,
    pub line_spacing: f32,
    /// Distance from the pen y to the top of the selection band.
    pub selection_offset: f32,
    pub anchor: VerticalAnchor,
    /// Device-independent unit scale.
    pub scale: f32,
    /// Device pixel ratio of emoji bitmaps.
    pub bitmap_ratio: f32,
    pub selection_color: Option<Color>,
    pub highlight_color: Option<Color>,
    pub highlighted_text_color: Option<Color>,
    pub link_color: Option<Color>,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            line_height: 20.0,
            line_spacing: 0.0,
            selection_offset: 0.0,
            anchor: VerticalAnchor::Baseline,
            scale: 1.0,
            bitmap_ratio: 1.0,
            selection_color: None,
            highlight_color: None,
            highlighted_text_color: None,
            link_color: None,
        }
    }
}

impl RendererConfig {
    /// Build from the `[word]` section of `rune.toml`.
    pub fn from_config(config: &WordConfig) -> Result<Self, ColorParseError> {
        Ok(Self {
            line_height: config.line_height,
            line_spacing: config.line_spacing,
            selection_offset: config.selection_offset,
            anchor: config.anchor,
            scale: config.scale,
            bitmap_ratio: config.bitmap_ratio,
            selection_color: Color::from_setting(config.selection_color.as_deref())?,
            highlight_color: Color::from_setting(config.highlight_color.as_deref())?,
            highlighted_text_color: Color::from_setting(config.highlighted_text_color.as_deref())?,
            link_color: Color::from_setting(config.link_color.as_deref())?,
        })
    }

    /// Scale a device-independent length to whole pixels.
    pub fn scale_value(&self, value: f32) -> f32 {
        (value * self.scale).round()
    }

    /// Padding added around selection fills.
    pub fn extra_space(&self) -> f32 {
        self.scale_value(2.0)
    }

    /// Vertical nudge of the fill band.
    pub fn y_diff(&self) -> f32 {
        self.scale_value(1.0)
    }
}

/// Offset from the pen y to the origin of a run with the given metrics.
pub fn vertical_shift(
    line_height: f32,
    anchor: VerticalAnchor,
    ascent: f32,
    descent: f32,
    bitmap_ratio: f32,
) -> f32 {
    match anchor {
        VerticalAnchor::Top => ascent + (line_height - (ascent + descent)) / (2.0 / bitmap_ratio),
        VerticalAnchor::Baseline => 0.0,
        VerticalAnchor::Bottom => -descent,
        VerticalAnchor::Middle => {
            let ascent = ascent.round() as i32;
            let descent = descent.round() as i32;
            (ascent - (ascent + descent) / 2) as f32
        }
    }
}

/// Pixel-snap the underline y: up on Apple targets, down elsewhere, so the
/// simulated underline sits flush with each platform's font metrics.
pub fn snap_underline_y(y: f32) -> f32 {
    if cfg!(target_vendor = "apple") {
        y.ceil()
    } else {
        y.floor()
    }
}
