//! Rune word renderer configuration
//!
//! Loads renderer settings from `rune.toml`, with environment variables as
//! overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuneConfig {
    /// Font settings
    pub text: TextConfig,
    /// Word renderer settings
    pub word: WordConfig,
}

/// Font configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Path to custom font file (.ttf)
    pub font: Option<PathBuf>,
    /// Default text size in pixels
    pub text_size: Option<f32>,
}

/// Vertical placement of a run within the line box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Top,
    #[default]
    Baseline,
    Middle,
    Bottom,
}

impl std::str::FromStr for VerticalAnchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "baseline" => Ok(Self::Baseline),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(format!("unknown vertical anchor: {other}")),
        }
    }
}

/// Word renderer configuration
///
/// Colors are `#rrggbb` or `#rrggbbaa` strings; an absent color disables the
/// overlay it drives.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordConfig {
    /// Height of the line box in pixels
    pub line_height: f32,
    /// Extra spacing between lines in pixels
    pub line_spacing: f32,
    /// Distance from the pen y to the top of the selection band
    pub selection_offset: f32,
    /// Vertical anchor of runs inside the line
    pub anchor: VerticalAnchor,
    /// Device-independent unit scale
    pub scale: f32,
    /// Device pixel ratio of emoji bitmaps
    pub bitmap_ratio: f32,
    pub selection_color: Option<String>,
    pub highlight_color: Option<String>,
    pub highlighted_text_color: Option<String>,
    pub link_color: Option<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font: None,
            text_size: None,
        }
    }
}

impl Default for WordConfig {
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

impl RuneConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("rune.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        // Text settings
        if let Ok(font) = std::env::var("RUNE_TEXT_FONT") {
            self.text.font = Some(PathBuf::from(font));
        }
        if let Some(size) = env_f32("RUNE_TEXT_SIZE") {
            self.text.text_size = Some(size);
        }

        // Word settings
        if let Some(height) = env_f32("RUNE_WORD_LINE_HEIGHT") {
            self.word.line_height = height;
        }
        if let Some(spacing) = env_f32("RUNE_WORD_LINE_SPACING") {
            self.word.line_spacing = spacing;
        }
        if let Some(offset) = env_f32("RUNE_WORD_SELECTION_OFFSET") {
            self.word.selection_offset = offset;
        }
        if let Ok(val) = std::env::var("RUNE_WORD_ANCHOR") {
            if let Ok(anchor) = val.parse() {
                self.word.anchor = anchor;
            }
        }
        if let Some(scale) = env_f32("RUNE_WORD_SCALE") {
            self.word.scale = scale;
        }
        if let Some(ratio) = env_f32("RUNE_WORD_BITMAP_RATIO") {
            self.word.bitmap_ratio = ratio;
        }
        if let Ok(color) = std::env::var("RUNE_WORD_SELECTION_COLOR") {
            self.word.selection_color = Some(color);
        }
        if let Ok(color) = std::env::var("RUNE_WORD_HIGHLIGHT_COLOR") {
            self.word.highlight_color = Some(color);
        }
        if let Ok(color) = std::env::var("RUNE_WORD_HIGHLIGHTED_TEXT_COLOR") {
            self.word.highlighted_text_color = Some(color);
        }
        if let Ok(color) = std::env::var("RUNE_WORD_LINK_COLOR") {
            self.word.link_color = Some(color);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn env_f32(name: &str) -> Option<f32> {
    std::env::var(name).ok()?.parse().ok()
}
