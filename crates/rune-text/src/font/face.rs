use std::sync::Arc;

use swash::{FontRef, Metrics};

use crate::font::{FontError, FontMetrics, Result, ScaledFontMetrics};

/// Loaded font face backed by a font file (TTF/OTF).
///
/// Owns the font bytes and the metrics extracted from them. Shaping builds
/// its own `harfrust` view over the same bytes through [`FontFace::as_bytes`].
#[derive(Debug, Clone)]
pub struct FontFace {
    /// Full font data.
    data: Arc<[u8]>,
    /// Index of this face within a collection file.
    index: u32,
    /// Cache key assigned by swash; identifies the face for the process lifetime.
    key: swash::CacheKey,
    /// Extracted font metrics in font units.
    metrics: FontMetrics,
}

impl FontFace {
    /// Create a font face from raw bytes and a font index within the file.
    pub fn from_bytes(data: Arc<[u8]>, index: usize) -> Result<Self> {
        let font = FontRef::from_index(&data, index).ok_or(FontError::InvalidFont)?;
        let metrics = Self::metrics_from_swash(&font);
        let key = font.key;
        Ok(Self {
            data,
            index: index as u32,
            key,
            metrics,
        })
    }

    /// Create a font face from raw bytes owned by a `Vec<u8>`.
    pub fn from_vec(data: Vec<u8>, index: usize) -> Result<Self> {
        Self::from_bytes(Arc::from(data), index)
    }

    /// Create a font face from a font file on disk.
    pub fn from_path(path: impl AsRef<std::path::Path>, index: usize) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_vec(data, index)
    }

    /// Shared handle to the raw font bytes.
    pub fn as_bytes(&self) -> Arc<[u8]> {
        self.data.clone()
    }

    /// Index of the face inside its font file.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Identity of this face. Two faces with equal keys were loaded from the
    /// same call to [`FontFace::from_bytes`] (or are clones of it).
    pub fn key(&self) -> swash::CacheKey {
        self.key
    }

    fn metrics_from_swash(font: &FontRef<'_>) -> FontMetrics {
        // Use default (no variation) coordinates.
        let Metrics {
            units_per_em,
            ascent,
            descent,
            ..
        } = font.metrics(&[]);

        FontMetrics {
            ascent,
            descent,
            units_per_em,
        }
    }

    /// Font metrics in font units.
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Font metrics scaled to the requested pixel size (px per em).
    pub fn scaled_metrics(&self, font_size: f32) -> ScaledFontMetrics {
        self.metrics.scale_to_pixels(font_size)
    }
}
