use std::sync::Arc;

use crate::font::{FontFace, ScaledFontMetrics};

/// A font face at a concrete pixel size.
///
/// This is the "font" a word is rendered with. Equality is identity of the
/// underlying face plus size, which is what the shaping engine cache keys on.
#[derive(Debug, Clone)]
pub struct Font {
    face: Arc<FontFace>,
    size: f32,
}

impl Font {
    pub fn new(face: Arc<FontFace>, size: f32) -> Self {
        Self { face, size }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// Font size in pixels per em.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Face metrics scaled to this font's size.
    pub fn metrics(&self) -> ScaledFontMetrics {
        self.face.scaled_metrics(self.size)
    }

    /// Factor converting font design units to pixels.
    pub fn units_to_pixels(&self) -> f32 {
        let units_per_em = self.face.metrics().units_per_em;
        if units_per_em != 0 {
            self.size / units_per_em as f32
        } else {
            1.0
        }
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.face.key() == other.face.key() && self.size == other.size
    }
}
