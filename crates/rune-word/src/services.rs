//! Capabilities the renderer consumes: text measurement and emoji images.

use std::cell::RefCell;
use std::sync::Arc;

use image::RgbaImage;
use rune_text::{FixedFont, Font, HarfrustShaper, ShapingEngine};

/// Text measurement for a font type.
pub trait TextMetrics<F> {
    /// Advance width of `text` set in `font`.
    fn text_width(&self, font: &F, text: &str) -> f32;
    /// Ascent of `font` above the baseline (positive).
    fn ascent(&self, font: &F) -> f32;
}

/// Measures by shaping with harfrust.
///
/// Keeps its own shaping engine, so repeated measurements with one font
/// share a single shaper.
#[derive(Debug, Default)]
pub struct ShapedMetrics {
    engine: RefCell<ShapingEngine<HarfrustShaper>>,
}

impl ShapedMetrics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextMetrics<Font> for ShapedMetrics {
    fn text_width(&self, font: &Font, text: &str) -> f32 {
        match self.engine.borrow_mut().shape(text, font) {
            Ok(runs) => runs.iter().map(|(run, _)| run.width).sum(),
            Err(err) => {
                log::warn!("cannot measure {text:?}: {err}");
                0.0
            }
        }
    }

    fn ascent(&self, font: &Font) -> f32 {
        font.metrics().ascent
    }
}

/// Measurement matching [`rune_text::FixedAdvanceShaper`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMetrics;

impl TextMetrics<FixedFont> for FixedMetrics {
    fn text_width(&self, font: &FixedFont, text: &str) -> f32 {
        font.text_width(text)
    }

    fn ascent(&self, font: &FixedFont) -> f32 {
        font.ascent
    }
}

/// An emoji bitmap together with the device pixel ratio it was rendered for.
#[derive(Debug, Clone)]
pub struct EmojiImage {
    pixels: Arc<RgbaImage>,
    pixel_ratio: f32,
}

impl EmojiImage {
    pub fn new(pixels: Arc<RgbaImage>, pixel_ratio: f32) -> Self {
        Self { pixels, pixel_ratio }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixel_width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn pixel_height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Tag the bitmap with the surface's device pixel ratio so it is drawn at
    /// `pixels / ratio` logical pixels.
    pub fn normalize_pixel_ratio(&mut self, ratio: f32) {
        if self.pixel_ratio != ratio {
            log::trace!("emoji pixel ratio {} -> {ratio}", self.pixel_ratio);
            self.pixel_ratio = ratio;
        }
    }

    /// Size in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.pixel_width() as f32 / self.pixel_ratio,
            self.pixel_height() as f32 / self.pixel_ratio,
        )
    }
}

/// Source of emoji bitmaps.
pub trait EmojiProvider {
    /// Bitmap for `code` rendered at `size` device pixels, if one exists.
    fn emoji(&mut self, code: &str, size: f32) -> Option<EmojiImage>;
}

#[cfg(test)]
pub(crate) mod tests {
    use rune_text::FontFace;

    use super::*;

    /// A system font, if one of the usual ones is installed.
    pub(crate) fn system_font() -> Option<Font> {
        const CANDIDATES: &[&str] = &[
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/Library/Fonts/Arial.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];
        let face = CANDIDATES
            .iter()
            .find_map(|path| FontFace::from_path(path, 0).ok())?;
        Some(Font::new(Arc::new(face), 16.0))
    }

    #[test]
    fn shaped_metrics_measure_like_the_renderer_shapes() {
        let Some(font) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let text = "abc אבג def";
        let metrics = ShapedMetrics::new();
        let mut engine = ShapingEngine::<HarfrustShaper>::new();
        let shaped: f32 = engine
            .shape(text, &font)
            .unwrap()
            .iter()
            .map(|(run, _)| run.width)
            .sum();

        assert!(shaped > 0.0);
        assert_eq!(metrics.text_width(&font, text), shaped);
        assert!(metrics.ascent(&font) > 0.0);
    }

    #[test]
    fn shaped_metrics_keep_the_shaper_for_their_font() {
        let Some(font) = system_font() else {
            eprintln!("no system font found, skipping");
            return;
        };
        let metrics = ShapedMetrics::new();
        assert!(metrics.engine.borrow().cached_font().is_none());

        let first = metrics.text_width(&font, "Hello");
        let second = metrics.text_width(&font, "Hello");
        assert_eq!(first, second);
        assert_eq!(metrics.engine.borrow().cached_font(), Some(&font));

        let larger = Font::new(Arc::new(font.face().clone()), 32.0);
        metrics.text_width(&larger, "Hello");
        assert_eq!(metrics.engine.borrow().cached_font(), Some(&larger));
    }

    #[test]
    fn fixed_metrics_count_chars() {
        let font = FixedFont::new(0, 7.0, 9.0, 3.0);
        assert_eq!(FixedMetrics.text_width(&font, "héllo"), 35.0);
        assert_eq!(FixedMetrics.ascent(&font), 9.0);
    }

    #[test]
    fn logical_size_follows_pixel_ratio() {
        let mut image = EmojiImage::new(Arc::new(RgbaImage::new(32, 32)), 1.0);
        assert_eq!(image.logical_size(), (32.0, 32.0));
        image.normalize_pixel_ratio(2.0);
        assert_eq!(image.logical_size(), (16.0, 16.0));
    }
}
