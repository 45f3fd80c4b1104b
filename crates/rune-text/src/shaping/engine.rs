use crate::bidi::visual_order;
use crate::shaping::{GlyphShaper, LayoutData, ShapeError, ShapedGlyphRun};

/// Shapes text into glyph runs in visual order, reusing one shaper instance
/// for as long as consecutive calls ask for the same font.
///
/// The base direction is always left-to-right. An engine mutates its cache on
/// every call and must not be shared between concurrent rendering contexts.
#[derive(Debug)]
pub struct ShapingEngine<S: GlyphShaper> {
    shaper: Option<S>,
    force_justification: bool,
}

impl<S: GlyphShaper> Default for ShapingEngine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GlyphShaper> ShapingEngine<S> {
    pub fn new() -> Self {
        Self {
            shaper: None,
            force_justification: false,
        }
    }

    /// When set, a run's width is the sum of its glyph advances rather than
    /// the natural advance reported by the shaper.
    pub fn set_force_justification(&mut self, force: bool) {
        self.force_justification = force;
    }

    pub fn force_justification(&self) -> bool {
        self.force_justification
    }

    /// Font of the cached shaper, if any.
    pub fn cached_font(&self) -> Option<&S::Font> {
        self.shaper.as_ref().map(GlyphShaper::font)
    }

    fn prepare(&mut self, font: &S::Font) -> Result<&S, ShapeError> {
        let stale = self.shaper.as_ref().is_none_or(|shaper| shaper.font() != font);
        if stale {
            log::debug!("creating shaping engine for {font:?}");
            self.shaper = None;
            self.shaper = Some(S::for_font(font)?);
        }
        self.shaper.as_ref().ok_or(ShapeError::InvalidFont)
    }

    /// Shape `text` with `font`.
    ///
    /// Runs are returned left to right as they appear on screen, each paired
    /// with the font it was shaped with. Widths are measured per logical run,
    /// so the total advance does not depend on the reordering.
    pub fn shape(
        &mut self,
        text: &str,
        font: &S::Font,
    ) -> Result<Vec<(ShapedGlyphRun, S::Font)>, ShapeError> {
        let force_justification = self.force_justification;
        let shaper = self.prepare(font)?;

        // Itemization scratch lives only for this call.
        let layout = LayoutData::itemize(text);

        let mut runs = Vec::with_capacity(layout.items.len());
        for item in &layout.items {
            let mut run = shaper.shape_item(text, item)?;
            if force_justification {
                run.width = run.effective_width();
            }
            runs.push(Some(run));
        }

        let order = visual_order(&layout.levels());
        Ok(order
            .into_iter()
            .filter_map(|logical| runs[logical].take())
            .map(|run| (run, font.clone()))
            .collect())
    }
}
