use std::fmt;
use std::sync::Arc;

use harfrust::{
    Direction as HbDirection,
    FontRef as HbFontRef,
    Script as HbScript,
    ShaperData,
    ShaperInstance,
    Tag as HbTag,
    UnicodeBuffer as HbUnicodeBuffer,
};
use swash::GlyphId;

use crate::font::Font;
use crate::shaping::{GlyphPosition, ShapeError, ShapedGlyphRun, TextItem};

/// A shaping engine bound to one font.
///
/// Instances are expensive to build and cheap to reuse, which is why
/// [`crate::shaping::ShapingEngine`] keeps the last one around and only
/// rebuilds it when the font changes.
pub trait GlyphShaper: Sized {
    type Font: Clone + PartialEq + fmt::Debug;

    /// Build a shaper for `font`.
    fn for_font(font: &Self::Font) -> Result<Self, ShapeError>;

    /// Font this shaper was built for.
    fn font(&self) -> &Self::Font;

    /// Shape one itemized run of `text`.
    fn shape_item(&self, text: &str, item: &TextItem) -> Result<ShapedGlyphRun, ShapeError>;
}

/// Text shaper built on harfrust (pure-Rust HarfBuzz port).
///
/// Holds the per-font shaping tables; a `harfrust::Shaper` is assembled from
/// them for every run.
pub struct HarfrustShaper {
    font: Font,
    data: Arc<[u8]>,
    shaper_data: ShaperData,
    instance: ShaperInstance,
}

impl fmt::Debug for HarfrustShaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarfrustShaper")
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

impl HarfrustShaper {
    fn font_ref(&self) -> Result<HbFontRef<'_>, ShapeError> {
        HbFontRef::from_index(&self.data, self.font.face().index()).map_err(|_| ShapeError::InvalidFont)
    }
}

impl GlyphShaper for HarfrustShaper {
    type Font = Font;

    fn for_font(font: &Font) -> Result<Self, ShapeError> {
        let data = font.face().as_bytes();
        let font_ref =
            HbFontRef::from_index(&data, font.face().index()).map_err(|_| ShapeError::InvalidFont)?;
        let shaper_data = ShaperData::new(&font_ref);
        // Default (no variations) instance.
        let instance = ShaperInstance::from_variations(&font_ref, core::iter::empty::<harfrust::Variation>());
        Ok(Self {
            font: font.clone(),
            data,
            shaper_data,
            instance,
        })
    }

    fn font(&self) -> &Font {
        &self.font
    }

    fn shape_item(&self, text: &str, item: &TextItem) -> Result<ShapedGlyphRun, ShapeError> {
        let font_ref = self.font_ref()?;
        let shaper = self
            .shaper_data
            .shaper(&font_ref)
            .instance(Some(&self.instance))
            .point_size(None)
            .build();

        let mut buffer = HbUnicodeBuffer::new();
        buffer.push_str(&text[item.range.clone()]);
        buffer.set_direction(if item.is_rtl() {
            HbDirection::RightToLeft
        } else {
            HbDirection::LeftToRight
        });
        if let Some(script) = hb_script(item.script) {
            buffer.set_script(script);
        }
        // Let harfrust fill in any remaining segment properties.
        buffer.guess_segment_properties();

        let glyph_buffer = shaper.shape(buffer, &[]);
        let infos = glyph_buffer.glyph_infos();
        let positions = glyph_buffer.glyph_positions();

        // harfrust works in design units.
        let scale = self.font.units_to_pixels();
        let metrics = self.font.metrics();

        let mut run = ShapedGlyphRun {
            text_range: item.range.clone(),
            glyphs: Vec::with_capacity(infos.len()),
            positions: Vec::with_capacity(infos.len()),
            advances: Vec::with_capacity(infos.len()),
            clusters: Vec::with_capacity(infos.len()),
            width: 0.0,
            ascent: metrics.ascent,
            descent: metrics.descent,
            bidi_level: item.level.number(),
        };

        let mut pen_x: f32 = 0.0;
        for (info, pos) in infos.iter().zip(positions.iter()) {
            let x_advance = pos.x_advance as f32 * scale;
            run.glyphs.push(info.glyph_id as GlyphId);
            run.positions.push(GlyphPosition {
                x_offset: pen_x + pos.x_offset as f32 * scale,
                y_offset: -(pos.y_offset as f32) * scale,
            });
            run.advances.push(x_advance);
            run.clusters.push(info.cluster);
            pen_x += x_advance;
        }
        // Natural advance snapped to 1/64 px, the precision glyph rasterizers position with.
        run.width = (pen_x * 64.0).round() / 64.0;

        Ok(run)
    }
}

/// harfrust script for a run; neutral runs let harfrust guess.
fn hb_script(script: unicode_script::Script) -> Option<HbScript> {
    use unicode_script::Script;
    if matches!(script, Script::Common | Script::Inherited | Script::Unknown) {
        return None;
    }
    let tag: [u8; 4] = script.short_name().as_bytes().try_into().ok()?;
    HbScript::from_iso15924_tag(HbTag::new(&tag))
}

/// Deterministic shaper where every character is one glyph of the same
/// advance. Used for headless measurement and in tests, where no font files
/// are available.
#[derive(Debug, Clone)]
pub struct FixedAdvanceShaper {
    font: FixedFont,
}

/// Font description understood by [`FixedAdvanceShaper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFont {
    pub id: u32,
    pub advance: f32,
    pub ascent: f32,
    pub descent: f32,
}

impl FixedFont {
    pub fn new(id: u32, advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            id,
            advance,
            ascent,
            descent,
        }
    }

    /// Width of `text` laid out with this font.
    pub fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }
}

impl GlyphShaper for FixedAdvanceShaper {
    type Font = FixedFont;

    fn for_font(font: &FixedFont) -> Result<Self, ShapeError> {
        Ok(Self { font: *font })
    }

    fn font(&self) -> &FixedFont {
        &self.font
    }

    fn shape_item(&self, text: &str, item: &TextItem) -> Result<ShapedGlyphRun, ShapeError> {
        let slice = &text[item.range.clone()];
        let mut clusters: Vec<(u32, char)> = slice
            .char_indices()
            .map(|(offset, ch)| (offset as u32, ch))
            .collect();
        if item.is_rtl() {
            clusters.reverse();
        }

        let mut run = ShapedGlyphRun {
            text_range: item.range.clone(),
            width: clusters.len() as f32 * self.font.advance,
            ascent: self.font.ascent,
            descent: self.font.descent,
            bidi_level: item.level.number(),
            ..ShapedGlyphRun::default()
        };
        for (i, (cluster, ch)) in clusters.into_iter().enumerate() {
            run.glyphs.push((u32::from(ch) & 0xffff) as GlyphId);
            run.positions.push(GlyphPosition {
                x_offset: i as f32 * self.font.advance,
                y_offset: 0.0,
            });
            run.advances.push(self.font.advance);
            run.clusters.push(cluster);
        }
        Ok(run)
    }
}
