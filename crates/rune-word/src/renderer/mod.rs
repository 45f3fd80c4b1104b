//! Word renderer: turns one word at a time into fills, glyph runs and images
//! on a [`DrawSurface`], advancing a pen along the line.

mod emoji;

use std::borrow::Cow;

use rune_text::{GlyphShaper, ShapingEngine};

use crate::color::Color;
use crate::config::{RendererConfig, VerticalAnchor, vertical_shift};
use crate::overlay::Segments;
use crate::segment::{FillSpan, Segment, clamp_to_text};
use crate::services::{EmojiProvider, TextMetrics};
use crate::surface::{DrawSurface, Point, Rect};
use crate::word::{LinksVisible, WordView};

/// Paints words left to right starting at a pen position.
///
/// A renderer owns mutable state (pen, cached shaping engine) and is meant to
/// be driven by one line or paragraph at a time from a single thread.
pub struct WordRenderer<'a, S: GlyphShaper> {
    surface: &'a mut dyn DrawSurface<S::Font>,
    metrics: &'a dyn TextMetrics<S::Font>,
    emoji: &'a mut dyn EmojiProvider,
    config: RendererConfig,
    pen: Point,
    /// Width of the current word's trailing space, zero when it has none.
    add_space: f32,
    engine: ShapingEngine<S>,
    segments: Segments,
}

impl<'a, S: GlyphShaper> WordRenderer<'a, S> {
    pub fn new(
        surface: &'a mut dyn DrawSurface<S::Font>,
        metrics: &'a dyn TextMetrics<S::Font>,
        emoji: &'a mut dyn EmojiProvider,
        start: Point,
        config: RendererConfig,
    ) -> Self {
        Self {
            surface,
            metrics,
            emoji,
            config,
            pen: start,
            add_space: 0.0,
            engine: ShapingEngine::new(),
            segments: Segments::default(),
        }
    }

    /// Current pen position.
    pub fn pen(&self) -> Point {
        self.pen
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Shaping engine, e.g. to switch on forced justification.
    pub fn engine_mut(&mut self) -> &mut ShapingEngine<S> {
        &mut self.engine
    }

    /// Draw `word` at the pen and advance past it.
    ///
    /// `needs_space` tells the renderer that the caller already accounts for
    /// inter-word spacing: the trailing space is skipped over instead of
    /// being shaped and painted.
    pub fn draw<W>(&mut self, word: &W, needs_space: bool)
    where
        W: WordView<Font = S::Font>,
    {
        self.add_space = if word.has_space_after() {
            word.space_width()
        } else {
            0.0
        };
        log::trace!("draw {:?} at {:?}", word.text(), self.pen);

        if word.is_emoji() {
            self.draw_emoji(word, needs_space);
        } else {
            self.draw_text(word, needs_space);
        }
    }

    fn base_color<W: WordView>(&self, word: &W) -> Color {
        match self.config.link_color {
            Some(link) if word.is_link() && word.links_visible() == LinksVisible::Show => link,
            _ => word.color(),
        }
    }

    fn draw_text<W>(&mut self, word: &W, needs_space: bool)
    where
        W: WordView<Font = S::Font>,
    {
        let text = word.text();
        let base_color = self.base_color(word);
        self.segments.reset(text.len(), base_color);

        if let (Some(range), Some(highlight)) = (word.highlight(), self.config.highlight_color) {
            let range = clamp_to_text(text, range);
            let text_color = self.config.highlighted_text_color.unwrap_or(base_color);
            if text_color == base_color {
                self.segments.fill(range, highlight);
            } else {
                self.segments.split(range, text_color, highlight);
            }
        }

        if let (Some(range), Some(selection)) = (word.selection(), self.config.selection_color) {
            let range = clamp_to_text(text, range);
            let text_color = word.selected_text_color();
            // A fill would ignore the boundaries of an earlier split.
            if text_color == base_color && self.segments.len() == 1 {
                self.segments.fill(range, selection);
            } else {
                self.segments.split(range, text_color, selection);
            }
        }

        self.segments.drop_empty();

        let mut buffer = Cow::Borrowed(text);
        if !needs_space && word.has_space_after() {
            let start = text.len();
            buffer.to_mut().push(' ');
            let mut space = Segment::new(start..start + 1, base_color);
            let fill = if word.is_space_selected() {
                self.config.selection_color
            } else if word.is_space_highlighted() {
                self.config.highlight_color
            } else {
                None
            };
            if let Some(color) = fill {
                space.fill_entirely(color);
            }
            self.segments.push(space);
        }

        let fill_h = self.config.line_height + self.config.y_diff();
        let mut fill_y = self.pen.y - self.config.selection_offset + self.config.y_diff();
        match self.config.anchor {
            VerticalAnchor::Middle => fill_y -= self.config.line_height / 2.0,
            VerticalAnchor::Baseline => fill_y -= self.metrics.ascent(word.font()),
            VerticalAnchor::Top | VerticalAnchor::Bottom => {}
        }

        let segments = std::mem::take(&mut self.segments);
        for segment in segments.iter() {
            self.draw_segment(&buffer, segment, word.font(), fill_y, fill_h);
        }
        self.segments = segments;

        if word.is_space_selected() || word.is_space_highlighted() {
            let color = if word.is_space_selected() {
                self.config.selection_color
            } else {
                self.config.highlight_color
            };
            if let Some(color) = color {
                let width = self.add_space + self.config.extra_space();
                self.surface
                    .fill_rect(Rect::new(self.pen.x.floor(), fill_y, width, fill_h), color);
            }
        }

        if needs_space && word.has_space_after() {
            self.pen.x += self.add_space;
        }
    }

    /// Shape one segment and paint its fills and glyph runs at the pen.
    fn draw_segment(
        &mut self,
        text: &str,
        segment: &Segment,
        font: &S::Font,
        fill_y: f32,
        fill_h: f32,
    ) {
        let runs = match self.engine.shape(segment.text(text), font) {
            Ok(runs) => runs,
            Err(err) => {
                log::warn!("skipping segment {:?}: {err}", segment.range);
                return;
            }
        };

        // Only the first range fill of a segment is painted.
        let mut range_fill_painted = false;
        for (run, run_font) in &runs {
            let x = self.pen.x;
            let y = self.pen.y
                + vertical_shift(
                    self.config.line_height,
                    self.config.anchor,
                    run.ascent,
                    run.descent,
                    self.config.bitmap_ratio,
                )
                - self.config.line_spacing / 2.0;

            for fill in &segment.fills {
                match &fill.span {
                    FillSpan::Whole => {
                        let rect = Rect::new(x.floor(), fill_y, run.width.ceil(), fill_h);
                        self.surface.fill_rect(rect, fill.color);
                    }
                    FillSpan::Range(range) if !range_fill_painted => {
                        let left = self
                            .metrics
                            .text_width(font, &text[segment.range.start..range.start]);
                        let width = self.metrics.text_width(font, &text[range.clone()]);
                        let rect = Rect::new((x + left).round(), fill_y, width.ceil(), fill_h);
                        self.surface.fill_rect(rect, fill.color);
                        range_fill_painted = true;
                    }
                    FillSpan::Range(_) => {}
                }
            }

            self.surface.set_pen_color(segment.text_color);
            self.surface.draw_glyph_run(Point::new(x, y), run, run_font);

            self.pen.x += run.width;
        }
    }
}
