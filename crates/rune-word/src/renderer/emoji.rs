use rune_text::GlyphShaper;

use super::WordRenderer;
use crate::color::Color;
use crate::config::{VerticalAnchor, snap_underline_y, vertical_shift};
use crate::surface::{Point, Rect};
use crate::word::WordView;

impl<S: GlyphShaper> WordRenderer<'_, S> {
    pub(super) fn draw_emoji<W>(&mut self, word: &W, needs_space: bool)
    where
        W: WordView<Font = S::Font>,
    {
        let ratio = self.config.bitmap_ratio;
        let Some(mut emoji) = self.emoji.emoji(word.emoji_code(), word.emoji_size() * ratio) else {
            log::warn!("no emoji image for {:?}", word.emoji_code());
            self.pen.x += word.cached_width().round() + self.add_space;
            return;
        };
        emoji.normalize_pixel_ratio(ratio);
        let (width, height) = emoji.logical_size();

        let line_height = self.config.line_height;
        let mut y = self.pen.y + (line_height / 2.0 - height / 2.0);
        match self.config.anchor {
            VerticalAnchor::Middle => y -= line_height / 2.0,
            VerticalAnchor::Baseline => y -= self.metrics.ascent(word.font()),
            VerticalAnchor::Bottom => y -= line_height,
            VerticalAnchor::Top => {}
        }

        let selection = self.config.selection_color.filter(|_| word.is_full_selected());
        let highlight = self.config.highlight_color.filter(|_| word.is_full_highlighted());
        if selection.is_some() || highlight.is_some() {
            let pad = self.config.extra_space() / 2.0;
            let rect = Rect::new(
                self.pen.x - pad,
                self.pen.y - self.config.selection_offset + self.config.y_diff(),
                word.cached_width() + pad,
                line_height + self.config.y_diff(),
            );

            // Highlight first so the selection paints on top.
            if let Some(color) = highlight {
                let extra = if word.is_space_highlighted() { self.add_space } else { 0.0 };
                self.surface.fill_rect(rect.widened(extra), color);
            }
            if let Some(color) = selection {
                let extra = if word.is_space_selected() { self.add_space } else { 0.0 };
                self.surface.fill_rect(rect.widened(extra), color);
            }
        }

        if word.underline() {
            let color = if selection.is_some() {
                word.selected_text_color()
            } else if highlight.is_some() {
                self.config.highlighted_text_color.unwrap_or(word.color())
            } else {
                self.config.link_color.unwrap_or(word.color())
            };
            self.draw_underline(word, width, y, needs_space, color);
        }

        self.surface
            .draw_image(Rect::new(self.pen.x, y, width, height), &emoji);

        self.pen.x += word.cached_width().round() + self.add_space;
    }

    /// Paint a run of spaces under the emoji so link underlining shows up
    /// beneath it.
    fn draw_underline<W>(
        &mut self,
        word: &W,
        emoji_width: f32,
        emoji_y: f32,
        needs_space: bool,
        color: Color,
    ) where
        W: WordView<Font = S::Font>,
    {
        let font = word.font();
        if self.metrics.text_width(font, " ") <= 0.0 {
            return;
        }

        let mut spaces = String::from(" ");
        while self.metrics.text_width(font, &spaces) <= emoji_width {
            spaces.push(' ');
        }
        if !needs_space && word.has_space_after() {
            spaces.push(' ');
        }

        let runs = match self.engine.shape(&spaces, font) {
            Ok(runs) => runs,
            Err(err) => {
                log::warn!("skipping emoji underline: {err}");
                return;
            }
        };

        let mut y = emoji_y;
        for (run, run_font) in &runs {
            y += vertical_shift(
                self.config.line_height,
                self.config.anchor,
                run.ascent,
                run.descent,
                self.config.bitmap_ratio,
            );
            y -= self.config.line_spacing / 2.0;
            y = snap_underline_y(y);

            self.surface.set_pen_color(color);
            self.surface
                .draw_glyph_run(Point::new(self.pen.x - 1.0, y), run, run_font);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Color;
    use crate::config::{RendererConfig, VerticalAnchor};
    use crate::renderer::tests::{BLUE, BlankEmoji, LINK, YELLOW, config, font, render};
    use crate::surface::{Command, Point, Rect};
    use crate::word::{LinksVisible, TextWord};

    fn emoji_word() -> TextWord<rune_text::FixedFont> {
        TextWord::emoji("1f600", 16.0, 18.0, font(), Color::BLACK)
    }

    fn image_rects(commands: &[Command<rune_text::FixedFont>]) -> Vec<Rect> {
        commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::DrawImage { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn emoji_is_centred_and_advances_cached_width() {
        let mut emoji = BlankEmoji::default();
        let word = emoji_word().with_space(4.0);
        let (list, pen) = render(config(), &mut emoji, &[(word, false)]);

        assert_eq!(emoji.requests, vec![("1f600".to_owned(), 16.0)]);
        assert!(list.fills().is_empty());
        assert_eq!(image_rects(&list.commands), vec![Rect::new(0.0, 2.0, 16.0, 16.0)]);
        assert_eq!(pen.x, 22.0);
    }

    #[test]
    fn fully_selected_emoji_paints_one_selection_rect() {
        let config = RendererConfig {
            selection_color: Some(BLUE),
            ..config()
        };
        let word = emoji_word().with_selection(0..5);
        let (list, _) = render(config, &mut BlankEmoji::default(), &[(word, false)]);

        // Cached width plus half the extra space, shifted left by the same pad.
        assert_eq!(list.fills(), vec![(Rect::new(-1.0, 1.0, 19.0, 21.0), BLUE)]);
        assert!(matches!(list.commands.last(), Some(Command::DrawImage { .. })));
    }

    #[test]
    fn highlight_paints_under_selection_and_widens_for_space() {
        let config = RendererConfig {
            selection_color: Some(BLUE),
            highlight_color: Some(YELLOW),
            ..config()
        };
        let word = emoji_word()
            .with_selection(0..5)
            .with_highlight(0..5)
            .with_space(4.0)
            .with_space_selected();
        let (list, _) = render(config, &mut BlankEmoji::default(), &[(word, false)]);

        assert_eq!(
            list.fills(),
            vec![
                (Rect::new(-1.0, 1.0, 19.0, 21.0), YELLOW),
                (Rect::new(-1.0, 1.0, 23.0, 21.0), BLUE),
            ]
        );
    }

    #[test]
    fn partial_selection_paints_nothing() {
        let config = RendererConfig {
            selection_color: Some(BLUE),
            ..config()
        };
        let word = emoji_word().with_selection(1..5);
        let (list, _) = render(config, &mut BlankEmoji::default(), &[(word, false)]);
        assert!(list.fills().is_empty());
    }

    #[test]
    fn underlined_emoji_gets_a_run_of_spaces_in_link_color() {
        let config = RendererConfig {
            link_color: Some(LINK),
            anchor: VerticalAnchor::Baseline,
            ..config()
        };
        let word = emoji_word()
            .as_link(LinksVisible::Show)
            .underlined()
            .with_space(4.0);
        let (list, pen) = render(config, &mut BlankEmoji::default(), &[(word, false)]);

        let runs: Vec<_> = list
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::DrawGlyphRun { origin, run, .. } => Some((*origin, run.glyphs.len())),
                _ => None,
            })
            .collect();
        // Two spaces cover 16px, plus one for the unaccounted trailing space.
        // y: 0 + (10 - 8) - ascent, baseline shift 0
        assert_eq!(runs, vec![(Point::new(-1.0, -6.0), 3)]);
        assert!(list
            .commands
            .iter()
            .any(|cmd| matches!(cmd, Command::SetPenColor(color) if *color == LINK)));
        // The image goes on top of the underline.
        assert!(matches!(list.commands.last(), Some(Command::DrawImage { .. })));
        assert_eq!(image_rects(&list.commands), vec![Rect::new(0.0, -6.0, 16.0, 16.0)]);
        assert_eq!(pen.x, 22.0);
    }

    #[test]
    fn selected_underline_uses_selected_text_color() {
        let config = RendererConfig {
            link_color: Some(LINK),
            selection_color: Some(BLUE),
            ..config()
        };
        let word = emoji_word()
            .underlined()
            .with_selection(0..5)
            .with_selected_text_color(Color::WHITE);
        let (list, _) = render(config, &mut BlankEmoji::default(), &[(word, true)]);

        let pens: Vec<Color> = list
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::SetPenColor(color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(pens, vec![Color::WHITE]);
    }

    #[test]
    fn missing_emoji_still_advances() {
        let mut emoji = BlankEmoji {
            missing: true,
            ..BlankEmoji::default()
        };
        let (list, pen) = render(config(), &mut emoji, &[(emoji_word().with_space(4.0), true)]);

        assert!(list.commands.is_empty());
        assert_eq!(pen.x, 22.0);
    }

    #[test]
    fn bitmap_ratio_scales_request_and_rect() {
        let config = RendererConfig {
            bitmap_ratio: 2.0,
            ..config()
        };
        let mut emoji = BlankEmoji::default();
        let (list, _) = render(config, &mut emoji, &[(emoji_word(), false)]);

        assert_eq!(emoji.requests, vec![("1f600".to_owned(), 32.0)]);
        assert_eq!(image_rects(&list.commands), vec![Rect::new(0.0, 2.0, 16.0, 16.0)]);
    }
}
