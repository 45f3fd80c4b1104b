use rune_text::ShapedGlyphRun;

use crate::color::Color;
use crate::services::EmojiImage;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Same rectangle, `dw` wider on the right.
    pub fn widened(self, dw: f32) -> Self {
        Self {
            w: self.w + dw,
            ..self
        }
    }
}

/// Paint target for the word renderer.
///
/// Calls arrive in paint order (fills before the glyphs they sit behind, pen
/// moving left to right) and implementations must preserve that order.
pub trait DrawSurface<F> {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn set_pen_color(&mut self, color: Color);
    /// Paint `run` with its pen origin at `origin`, using the current pen color.
    fn draw_glyph_run(&mut self, origin: Point, run: &ShapedGlyphRun, font: &F);
    fn draw_image(&mut self, rect: Rect, image: &EmojiImage);
}

#[derive(Clone, Debug)]
pub enum Command<F> {
    FillRect { rect: Rect, color: Color },
    SetPenColor(Color),
    DrawGlyphRun { origin: Point, run: ShapedGlyphRun, font: F },
    DrawImage { rect: Rect, image: EmojiImage },
}

/// A surface that records every call, for replay on a real painter or for
/// inspection in tests.
#[derive(Clone, Debug)]
pub struct DisplayList<F> {
    pub commands: Vec<Command<F>>,
}

impl<F> Default for DisplayList<F> {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
        }
    }
}

impl<F> DisplayList<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All recorded fill rectangles, in paint order.
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Origins and widths of all recorded glyph runs, in paint order.
    pub fn glyph_runs(&self) -> Vec<(Point, f32)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                Command::DrawGlyphRun { origin, run, .. } => Some((*origin, run.width)),
                _ => None,
            })
            .collect()
    }

    /// Replay the recorded commands onto another surface.
    pub fn replay(&self, target: &mut dyn DrawSurface<F>) {
        for cmd in &self.commands {
            match cmd {
                Command::FillRect { rect, color } => target.fill_rect(*rect, *color),
                Command::SetPenColor(color) => target.set_pen_color(*color),
                Command::DrawGlyphRun { origin, run, font } => {
                    target.draw_glyph_run(*origin, run, font)
                }
                Command::DrawImage { rect, image } => target.draw_image(*rect, image),
            }
        }
    }
}

impl<F: Clone> DrawSurface<F> for DisplayList<F> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(Command::FillRect { rect, color });
    }

    fn set_pen_color(&mut self, color: Color) {
        self.commands.push(Command::SetPenColor(color));
    }

    fn draw_glyph_run(&mut self, origin: Point, run: &ShapedGlyphRun, font: &F) {
        self.commands.push(Command::DrawGlyphRun {
            origin,
            run: run.clone(),
            font: font.clone(),
        });
    }

    fn draw_image(&mut self, rect: Rect, image: &EmojiImage) {
        self.commands.push(Command::DrawImage {
            rect,
            image: image.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_replays_in_order() {
        let mut list = DisplayList::<()>::new();
        list.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::WHITE);
        list.set_pen_color(Color::BLACK);
        list.draw_glyph_run(
            Point::new(1.0, 2.0),
            &ShapedGlyphRun {
                width: 12.0,
                ..ShapedGlyphRun::default()
            },
            &(),
        );

        let mut copy = DisplayList::<()>::new();
        list.replay(&mut copy);

        assert_eq!(copy.commands.len(), 3);
        assert_eq!(copy.fills(), vec![(Rect::new(0.0, 0.0, 5.0, 5.0), Color::WHITE)]);
        assert_eq!(copy.glyph_runs(), vec![(Point::new(1.0, 2.0), 12.0)]);
    }

    #[test]
    fn widened_grows_to_the_right() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0).widened(5.0);
        assert_eq!(rect, Rect::new(1.0, 2.0, 8.0, 4.0));
    }
}
