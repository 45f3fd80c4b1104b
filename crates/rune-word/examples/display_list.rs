//! Render a short line and print the recorded paint commands.
//!
//! Uses the font from `rune.toml` (`[text] font`) when one is configured,
//! the fixed-advance shaper otherwise.
//!
//! Run with: RUST_LOG=trace cargo run -p rune-word --example display_list

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use rune_text::{FixedAdvanceShaper, FixedFont, Font, FontFace, GlyphShaper, HarfrustShaper};
use rune_word::{
    Color, Command, DisplayList, EmojiImage, EmojiProvider, FixedMetrics, LinksVisible, Point,
    RendererConfig, ShapedMetrics, TextMetrics, TextWord, WordRenderer,
};

/// Solid yellow squares stand in for emoji artwork.
struct SquareEmoji;

impl EmojiProvider for SquareEmoji {
    fn emoji(&mut self, _code: &str, size: f32) -> Option<EmojiImage> {
        let side = size.round() as u32;
        let pixels = RgbaImage::from_pixel(side, side, Rgba([255, 204, 0, 255]));
        Some(EmojiImage::new(Arc::new(pixels), 1.0))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut rune = rune_config::RuneConfig::load();
    if rune.word.selection_color.is_none() {
        rune.word.selection_color = Some("#3390ff".into());
    }
    if rune.word.highlight_color.is_none() {
        rune.word.highlight_color = Some("#ffff00".into());
    }
    let config = RendererConfig::from_config(&rune.word)?;
    let size = rune.text.text_size.unwrap_or(12.0);

    let list_output = match &rune.text.font {
        Some(path) => {
            let face = FontFace::from_path(path, 0)?;
            let font = Font::new(Arc::new(face), size);
            let metrics = ShapedMetrics::new();
            let space = metrics.text_width(&font, " ");
            render_line::<HarfrustShaper>(config, font, space, &metrics)
        }
        None => {
            let font = FixedFont::new(0, size * 0.6, size * 0.8, size * 0.2);
            let space = font.text_width(" ");
            render_line::<FixedAdvanceShaper>(config, font, space, &FixedMetrics)
        }
    };
    println!("{list_output}");
    Ok(())
}

fn render_line<S>(
    config: RendererConfig,
    font: S::Font,
    space: f32,
    metrics: &dyn TextMetrics<S::Font>,
) -> String
where
    S: GlyphShaper,
{
    let emoji_size = config.line_height * 0.8;
    let words = [
        TextWord::new("Hello", font.clone(), Color::BLACK)
            .with_highlight(1..4)
            .with_space(space),
        TextWord::new("world", font.clone(), Color::BLACK)
            .with_selection(2..5)
            .with_selected_text_color(Color::WHITE)
            .with_space(space)
            .with_space_selected(),
        TextWord::emoji("1f600", emoji_size, emoji_size, font.clone(), Color::BLACK)
            .as_link(LinksVisible::Show)
            .underlined()
            .with_space(space),
        TextWord::new("שלום end", font, Color::BLACK),
    ];

    let mut list = DisplayList::new();
    let mut emoji = SquareEmoji;
    let pen = {
        let mut renderer = WordRenderer::<S>::new(
            &mut list,
            metrics,
            &mut emoji,
            Point::new(0.0, config.line_height),
            config,
        );
        for word in &words {
            renderer.draw(word, false);
        }
        renderer.pen()
    };

    let mut out = String::new();
    for cmd in &list.commands {
        let line = match cmd {
            Command::FillRect { rect, color } => format!("fill   {rect:?} {color:?}"),
            Command::SetPenColor(color) => format!("pen    {color:?}"),
            Command::DrawGlyphRun { origin, run, .. } => format!(
                "glyphs {origin:?} width={} level={} glyphs={}",
                run.width,
                run.bidi_level,
                run.glyphs.len()
            ),
            Command::DrawImage { rect, image } => format!(
                "image  {rect:?} {}x{}",
                image.pixel_width(),
                image.pixel_height()
            ),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(&format!("pen ends at {pen:?}"));
    out
}
