use core::ops::Range;

use crate::color::Color;

/// Whether link styling is shown for link words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinksVisible {
    #[default]
    Show,
    Hide,
}

/// Read-only view of a word as the renderer needs it.
///
/// Ranges are byte offsets into [`WordView::text`]. They are clamped by the
/// renderer, so out-of-range values degrade to no-ops.
pub trait WordView {
    type Font;

    fn text(&self) -> &str;
    fn font(&self) -> &Self::Font;

    /// Base text color.
    fn color(&self) -> Color;

    /// Text color of the selected part of the word.
    fn selected_text_color(&self) -> Color {
        self.color()
    }

    fn is_emoji(&self) -> bool;
    fn emoji_code(&self) -> &str;
    /// Requested emoji size in logical pixels.
    fn emoji_size(&self) -> f32;
    /// Laid-out width of the word, computed by the line layout.
    fn cached_width(&self) -> f32;

    fn is_link(&self) -> bool;
    fn links_visible(&self) -> LinksVisible;
    fn underline(&self) -> bool;

    /// Selected byte range, if any part of the word is selected.
    fn selection(&self) -> Option<Range<usize>>;
    /// Highlighted byte range, if any part of the word is highlighted.
    fn highlight(&self) -> Option<Range<usize>>;

    fn is_full_selected(&self) -> bool {
        covers(self.selection(), self.text().len())
    }

    fn is_full_highlighted(&self) -> bool {
        covers(self.highlight(), self.text().len())
    }

    fn has_space_after(&self) -> bool;
    fn space_width(&self) -> f32;
    fn is_space_selected(&self) -> bool;
    fn is_space_highlighted(&self) -> bool;
}

fn covers(range: Option<Range<usize>>, len: usize) -> bool {
    range.is_some_and(|range| range.start == 0 && range.end >= len)
}

/// Owned word description, for hosts that do not keep their own word type.
#[derive(Debug, Clone)]
pub struct TextWord<F> {
    pub text: String,
    pub font: F,
    pub color: Color,
    pub selected_text_color: Option<Color>,
    pub emoji: Option<EmojiSpec>,
    pub link: bool,
    pub links_visible: LinksVisible,
    pub underline: bool,
    pub selection: Option<Range<usize>>,
    pub highlight: Option<Range<usize>>,
    pub space_after: Option<f32>,
    pub space_selected: bool,
    pub space_highlighted: bool,
    pub cached_width: f32,
}

/// Emoji attributes of a [`TextWord`].
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiSpec {
    pub code: String,
    pub size: f32,
}

impl<F> TextWord<F> {
    pub fn new(text: impl Into<String>, font: F, color: Color) -> Self {
        Self {
            text: text.into(),
            font,
            color,
            selected_text_color: None,
            emoji: None,
            link: false,
            links_visible: LinksVisible::Show,
            underline: false,
            selection: None,
            highlight: None,
            space_after: None,
            space_selected: false,
            space_highlighted: false,
            cached_width: 0.0,
        }
    }

    /// An emoji word. `code` doubles as the word's text.
    pub fn emoji(code: impl Into<String>, size: f32, cached_width: f32, font: F, color: Color) -> Self {
        let code = code.into();
        let mut word = Self::new(code.clone(), font, color);
        word.emoji = Some(EmojiSpec { code, size });
        word.cached_width = cached_width;
        word
    }

    pub fn with_selection(mut self, range: Range<usize>) -> Self {
        self.selection = Some(range);
        self
    }

    pub fn with_selected_text_color(mut self, color: Color) -> Self {
        self.selected_text_color = Some(color);
        self
    }

    pub fn with_highlight(mut self, range: Range<usize>) -> Self {
        self.highlight = Some(range);
        self
    }

    pub fn with_space(mut self, width: f32) -> Self {
        self.space_after = Some(width);
        self
    }

    pub fn with_space_selected(mut self) -> Self {
        self.space_selected = true;
        self
    }

    pub fn with_space_highlighted(mut self) -> Self {
        self.space_highlighted = true;
        self
    }

    pub fn as_link(mut self, visible: LinksVisible) -> Self {
        self.link = true;
        self.links_visible = visible;
        self
    }

    pub fn underlined(mut self) -> Self {
        self.underline = true;
        self
    }
}

impl<F> WordView for TextWord<F> {
    type Font = F;

    fn text(&self) -> &str {
        &self.text
    }

    fn font(&self) -> &F {
        &self.font
    }

    fn color(&self) -> Color {
        self.color
    }

    fn selected_text_color(&self) -> Color {
        self.selected_text_color.unwrap_or(self.color)
    }

    fn is_emoji(&self) -> bool {
        self.emoji.is_some()
    }

    fn emoji_code(&self) -> &str {
        self.emoji.as_ref().map_or("", |emoji| emoji.code.as_str())
    }

    fn emoji_size(&self) -> f32 {
        self.emoji.as_ref().map_or(0.0, |emoji| emoji.size)
    }

    fn cached_width(&self) -> f32 {
        self.cached_width
    }

    fn is_link(&self) -> bool {
        self.link
    }

    fn links_visible(&self) -> LinksVisible {
        self.links_visible
    }

    fn underline(&self) -> bool {
        self.underline
    }

    fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    fn highlight(&self) -> Option<Range<usize>> {
        self.highlight.clone()
    }

    fn has_space_after(&self) -> bool {
        self.space_after.is_some()
    }

    fn space_width(&self) -> f32 {
        self.space_after.unwrap_or(0.0)
    }

    fn is_space_selected(&self) -> bool {
        self.space_selected
    }

    fn is_space_highlighted(&self) -> bool {
        self.space_highlighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_selection_covers_whole_text() {
        let word = TextWord::new("word", (), Color::BLACK).with_selection(0..4);
        assert!(word.is_full_selected());
        assert!(!word.is_full_highlighted());

        let partial = TextWord::new("word", (), Color::BLACK).with_selection(1..4);
        assert!(!partial.is_full_selected());
    }

    #[test]
    fn selected_text_color_defaults_to_base() {
        let word = TextWord::new("word", (), Color::BLACK);
        assert_eq!(word.selected_text_color(), Color::BLACK);
        let word = word.with_selected_text_color(Color::WHITE);
        assert_eq!(word.selected_text_color(), Color::WHITE);
    }

    #[test]
    fn emoji_words_carry_code_and_size() {
        let word = TextWord::emoji("1f600", 16.0, 18.0, (), Color::BLACK).with_space(4.0);
        assert!(word.is_emoji());
        assert_eq!(word.emoji_code(), "1f600");
        assert_eq!(word.emoji_size(), 16.0);
        assert_eq!(word.cached_width(), 18.0);
        assert!(word.has_space_after());
        assert_eq!(word.space_width(), 4.0);
    }
}
