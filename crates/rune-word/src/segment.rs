use core::ops::Range;

use crate::color::Color;

/// Part of a segment covered by a fill overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillSpan {
    /// The whole segment, whatever its current bounds.
    Whole,
    /// A byte range of the word text, always inside the owning segment.
    Range(Range<usize>),
}

/// A background color painted behind (part of) a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOverlay {
    pub span: FillSpan,
    pub color: Color,
}

impl FillOverlay {
    pub fn whole(color: Color) -> Self {
        Self {
            span: FillSpan::Whole,
            color,
        }
    }

    pub fn range(range: Range<usize>, color: Color) -> Self {
        Self {
            span: FillSpan::Range(range),
            color,
        }
    }

    /// This overlay restricted to `bounds`, or `None` when nothing is left.
    fn clipped(&self, bounds: &Range<usize>) -> Option<Self> {
        match &self.span {
            FillSpan::Whole => Some(self.clone()),
            FillSpan::Range(range) => {
                let start = range.start.max(bounds.start);
                let end = range.end.min(bounds.end);
                (start < end).then(|| Self::range(start..end, self.color))
            }
        }
    }
}

/// A contiguous byte range of a word's text painted with one text color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub range: Range<usize>,
    pub text_color: Color,
    pub fills: Vec<FillOverlay>,
}

impl Segment {
    pub fn new(range: Range<usize>, text_color: Color) -> Self {
        Self {
            range,
            text_color,
            fills: Vec::new(),
        }
    }

    /// A segment painted with `text_color` over a whole-segment `fill`.
    pub fn filled(range: Range<usize>, text_color: Color, fill: Color) -> Self {
        Self {
            range,
            text_color,
            fills: vec![FillOverlay::whole(fill)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// The slice of `text` this segment covers.
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.range.clone()]
    }

    pub fn fill_entirely(&mut self, color: Color) {
        self.fills.push(FillOverlay::whole(color));
    }

    /// Shrink the segment to `bounds` (a sub-range of its current range),
    /// clipping range fills and dropping the ones left empty.
    pub fn truncate_to(&mut self, bounds: Range<usize>) {
        self.fills = self
            .fills
            .iter()
            .filter_map(|fill| fill.clipped(&bounds))
            .collect();
        self.range = bounds;
    }

    /// Attach the parts of `fills` that reach into this segment.
    pub fn carry_fills(mut self, fills: &[FillOverlay]) -> Self {
        let bounds = self.range.clone();
        self.fills
            .extend(fills.iter().filter_map(|fill| fill.clipped(&bounds)));
        self
    }
}

/// Clamp `range` to `text`, snapping both ends down to character boundaries.
pub fn clamp_to_text(text: &str, range: Range<usize>) -> Range<usize> {
    let snap = |offset: usize| {
        let mut offset = offset.min(text.len());
        while !text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    };
    let start = snap(range.start);
    let end = snap(range.end).max(start);
    start..end
}
