//! Partitioning of a word's text into colored segments.
//!
//! The segment list is always an ordered, gapless cover of `0..len`. Two
//! operations refine it:
//!
//! - [`Segments::fill`] attaches a background color to a range without
//!   touching text colors or boundaries.
//! - [`Segments::split`] changes both text color and background over a range,
//!   cutting the segments it partially overlaps.

use core::ops::Range;

use crate::color::Color;
use crate::segment::{FillOverlay, Segment};

#[derive(Debug, Clone, Default)]
pub struct Segments {
    parts: Vec<Segment>,
}

impl Segments {
    /// A single segment covering `0..len`.
    pub fn new(len: usize, text_color: Color) -> Self {
        let mut segments = Self::default();
        segments.reset(len, text_color);
        segments
    }

    /// Start over with a single segment covering `0..len`, keeping the
    /// allocation.
    pub fn reset(&mut self, len: usize, text_color: Color) {
        self.parts.clear();
        self.parts.push(Segment::new(0..len, text_color));
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.parts.iter()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.parts
    }

    /// End offset of the covered text.
    pub fn text_len(&self) -> usize {
        self.parts.last().map_or(0, |part| part.range.end)
    }

    /// Append a segment after the current cover. Used for synthetic text
    /// such as a trailing space.
    pub fn push(&mut self, segment: Segment) {
        debug_assert_eq!(segment.range.start, self.text_len(), "segment must extend the cover");
        self.parts.push(segment);
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let len = self.text_len();
        let start = range.start.min(len);
        start..range.end.clamp(start, len)
    }

    /// Paint `color` behind `range`.
    ///
    /// Segments fully inside the range get a whole-segment fill, the ones it
    /// only touches get a fill restricted to the intersection.
    pub fn fill(&mut self, range: Range<usize>, color: Color) {
        let Range { start: from, end: to } = self.clamp(range);
        if from == to {
            return;
        }

        for part in &mut self.parts {
            let Range { start, end } = part.range;
            if to <= start || from >= end {
                continue;
            }

            if from <= start && to >= end {
                part.fill_entirely(color);
            } else {
                let fill_from = from.clamp(start, end);
                let fill_to = to.clamp(start, end);
                if fill_from != fill_to {
                    part.fills.push(FillOverlay::range(fill_from..fill_to, color));
                }
            }
        }
    }

    /// Paint `range` with `text_color` over a `fill` background.
    ///
    /// Every existing segment overlapping the range is handled on its own and
    /// replaced in place by up to three pieces, so the pass rebuilds the list
    /// rather than inserting into it.
    pub fn split(&mut self, range: Range<usize>, text_color: Color, fill: Color) {
        let Range { start: from, end: to } = self.clamp(range);
        if from == to {
            return;
        }

        let parts = std::mem::take(&mut self.parts);
        let mut rebuilt = Vec::with_capacity(parts.len() + 2);

        for mut part in parts {
            let Range { start, end } = part.range;
            if to <= start || from >= end {
                rebuilt.push(part);
                continue;
            }

            if from <= start && to >= end {
                // Fully covered.
                part.text_color = text_color;
                part.fill_entirely(fill);
                rebuilt.push(part);
            } else if from > start && to < end {
                // Strictly inside: left keeps its look, middle is new, right
                // inherits the original color and fills.
                let carried = part.fills.clone();
                let original = part.text_color;
                part.truncate_to(start..from);
                rebuilt.push(part);
                rebuilt.push(Segment::filled(from..to, text_color, fill));
                rebuilt.push(Segment::new(to..end, original).carry_fills(&carried));
            } else if from <= start {
                // Covers the left side.
                let carried = part.fills.clone();
                let original = part.text_color;
                part.truncate_to(start..to);
                part.text_color = text_color;
                part.fill_entirely(fill);
                rebuilt.push(part);
                rebuilt.push(Segment::new(to..end, original).carry_fills(&carried));
            } else {
                // Covers the right side.
                part.truncate_to(start..from);
                rebuilt.push(part);
                rebuilt.push(Segment::filled(from..end, text_color, fill));
            }
        }

        self.parts = rebuilt;
        log::trace!("split {from}..{to} -> {} segments", self.parts.len());
    }

    /// Remove segments with an empty range.
    pub fn drop_empty(&mut self) {
        self.parts.retain(|part| !part.is_empty());
    }
}
