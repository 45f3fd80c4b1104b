use unicode_bidi::{BidiInfo, LTR_LEVEL, Level};

/// Compute embedding levels for each byte in the text, with the line-level
/// rule L1 applied to every paragraph (trailing whitespace and separators
/// drop back to the paragraph level).
///
/// Paragraphs are laid out with a left-to-right base direction. The result
/// is parallel to `text.as_bytes()`: multi-byte characters will have the same
/// level repeated for each byte.
pub fn line_levels(text: &str) -> Vec<Level> {
    let info = BidiInfo::new(text, Some(LTR_LEVEL));
    let mut levels = info.levels.clone();
    for para in &info.paragraphs {
        let reordered = info.reordered_levels(para, para.range.clone());
        levels[para.range.clone()].copy_from_slice(&reordered[para.range.clone()]);
    }
    levels
}
