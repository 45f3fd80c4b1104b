use core::ops::Range;

use unicode_bidi::Level;
use unicode_script::{Script, UnicodeScript};

use crate::bidi::line_levels;

/// A maximal run of text sharing one embedding level and one script.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    /// Byte range in the itemized text.
    pub range: Range<usize>,
    /// Resolved embedding level of the run.
    pub level: Level,
    /// Script of the run. `Common` when the run only holds neutral characters.
    pub script: Script,
}

impl TextItem {
    pub fn is_rtl(&self) -> bool {
        self.level.is_rtl()
    }
}

/// Per-call itemization result.
///
/// Owned by a single shaping call and dropped when it returns, so scratch
/// memory never accumulates across words.
#[derive(Debug, Default)]
pub struct LayoutData {
    pub items: Vec<TextItem>,
}

impl LayoutData {
    /// Split `text` into runs of uniform bidi level and script.
    ///
    /// Characters of the `Common`, `Inherited` and `Unknown` scripts join the
    /// run they appear in; a run that starts with them adopts the first real
    /// script that follows.
    pub fn itemize(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let levels = line_levels(text);
        let mut items: Vec<TextItem> = Vec::new();

        for (idx, ch) in text.char_indices() {
            let level = levels[idx];
            let script = ch.script();
            let end = idx + ch.len_utf8();

            match items.last_mut() {
                Some(item) if item.level == level && scripts_compatible(item.script, script) => {
                    item.range.end = end;
                    if is_neutral(item.script) && !is_neutral(script) {
                        item.script = script;
                    }
                }
                _ => items.push(TextItem {
                    range: idx..end,
                    level,
                    script: if is_neutral(script) { Script::Common } else { script },
                }),
            }
        }

        Self { items }
    }

    pub fn levels(&self) -> Vec<Level> {
        self.items.iter().map(|item| item.level).collect()
    }
}

fn is_neutral(script: Script) -> bool {
    matches!(script, Script::Common | Script::Inherited | Script::Unknown)
}

fn scripts_compatible(current: Script, next: Script) -> bool {
    current == next || is_neutral(current) || is_neutral(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_text_is_one_item() {
        let data = LayoutData::itemize("Hello, world!");
        assert_eq!(data.items.len(), 1);
        assert_eq!(data.items[0].range, 0..13);
        assert_eq!(data.items[0].script, Script::Latin);
    }

    #[test]
    fn empty_text_has_no_items() {
        assert!(LayoutData::itemize("").items.is_empty());
    }

    #[test]
    fn embedded_rtl_phrase_gets_its_own_item() {
        let text = "abc אבג def";
        let data = LayoutData::itemize(text);
        let rtl: Vec<_> = data.items.iter().filter(|item| item.is_rtl()).collect();
        assert_eq!(rtl.len(), 1);
        assert_eq!(&text[rtl[0].range.clone()], "אבג");
        assert_eq!(rtl[0].script, Script::Hebrew);
    }

    #[test]
    fn items_cover_text_without_gaps() {
        let text = "one שתיים three";
        let data = LayoutData::itemize(text);
        let mut expected_start = 0;
        for item in &data.items {
            assert_eq!(item.range.start, expected_start);
            expected_start = item.range.end;
        }
        assert_eq!(expected_start, text.len());
    }

    #[test]
    fn script_change_splits_ltr_text() {
        let data = LayoutData::itemize("abcабв");
        assert_eq!(data.items.len(), 2);
        assert_eq!(data.items[1].script, Script::Cyrillic);
    }

    #[test]
    fn leading_neutral_adopts_following_script() {
        let data = LayoutData::itemize("  abc");
        assert_eq!(data.items.len(), 1);
        assert_eq!(data.items[0].script, Script::Latin);
    }
}
