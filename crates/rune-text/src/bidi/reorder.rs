use unicode_bidi::{BidiInfo, Level};

/// Compute the visual order of a sequence of runs from their embedding
/// levels (UAX-9 rule L2).
///
/// `levels[i]` is the level of the i-th run in logical order. The result maps
/// each visual slot to a logical index: `order[v]` is the run painted at
/// visual position `v`, counting from the left.
pub fn visual_order(levels: &[Level]) -> Vec<usize> {
    BidiInfo::reorder_visual(levels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(numbers: &[u8]) -> Vec<Level> {
        numbers.iter().map(|&n| Level::new(n).unwrap()).collect()
    }

    #[test]
    fn ltr_runs_keep_logical_order() {
        assert_eq!(visual_order(&levels(&[0, 0, 0])), vec![0, 1, 2]);
    }

    #[test]
    fn embedded_rtl_runs_are_reversed() {
        // LTR, RTL, RTL, LTR: the two RTL runs swap places.
        assert_eq!(visual_order(&levels(&[0, 1, 1, 0])), vec![0, 2, 1, 3]);
    }

    #[test]
    fn nested_ltr_inside_rtl() {
        // RTL paragraph containing an LTR number: the whole sequence flips,
        // the number run stays a single unit.
        let order = visual_order(&levels(&[1, 2, 1]));
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn empty_levels_give_empty_order() {
        assert!(visual_order(&[]).is_empty());
    }
}
