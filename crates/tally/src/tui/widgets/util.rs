use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "...";

/// Cut `input` to at most `max_width` terminal columns, ending with `...`
/// when something was dropped and there is room for it.
///
/// Grapheme clusters are never split; a wide cluster that does not fit is
/// dropped whole.
pub(in crate::tui) fn truncate_with_ellipsis(input: &str, max_width: usize) -> Cow<'_, str> {
    if input.width() <= max_width {
        return Cow::Borrowed(input);
    }

    let (budget, suffix) = match max_width.checked_sub(ELLIPSIS.len()) {
        Some(budget) if budget > 0 => (budget, ELLIPSIS),
        _ => (max_width, ""),
    };

    let mut used = 0;
    let mut cut = 0;
    for (idx, grapheme) in input.grapheme_indices(true) {
        let width = grapheme.width();
        if used + width > budget {
            break;
        }
        used += width;
        cut = idx + grapheme.len();
    }
    Cow::Owned(format!("{}{suffix}", &input[..cut]))
}
