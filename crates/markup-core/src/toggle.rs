//! Marker toggling over a text selection.
//!
//! Stateless helpers over a `&str` snapshot: they take the full text and raw selection
//! bounds and return a complete replacement string (or a boolean). The input buffer is never
//! mutated; applying the result is the host's job.

use crate::marker::MarkerDefinition;
use crate::offset::OffsetMap;
use crate::selection::Selection;

/// Apply or remove `marker` around the selection, returning the replacement text.
///
/// - A non-collapsed selection that already starts with `marker.open()` and ends with
///   `marker.close()` is unwrapped: exactly one marker is stripped from each end.
/// - Any other non-collapsed selection is wrapped: `open` is inserted before the selection
///   and `close` after it. A selection covering only marker glyphs (shorter than both
///   markers together plus a body) falls into this branch and gains a nested second pair.
/// - A collapsed cursor always receives a fresh empty pair (`open` directly followed by
///   `close`) at the cursor, even when an existing pair touches the cursor. Toggling at a
///   cursor never removes markers; this asymmetry with [`is_inside_marker`] is intended.
///
/// Selection bounds are char offsets; reversed or out-of-range bounds are normalized.
pub fn toggle_marker(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    marker: &MarkerDefinition,
) -> String {
    let map = OffsetMap::new(text);
    let sel = Selection::normalized(selection_start, selection_end, map.char_len());
    let start = map.byte_at(sel.start);
    let end = map.byte_at(sel.end);

    tracing::trace!(
        kind = ?marker.kind(),
        start = sel.start,
        end = sel.end,
        "toggle marker"
    );

    let before = &text[..start];
    let after = &text[end..];

    if sel.is_collapsed() {
        return format!("{before}{}{}{after}", marker.open(), marker.close());
    }

    let selected = &text[start..end];
    if is_bracketed(selected, marker) {
        let body = &selected[marker.open().len()..selected.len() - marker.close().len()];
        format!("{before}{body}{after}")
    } else {
        format!("{before}{}{selected}{}{after}", marker.open(), marker.close())
    }
}

/// Report whether the selection sits inside `marker`.
///
/// - Non-collapsed: `true` iff the selected text is bracketed by the marker pair — exactly
///   the strip condition used by [`toggle_marker`], so the two operations always agree.
/// - Collapsed: `true` iff the text directly before the cursor ends with `open` and the
///   text directly after it starts with `close`. Immediate adjacency only; a cursor deeper
///   inside a styled body reports `false`.
///
/// This is cheap (two affix comparisons, no scanning) and is meant to drive a toggle
/// control's active state on every selection change.
pub fn is_inside_marker(
    text: &str,
    selection_start: usize,
    selection_end: usize,
    marker: &MarkerDefinition,
) -> bool {
    let map = OffsetMap::new(text);
    let sel = Selection::normalized(selection_start, selection_end, map.char_len());
    let start = map.byte_at(sel.start);

    if sel.is_collapsed() {
        return text[..start].ends_with(marker.open()) && text[start..].starts_with(marker.close());
    }

    is_bracketed(&text[start..map.byte_at(sel.end)], marker)
}

/// The shared bracket check: `selected` holds the opening glyphs, the closing glyphs, and a
/// (possibly empty) body between them.
///
/// The length guard keeps a selection like `"**"` — which starts *and* ends with the bold
/// marker — out of the strip branch.
fn is_bracketed(selected: &str, marker: &MarkerDefinition) -> bool {
    selected.len() >= marker.open().len() + marker.close().len()
        && selected.starts_with(marker.open())
        && selected.ends_with(marker.close())
}
