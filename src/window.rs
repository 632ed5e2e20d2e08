use crate::{GridError, Window};

/// Computes the window of view indices to materialize for a scroll position.
///
/// `start_index` is the first row whose top edge is at or above
/// `scroll_offset`; `end_index` (exclusive) is the first row fully below the
/// viewport. Both bounds are widened by `overscan` rows and clamped to
/// `[0, total_rows]`. `leading`/`trailing` reserve exactly
/// `total_rows * row_height` px together with the materialized slice, so the
/// total scrollable height is scroll-invariant and the sticky header stays
/// aligned with absolute scroll position.
///
/// A `scroll_offset` past the end of the content is valid input and clamps
/// to the last full window. A zero `row_height` or `viewport_height` is a
/// caller bug and fails fast instead of producing nonsense geometry.
///
/// This is a pure function: recomputation for unchanged inputs returns the
/// same window.
pub fn compute_window(
    total_rows: usize,
    row_height: u32,
    scroll_offset: u64,
    viewport_height: u32,
    overscan: usize,
) -> Result<Window, GridError> {
    if row_height == 0 {
        return Err(GridError::ZeroRowHeight);
    }
    if viewport_height == 0 {
        return Err(GridError::ZeroViewportHeight);
    }
    if total_rows == 0 {
        return Ok(Window::default());
    }

    let row_height = row_height as u64;
    let viewport = viewport_height as u64;
    let total_px = total_rows as u64 * row_height;

    let max_offset = total_px.saturating_sub(viewport);
    let offset = scroll_offset.min(max_offset);

    // offset < total_px here, so `first` is a valid row index.
    let first = (offset / row_height) as usize;
    let last_exclusive = (offset.saturating_add(viewport).div_ceil(row_height) as usize)
        .min(total_rows);

    let start_index = first.saturating_sub(overscan);
    let end_index = last_exclusive.saturating_add(overscan).min(total_rows);

    let leading = start_index as u64 * row_height;
    let trailing = (total_rows - end_index) as u64 * row_height;

    Ok(Window {
        start_index,
        end_index,
        leading,
        trailing,
    })
}
