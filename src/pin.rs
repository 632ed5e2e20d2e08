use crate::{PinGeometry, PinSide};

/// Px added per crossed pinned column so adjacent per-cell borders are not
/// double-counted (borders render as part of each cell, not the table
/// frame).
pub const BORDER_WIDTH: u32 = 1;

/// Resolves the sticky offset for the cell at `cell_index`.
///
/// A left-pinned cell is offset from the left edge by the widths of every
/// left-pinned column before it in column order; a right-pinned cell mirrors
/// this over the right-pinned columns after it. Each crossed column also
/// contributes [`BORDER_WIDTH`]. Unpinned cells resolve to `None` and stay
/// in normal flow.
///
/// `pins` and `widths` are indexed by column order and must have equal
/// length. Left- and right-pinned sets are disjoint by construction: a
/// column holds at most one `PinSide`.
pub fn resolve_offset(
    cell_index: usize,
    pins: &[Option<PinSide>],
    widths: &[u32],
) -> Option<PinGeometry> {
    debug_assert_eq!(pins.len(), widths.len());
    let edge = (*pins.get(cell_index)?)?;

    let pinned_width = |pin: &Option<PinSide>, width: &u32| {
        (*pin == Some(edge)).then_some(width.saturating_add(BORDER_WIDTH))
    };

    let offset = match edge {
        PinSide::Left => pins[..cell_index]
            .iter()
            .zip(widths)
            .filter_map(|(pin, width)| pinned_width(pin, width))
            .sum(),
        PinSide::Right => pins
            .iter()
            .zip(widths)
            .skip(cell_index + 1)
            .filter_map(|(pin, width)| pinned_width(pin, width))
            .sum(),
    };

    Some(PinGeometry { edge, offset })
}
