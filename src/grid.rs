use core::cell::Cell;
use std::sync::Arc;

use crate::column::Columns;
use crate::options::GridOptions;
use crate::pin;
use crate::view::{Record, RowStore};
use crate::window;
use crate::{
    FilterValue, Frame, FrameStatus, GridError, PinGeometry, PinSide, SortDirection, Window,
};
use crate::ScrollState;

/// A row handed to the render pipeline: its position in the sorted/filtered
/// view, the underlying record index, and the record itself.
#[derive(Clone, Copy, Debug)]
pub struct RowRef<'a> {
    /// Position in the current view (also the row's slot in the window).
    pub position: usize,
    /// Index into the full record store (stable identity).
    pub index: usize,
    pub record: &'a Record,
}

/// A headless data-table engine.
///
/// Composes the record store's sorted/filtered view with the viewport window
/// and column pin geometry:
/// - user scroll → [`Grid::apply_scroll_event`] → `frame()` re-windows;
/// - pin/sort/filter intents → column-state mutators → the view is rebuilt
///   eagerly, so a window is never computed against a stale row count.
///
/// The engine is single-threaded and synchronous: every mutation completes
/// within the call, and reads between mutations observe a consistent
/// snapshot. It holds no UI objects; a host drives it with scroll geometry
/// and renders from [`Grid::frame`] / [`Grid::for_each_visible_row`].
#[derive(Debug)]
pub struct Grid {
    options: GridOptions,
    columns: Arc<Columns>,
    widths: Vec<u32>,
    pins: Vec<Option<PinSide>>,
    store: RowStore,
    scroll_offset: u64,
    viewport_height: u32,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Grid {
    /// Creates a grid from a validated column schema.
    ///
    /// Fails fast on a zero row height; geometry math never silently guesses.
    pub fn new(columns: Columns, options: GridOptions) -> Result<Self, GridError> {
        if options.row_height == 0 {
            return Err(GridError::ZeroRowHeight);
        }
        let columns = Arc::new(columns);
        let widths: Vec<u32> = columns.iter().map(|spec| spec.width).collect();
        let pins = vec![None; columns.len()];
        let store = RowStore::new(Arc::clone(&columns), Arc::clone(&options.regions));
        gdebug!(
            columns = columns.len(),
            row_height = options.row_height,
            overscan = options.overscan,
            "Grid::new"
        );
        Ok(Self {
            options,
            columns,
            widths,
            pins,
            store,
            scroll_offset: 0,
            viewport_height: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        })
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Read-only access to the record store and its derived view.
    pub fn store(&self) -> &RowStore {
        &self.store
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// On a typical frame a host may update viewport height and scroll
    /// offset together; without batching each setter fires `on_change`,
    /// which can be expensive if the callback drives rendering.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Grid) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        self.options.overscan = overscan;
        self.notify();
    }

    pub fn set_row_height(&mut self, row_height: u32) -> Result<(), GridError> {
        if row_height == 0 {
            return Err(GridError::ZeroRowHeight);
        }
        self.options.row_height = row_height;
        self.notify();
        Ok(())
    }

    // ----- records ---------------------------------------------------------

    /// Replaces the record set; the sorted/filtered view is rebuilt under the
    /// current column state.
    pub fn set_records(&mut self, records: Vec<Record>) -> Result<(), GridError> {
        self.store.set_records(records)?;
        self.notify();
        Ok(())
    }

    // ----- column intents (header menu) ------------------------------------

    /// Pins a column to `side`, or unpins it when it is already pinned
    /// there. Pinning one side clears the other: a column occupies at most
    /// one pin state.
    ///
    /// Returns the new pin state.
    pub fn toggle_pin(
        &mut self,
        column_id: &str,
        side: PinSide,
    ) -> Result<Option<PinSide>, GridError> {
        let index = self.require_pinnable(column_id)?;
        let next = if self.pins[index] == Some(side) {
            None
        } else {
            Some(side)
        };
        self.pins[index] = next;
        gtrace!(column = column_id, pin = ?next, "toggle_pin");
        self.notify();
        Ok(next)
    }

    pub fn set_pin(
        &mut self,
        column_id: &str,
        side: Option<PinSide>,
    ) -> Result<(), GridError> {
        let index = self.require_pinnable(column_id)?;
        self.pins[index] = side;
        self.notify();
        Ok(())
    }

    fn require_pinnable(&self, column_id: &str) -> Result<usize, GridError> {
        let index = self.columns.require(column_id)?;
        let pinnable = self.columns.get(index).is_some_and(|spec| spec.pinnable);
        if !pinnable {
            return Err(GridError::NotPinnable(column_id.to_string()));
        }
        Ok(index)
    }

    /// Current pin state of a column (`None` for unpinned or unknown ids).
    pub fn pin(&self, column_id: &str) -> Option<PinSide> {
        let index = self.columns.index_of(column_id)?;
        self.pins[index]
    }

    /// Sticky geometry for the cell at `cell_index`, or `None` for cells in
    /// normal flow. Recomputed from scratch each call; there is no cached
    /// geometry to invalidate.
    pub fn pin_geometry(&self, cell_index: usize) -> Option<PinGeometry> {
        pin::resolve_offset(cell_index, &self.pins, &self.widths)
    }

    /// Sorts by a column, or clears the sort when the column is already
    /// sorted in `direction` (the header-menu toggle behavior). Exactly one
    /// column sorts at a time.
    pub fn toggle_sort(
        &mut self,
        column_id: &str,
        direction: SortDirection,
    ) -> Result<(), GridError> {
        let active = self
            .store
            .sort()
            .is_some_and(|(id, dir)| id == column_id && dir == direction);
        if active {
            self.store.clear_sort();
        } else {
            self.store.set_sort(column_id, direction)?;
        }
        self.notify();
        Ok(())
    }

    pub fn set_sort(
        &mut self,
        column_id: &str,
        direction: SortDirection,
    ) -> Result<(), GridError> {
        self.store.set_sort(column_id, direction)?;
        self.notify();
        Ok(())
    }

    pub fn clear_sort(&mut self) {
        self.store.clear_sort();
        self.notify();
    }

    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.store.sort()
    }

    /// Applies a typed filter to a column. Filtering changes the view length,
    /// so the next frame re-windows against the new row count.
    pub fn set_filter(&mut self, column_id: &str, value: FilterValue) -> Result<(), GridError> {
        self.store.set_filter(column_id, value)?;
        self.notify();
        Ok(())
    }

    pub fn clear_filter(&mut self, column_id: &str) -> Result<(), GridError> {
        self.store.clear_filter(column_id)?;
        self.notify();
        Ok(())
    }

    pub fn is_filtered(&self, column_id: &str) -> bool {
        self.store.filter(column_id).is_some()
    }

    // ----- scroll geometry --------------------------------------------------

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.scroll_offset == offset {
            return;
        }
        self.scroll_offset = offset;
        self.notify();
    }

    pub fn set_viewport_height(&mut self, height: u32) {
        if self.viewport_height == height {
            return;
        }
        self.viewport_height = height;
        self.notify();
    }

    /// Applies a scroll event from the host (wheel/drag/scrollbar), clamping
    /// the offset to the scrollable range. The preferred per-frame entry
    /// point: one coalesced notification per event.
    pub fn apply_scroll_event(&mut self, offset: u64) {
        gtrace!(offset, "apply_scroll_event");
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Total scrollable height of the current view, in px.
    pub fn total_size(&self) -> u64 {
        self.store.view().len() as u64 * self.options.row_height as u64
    }

    pub fn max_scroll_offset(&self) -> u64 {
        self.total_size()
            .saturating_sub(self.viewport_height as u64)
    }

    pub fn clamp_scroll_offset(&self, offset: u64) -> u64 {
        offset.min(self.max_scroll_offset())
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            viewport_height: self.viewport_height,
        }
    }

    pub fn restore_scroll_state(&mut self, state: ScrollState) {
        self.batch_update(|grid| {
            grid.set_viewport_height(state.viewport_height);
            let clamped = grid.clamp_scroll_offset(state.offset);
            grid.set_scroll_offset(clamped);
        });
    }

    // ----- frames -----------------------------------------------------------

    /// Computes the frame for the current scroll position.
    ///
    /// The view is always up to date here (mutators rebuild it eagerly), so
    /// the window is never computed against a stale row count. An unmeasured
    /// viewport (height 0) yields an empty window, not an error; the strict
    /// precondition contract lives on [`crate::compute_window`].
    pub fn frame(&self) -> Frame {
        let total_rows = self.store.view().len();
        let status = if self.store.is_empty() {
            FrameStatus::NoRows
        } else if total_rows == 0 {
            FrameStatus::NoMatch
        } else {
            FrameStatus::Rows
        };

        let window = if total_rows == 0 || self.viewport_height == 0 {
            Window::default()
        } else {
            match window::compute_window(
                total_rows,
                self.options.row_height,
                self.scroll_offset,
                self.viewport_height,
                self.options.overscan,
            ) {
                Ok(window) => window,
                Err(_) => {
                    // unreachable: both heights are validated by the setters
                    gwarn!("compute_window failed");
                    Window::default()
                }
            }
        };

        Frame {
            window,
            status,
            total_rows,
        }
    }

    /// Iterates the materialized rows of the current frame, in view order,
    /// without allocating.
    pub fn for_each_visible_row(&self, mut f: impl FnMut(RowRef<'_>)) {
        let frame = self.frame();
        let view = self.store.view();
        for position in frame.window.start_index..frame.window.end_index {
            let index = view[position];
            if let Some(record) = self.store.record(index) {
                f(RowRef {
                    position,
                    index,
                    record,
                });
            }
        }
    }

    /// Collects the record indices of the materialized rows into `out`
    /// (clears `out` first). Convenience wrapper around
    /// [`Self::for_each_visible_row`]; prefer the iteration API and a reused
    /// scratch buffer in hot paths.
    pub fn collect_visible_rows(&self, out: &mut Vec<usize>) {
        out.clear();
        self.for_each_visible_row(|row| out.push(row.index));
    }
}
