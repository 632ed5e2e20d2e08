//! A headless data-table engine.
//!
//! This crate implements the state machinery behind a virtualized data
//! table: deciding which slice of a large, sorted/filtered row set to
//! materialize for the current scroll position, and where pinned cells must
//! be placed so they stay fixed during horizontal scroll.
//!
//! It is UI-agnostic. A GUI/TUI/web layer is expected to provide:
//! - viewport height and scroll offset
//! - column definitions and the record set
//! - cell rendering (the engine only decides *which* rows and *what*
//!   geometry, never how a cell looks)
//!
//! The pieces compose as follows: [`RowStore`] derives an ordered index view
//! from filter and sort state, [`compute_window`] maps a scroll offset onto
//! a contiguous slice of that view plus spacer paddings, [`resolve_offset`]
//! turns column pin state into per-cell sticky geometry, and [`Grid`] wires
//! the three together behind a setter/query API.

#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod column;
mod error;
mod filter;
mod grid;
mod locale;
mod options;
mod pin;
mod state;
mod types;
mod view;
mod window;


pub use column::{ColumnSpec, Columns, DEFAULT_COLUMN_WIDTH};
pub use error::GridError;
pub use grid::{Grid, RowRef};
pub use locale::{EnglishRegions, RegionNames};
pub use options::{DEFAULT_OVERSCAN, DEFAULT_ROW_HEIGHT, GridOptions, OnChangeCallback};
pub use pin::{BORDER_WIDTH, resolve_offset};
pub use state::ScrollState;
pub use types::{
    CellValue, ContentType, FilterValue, Frame, FrameStatus, PinGeometry, PinSide, SortDirection,
    Window,
};
pub use view::{Record, RowStore};
pub use window::compute_window;
