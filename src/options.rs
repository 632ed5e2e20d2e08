use std::sync::Arc;

use crate::grid::Grid;
use crate::locale::{EnglishRegions, RegionNames};

/// A callback fired when a grid state update occurs.
pub type OnChangeCallback = Arc<dyn Fn(&Grid) + Send + Sync>;

/// Default fixed row height, in px. Cell height must be consistent for each
/// row.
pub const DEFAULT_ROW_HEIGHT: u32 = 31;

/// Default number of rows rendered before and after the viewport.
pub const DEFAULT_OVERSCAN: usize = 6;

/// Configuration for [`crate::Grid`].
///
/// Cheap to clone: collaborator fields are stored in `Arc`s.
pub struct GridOptions {
    /// Fixed, uniform row height in px. Must be non-zero; validated by
    /// `Grid::new`.
    pub row_height: u32,

    /// Extra rows materialized beyond the visible viewport on each side, to
    /// reduce visible popping during fast scroll.
    pub overscan: usize,

    /// Locale collaborator used by country-column sorting and filtering (and
    /// available to hosts for cell display formatting).
    pub regions: Arc<dyn RegionNames + Send + Sync>,

    /// Optional callback fired when the grid's state changes.
    pub on_change: Option<OnChangeCallback>,
}

impl GridOptions {
    pub fn new() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
            regions: Arc::new(EnglishRegions),
            on_change: None,
        }
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_regions(mut self, regions: impl RegionNames + Send + Sync + 'static) -> Self {
        self.regions = Arc::new(regions);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Grid) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for GridOptions {
    fn clone(&self) -> Self {
        Self {
            row_height: self.row_height,
            overscan: self.overscan,
            regions: Arc::clone(&self.regions),
            on_change: self.on_change.clone(),
        }
    }
}

impl core::fmt::Debug for GridOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridOptions")
            .field("row_height", &self.row_height)
            .field("overscan", &self.overscan)
            .finish_non_exhaustive()
    }
}
