use std::sync::Arc;

use crate::column::Columns;
use crate::filter;
use crate::locale::RegionNames;
use crate::{CellValue, FilterValue, GridError, SortDirection};

/// An immutable data row: one typed cell per schema column, in column order.
///
/// Records are never mutated in place; identity is the record's index in the
/// store.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    cells: Vec<CellValue>,
}

impl Record {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }
}

/// Holds the full ordered record set and the derived sorted/filtered view.
///
/// The view is a vector of record indices, not copies. Filters AND-combine
/// across columns (at most one per column) and are applied before the single
/// active sort. The view is rebuilt eagerly whenever filter state, sort
/// state, or the record set changes, and never on scroll; rebuilding is
/// idempotent, so a render pipeline may read it once per frame without
/// cumulative drift.
#[derive(Clone)]
pub struct RowStore {
    columns: Arc<Columns>,
    regions: Arc<dyn RegionNames + Send + Sync>,
    records: Vec<Record>,
    filters: Vec<Option<FilterValue>>,
    sort: Option<(usize, SortDirection)>,
    view: Vec<usize>,
}

impl RowStore {
    pub fn new(columns: Arc<Columns>, regions: Arc<dyn RegionNames + Send + Sync>) -> Self {
        let filters = vec![None; columns.len()];
        Self {
            columns,
            regions,
            records: Vec::new(),
            filters,
            sort: None,
            view: Vec::new(),
        }
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Number of records in the full store, ignoring filters.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Replaces the record set after validating every record against the
    /// schema (arity and per-cell content type).
    pub fn set_records(&mut self, records: Vec<Record>) -> Result<(), GridError> {
        let expected = self.columns.len();
        for record in &records {
            if record.cells().len() != expected {
                return Err(GridError::RowArityMismatch {
                    expected,
                    got: record.cells().len(),
                });
            }
            for (index, cell) in record.cells().iter().enumerate() {
                // index < expected, so the spec lookup cannot fail
                let Some(spec) = self.columns.get(index) else {
                    continue;
                };
                if cell.content_type() != spec.content_type {
                    return Err(GridError::CellTypeMismatch {
                        index,
                        expected: spec.content_type,
                        got: cell.content_type(),
                    });
                }
            }
        }
        self.records = records;
        self.rebuild_view();
        Ok(())
    }

    /// Sets the filter for a column, replacing any previous filter on it.
    ///
    /// The value's type must agree with the column's content type; raw user
    /// input is parsed and validated by the host before it gets here.
    pub fn set_filter(&mut self, column_id: &str, value: FilterValue) -> Result<(), GridError> {
        let index = self.columns.require(column_id)?;
        if let Some(spec) = self.columns.get(index) {
            if !spec.filterable {
                return Err(GridError::NotFilterable(column_id.to_string()));
            }
            if value.content_type() != spec.content_type {
                return Err(GridError::FilterTypeMismatch {
                    column: column_id.to_string(),
                    expected: spec.content_type,
                    got: value.content_type(),
                });
            }
        }
        self.filters[index] = Some(value);
        self.rebuild_view();
        Ok(())
    }

    pub fn clear_filter(&mut self, column_id: &str) -> Result<(), GridError> {
        let index = self.columns.require(column_id)?;
        if self.filters[index].take().is_some() {
            self.rebuild_view();
        }
        Ok(())
    }

    pub fn filter(&self, column_id: &str) -> Option<&FilterValue> {
        let index = self.columns.index_of(column_id)?;
        self.filters[index].as_ref()
    }

    pub fn any_filter_active(&self) -> bool {
        self.filters.iter().any(Option::is_some)
    }

    /// Sets the single active sort, replacing any previous sort column.
    pub fn set_sort(
        &mut self,
        column_id: &str,
        direction: SortDirection,
    ) -> Result<(), GridError> {
        let index = self.columns.require(column_id)?;
        let sortable = self.columns.get(index).is_some_and(|s| s.sortable);
        if !sortable {
            return Err(GridError::NotSortable(column_id.to_string()));
        }
        self.sort = Some((index, direction));
        self.rebuild_view();
        Ok(())
    }

    pub fn clear_sort(&mut self) {
        if self.sort.take().is_some() {
            self.rebuild_view();
        }
    }

    /// The active sort as `(column id, direction)`.
    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort.and_then(|(index, direction)| {
            self.columns.get(index).map(|s| (s.id.as_str(), direction))
        })
    }

    /// The derived view: record indices after filtering and sorting.
    pub fn view(&self) -> &[usize] {
        &self.view
    }

    fn rebuild_view(&mut self) {
        self.view.clear();
        'rows: for (index, record) in self.records.iter().enumerate() {
            for (column, active) in self.filters.iter().enumerate() {
                if let Some(value) = active {
                    // cell arity was validated when the records were set
                    if !filter::matches(&record.cells()[column], value, self.regions.as_ref()) {
                        continue 'rows;
                    }
                }
            }
            self.view.push(index);
        }

        if let Some((column, direction)) = self.sort {
            let records = &self.records;
            let regions = self.regions.as_ref();
            self.view.sort_by(|&a, &b| {
                let ord = filter::compare(
                    &records[a].cells()[column],
                    &records[b].cells()[column],
                    regions,
                );
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        gdebug!(
            records = self.records.len(),
            visible = self.view.len(),
            sorted = self.sort.is_some(),
            "rebuild_view"
        );
    }
}

impl core::fmt::Debug for RowStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RowStore")
            .field("columns", &self.columns.len())
            .field("records", &self.records.len())
            .field("visible", &self.view.len())
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}
