use core::cmp::Ordering;

use crate::locale::RegionNames;
use crate::{CellValue, FilterValue};

/// Content-type dispatch for filtering and sorting.
///
/// One predicate and one comparator exist per content type:
/// - Text: case-insensitive substring containment / lexicographic order.
/// - Number: strictly greater than the threshold / numeric order.
/// - Date: strictly after the boundary / chronological order.
/// - Country: substring containment on the locale-resolved display name /
///   display-name collation order (never raw code order).
///
/// Type agreement between cell and filter is enforced where filters are set
/// (`RowStore::set_filter`), so the mismatch arms here are unreachable in a
/// validated store.

pub(crate) fn matches(cell: &CellValue, filter: &FilterValue, regions: &dyn RegionNames) -> bool {
    match (cell, filter) {
        (CellValue::Text(value), FilterValue::Text(needle)) => contains_ci(value, needle),
        (CellValue::Number(value), FilterValue::Number(threshold)) => value > threshold,
        (CellValue::Date(value), FilterValue::Date(boundary)) => value > boundary,
        (CellValue::Country(code), FilterValue::Country(needle)) => {
            contains_ci(&regions.name_or_code(code), needle)
        }
        _ => false,
    }
}

pub(crate) fn compare(left: &CellValue, right: &CellValue, regions: &dyn RegionNames) -> Ordering {
    match (left, right) {
        (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
        (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
        (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
        (CellValue::Country(a), CellValue::Country(b)) => {
            regions.compare_names(&regions.name_or_code(a), &regions.name_or_code(b))
        }
        _ => Ordering::Equal,
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
