use crate::{ContentType, GridError};

/// Display width used when a column does not specify one, in px.
pub const DEFAULT_COLUMN_WIDTH: u32 = 150;

/// Describes one column: identity, content type, display width, and which
/// user actions it supports.
///
/// The content type determines which filter predicate and sort comparator
/// apply; the capability flags gate the corresponding mutators on
/// [`crate::Grid`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSpec {
    pub id: String,
    pub title: String,
    pub content_type: ContentType,
    pub width: u32,
    pub sortable: bool,
    pub filterable: bool,
    pub pinnable: bool,
}

impl ColumnSpec {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content_type: ContentType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content_type,
            width: DEFAULT_COLUMN_WIDTH,
            sortable: true,
            filterable: true,
            pinnable: true,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn with_pinnable(mut self, pinnable: bool) -> Self {
        self.pinnable = pinnable;
        self
    }
}

/// The validated, immutable column schema. Column ids are unique.
#[derive(Clone, Debug)]
pub struct Columns {
    specs: Vec<ColumnSpec>,
}

impl Columns {
    pub fn new(specs: Vec<ColumnSpec>) -> Result<Self, GridError> {
        for (i, spec) in specs.iter().enumerate() {
            if specs[..i].iter().any(|prev| prev.id == spec.id) {
                return Err(GridError::DuplicateColumn(spec.id.clone()));
            }
        }
        Ok(Self { specs })
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ColumnSpec> {
        self.specs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.specs.iter()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.specs.iter().position(|spec| spec.id == id)
    }

    /// Looks up a column by id, failing fast on unknown ids.
    pub(crate) fn require(&self, id: &str) -> Result<usize, GridError> {
        self.index_of(id)
            .ok_or_else(|| GridError::UnknownColumn(id.to_string()))
    }
}
