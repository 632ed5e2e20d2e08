use chrono::NaiveDate;

/// Semantic category of a column's values.
///
/// The content type decides which filter predicate and which sort comparator
/// apply to a column (see the dispatch table in `filter`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentType {
    Text,
    Number,
    Date,
    /// An ISO region code, displayed/sorted/filtered via its locale-resolved
    /// display name.
    Country,
}

/// Edge a column is pinned to. Unpinned columns carry no pin side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A single typed cell value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    /// ISO region code (e.g. `"DE"`), not a display name.
    Country(String),
}

impl CellValue {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Text(_) => ContentType::Text,
            Self::Number(_) => ContentType::Number,
            Self::Date(_) => ContentType::Date,
            Self::Country(_) => ContentType::Country,
        }
    }
}

/// A typed, already-validated filter boundary.
///
/// Parsing/validating raw user input happens in the host's filter input
/// surface; the engine only accepts values whose type agrees with the
/// column's content type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterValue {
    /// Case-insensitive substring to look for.
    Text(String),
    /// Keep rows strictly greater than this threshold.
    Number(f64),
    /// Keep rows strictly after this date.
    Date(NaiveDate),
    /// Case-insensitive substring matched against the resolved display name.
    Country(String),
}

impl FilterValue {
    pub fn content_type(&self) -> ContentType {
        match self {
            Self::Text(_) => ContentType::Text,
            Self::Number(_) => ContentType::Number,
            Self::Date(_) => ContentType::Date,
            Self::Country(_) => ContentType::Country,
        }
    }
}

/// The contiguous index range of view rows to materialize, plus the spacer
/// paddings that keep total scrollable height constant while only a slice of
/// rows exists in the render tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    /// Reserved space above the slice, in px.
    pub leading: u64,
    /// Reserved space below the slice, in px.
    pub trailing: u64,
}

impl Window {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    /// Number of materialized rows.
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Sticky geometry for a pinned cell: which edge it is fixed to and the px
/// offset from that edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinGeometry {
    pub edge: PinSide,
    pub offset: u32,
}

/// Why a frame contains the rows it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameStatus {
    /// At least one view row exists; the window selects a slice of them.
    Rows,
    /// The record store itself is empty.
    NoRows,
    /// Active filters matched nothing. Hosts should render an explicit
    /// "no data" state with a reset affordance instead of an empty table.
    NoMatch,
}

/// One rendered frame: the window over the current sorted/filtered view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub window: Window,
    pub status: FrameStatus,
    /// Length of the sorted/filtered view the window was computed against.
    pub total_rows: usize,
}

impl Frame {
    /// True when the host should show the explicit "no matching rows" state.
    pub fn is_no_match(&self) -> bool {
        self.status == FrameStatus::NoMatch
    }
}
