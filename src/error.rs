use thiserror::Error;

use crate::ContentType;

/// Errors surfaced by the engine.
///
/// All operations are synchronous; failures are returned to the immediate
/// caller and never swallowed or retried. Note the distinction drawn in the
/// window calculator: a scroll offset past the end of the content is valid
/// input and clamps, while a zero row/viewport height is a caller bug and
/// fails fast.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridError {
    #[error("row height must be greater than zero")]
    ZeroRowHeight,

    #[error("viewport height must be greater than zero")]
    ZeroViewportHeight,

    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    #[error("duplicate column id `{0}`")]
    DuplicateColumn(String),

    #[error("column `{0}` is not sortable")]
    NotSortable(String),

    #[error("column `{0}` is not filterable")]
    NotFilterable(String),

    #[error("column `{0}` is not pinnable")]
    NotPinnable(String),

    #[error("filter for column `{column}` must be {expected:?}, got {got:?}")]
    FilterTypeMismatch {
        column: String,
        expected: ContentType,
        got: ContentType,
    },

    #[error("cell {index} must be {expected:?}, got {got:?}")]
    CellTypeMismatch {
        index: usize,
        expected: ContentType,
        got: ContentType,
    },

    #[error("record has {got} cells but the schema has {expected} columns")]
    RowArityMismatch { expected: usize, got: usize },
}
