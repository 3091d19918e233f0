use thiserror::Error;

/// Result type returned by fallible grid routines.
pub type GridResult<T> = Result<T, GridError>;

/// Caller-input error raised by the engine.
///
/// All variants are detected synchronously before any state is mutated;
/// the engine has no transient or internal failure modes.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
    #[error("unknown pattern: {0:?}")]
    InvalidPattern(String),
}
