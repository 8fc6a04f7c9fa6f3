//! Error types for the pixel grid engine.

use thiserror::Error;

/// Color channel named in an [`EditError::OutOfRange`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Errors raised by pixel construction and grid operations.
///
/// Every operation that returns one of these leaves the grid untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// A color channel value outside 0..=255.
    #[error("{channel} value {value} is out of range 0-255")]
    OutOfRange { channel: Channel, value: i32 },

    /// A row or column index outside the current grid bounds.
    #[error("index ({row}, {col}) is out of range for a {rows}x{cols} grid")]
    IndexOutOfRange {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// Nested rows of differing lengths.
    #[error("row {row} has {actual} columns, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat pixel buffer whose length is not rows * cols.
    #[error("pixel buffer has {actual} cells, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Crop region whose end precedes its start.
    #[error("crop end {end} precedes start {start}")]
    InvertedRegion { start: i64, end: i64 },

    /// Resampled grid would be too large to allocate.
    #[error("resulting grid of {rows}x{cols} exceeds the pixel limit")]
    DimensionOverflow { rows: usize, cols: usize },
}
