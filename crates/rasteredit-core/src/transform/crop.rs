//! Rectangular cropping with inclusive corners.
//!
//! Coordinates are grid indices in `(row, col)` order. Translating screen
//! points into this order belongs to the caller (see
//! [`Selection`](crate::selection::Selection)).
//!
//! # Example
//!
//! ```ignore
//! // Keep rows 1..=2 and column 0 of a 3x2 grid
//! let cropped = crop(&image, CropRegion::new(1, 0, 2, 0))?;
//! assert_eq!(cropped.dimensions(), (2, 1));
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::grid::Image;

/// A crop rectangle given by its north-west and south-east corners.
///
/// Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropRegion {
    pub start_row: i64,
    pub start_col: i64,
    pub end_row: i64,
    pub end_col: i64,
}

impl CropRegion {
    pub fn new(start_row: i64, start_col: i64, end_row: i64, end_col: i64) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// The region covering a whole `rows x cols` grid.
    pub fn full(rows: usize, cols: usize) -> Self {
        Self::new(0, 0, rows as i64 - 1, cols as i64 - 1)
    }

    /// `(rows, cols)` of the cropped output, assuming an ordered region.
    /// Inverted axes count as 0; spans too large for `usize` saturate.
    pub fn dimensions(&self) -> (usize, usize) {
        (
            span(self.start_row, self.end_row),
            span(self.start_col, self.end_col),
        )
    }
}

/// Inclusive length of `start..=end`.
fn span(start: i64, end: i64) -> usize {
    let len = (end as i128) - (start as i128) + 1;
    if len <= 0 {
        0
    } else {
        usize::try_from(len).unwrap_or(usize::MAX)
    }
}

/// Copy the cells inside `region` into a new grid.
///
/// `output[i][j] = input[start_row + i][start_col + j]`.
///
/// # Errors
///
/// - [`EditError::IndexOutOfRange`] if either corner lies outside the grid
/// - [`EditError::InvertedRegion`] if an end index precedes its start
///
/// Both are detected before any cell is copied.
pub fn crop(image: &Image, region: CropRegion) -> Result<Image, EditError> {
    let (top, left) = image.checked_index(region.start_row, region.start_col)?;
    let (bottom, right) = image.checked_index(region.end_row, region.end_col)?;

    if bottom < top {
        return Err(EditError::InvertedRegion {
            start: region.start_row,
            end: region.end_row,
        });
    }
    if right < left {
        return Err(EditError::InvertedRegion {
            start: region.start_col,
            end: region.end_col,
        });
    }

    // Full crop returns a copy
    if top == 0 && left == 0 && bottom + 1 == image.rows() && right + 1 == image.cols() {
        return Ok(image.clone());
    }

    let out_rows = bottom - top + 1;
    let out_cols = right - left + 1;
    let mut output = Vec::with_capacity(out_rows * out_cols);

    // Copy row slices straight out of the row-major buffer
    for row in top..=bottom {
        let start = row * image.cols() + left;
        output.extend_from_slice(&image.pixels()[start..start + out_cols]);
    }

    Ok(Image::from_parts(out_rows, out_cols, output))
}
