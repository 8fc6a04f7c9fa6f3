//! Nearest-neighbor zoom driven by a signed slider value.
//!
//! The slider value is nudged by [`ZOOM_EPSILON`] and then falls into one of
//! three branches:
//!
//! | zoom factor `z = input + ε` | result                                  |
//! |-----------------------------|-----------------------------------------|
//! | `z > 1`                     | enlarge by `z`, source = `floor(out / z)` |
//! | `z < 0`                     | `z = input²`, size = `floor(in / z)`, source = `floor(out * z)` |
//! | `0 <= z <= 1`               | unchanged                               |
//!
//! No interpolation is performed; each output cell copies exactly one
//! source cell.

use crate::error::EditError;
use crate::grid::{Image, MAX_PIXELS};

/// Offset added to the slider value so a zero input never divides by zero.
pub const ZOOM_EPSILON: f64 = 1e-5;

/// Resample `image` according to the slider value `factor_input`.
///
/// Returns `Ok(None)` in the dead zone (`0 <= factor_input + ε <= 1`) and for
/// NaN input; the caller keeps its grid in that case.
///
/// # Errors
///
/// Returns [`EditError::DimensionOverflow`] if the output grid would hold
/// more than [`MAX_PIXELS`] cells.
pub fn zoom(image: &Image, factor_input: f64) -> Result<Option<Image>, EditError> {
    let zoom_factor = factor_input + ZOOM_EPSILON;

    if zoom_factor > 1.0 {
        let (rows, cols) = scaled_dimensions(image, |n| n * zoom_factor)?;
        Ok(Some(resample(image, rows, cols, |i| i / zoom_factor)))
    } else if zoom_factor < 0.0 {
        let zoom_factor = factor_input * factor_input;
        let (rows, cols) = scaled_dimensions(image, |n| n / zoom_factor)?;
        Ok(Some(resample(image, rows, cols, |i| i * zoom_factor)))
    } else {
        Ok(None)
    }
}

fn scaled_dimensions(
    image: &Image,
    scale: impl Fn(f64) -> f64,
) -> Result<(usize, usize), EditError> {
    let rows = truncate(scale(image.rows() as f64));
    let cols = truncate(scale(image.cols() as f64));

    // A zero-width side makes the product 0, so each side is bounded too
    if rows > MAX_PIXELS || cols > MAX_PIXELS {
        return Err(EditError::DimensionOverflow { rows, cols });
    }
    match rows.checked_mul(cols) {
        Some(total) if total <= MAX_PIXELS => Ok((rows, cols)),
        _ => Err(EditError::DimensionOverflow { rows, cols }),
    }
}

/// Build a `rows x cols` grid where each cell copies the source cell at
/// `(source(row), source(col))`.
fn resample(image: &Image, rows: usize, cols: usize, source: impl Fn(f64) -> f64) -> Image {
    if image.is_empty() || rows == 0 || cols == 0 {
        return Image::from_parts(rows, 0, Vec::new());
    }

    let max_row = image.rows() - 1;
    let max_col = image.cols() - 1;

    // Column sources are the same for every output row
    let col_map: Vec<usize> = (0..cols)
        .map(|col| source_index(source(col as f64), max_col))
        .collect();

    let mut output = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let src_row = source_index(source(row as f64), max_row);
        output.extend(col_map.iter().map(|&src_col| image.get(src_row, src_col)));
    }

    Image::from_parts(rows, cols, output)
}

/// Truncate a scaled coordinate and keep it inside the source grid.
#[inline]
fn source_index(scaled: f64, max: usize) -> usize {
    let index = truncate(scaled);
    debug_assert!(
        index <= max,
        "zoom source index {} exceeds {}",
        index,
        max
    );
    index.min(max)
}

/// `floor` for non-negative values; saturates at `usize::MAX`.
#[inline]
fn truncate(value: f64) -> usize {
    value as usize
}
