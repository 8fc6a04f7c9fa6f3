//! The pixel grid and its filter entry points.
//!
//! An [`Image`] owns one row-major buffer of [`Pixel`]s. Color filters
//! rewrite cells of that buffer; geometry filters build a complete
//! replacement grid first and only then swap it in, so a failed operation
//! never leaves a half-written grid behind.
//!
//! # Orientation
//!
//! - Row 0 is the north edge, row `rows - 1` the south edge
//! - Column 0 is the west edge, column `cols - 1` the east edge

use crate::adjustments;
use crate::color::Pixel;
use crate::error::EditError;
use crate::transform::{self, CropRegion};

/// Largest number of cells a resampled grid may hold.
pub const MAX_PIXELS: usize = 1 << 28;

/// A rectangular grid of RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    rows: usize,
    cols: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    /// A grid with no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A grid with every cell set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::DimensionOverflow`] if `rows * cols` overflows.
    pub fn filled(rows: usize, cols: usize, fill: Pixel) -> Result<Self, EditError> {
        let cols = if rows == 0 { 0 } else { cols };
        let total = rows
            .checked_mul(cols)
            .ok_or(EditError::DimensionOverflow { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            pixels: vec![fill; total],
        })
    }

    /// Build a grid from a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::BufferSizeMismatch`] if `pixels.len() != rows * cols`.
    pub fn from_pixels(rows: usize, cols: usize, pixels: Vec<Pixel>) -> Result<Self, EditError> {
        let cols = if rows == 0 { 0 } else { cols };
        let expected = rows
            .checked_mul(cols)
            .ok_or(EditError::DimensionOverflow { rows, cols })?;
        if pixels.len() != expected {
            return Err(EditError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self { rows, cols, pixels })
    }

    /// Build a grid from nested rows. The width is the length of row 0.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NonRectangular`] for the first row whose length
    /// differs from row 0.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, EditError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(EditError::NonRectangular {
                    row: index,
                    expected: cols,
                    actual: row.len(),
                });
            }
            pixels.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            pixels,
        })
    }

    /// The fixed 3x2 demo grid:
    ///
    /// ```text
    /// cyan    red
    /// green   magenta
    /// yellow  blue
    /// ```
    pub fn sample() -> Self {
        Self {
            rows: 3,
            cols: 2,
            pixels: vec![
                Pixel::CYAN,
                Pixel::RED,
                Pixel::GREEN,
                Pixel::MAGENTA,
                Pixel::YELLOW,
                Pixel::BLUE,
            ],
        }
    }

    /// `(rows, cols)`. Columns are 0 whenever rows are 0.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.pixels.chunks(self.cols).map(<[Pixel]>::to_vec).collect()
    }

    /// Read the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if either index falls outside
    /// the grid.
    pub fn pixel_at(&self, row: i64, col: i64) -> Result<Pixel, EditError> {
        let (r, c) = self.checked_index(row, col)?;
        Ok(self.pixels[r * self.cols + c])
    }

    /// Assemble a grid from parts the caller already validated.
    pub(crate) fn from_parts(rows: usize, cols: usize, pixels: Vec<Pixel>) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        debug_assert_eq!(pixels.len(), rows * cols, "pixel buffer size mismatch");
        Self { rows, cols, pixels }
    }

    /// Unchecked-by-signature access for transforms that derive in-bounds
    /// indices from the current dimensions.
    #[inline]
    pub(crate) fn get(&self, row: usize, col: usize) -> Pixel {
        debug_assert!(row < self.rows && col < self.cols);
        self.pixels[row * self.cols + col]
    }

    pub(crate) fn checked_index(&self, row: i64, col: i64) -> Result<(usize, usize), EditError> {
        let out_of_range = || EditError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        };
        let r = usize::try_from(row).map_err(|_| out_of_range())?;
        let c = usize::try_from(col).map_err(|_| out_of_range())?;
        if r >= self.rows || c >= self.cols {
            return Err(out_of_range());
        }
        Ok((r, c))
    }

    /// Swap the red and blue channel of every cell.
    pub fn swap_red_blue(&mut self) {
        adjustments::swap_red_blue(&mut self.pixels);
    }

    /// Replace every cell with the truncated average of its channels.
    pub fn grayscale(&mut self) {
        adjustments::grayscale(&mut self.pixels);
    }

    /// Replace every channel `c` with `255 - c`.
    pub fn invert(&mut self) {
        adjustments::invert(&mut self.pixels);
    }

    /// Shift every channel by `delta` with coupled saturation.
    ///
    /// See [`adjustments::brightness`] for the saturation rule.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfRange`] when an underflowing pixel would be
    /// set to `-delta` and that value exceeds 255. The grid is unchanged.
    pub fn brightness(&mut self, delta: i32) -> Result<(), EditError> {
        let adjusted = adjustments::brightness(&self.pixels, delta)?;
        self.pixels = adjusted;
        Ok(())
    }

    /// Rotate the grid 90 degrees clockwise.
    pub fn rotate_clockwise(&mut self) {
        let rotated = transform::rotate_clockwise(self);
        self.commit(rotated);
    }

    /// Keep only the cells inside `region` (both corners inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] or [`EditError::InvertedRegion`]
    /// without touching the grid.
    pub fn crop(&mut self, region: CropRegion) -> Result<(), EditError> {
        let cropped = transform::crop(self, region)?;
        self.commit(cropped);
        Ok(())
    }

    /// Nearest-neighbor zoom driven by a slider value.
    ///
    /// See [`transform::zoom`] for the three branches. The dead zone leaves
    /// the grid as it is.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::DimensionOverflow`] if the zoomed grid would exceed
    /// [`MAX_PIXELS`].
    pub fn zoom(&mut self, factor_input: f64) -> Result<(), EditError> {
        if let Some(zoomed) = transform::zoom(self, factor_input)? {
            self.commit(zoomed);
        }
        Ok(())
    }

    fn commit(&mut self, next: Image) {
        tracing::debug!(
            from_rows = self.rows,
            from_cols = self.cols,
            to_rows = next.rows,
            to_cols = next.cols,
            "replacing pixel grid"
        );
        *self = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dimensions() {
        let img = Image::sample();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.pixel_at(0, 0).unwrap(), Pixel::CYAN);
        assert_eq!(img.pixel_at(2, 1).unwrap(), Pixel::BLUE);
    }

    #[test]
    fn test_empty_has_zero_columns() {
        let img = Image::empty();
        assert_eq!(img.dimensions(), (0, 0));
        assert!(img.is_empty());

        let img = Image::from_rows(Vec::new()).unwrap();
        assert_eq!(img.dimensions(), (0, 0));

        let img = Image::filled(0, 5, Pixel::RED).unwrap();
        assert_eq!(img.dimensions(), (0, 0));
    }

    #[test]
    fn test_rows_without_columns() {
        let img = Image::from_rows(vec![Vec::new(), Vec::new()]).unwrap();
        assert_eq!(img.dimensions(), (2, 0));
        assert!(img.is_empty());
        assert_eq!(img.to_rows(), vec![Vec::<Pixel>::new(), Vec::new()]);
    }

    #[test]
    fn test_pixel_at_negative_row() {
        let img = Image::sample();
        assert!(matches!(
            img.pixel_at(-1, 0),
            Err(EditError::IndexOutOfRange { row: -1, col: 0, .. })
        ));
    }

    #[test]
    fn test_pixel_at_past_edges() {
        let img = Image::sample();
        assert!(img.pixel_at(3, 0).is_err());
        assert!(img.pixel_at(0, 2).is_err());
        assert!(img.pixel_at(0, -1).is_err());
        assert!(Image::empty().pixel_at(0, 0).is_err());
    }

    #[test]
    fn test_filled_rejects_overflowing_size() {
        assert_eq!(
            Image::filled(usize::MAX, 2, Pixel::RED),
            Err(EditError::DimensionOverflow {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert_eq!(Image::filled(2, 3, Pixel::RED).unwrap().pixels().len(), 6);
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let result = Image::from_rows(vec![
            vec![Pixel::RED, Pixel::GREEN],
            vec![Pixel::BLUE],
        ]);
        assert_eq!(
            result,
            Err(EditError::NonRectangular {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_from_pixels_rejects_wrong_length() {
        let result = Image::from_pixels(2, 2, vec![Pixel::RED; 3]);
        assert_eq!(
            result,
            Err(EditError::BufferSizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_to_rows_matches_from_rows() {
        let img = Image::sample();
        let rebuilt = Image::from_rows(img.to_rows()).unwrap();
        assert_eq!(rebuilt, img);
    }

    #[test]
    fn test_swap_red_blue_scenario() {
        let mut img = Image::sample();
        img.swap_red_blue();
        let expected = Image::from_rows(vec![
            vec![Pixel::YELLOW, Pixel::BLUE],
            vec![Pixel::GREEN, Pixel::MAGENTA],
            vec![Pixel::CYAN, Pixel::RED],
        ])
        .unwrap();
        assert_eq!(img, expected);
    }

    #[test]
    fn test_rotate_scenario() {
        let mut img = Image::sample();
        img.rotate_clockwise();
        let expected = Image::from_rows(vec![
            vec![Pixel::YELLOW, Pixel::GREEN, Pixel::CYAN],
            vec![Pixel::BLUE, Pixel::MAGENTA, Pixel::RED],
        ])
        .unwrap();
        assert_eq!(img, expected);
    }

    #[test]
    fn test_failed_brightness_leaves_grid() {
        let mut img = Image::filled(2, 2, Pixel::BLACK).unwrap();
        let before = img.clone();
        assert!(img.brightness(-300).is_err());
        assert_eq!(img, before);
    }

    #[test]
    fn test_failed_crop_leaves_grid() {
        let mut img = Image::sample();
        let before = img.clone();
        assert!(img.crop(CropRegion::new(0, 0, 3, 1)).is_err());
        assert_eq!(img, before);
    }

    #[test]
    fn test_filters_chain_cumulatively() {
        let mut img = Image::sample();
        img.swap_red_blue();
        img.rotate_clockwise();
        // swapped grid rotated: [cyan, green, yellow] / [red, magenta, blue]
        assert_eq!(img.dimensions(), (2, 3));
        assert_eq!(img.pixel_at(0, 0).unwrap(), Pixel::CYAN);
        assert_eq!(img.pixel_at(1, 2).unwrap(), Pixel::BLUE);
    }

    #[test]
    fn test_zoom_dead_zone_is_noop() {
        let mut img = Image::sample();
        img.zoom(0.5).unwrap();
        assert_eq!(img, Image::sample());
    }
}
