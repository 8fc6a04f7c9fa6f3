//! The on-screen selection rectangle used to drive cropping.
//!
//! A [`Selection`] is a plain value: an anchor point where the press started
//! and a signed drag size. Screen space is `(x, y)`; the engine works in
//! `(row, col)`. This module is the only place that translates between them.

use serde::{Deserialize, Serialize};

use crate::transform::CropRegion;

/// Selection rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub x: i64,
    pub y: i64,
    /// Signed drag extent; negative when dragged west of the anchor.
    pub width: i64,
    /// Signed drag extent; negative when dragged north of the anchor.
    pub height: i64,
}

impl Selection {
    /// A zero-sized selection at the press point.
    pub fn at(x: i64, y: i64) -> Self {
        Self {
            x,
            y,
            width: 0,
            height: 0,
        }
    }

    /// Selection spanning from the anchor to the release point.
    pub fn from_points(anchor: (i64, i64), release: (i64, i64)) -> Self {
        Self::at(anchor.0, anchor.1).dragged_to(release.0, release.1)
    }

    /// The same anchor, stretched so its far corner sits at `(x, y)`.
    pub fn dragged_to(self, x: i64, y: i64) -> Self {
        Self {
            width: x - self.x,
            height: y - self.y,
            ..self
        }
    }

    /// Far corner of the drag in screen coordinates.
    pub fn end(&self) -> (i64, i64) {
        (self.x + self.width, self.y + self.height)
    }

    /// Convert to an ordered crop region: screen y is the row, screen x the
    /// column, and each axis runs from its smaller to its larger value.
    pub fn to_crop_region(&self) -> CropRegion {
        let (end_x, end_y) = self.end();
        CropRegion::new(
            self.y.min(end_y),
            self.x.min(end_x),
            self.y.max(end_y),
            self.x.max(end_x),
        )
    }

    /// The crop region intersected with a `rows x cols` grid, or `None`
    /// when the selection misses the grid entirely.
    pub fn clamped_to(&self, rows: usize, cols: usize) -> Option<CropRegion> {
        if rows == 0 || cols == 0 {
            return None;
        }
        let region = self.to_crop_region();
        let last_row = rows as i64 - 1;
        let last_col = cols as i64 - 1;

        if region.end_row < 0
            || region.end_col < 0
            || region.start_row > last_row
            || region.start_col > last_col
        {
            return None;
        }

        Some(CropRegion::new(
            region.start_row.max(0),
            region.start_col.max(0),
            region.end_row.min(last_row),
            region.end_col.min(last_col),
        ))
    }
}
