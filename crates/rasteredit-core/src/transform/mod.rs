//! Geometry operations: rotation, cropping and zoom.
//!
//! Each function reads the source grid and returns a freshly allocated
//! replacement. [`Image`](crate::grid::Image) commits the result only after
//! it is fully populated.
//!
//! # Coordinate System
//!
//! - Coordinates are `(row, col)` with the origin at the north-west corner
//! - Crop corners are inclusive
//! - Zoom sources are found by truncating the scaled output coordinate

mod crop;
mod rotation;
mod zoom;

pub use crop::{crop, CropRegion};
pub use rotation::rotate_clockwise;
pub use zoom::{zoom, ZOOM_EPSILON};
