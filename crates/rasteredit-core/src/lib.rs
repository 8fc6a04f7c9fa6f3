//! RasterEdit Core - pixel grid and filter engine
//!
//! This crate provides the core of RasterEdit: an 8-bit RGB pixel grid, the
//! color and geometry filters that rewrite it, and the codec boundary that
//! turns encoded files into grids and back.
//!
//! # Module Structure
//!
//! - `color` - The immutable [`Pixel`] color unit and its packed form
//! - `grid` - The [`Image`] pixel grid and its filter entry points
//! - `adjustments` - Per-pixel color filters (swap, grayscale, invert, brightness)
//! - `transform` - Geometry filters (rotate, crop, zoom)
//! - `decode` / `encode` - PNG/JPEG codec boundary
//! - `selection` - Screen-space selection rectangle for cropping
//! - `config` - Slider bounds and save settings for the control surface
//!
//! Filters are applied eagerly and cumulatively on a single owned grid:
//!
//! ```ignore
//! let mut image = Image::sample();
//! image.swap_red_blue();
//! image.rotate_clockwise();
//! assert_eq!(image.dimensions(), (2, 3));
//! ```

pub mod adjustments;
pub mod color;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grid;
pub mod selection;
pub mod transform;

pub use color::Pixel;
pub use config::EditorConfig;
pub use decode::{decode_file, decode_image, DecodeError, RgbSurface};
pub use encode::{encode_image, write_image, EncodeError, OutputFormat};
pub use error::{Channel, EditError};
pub use grid::Image;
pub use selection::Selection;
pub use transform::CropRegion;
