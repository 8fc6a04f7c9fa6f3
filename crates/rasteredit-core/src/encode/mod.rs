//! Codec boundary, outbound: a pixel grid to encoded bytes or a file.
//!
//! This module provides functionality for:
//! - Flattening a grid into packed `0xRRGGBB` values or an `RgbImage`
//! - Encoding to PNG or JPEG with configurable quality
//! - Writing the encoded image to disk
//!
//! An empty grid encodes to nothing: no bytes are produced and no file is
//! written.
//!
//! # Examples
//!
//! ```ignore
//! use rasteredit_core::encode::{write_image, OutputFormat};
//!
//! write_image(&image, "out.png", OutputFormat::Png, 90)?;
//! ```

mod raster;
mod types;

pub use raster::{encode_image, packed_raster, to_rgb_image, write_image};
pub use types::{EncodeError, OutputFormat};
