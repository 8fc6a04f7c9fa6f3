//! Codec boundary, inbound: bytes or files to a pixel grid.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG bytes (format guessed from content)
//! - Reading image files from disk
//! - Building a grid from any surface that exposes packed RGB values
//!
//! # Examples
//!
//! ```ignore
//! use rasteredit_core::decode::decode_file;
//!
//! let image = decode_file("photo.png")?;
//! println!("Decoded {}x{} grid", image.rows(), image.cols());
//! ```

mod surface;
mod types;

pub use surface::{decode_file, decode_image, RgbSurface};
pub use types::DecodeError;
