//! Decoding through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};

use super::DecodeError;
use crate::color::Pixel;
use crate::grid::Image;

/// A decoded raster that can report packed RGB values per coordinate.
pub trait RgbSurface {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Packed `0xRRGGBB` value at column `x`, row `y`. Bits above 23 are
    /// ignored by the reader.
    fn packed_rgb(&self, x: u32, y: u32) -> u32;
}

impl RgbSurface for image::RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn packed_rgb(&self, x: u32, y: u32) -> u32 {
        let [r, g, b] = self.get_pixel(x, y).0;
        u32::from_be_bytes([0, r, g, b])
    }
}

impl RgbSurface for image::RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    fn packed_rgb(&self, x: u32, y: u32) -> u32 {
        let [r, g, b, a] = self.get_pixel(x, y).0;
        u32::from_be_bytes([a, r, g, b])
    }
}

impl Image {
    /// Build a grid by reading every `(col, row)` of `surface`.
    pub fn from_surface<S: RgbSurface + ?Sized>(surface: &S) -> Self {
        let (width, height) = surface.dimensions();
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                pixels.push(Pixel::from_packed(surface.packed_rgb(col, row)));
            }
        }
        Image::from_parts(height as usize, width as usize, pixels)
    }
}

/// Decode PNG or JPEG bytes into a grid.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized
/// and `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<Image, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let decoded = reader.decode().map_err(map_image_error)?;
    let rgb = decoded.into_rgb8();
    let image = Image::from_surface(&rgb);

    tracing::debug!(rows = image.rows(), cols = image.cols(), "decoded image");
    Ok(image)
}

/// Read and decode an image file.
///
/// # Errors
///
/// Returns `DecodeError::IoError` if the file is missing or unreadable, and
/// the errors of [`decode_image`] otherwise.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Image, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    decode_image(&bytes)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        ImageError::IoError(e) => DecodeError::IoError(e.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}
