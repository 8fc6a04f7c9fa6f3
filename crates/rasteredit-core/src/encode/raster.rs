//! Grid flattening and encoding through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};

use super::{EncodeError, OutputFormat};
use crate::color::Pixel;
use crate::grid::Image;

/// Row-major packed `0xRRGGBB` value of every cell.
pub fn packed_raster(image: &Image) -> Vec<u32> {
    image.pixels().iter().map(Pixel::packed).collect()
}

/// Copy the grid into an `RgbImage`, or `None` for an empty grid.
pub fn to_rgb_image(image: &Image) -> Option<RgbImage> {
    if image.is_empty() {
        return None;
    }
    let width = u32::try_from(image.cols()).ok()?;
    let height = u32::try_from(image.rows()).ok()?;
    let raw: Vec<u8> = image.pixels().iter().flat_map(Pixel::channels).collect();
    RgbImage::from_raw(width, height, raw)
}

/// Encode the grid as PNG or JPEG.
///
/// `quality` only applies to JPEG and is clamped to 1-100. An empty grid
/// yields an empty byte vector.
///
/// # Errors
///
/// Returns `EncodeError::EncodingFailed` if the encoder rejects the data.
pub fn encode_image(
    image: &Image,
    format: OutputFormat,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    let Some(rgb) = to_rgb_image(image) else {
        return Ok(Vec::new());
    };

    let mut buffer = Cursor::new(Vec::new());
    let (width, height) = rgb.dimensions();

    let result = match format {
        OutputFormat::Png => PngEncoder::new(&mut buffer).write_image(
            rgb.as_raw(),
            width,
            height,
            ExtendedColorType::Rgb8,
        ),
        OutputFormat::Jpeg => JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
            .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8),
    };
    result.map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    tracing::debug!(width, height, ?format, "encoded image");
    Ok(buffer.into_inner())
}

/// Encode the grid and write it to `path`. Writes nothing for an empty grid.
///
/// # Errors
///
/// Returns `EncodeError::IoError` if the destination cannot be written.
pub fn write_image(
    image: &Image,
    path: impl AsRef<Path>,
    format: OutputFormat,
    quality: u8,
) -> Result<(), EncodeError> {
    if image.is_empty() {
        return Ok(());
    }
    let path = path.as_ref();
    let bytes = encode_image(image, format, quality)?;
    std::fs::write(path, bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", path.display(), e)))
}
