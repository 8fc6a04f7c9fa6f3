//! Per-pixel color filters.
//!
//! These work on a row-major pixel slice and never change the grid's
//! dimensions. All arithmetic is integer; no channel is ever clamped
//! independently.
//!
//! ## Filters
//! 1. Red/blue swap (involution)
//! 2. Grayscale (idempotent, truncating average)
//! 3. Inversion (involution)
//! 4. Brightness (coupled saturation)

use crate::color::Pixel;
use crate::error::EditError;

/// Swap the red and blue channels of every pixel in place.
pub fn swap_red_blue(pixels: &mut [Pixel]) {
    for pixel in pixels.iter_mut() {
        *pixel = Pixel::from_rgb(pixel.blue(), pixel.green(), pixel.red());
    }
}

/// Convert every pixel to gray using `floor((r + g + b) / 3)`.
pub fn grayscale(pixels: &mut [Pixel]) {
    for pixel in pixels.iter_mut() {
        let sum = pixel.red() as u16 + pixel.green() as u16 + pixel.blue() as u16;
        // sum / 3 <= 255
        *pixel = Pixel::gray((sum / 3) as u8);
    }
}

/// Replace every channel `c` with `255 - c`.
pub fn invert(pixels: &mut [Pixel]) {
    for pixel in pixels.iter_mut() {
        *pixel = Pixel::from_rgb(255 - pixel.red(), 255 - pixel.green(), 255 - pixel.blue());
    }
}

/// Shift every channel by `delta` and return the new pixels.
///
/// The saturation rule couples the channels:
/// - if any shifted channel is `>= 255`, all three become 255
/// - else if any shifted channel is `<= 0`, all three become `-delta`
/// - otherwise the shifted channels are used as they are
///
/// A zero `delta` is the identity and skips the rule entirely. The input
/// slice is only read, so a failure leaves it intact.
///
/// # Errors
///
/// Returns [`EditError::OutOfRange`] when the underflow value `-delta`
/// is not a valid channel (any `delta < -255`).
pub fn brightness(pixels: &[Pixel], delta: i32) -> Result<Vec<Pixel>, EditError> {
    if delta == 0 {
        return Ok(pixels.to_vec());
    }
    pixels
        .iter()
        .map(|pixel| brighten(*pixel, delta))
        .collect()
}

fn brighten(pixel: Pixel, delta: i32) -> Result<Pixel, EditError> {
    let r = (pixel.red() as i32).saturating_add(delta);
    let g = (pixel.green() as i32).saturating_add(delta);
    let b = (pixel.blue() as i32).saturating_add(delta);

    if r >= 255 || g >= 255 || b >= 255 {
        Ok(Pixel::WHITE)
    } else if r <= 0 || g <= 0 || b <= 0 {
        let level = delta.saturating_neg();
        Pixel::new(level, level, level)
    } else {
        Pixel::new(r, g, b)
    }
}
