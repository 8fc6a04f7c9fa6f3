//! The color unit: an immutable 8-bit RGB value.
//!
//! Channels are validated once at construction. Filters never mutate a
//! [`Pixel`]; they build a new one from the old channel values.
//!
//! # Packed form
//!
//! ```text
//! bits 16-23: red
//! bits  8-15: green
//! bits  0-7 : blue
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Channel, EditError};

/// A single RGB color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    red: u8,
    green: u8,
    blue: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::from_rgb(0, 0, 0);
    pub const WHITE: Pixel = Pixel::from_rgb(255, 255, 255);
    pub const RED: Pixel = Pixel::from_rgb(255, 0, 0);
    pub const GREEN: Pixel = Pixel::from_rgb(0, 255, 0);
    pub const BLUE: Pixel = Pixel::from_rgb(0, 0, 255);
    pub const CYAN: Pixel = Pixel::from_rgb(0, 255, 255);
    pub const MAGENTA: Pixel = Pixel::from_rgb(255, 0, 255);
    pub const YELLOW: Pixel = Pixel::from_rgb(255, 255, 0);

    /// Create a pixel from integer channel values.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfRange`] naming the first channel outside
    /// 0..=255. Values are never clamped.
    pub fn new(red: i32, green: i32, blue: i32) -> Result<Self, EditError> {
        Ok(Self {
            red: checked_channel(Channel::Red, red)?,
            green: checked_channel(Channel::Green, green)?,
            blue: checked_channel(Channel::Blue, blue)?,
        })
    }

    /// Create a pixel from channel values already known to be in range.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Gray pixel with all three channels equal.
    pub const fn gray(level: u8) -> Self {
        Self::from_rgb(level, level, level)
    }

    /// Unpack a 24-bit RGB integer. Bits above 23 (alpha) are ignored.
    pub const fn from_packed(value: u32) -> Self {
        Self {
            red: ((value >> 16) & 0xFF) as u8,
            green: ((value >> 8) & 0xFF) as u8,
            blue: (value & 0xFF) as u8,
        }
    }

    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Channels as an `[r, g, b]` array.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Pack into `(red << 16) | (green << 8) | blue`.
    #[inline]
    pub const fn packed(&self) -> u32 {
        ((self.red as u32) << 16) | ((self.green as u32) << 8) | self.blue as u32
    }

    /// True when red, green and blue are equal.
    #[inline]
    pub const fn is_gray(&self) -> bool {
        self.red == self.green && self.green == self.blue
    }
}

fn checked_channel(channel: Channel, value: i32) -> Result<u8, EditError> {
    u8::try_from(value).map_err(|_| EditError::OutOfRange { channel, value })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: packing then unpacking returns the original channels.
        #[test]
        fn prop_packed_roundtrip(r in 0i32..=255, g in 0i32..=255, b in 0i32..=255) {
            let p = Pixel::new(r, g, b).unwrap();
            let v = p.packed();
            prop_assert_eq!(((v >> 16) & 255) as i32, r);
            prop_assert_eq!(((v >> 8) & 255) as i32, g);
            prop_assert_eq!((v & 255) as i32, b);
            prop_assert_eq!(Pixel::from_packed(v), p);
        }

        /// Property: any channel outside 0..=255 is rejected.
        #[test]
        fn prop_out_of_range_rejected(v in prop_oneof![i32::MIN..0, 256i32..=i32::MAX]) {
            prop_assert!(Pixel::new(v, 0, 0).is_err());
            prop_assert!(Pixel::new(0, v, 0).is_err());
            prop_assert!(Pixel::new(0, 0, v).is_err());
        }
    }
}
