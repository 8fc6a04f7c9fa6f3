//! Control-surface configuration.
//!
//! The slider bounds and save settings used by the interactive layer. The
//! engine itself never reads these; they decide which values reach it.

use serde::{Deserialize, Serialize};

use crate::encode::OutputFormat;

/// Settings for the filter controls and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Lowest brightness slider value
    pub brightness_min: i32,
    /// Highest brightness slider value
    pub brightness_max: i32,
    /// Lowest zoom slider value
    pub zoom_min: f64,
    /// Highest zoom slider value
    pub zoom_max: f64,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Format used by a plain save
    pub save_format: OutputFormat,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            brightness_min: -200,
            brightness_max: 200,
            zoom_min: -4.0,
            zoom_max: 4.0,
            jpeg_quality: 90,
            save_format: OutputFormat::Png,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a brightness slider value into the configured bounds.
    pub fn brightness_delta(&self, slider: i32) -> i32 {
        let (lo, hi) = ordered(self.brightness_min, self.brightness_max);
        slider.clamp(lo, hi)
    }

    /// Clamp a zoom slider value into the configured bounds. NaN stays NaN,
    /// which the engine treats as a no-op.
    pub fn zoom_factor(&self, slider: f64) -> f64 {
        let (lo, hi) = if self.zoom_min <= self.zoom_max {
            (self.zoom_min, self.zoom_max)
        } else {
            (self.zoom_max, self.zoom_min)
        };
        if slider < lo {
            lo
        } else if slider > hi {
            hi
        } else {
            slider
        }
    }

    /// JPEG quality limited to 1-100.
    pub fn quality(&self) -> u8 {
        self.jpeg_quality.clamp(1, 100)
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::new();
        assert_eq!(config.brightness_min, -200);
        assert_eq!(config.brightness_max, 200);
        assert_eq!(config.zoom_min, -4.0);
        assert_eq!(config.zoom_max, 4.0);
        assert_eq!(config.save_format, OutputFormat::Png);
        assert_eq!(config.quality(), 90);
    }

    #[test]
    fn test_brightness_clamped() {
        let config = EditorConfig::new();
        assert_eq!(config.brightness_delta(500), 200);
        assert_eq!(config.brightness_delta(-500), -200);
        assert_eq!(config.brightness_delta(42), 42);
    }

    #[test]
    fn test_zoom_clamped() {
        let config = EditorConfig::new();
        assert_eq!(config.zoom_factor(10.0), 4.0);
        assert_eq!(config.zoom_factor(-10.0), -4.0);
        assert_eq!(config.zoom_factor(1.5), 1.5);
        assert!(config.zoom_factor(f64::NAN).is_nan());
    }

    #[test]
    fn test_swapped_bounds_still_clamp() {
        let mut config = EditorConfig::new();
        config.brightness_min = 50;
        config.brightness_max = -50;
        assert_eq!(config.brightness_delta(100), 50);
    }

    #[test]
    fn test_quality_clamped() {
        let mut config = EditorConfig::new();
        config.jpeg_quality = 0;
        assert_eq!(config.quality(), 1);
        config.jpeg_quality = 255;
        assert_eq!(config.quality(), 100);
    }
}
