//! Filter actions exposed by the control surface.
//!
//! Each menu entry maps to one [`FilterAction`]. Slider-driven actions carry
//! the raw slider value; it is clamped to the configured bounds before it
//! reaches the engine.

use rasteredit_core::{CropRegion, EditError, EditorConfig, Image};
use serde::{Deserialize, Serialize};

/// One filter invocation, as sent from JavaScript.
///
/// ```json
/// { "kind": "brightness", "delta": 40 }
/// { "kind": "crop", "region": { "startRow": 0, "startCol": 0, "endRow": 9, "endCol": 9 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FilterAction {
    SwapRedBlue,
    Grayscale,
    RotateClockwise,
    Invert,
    Brightness { delta: i32 },
    Zoom { factor: f64 },
    Crop { region: CropRegion },
}

impl FilterAction {
    /// Forward the action to the engine.
    pub fn apply(self, image: &mut Image, config: &EditorConfig) -> Result<(), EditError> {
        match self {
            FilterAction::SwapRedBlue => image.swap_red_blue(),
            FilterAction::Grayscale => image.grayscale(),
            FilterAction::RotateClockwise => image.rotate_clockwise(),
            FilterAction::Invert => image.invert(),
            FilterAction::Brightness { delta } => {
                image.brightness(config.brightness_delta(delta))?
            }
            FilterAction::Zoom { factor } => image.zoom(config.zoom_factor(factor))?,
            FilterAction::Crop { region } => image.crop(region)?,
        }
        Ok(())
    }
}

/// Input widget attached to a control.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ControlInput {
    /// Plain menu item
    None,
    /// Slider with inclusive bounds and a neutral starting value
    Slider { min: f64, max: f64, initial: f64 },
    /// Click and drag on the image
    Selection,
}

/// Menu entry description for building the filter menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Control {
    pub kind: &'static str,
    pub label: &'static str,
    pub tooltip: &'static str,
    pub input: ControlInput,
}

/// The filter menu, in display order.
pub fn controls(config: &EditorConfig) -> Vec<Control> {
    vec![
        Control {
            kind: "swapRedBlue",
            label: "Red Blue Swap",
            tooltip: "Swap the red and blue amounts of every pixel",
            input: ControlInput::None,
        },
        Control {
            kind: "grayscale",
            label: "Black and White",
            tooltip: "Replace every pixel with the average of its channels",
            input: ControlInput::None,
        },
        Control {
            kind: "rotateClockwise",
            label: "Rotate Clockwise",
            tooltip: "Rotate the image clockwise by 90 degrees",
            input: ControlInput::None,
        },
        Control {
            kind: "invert",
            label: "Color Inversion",
            tooltip: "Invert the colors of the image",
            input: ControlInput::None,
        },
        Control {
            kind: "brightness",
            label: "Brightness",
            tooltip: "Slide left to darken, right to brighten",
            input: ControlInput::Slider {
                min: config.brightness_min as f64,
                max: config.brightness_max as f64,
                initial: 0.0,
            },
        },
        Control {
            kind: "crop",
            label: "Crop",
            tooltip: "Click the image, then drag to choose the region to keep",
            input: ControlInput::Selection,
        },
        Control {
            kind: "zoom",
            label: "Zoom",
            tooltip: "Slide left to zoom out, right to zoom in",
            input: ControlInput::Slider {
                min: config.zoom_min,
                max: config.zoom_max,
                initial: 0.0,
            },
        },
    ]
}
