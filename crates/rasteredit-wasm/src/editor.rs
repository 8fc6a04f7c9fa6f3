//! The interactive editor object.
//!
//! An [`ImageEditor`] owns exactly one pixel grid. Every menu action calls
//! into it in turn, and every action finishes (or fails without side
//! effects) before the next one starts.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const editor = new ImageEditor({ brightnessMin: -100, brightnessMax: 100 });
//! if (!editor.open(new Uint8Array(await file.arrayBuffer()))) {
//!   showError('Image file cannot be read');
//! }
//! editor.rotate_clockwise();
//! editor.brightness(slider.valueAsNumber);
//! ctx.putImageData(new ImageData(editor.rgba_pixels(), editor.width, editor.height), 0, 0);
//! ```

use js_sys::Uint8ClampedArray;
use rasteredit_core::encode::{encode_image, EncodeError, OutputFormat};
use rasteredit_core::{decode_image, EditError, EditorConfig, Image, Selection};
use wasm_bindgen::prelude::*;

use crate::actions::{controls, FilterAction};
use crate::report::{report_error, to_js};

/// Editor session holding the current image.
#[wasm_bindgen]
pub struct ImageEditor {
    image: Image,
    config: EditorConfig,
    loaded: bool,
}

#[wasm_bindgen]
impl ImageEditor {
    /// Create an editor. `config` is an optional plain object with
    /// `EditorConfig` fields; missing fields use their defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ImageEditor, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(Self::with_config(config))
    }

    /// Replace the current image with the built-in 3x2 demo grid.
    pub fn load_sample(&mut self) {
        self.replace_image(Image::sample());
    }

    /// Decode PNG or JPEG bytes and make them the current image.
    ///
    /// Returns `false` and keeps the current image if the bytes cannot be
    /// decoded; the failure is reported to the console.
    pub fn open(&mut self, bytes: &[u8]) -> bool {
        match decode_image(bytes) {
            Ok(image) => {
                self.replace_image(image);
                true
            }
            Err(e) => {
                report_error("Image file cannot be read", &e);
                false
            }
        }
    }

    /// Whether an image has been opened. Filter menus stay disabled until then.
    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.loaded
    }

    /// Image width in pixels (grid columns)
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.image.cols() as u32
    }

    /// Image height in pixels (grid rows)
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.image.rows() as u32
    }

    /// Packed `0xRRGGBB` value at `(row, col)`.
    pub fn pixel(&self, row: i32, col: i32) -> Result<u32, JsValue> {
        self.image
            .pixel_at(row as i64, col as i64)
            .map(|p| p.packed())
            .map_err(to_js)
    }

    pub fn swap_red_blue(&mut self) {
        self.image.swap_red_blue();
    }

    pub fn grayscale(&mut self) {
        self.image.grayscale();
    }

    pub fn rotate_clockwise(&mut self) {
        self.image.rotate_clockwise();
    }

    pub fn invert(&mut self) {
        self.image.invert();
    }

    /// Apply the brightness slider value.
    pub fn brightness(&mut self, slider: i32) -> Result<(), JsValue> {
        self.apply_action(FilterAction::Brightness { delta: slider })
            .map_err(to_js)
    }

    /// Apply the zoom slider value.
    pub fn zoom(&mut self, slider: f64) -> Result<(), JsValue> {
        self.apply_action(FilterAction::Zoom { factor: slider })
            .map_err(to_js)
    }

    /// Crop to the rectangle dragged from `(x0, y0)` to `(x1, y1)` in image
    /// pixel coordinates. The rectangle is clipped to the image.
    ///
    /// Returns `false` when the selection misses the image entirely.
    pub fn crop_selection(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> bool {
        let selection = Selection::from_points((x0 as i64, y0 as i64), (x1 as i64, y1 as i64));
        let Some(region) = selection.clamped_to(self.image.rows(), self.image.cols()) else {
            return false;
        };
        match self.apply_action(FilterAction::Crop { region }) {
            Ok(()) => true,
            Err(e) => {
                report_error("Crop failed", &e);
                false
            }
        }
    }

    /// Apply a `FilterAction` object, e.g. `{ kind: "zoom", factor: 2 }`.
    pub fn apply(&mut self, action: JsValue) -> Result<(), JsValue> {
        let action: FilterAction = serde_wasm_bindgen::from_value(action)?;
        self.apply_action(action).map_err(to_js)
    }

    /// Filter menu description for the UI.
    pub fn controls(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&controls(&self.config))?)
    }

    /// RGB pixel data (3 bytes per pixel, row-major order).
    pub fn rgb_pixels(&self) -> Vec<u8> {
        self.image
            .pixels()
            .iter()
            .flat_map(|p| p.channels())
            .collect()
    }

    /// Opaque RGBA pixel data ready for `new ImageData(...)`.
    pub fn rgba_pixels(&self) -> Uint8ClampedArray {
        let bytes = self.rgba_bytes();
        let array = Uint8ClampedArray::new_with_length(bytes.len() as u32);
        array.copy_from(&bytes);
        array
    }

    /// Encode with the configured save format. An empty image yields no bytes.
    pub fn save(&self) -> Result<Vec<u8>, JsValue> {
        self.encode(self.config.save_format).map_err(to_js)
    }

    /// Encode as `png`, `jpg` or `jpeg`.
    pub fn save_as(&self, format: &str) -> Result<Vec<u8>, JsValue> {
        let format = OutputFormat::from_name(format)
            .ok_or_else(|| JsValue::from_str(&format!("Unsupported format: {}", format)))?;
        self.encode(format).map_err(to_js)
    }

    /// MIME type of the configured save format.
    #[wasm_bindgen(getter)]
    pub fn save_mime_type(&self) -> String {
        self.config.save_format.mime_type().to_string()
    }
}

impl ImageEditor {
    /// Create an editor with no image.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            image: Image::empty(),
            config,
            loaded: false,
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Run one filter action against the current image.
    pub fn apply_action(&mut self, action: FilterAction) -> Result<(), EditError> {
        action.apply(&mut self.image, &self.config)
    }

    /// Encode the current image, logging failures.
    pub fn encode(&self, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
        encode_image(&self.image, format, self.config.quality()).inspect_err(|e| {
            report_error("The image cannot be encoded", e);
        })
    }

    fn rgba_bytes(&self) -> Vec<u8> {
        self.image
            .pixels()
            .iter()
            .flat_map(|p| {
                let [r, g, b] = p.channels();
                [r, g, b, 255]
            })
            .collect()
    }

    fn replace_image(&mut self, image: Image) {
        self.image = image;
        self.loaded = true;
    }
}

impl Default for ImageEditor {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasteredit_core::{CropRegion, Pixel};

    fn sample_editor() -> ImageEditor {
        let mut editor = ImageEditor::default();
        editor.load_sample();
        editor
    }

    #[test]
    fn test_starts_empty() {
        let editor = ImageEditor::default();
        assert!(!editor.has_image());
        assert_eq!(editor.width(), 0);
        assert_eq!(editor.height(), 0);
        assert!(editor.rgb_pixels().is_empty());
    }

    #[test]
    fn test_load_sample() {
        let editor = sample_editor();
        assert!(editor.has_image());
        assert_eq!(editor.width(), 2);
        assert_eq!(editor.height(), 3);
    }

    #[test]
    fn test_open_roundtrip() {
        let png = encode_image(&Image::sample(), OutputFormat::Png, 90).unwrap();
        let mut editor = ImageEditor::default();
        assert!(editor.open(&png));
        assert_eq!(editor.image(), &Image::sample());
    }

    #[test]
    fn test_open_failure_keeps_image() {
        let mut editor = sample_editor();
        editor.rotate_clockwise();
        let before = editor.image().clone();

        assert!(!editor.open(b"not an image"));
        assert_eq!(editor.image(), &before);
        assert!(editor.has_image());
    }

    #[test]
    fn test_menu_actions() {
        let mut editor = sample_editor();
        editor.swap_red_blue();
        assert_eq!(editor.image().pixel_at(0, 0).unwrap(), Pixel::YELLOW);

        editor.invert();
        assert_eq!(editor.image().pixel_at(0, 0).unwrap(), Pixel::BLUE);

        editor.rotate_clockwise();
        assert_eq!((editor.width(), editor.height()), (3, 2));

        editor.grayscale();
        assert!(editor.image().pixels().iter().all(Pixel::is_gray));
    }

    #[test]
    fn test_crop_selection_translates_axes() {
        let mut editor = sample_editor();
        // x = column 1, y from row 2 back up to row 1
        assert!(editor.crop_selection(1, 2, 1, 1));
        assert_eq!(
            editor.image(),
            &Image::from_rows(vec![vec![Pixel::MAGENTA], vec![Pixel::BLUE]]).unwrap()
        );
    }

    #[test]
    fn test_crop_selection_outside() {
        let mut editor = sample_editor();
        assert!(!editor.crop_selection(10, 10, 20, 20));
        assert_eq!(editor.image(), &Image::sample());
    }

    #[test]
    fn test_apply_action_crop() {
        let mut editor = sample_editor();
        editor
            .apply_action(FilterAction::Crop {
                region: CropRegion::new(0, 0, 0, 1),
            })
            .unwrap();
        assert_eq!(editor.rgb_pixels(), vec![0, 255, 255, 255, 0, 0]);
    }

    #[test]
    fn test_rgba_bytes_are_opaque() {
        let editor = sample_editor();
        let rgba = editor.rgba_bytes();
        assert_eq!(rgba.len(), 3 * 2 * 4);
        assert_eq!(&rgba[0..4], &[0, 255, 255, 255]);
        assert!(rgba.chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_encode_empty_yields_nothing() {
        let editor = ImageEditor::default();
        assert!(editor.encode(OutputFormat::Png).unwrap().is_empty());
    }

    #[test]
    fn test_encode_uses_config_quality() {
        let mut config = EditorConfig::default();
        config.jpeg_quality = 0;
        let mut editor = ImageEditor::with_config(config);
        editor.load_sample();
        let bytes = editor.encode(OutputFormat::Jpeg).unwrap();
        assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_save_mime_type() {
        assert_eq!(ImageEditor::default().save_mime_type(), "image/png");
    }
}
