//! `wasm-bindgen` exports. Each wrapper forwards to the plain function of
//! the same name and throws the error message as a JS string.

use wasm_bindgen::prelude::*;

fn thrown(msg: String) -> JsValue {
    JsValue::from_str(&msg)
}

#[wasm_bindgen(js_name = synthesize)]
pub fn synthesize(recipe_json: &str) -> Result<String, JsValue> {
    crate::synthesize(recipe_json).map_err(thrown)
}

#[wasm_bindgen(js_name = synthesizeRandom)]
pub fn synthesize_random() -> Result<String, JsValue> {
    crate::synthesize_random().map_err(thrown)
}

#[wasm_bindgen(js_name = optimizePalette)]
pub fn optimize_palette(palette_id: &str, options_json: &str) -> Result<String, JsValue> {
    crate::optimize_palette(palette_id, options_json).map_err(thrown)
}

#[wasm_bindgen(js_name = analyze)]
pub fn analyze(scheme_json: &str) -> Result<String, JsValue> {
    crate::analyze(scheme_json).map_err(thrown)
}

#[wasm_bindgen(js_name = simulateColorBlindness)]
pub fn simulate_color_blindness(hex: &str, vision: &str) -> Result<String, JsValue> {
    crate::simulate_color_blindness(hex, vision).map_err(thrown)
}

#[wasm_bindgen(js_name = assessAccessibility)]
pub fn assess_accessibility(fg: &str, bg: &str, context: &str) -> Result<String, JsValue> {
    crate::assess_accessibility(fg, bg, context).map_err(thrown)
}

/// RGBA8 bytes for `new ImageData(new Uint8ClampedArray(buf), 8 * swatch)`.
#[wasm_bindgen(js_name = previewRgba)]
pub fn preview_rgba(scheme_json: &str, swatch: usize) -> Result<Vec<u8>, JsValue> {
    crate::preview_rgba(scheme_json, swatch).map_err(thrown)
}

#[wasm_bindgen(js_name = listPalettes)]
pub fn list_palettes() -> Result<String, JsValue> {
    crate::list_palettes().map_err(thrown)
}
