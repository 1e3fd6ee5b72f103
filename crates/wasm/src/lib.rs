#![deny(unsafe_code)]
//! Browser bindings for the OLED scheme engine.
//!
//! Every entry point takes and returns JSON strings so the page never sees
//! Rust types. The functions in this module are plain Rust and testable on
//! any target; `wasm` re-exports them through `wasm-bindgen`, turning the
//! `Err` string into a thrown `JsValue`.
//!
//! Option bags use the same keys the page sends (`riskTier`,
//! `preserveSaturation`, ...) and fall back to defaults for anything missing.

#[cfg(target_arch = "wasm32")]
mod wasm;

use oledscheme_analysis::{analyze as analyze_scheme, UsageContext, VisionType};
use oledscheme_core::{ColorScheme, SchemeError, SchemeRecipe};
use oledscheme_optimize::OptimizeOptions;
use oledscheme_synth::Synthesizer;
use serde::Serialize;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn parse_value(json: &str) -> Result<serde_json::Value, String> {
    if json.trim().is_empty() {
        return Ok(serde_json::Value::Object(Default::default()));
    }
    serde_json::from_str(json).map_err(|e| format!("invalid JSON: {e}"))
}

fn parse_scheme(json: &str) -> Result<ColorScheme, String> {
    serde_json::from_str(json).map_err(|e| format!("invalid scheme JSON: {e}"))
}

fn message(e: SchemeError) -> String {
    e.to_string()
}

/// Synthesizes a scheme from a recipe object
/// (`{baseHue, style, seed, name, riskTier}`); missing keys use defaults.
pub fn synthesize(recipe_json: &str) -> Result<String, String> {
    let recipe = SchemeRecipe::from_json(&parse_value(recipe_json)?);
    to_json(&Synthesizer::new(recipe).synthesize())
}

/// Synthesizes a random scheme on the balanced tier.
pub fn synthesize_random() -> Result<String, String> {
    to_json(&oledscheme_synth::synthesize_random())
}

/// Optimizes a registered palette. Unknown ids fail with
/// `palette not found: <id>`.
pub fn optimize_palette(palette_id: &str, options_json: &str) -> Result<String, String> {
    let options = OptimizeOptions::from_json(&parse_value(options_json)?);
    let scheme = oledscheme_optimize::optimize_palette(palette_id, &options).map_err(message)?;
    to_json(&scheme)
}

/// Analyzes a scheme JSON string.
pub fn analyze(scheme_json: &str) -> Result<String, String> {
    to_json(&analyze_scheme(&parse_scheme(scheme_json)?))
}

/// Simulates `vision` on a hex color; malformed hex reads as the neutral fallback.
pub fn simulate_color_blindness(hex: &str, vision: &str) -> Result<String, String> {
    let vision: VisionType = vision.parse().map_err(message)?;
    Ok(oledscheme_analysis::simulate_hex(hex, vision))
}

/// Assesses a color pair for a usage context (`text`, `interface`, `data`).
pub fn assess_accessibility(fg: &str, bg: &str, context: &str) -> Result<String, String> {
    let context: UsageContext = context.parse().map_err(message)?;
    to_json(&oledscheme_analysis::assess_accessibility(fg, bg, context))
}

/// RGBA8 swatch grid for `ImageData`; see `oledscheme_generators::pixel`.
pub fn preview_rgba(scheme_json: &str, swatch: usize) -> Result<Vec<u8>, String> {
    let scheme = parse_scheme(scheme_json)?;
    Ok(oledscheme_generators::pixel::scheme_to_rgba(&scheme, swatch))
}

/// Ids of the registered source palettes, as a JSON array.
pub fn list_palettes() -> Result<String, String> {
    to_json(&oledscheme_core::SourcePalette::list_ids())
}
