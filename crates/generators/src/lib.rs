#![deny(unsafe_code)]
//! Generator registry: maps generator names to implementations and provides
//! swatch preview rendering.
//!
//! This crate sits between `oledscheme-core` (which defines the
//! `SchemeGenerator` trait) and the generator crates (`oledscheme-synth`,
//! `oledscheme-optimize`). Both the CLI and the WASM bindings depend on it to
//! avoid duplicating dispatch logic.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use oledscheme_core::scheme::ColorScheme;
use oledscheme_core::{SchemeError, SchemeGenerator};
use oledscheme_optimize::Optimizer;
use oledscheme_synth::Synthesizer;
use serde_json::Value;

/// All available generator names.
const GENERATOR_NAMES: &[&str] = &["synth", "optimize"];

/// Enumeration of all scheme generators.
///
/// Wraps each implementation and delegates `SchemeGenerator` trait methods.
/// Use [`GeneratorKind::from_name`] for string-based construction (CLI, WASM).
#[derive(Debug, Clone)]
pub enum GeneratorKind {
    /// Synthesis from base hue, style, seed and tier.
    Synth(Synthesizer),
    /// Remapping of a registered source palette.
    Optimize(Optimizer),
}

impl GeneratorKind {
    /// Constructs a generator by name from a JSON params object.
    ///
    /// Returns `SchemeError::UnknownGenerator` if the name is not recognized,
    /// and `SchemeError::PaletteNotFound` when `optimize` names an unknown
    /// palette.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, SchemeError> {
        match name {
            "synth" => Ok(GeneratorKind::Synth(Synthesizer::from_json(params))),
            "optimize" => Ok(GeneratorKind::Optimize(Optimizer::from_json(params)?)),
            _ => Err(SchemeError::UnknownGenerator(name.to_string())),
        }
    }

    /// Returns a slice of all recognized generator names.
    pub fn list_generators() -> &'static [&'static str] {
        GENERATOR_NAMES
    }
}

impl SchemeGenerator for GeneratorKind {
    fn generate(&self) -> Result<ColorScheme, SchemeError> {
        match self {
            GeneratorKind::Synth(g) => g.generate(),
            GeneratorKind::Optimize(g) => g.generate(),
        }
    }

    fn params(&self) -> Value {
        match self {
            GeneratorKind::Synth(g) => g.params(),
            GeneratorKind::Optimize(g) => g.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            GeneratorKind::Synth(g) => g.param_schema(),
            GeneratorKind::Optimize(g) => g.param_schema(),
        }
    }
}
