//! The `SchemeGenerator` trait shared by the synthesizer and the optimizer.
//!
//! The trait is object-safe so generators can be used as `dyn SchemeGenerator`
//! for runtime switching from the CLI or the browser bindings.

use crate::error::SchemeError;
use crate::scheme::ColorScheme;
use serde_json::Value;

/// Something that turns its configured inputs into a [`ColorScheme`].
pub trait SchemeGenerator {
    /// Produce the scheme. Generation is pure: calling this twice yields equal schemes.
    fn generate(&self) -> Result<ColorScheme, SchemeError>;

    /// Current inputs as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing the accepted inputs, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}
