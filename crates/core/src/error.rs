//! Error types for the scheme engine.
//!
//! Only strict parsers and registry lookups fail. Numeric inputs are clamped
//! and malformed hex literals on lenient paths fall back to a neutral color,
//! so neither ever surfaces here.

use thiserror::Error;

/// Errors produced by scheme operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// A palette id did not resolve to a registered source palette.
    #[error("palette not found: {0}")]
    PaletteNotFound(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A harmony style name was not recognized.
    #[error("unknown harmony style: {0}")]
    UnknownStyle(String),

    /// A risk tier name was not recognized.
    #[error("unknown risk tier: {0}")]
    UnknownRiskTier(String),

    /// A color-vision type name was not recognized.
    #[error("unknown vision type: {0}")]
    UnknownVisionType(String),

    /// An accessibility usage context was not recognized.
    #[error("unknown usage context: {0}")]
    UnknownContext(String),

    /// A generator name was not found in the registry.
    #[error("unknown generator: {0}")]
    UnknownGenerator(String),

    /// A recipe failed validation.
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),

    /// An I/O error (reading recipes, writing previews).
    #[error("I/O error: {0}")]
    Io(String),
}
