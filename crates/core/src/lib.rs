#![deny(unsafe_code)]
//! Core types for the OLED color-scheme engine.
//!
//! Provides the color-space layer (`Rgb8`, `Srgb`, `OkLab`, `OkLch`, `Hsl`,
//! `delta_e`), the string-seeded `SeededRng`, the harmony model, the OLED
//! risk-tier table, the `ColorScheme` data model, the curated source palette
//! registry, `SchemeRecipe` and the `SchemeGenerator` trait.

pub mod color;
pub mod error;
pub mod generator;
pub mod harmony;
pub mod palette;
pub mod params;
pub mod prng;
pub mod recipe;
pub mod risk;
pub mod scheme;

pub use color::{Hsl, LinearRgb, OkLab, OkLch, Rgb8, Srgb};
pub use error::SchemeError;
pub use generator::SchemeGenerator;
pub use harmony::{HarmonyDescriptor, HarmonyStyle};
pub use palette::{Role, RoleMap, SourcePalette};
pub use prng::SeededRng;
pub use recipe::SchemeRecipe;
pub use risk::{RiskProfile, RiskTier, RoleClass};
pub use scheme::{ColorScheme, CoreColors, TerminalColors, BACKGROUND_HEX};
