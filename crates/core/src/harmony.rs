//! Harmony model: per-style hue/chroma/lightness relationships.
//!
//! Each [`HarmonyStyle`] maps to six [`HarmonyDescriptor`]s, one per swatch
//! slot. Slot 0 is the primary (full strength); later slots are progressively
//! weaker, which gives the synthesized theme its visual hierarchy.
//!
//! A descriptor's hue is placed at `base + harmony_strength * hue_offset`.
//! The strength scales the offset itself, so a 0.9-strength complementary
//! slot lands at 162° rather than 180°. Analysis scoring is calibrated
//! against that placement.

use crate::color::normalize_hue;
use crate::error::SchemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of descriptor slots per style.
pub const SLOT_COUNT: usize = 6;

/// Named hue-relationship pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HarmonyStyle {
    Monochrome,
    Complementary,
    Triadic,
    Analogous,
    SplitComplementary,
    Tetradic,
    Spectral,
}

/// One swatch slot's relationship to the base hue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HarmonyDescriptor {
    /// Degrees from the base hue, before strength scaling.
    pub hue_offset: f64,
    /// Multiplier on the role's target chroma.
    pub chroma_multiplier: f64,
    /// Added to the role's target lightness.
    pub lightness_offset: f64,
    /// How tightly the slot is bound to the base, in [0, 1].
    pub harmony_strength: f64,
    /// Relative visual weight of the slot, in [0, 1].
    pub psychological_weight: f64,
}

const fn d(
    hue_offset: f64,
    chroma_multiplier: f64,
    lightness_offset: f64,
    harmony_strength: f64,
    psychological_weight: f64,
) -> HarmonyDescriptor {
    HarmonyDescriptor {
        hue_offset,
        chroma_multiplier,
        lightness_offset,
        harmony_strength,
        psychological_weight,
    }
}

const MONOCHROME: [HarmonyDescriptor; SLOT_COUNT] = [
    d(0.0, 1.00, 0.00, 1.00, 1.00),
    d(0.0, 0.85, -0.04, 0.95, 0.85),
    d(0.0, 0.75, 0.05, 0.90, 0.70),
    d(8.0, 0.60, -0.08, 0.85, 0.55),
    d(-8.0, 0.50, 0.08, 0.80, 0.45),
    d(0.0, 0.35, -0.12, 0.75, 0.35),
];

const COMPLEMENTARY: [HarmonyDescriptor; SLOT_COUNT] = [
    d(0.0, 1.00, 0.00, 1.00, 1.00),
    d(180.0, 0.90, -0.02, 0.95, 0.85),
    d(0.0, 0.80, 0.06, 0.90, 0.70),
    d(180.0, 0.70, 0.04, 0.85, 0.60),
    d(30.0, 0.60, -0.06, 0.75, 0.45),
    d(210.0, 0.50, -0.08, 0.70, 0.35),
];

const TRIADIC: [HarmonyDescriptor; SLOT_COUNT] = [
    d(0.0, 1.00, 0.00, 1.00, 1.00),
    d(120.0, 0.90, -0.02, 0.95, 0.80),
    d(240.0, 0.85, 0.04, 0.95, 0.75),
    d(0.0, 0.70, 0.06, 0.85, 0.55),
    d(120.0, 0.60, -0.06, 0.80, 0.45),
    d(240.0, 0.50, -0.08, 0.80, 0.40),
];

const ANALOGOUS: [HarmonyDescriptor; SLOT_COUNT] = [
    d(0.0, 1.00, 0.00, 1.00, 1.00),
    d(30.0, 0.90, -0.03, 0.95, 0.85),
    d(-30.0, 0.85, 0.04, 0.95, 0.75),
    d(60.0, 0.70, 0.06, 0.85, 0.55),
    d(-60.0, 0.60, -0.05, 0.80, 0.45),
    d(15.0, 0.50, -0.08, 0.90, 0.35),
];

const SPLIT_COMPLEMENTARY: [HarmonyDescriptor; SLOT_COUNT] = [
    d(0.0, 1.00, 0.00, 1.00, 1.00),
    d(150.0, 0.90, -0.02, 0.95, 0.80),
    d(210.0, 0.85, 0.04, 0.95, 0.75),
    d(0.0, 0.70, 0.06, 0.85, 0.55),
    d(150.0, 0.60, -0.06, 0.80, 0.45),
    d(210.0, 0.50, -0.08, 0.80, 0.40),
];

const TETRADIC: [HarmonyDescriptor; SLOT_COUNT] = [
    d(0.0, 1.00, 0.00, 1.00, 1.00),
    d(90.0, 0.90, -0.02, 0.95, 0.80),
    d(180.0, 0.85, 0.04, 0.90, 0.70),
    d(270.0, 0.80, 0.02, 0.90, 0.65),
    d(45.0, 0.60, -0.06, 0.75, 0.45),
    d(225.0, 0.50, -0.08, 0.75, 0.40),
];

const SPECTRAL: [HarmonyDescriptor; SLOT_COUNT] = [
    d(0.0, 1.00, 0.00, 1.00, 1.00),
    d(60.0, 0.95, -0.02, 0.90, 0.85),
    d(120.0, 0.90, 0.03, 0.90, 0.80),
    d(180.0, 0.85, 0.00, 0.85, 0.70),
    d(240.0, 0.80, -0.04, 0.85, 0.65),
    d(300.0, 0.75, 0.02, 0.80, 0.60),
];

/// Fallback for styles the engine does not know: every slot on the base hue
/// with a gentle chroma falloff.
pub const FLAT: [HarmonyDescriptor; SLOT_COUNT] = [
    d(0.0, 1.00, 0.00, 1.00, 1.00),
    d(0.0, 0.90, 0.00, 1.00, 0.80),
    d(0.0, 0.80, 0.00, 1.00, 0.60),
    d(0.0, 0.70, 0.00, 1.00, 0.50),
    d(0.0, 0.60, 0.00, 1.00, 0.40),
    d(0.0, 0.50, 0.00, 1.00, 0.30),
];

impl HarmonyStyle {
    pub const ALL: [HarmonyStyle; 7] = [
        HarmonyStyle::Monochrome,
        HarmonyStyle::Complementary,
        HarmonyStyle::Triadic,
        HarmonyStyle::Analogous,
        HarmonyStyle::SplitComplementary,
        HarmonyStyle::Tetradic,
        HarmonyStyle::Spectral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyStyle::Monochrome => "monochrome",
            HarmonyStyle::Complementary => "complementary",
            HarmonyStyle::Triadic => "triadic",
            HarmonyStyle::Analogous => "analogous",
            HarmonyStyle::SplitComplementary => "split-complementary",
            HarmonyStyle::Tetradic => "tetradic",
            HarmonyStyle::Spectral => "spectral",
        }
    }

    /// The six descriptors for this style.
    pub fn descriptors(self) -> &'static [HarmonyDescriptor; SLOT_COUNT] {
        match self {
            HarmonyStyle::Monochrome => &MONOCHROME,
            HarmonyStyle::Complementary => &COMPLEMENTARY,
            HarmonyStyle::Triadic => &TRIADIC,
            HarmonyStyle::Analogous => &ANALOGOUS,
            HarmonyStyle::SplitComplementary => &SPLIT_COMPLEMENTARY,
            HarmonyStyle::Tetradic => &TETRADIC,
            HarmonyStyle::Spectral => &SPECTRAL,
        }
    }

    /// Mean pairwise hue distance a well-formed theme of this style shows.
    pub fn expected_hue_distance(self) -> f64 {
        match self {
            HarmonyStyle::Monochrome => 0.0,
            HarmonyStyle::Complementary => 180.0,
            HarmonyStyle::Analogous => 30.0,
            HarmonyStyle::SplitComplementary => 150.0,
            HarmonyStyle::Triadic => 120.0,
            HarmonyStyle::Tetradic => 90.0,
            // uniformly spread hues average a quarter turn apart
            HarmonyStyle::Spectral => 90.0,
        }
    }

    /// Deviation (degrees) from the expected distance tolerated per score band.
    pub fn hue_tolerance(self) -> f64 {
        match self {
            HarmonyStyle::Monochrome => 20.0,
            HarmonyStyle::Analogous => 25.0,
            HarmonyStyle::Complementary => 60.0,
            HarmonyStyle::SplitComplementary => 50.0,
            HarmonyStyle::Triadic => 45.0,
            HarmonyStyle::Tetradic => 40.0,
            HarmonyStyle::Spectral => 40.0,
        }
    }

    /// Lenient lookup used where unknown styles must degrade, not fail.
    pub fn from_name(name: &str) -> Option<HarmonyStyle> {
        name.parse().ok()
    }
}

impl fmt::Display for HarmonyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyStyle {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        HarmonyStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == wanted)
            .ok_or_else(|| SchemeError::UnknownStyle(s.to_string()))
    }
}

/// Descriptors for `style`, or [`FLAT`] when the style is unknown.
pub fn derive_descriptors(style: Option<HarmonyStyle>) -> &'static [HarmonyDescriptor; SLOT_COUNT] {
    match style {
        Some(s) => s.descriptors(),
        None => &FLAT,
    }
}

impl HarmonyDescriptor {
    /// Hue of this slot for `base_hue`: `(base + strength * offset) mod 360`.
    pub fn hue_for(&self, base_hue: f64) -> f64 {
        normalize_hue(base_hue + self.harmony_strength * self.hue_offset)
    }
}
