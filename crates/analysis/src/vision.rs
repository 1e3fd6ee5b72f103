//! Color-vision deficiency simulation.
//!
//! Each vision type is a fixed 3×3 matrix applied directly to 0–255 sRGB
//! channel values, without a gamma round trip. Results are rounded and
//! clamped back into 8-bit range.

use oledscheme_core::color::{parse_hex_or_neutral, Rgb8};
use oledscheme_core::SchemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

type Matrix = [[f64; 3]; 3];

const NORMAL: Matrix = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
const PROTANOPIA: Matrix = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];
const DEUTERANOPIA: Matrix = [[0.625, 0.375, 0.0], [0.7, 0.3, 0.0], [0.0, 0.3, 0.7]];
const TRITANOPIA: Matrix = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];
const ACHROMATOPSIA: Matrix = [
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
    [0.299, 0.587, 0.114],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisionType {
    Normal,
    Protanopia,
    Deuteranopia,
    Tritanopia,
    Achromatopsia,
}

impl VisionType {
    pub const ALL: [VisionType; 5] = [
        VisionType::Normal,
        VisionType::Protanopia,
        VisionType::Deuteranopia,
        VisionType::Tritanopia,
        VisionType::Achromatopsia,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VisionType::Normal => "normal",
            VisionType::Protanopia => "protanopia",
            VisionType::Deuteranopia => "deuteranopia",
            VisionType::Tritanopia => "tritanopia",
            VisionType::Achromatopsia => "achromatopsia",
        }
    }

    fn matrix(self) -> &'static Matrix {
        match self {
            VisionType::Normal => &NORMAL,
            VisionType::Protanopia => &PROTANOPIA,
            VisionType::Deuteranopia => &DEUTERANOPIA,
            VisionType::Tritanopia => &TRITANOPIA,
            VisionType::Achromatopsia => &ACHROMATOPSIA,
        }
    }
}

impl fmt::Display for VisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisionType {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        VisionType::ALL
            .into_iter()
            .find(|v| v.as_str() == wanted)
            .ok_or_else(|| SchemeError::UnknownVisionType(s.to_string()))
    }
}

/// How `color` appears under `vision`.
pub fn simulate(color: Rgb8, vision: VisionType) -> Rgb8 {
    let m = vision.matrix();
    let rgb = [f64::from(color.r), f64::from(color.g), f64::from(color.b)];
    let channel = |row: &[f64; 3]| {
        let v = row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2];
        v.round().clamp(0.0, 255.0) as u8
    };
    Rgb8::new(channel(&m[0]), channel(&m[1]), channel(&m[2]))
}

/// [`simulate`] on a hex literal; malformed hex reads as the neutral fallback.
pub fn simulate_hex(hex: &str, vision: VisionType) -> String {
    simulate(parse_hex_or_neutral(hex), vision).to_hex()
}
