//! OLED burn-in risk.
//!
//! Bright static pixels age OLED subpixels. Risk grows with the mean and peak
//! OKLab lightness of the scheme and with how many colors sit in the upper
//! half of the lightness range.

use oledscheme_core::color::{parse_hex_or_neutral, rgb_to_oklab};
use oledscheme_core::scheme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fmt;

// Risk weights; they sum to 85 so even an all-white scheme keeps a floor score.
const MEAN_WEIGHT: f64 = 35.0;
const MAX_WEIGHT: f64 = 15.0;
const MID_WEIGHT: f64 = 15.0;
const HIGH_WEIGHT: f64 = 20.0;
const MID_LIGHTNESS: f64 = 0.4;
const HIGH_LIGHTNESS: f64 = 0.6;

/// Risk values below this are `Low`.
pub const LOW_RISK_BELOW: f64 = 40.0;
/// Risk values below this (and at least [`LOW_RISK_BELOW`]) are `Medium`.
pub const MEDIUM_RISK_BELOW: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnInRisk {
    Low,
    Medium,
    High,
}

impl BurnInRisk {
    pub fn from_risk(risk: f64) -> Self {
        if risk < LOW_RISK_BELOW {
            BurnInRisk::Low
        } else if risk < MEDIUM_RISK_BELOW {
            BurnInRisk::Medium
        } else {
            BurnInRisk::High
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BurnInRisk::Low => "low",
            BurnInRisk::Medium => "medium",
            BurnInRisk::High => "high",
        }
    }
}

impl fmt::Display for BurnInRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lightness statistics behind the OLED score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OledAssessment {
    /// `100 - risk`, in [0, 100].
    pub score: f64,
    pub risk: BurnInRisk,
    pub mean_lightness: f64,
    pub max_lightness: f64,
    /// Colors with lightness above 0.4.
    pub above_mid: usize,
    /// Colors with lightness above 0.6.
    pub above_high: usize,
}

/// Assesses the non-background colors of `scheme`.
pub fn assess_oled(scheme: &ColorScheme) -> OledAssessment {
    let lightness: Vec<f64> = scheme
        .non_background_colors()
        .into_iter()
        .map(|hex| rgb_to_oklab(parse_hex_or_neutral(hex)).l.clamp(0.0, 1.0))
        .collect();
    let n = lightness.len().max(1) as f64;
    let mean = lightness.iter().sum::<f64>() / n;
    let max = lightness.iter().copied().fold(0.0, f64::max);
    let above_mid = lightness.iter().filter(|&&l| l > MID_LIGHTNESS).count();
    let above_high = lightness.iter().filter(|&&l| l > HIGH_LIGHTNESS).count();

    let risk = MEAN_WEIGHT * mean
        + MAX_WEIGHT * max
        + MID_WEIGHT * above_mid as f64 / n
        + HIGH_WEIGHT * above_high as f64 / n;

    OledAssessment {
        score: (100.0 - risk).clamp(0.0, 100.0),
        risk: BurnInRisk::from_risk(risk),
        mean_lightness: mean,
        max_lightness: max,
        above_mid,
        above_high,
    }
}
