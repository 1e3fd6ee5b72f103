//! Accessibility of color pairs across vision types and usage contexts.
//!
//! A pair is simulated under all five vision types and its contrast
//! recomputed each time. Compliance is judged on the worst case; the score is
//! the mean of `min(ratio / aaa, 1)` over the vision types.

use crate::contrast::{contrast_ratio, WcagLevel};
use crate::vision::{simulate, VisionType};
use oledscheme_core::color::parse_hex_or_neutral;
use oledscheme_core::scheme::ColorScheme;
use oledscheme_core::SchemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AAA thresholds are this multiple of the AA threshold.
const AAA_FACTOR: f64 = 1.5;

/// What a color pair is used for; decides the required ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageContext {
    #[default]
    Text,
    Interface,
    Data,
}

impl UsageContext {
    pub const ALL: [UsageContext; 3] = [
        UsageContext::Text,
        UsageContext::Interface,
        UsageContext::Data,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UsageContext::Text => "text",
            UsageContext::Interface => "interface",
            UsageContext::Data => "data",
        }
    }

    /// Minimum ratio for AA.
    pub fn aa_threshold(self) -> f64 {
        match self {
            UsageContext::Text => 4.5,
            UsageContext::Interface | UsageContext::Data => 3.0,
        }
    }

    /// Minimum ratio for AAA.
    pub fn aaa_threshold(self) -> f64 {
        self.aa_threshold() * AAA_FACTOR
    }
}

impl fmt::Display for UsageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UsageContext {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        UsageContext::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| SchemeError::UnknownContext(s.to_string()))
    }
}

/// Contrast of a pair as seen under one vision type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisionRatio {
    pub vision: VisionType,
    pub ratio: f64,
}

/// Accessibility verdict for one foreground/background pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityScore {
    pub foreground: String,
    pub background: String,
    pub context: UsageContext,
    /// One entry per [`VisionType::ALL`], in that order.
    pub ratios: Vec<VisionRatio>,
    pub worst_ratio: f64,
    /// 0–100.
    pub score: f64,
    pub compliance: WcagLevel,
}

impl AccessibilityScore {
    pub fn ratio_for(&self, vision: VisionType) -> Option<f64> {
        self.ratios
            .iter()
            .find(|r| r.vision == vision)
            .map(|r| r.ratio)
    }
}

/// Assesses `fg` over `bg` for `context`. Malformed hex reads as the neutral
/// fallback.
pub fn assess_accessibility(fg: &str, bg: &str, context: UsageContext) -> AccessibilityScore {
    let fg_rgb = parse_hex_or_neutral(fg);
    let bg_rgb = parse_hex_or_neutral(bg);
    let aaa = context.aaa_threshold();

    let ratios: Vec<VisionRatio> = VisionType::ALL
        .into_iter()
        .map(|vision| VisionRatio {
            vision,
            ratio: contrast_ratio(simulate(fg_rgb, vision), simulate(bg_rgb, vision)),
        })
        .collect();
    let worst_ratio = ratios.iter().map(|r| r.ratio).fold(f64::INFINITY, f64::min);
    let score = ratios.iter().map(|r| (r.ratio / aaa).min(1.0)).sum::<f64>() / ratios.len() as f64
        * 100.0;

    AccessibilityScore {
        foreground: fg_rgb.to_hex(),
        background: bg_rgb.to_hex(),
        context,
        ratios,
        worst_ratio,
        score: score.clamp(0.0, 100.0),
        compliance: WcagLevel::classify(worst_ratio, context.aa_threshold(), aaa),
    }
}

/// Accessibility of a scheme's key pairs, all judged as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemeAccessibility {
    pub foreground: AccessibilityScore,
    pub accent: AccessibilityScore,
    pub accent_bright: AccessibilityScore,
    pub selection: AccessibilityScore,
    /// Mean of the four pair scores.
    pub score: f64,
}

pub fn assess_scheme(scheme: &ColorScheme) -> SchemeAccessibility {
    let core = &scheme.core;
    let text = |fg: &str, bg: &str| assess_accessibility(fg, bg, UsageContext::Text);
    let foreground = text(&core.foreground, &core.background);
    let accent = text(&core.accent, &core.background);
    let accent_bright = text(&core.accent_bright, &core.background);
    let selection = text(&core.selection_fg, &core.selection_bg);
    let score = (foreground.score + accent.score + accent_bright.score + selection.score) / 4.0;
    SchemeAccessibility {
        foreground,
        accent,
        accent_bright,
        selection,
        score,
    }
}
