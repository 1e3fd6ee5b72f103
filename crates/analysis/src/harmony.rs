//! Harmony score: how closely a scheme's hue spread matches its declared style.

use oledscheme_core::color::{hex_to_oklch, hue_distance};
use oledscheme_core::harmony::HarmonyStyle;
use oledscheme_core::scheme::ColorScheme;

/// Colors below this chroma have no meaningful hue and are skipped.
pub const MIN_HUED_CHROMA: f64 = 0.02;

/// Expected distance and tolerance for styles the engine does not know.
const UNKNOWN_EXPECTED: f64 = 90.0;
const UNKNOWN_TOLERANCE: f64 = 90.0;
/// Deviation of this many tolerance bands scores zero.
const ZERO_SCORE_BANDS: f64 = 3.0;

/// Mean circular distance over all hue pairs; `None` with fewer than two hues.
pub fn mean_pairwise_hue_distance(hues: &[f64]) -> Option<f64> {
    if hues.len() < 2 {
        return None;
    }
    let mut total = 0.0;
    let mut pairs = 0usize;
    for (i, &a) in hues.iter().enumerate() {
        for &b in &hues[i + 1..] {
            total += hue_distance(a, b);
            pairs += 1;
        }
    }
    Some(total / pairs as f64)
}

/// Hues of the non-background colors carrying visible chroma.
pub fn scheme_hues(scheme: &ColorScheme) -> Vec<f64> {
    scheme
        .non_background_colors()
        .into_iter()
        .map(hex_to_oklch)
        .filter(|lch| lch.c >= MIN_HUED_CHROMA)
        .map(|lch| lch.h)
        .collect()
}

/// Scores 0–100: 100 at the style's expected hue distance, decaying
/// linearly to 0 at three tolerance bands away. Schemes with fewer than two
/// hued colors score 100.
pub fn harmony_score(scheme: &ColorScheme) -> f64 {
    let (expected, tolerance) = match HarmonyStyle::from_name(&scheme.style) {
        Some(style) => (style.expected_hue_distance(), style.hue_tolerance()),
        None => (UNKNOWN_EXPECTED, UNKNOWN_TOLERANCE),
    };
    let Some(mean) = mean_pairwise_hue_distance(&scheme_hues(scheme)) else {
        return 100.0;
    };
    let deviation = (mean - expected).abs();
    (100.0 * (1.0 - deviation / (ZERO_SCORE_BANDS * tolerance))).clamp(0.0, 100.0)
}
