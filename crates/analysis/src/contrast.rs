//! WCAG relative luminance and contrast ratios.

use oledscheme_core::color::{parse_hex_or_neutral, srgb_to_linear, Rgb8};
use oledscheme_core::scheme::{ColorScheme, ANSI_COUNT};
use serde::{Deserialize, Serialize};

/// Ratio required for AAA body text.
pub const AAA_RATIO: f64 = 7.0;
/// Ratio required for AA body text.
pub const AA_RATIO: f64 = 4.5;

/// WCAG verdict for one color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "fail")]
    Fail,
}

impl WcagLevel {
    /// Classifies `ratio` against the body-text thresholds.
    pub fn from_ratio(ratio: f64) -> Self {
        Self::classify(ratio, AA_RATIO, AAA_RATIO)
    }

    /// Classifies `ratio` against explicit thresholds.
    pub fn classify(ratio: f64, aa: f64, aaa: f64) -> Self {
        if ratio >= aaa {
            WcagLevel::Aaa
        } else if ratio >= aa {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Aaa => "AAA",
            WcagLevel::Aa => "AA",
            WcagLevel::Fail => "fail",
        }
    }

    pub fn passes(self) -> bool {
        self != WcagLevel::Fail
    }
}

/// Verdicts for the key pairs of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagCompliance {
    pub foreground: WcagLevel,
    pub accent: WcagLevel,
    pub accent_bright: WcagLevel,
    /// `selection_fg` over `selection_bg`.
    pub selection: WcagLevel,
}

/// WCAG relative luminance on gamma-decoded channels.
pub fn relative_luminance(color: Rgb8) -> f64 {
    let lin = srgb_to_linear(color.into());
    0.2126 * lin.r + 0.7152 * lin.g + 0.0722 * lin.b
}

/// `(lighter + 0.05) / (darker + 0.05)`; symmetric in its arguments.
pub fn contrast_ratio(a: Rgb8, b: Rgb8) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// [`contrast_ratio`] on hex literals; malformed hex reads as the neutral fallback.
pub fn contrast_ratio_hex(a: &str, b: &str) -> f64 {
    contrast_ratio(parse_hex_or_neutral(a), parse_hex_or_neutral(b))
}

pub fn wcag_compliance(scheme: &ColorScheme) -> WcagCompliance {
    let core = &scheme.core;
    let against_bg = |hex: &str| WcagLevel::from_ratio(contrast_ratio_hex(hex, &core.background));
    WcagCompliance {
        foreground: against_bg(&core.foreground),
        accent: against_bg(&core.accent),
        accent_bright: against_bg(&core.accent_bright),
        selection: WcagLevel::from_ratio(contrast_ratio_hex(
            &core.selection_fg,
            &core.selection_bg,
        )),
    }
}

/// Mean of `min(ratio / 7, 1)` over foreground, accent and accent_bright
/// against the background, scaled to 0–100.
///
/// Roles painted exactly in the background color are unused and skipped; a
/// scheme whose three text roles are all unused scores 0.
pub fn contrast_score(scheme: &ColorScheme) -> f64 {
    let core = &scheme.core;
    let bg = parse_hex_or_neutral(&core.background);
    let used: Vec<Rgb8> = [&core.foreground, &core.accent, &core.accent_bright]
        .into_iter()
        .map(|hex| parse_hex_or_neutral(hex))
        .filter(|&rgb| rgb != bg)
        .collect();
    if used.is_empty() {
        return 0.0;
    }
    let sum: f64 = used
        .iter()
        .map(|&rgb| (contrast_ratio(rgb, bg) / AAA_RATIO).min(1.0))
        .sum();
    (sum / used.len() as f64 * 100.0).clamp(0.0, 100.0)
}

/// Relative luminance of `color0..=color15`.
pub fn luminance_profile(scheme: &ColorScheme) -> [f64; ANSI_COUNT] {
    std::array::from_fn(|i| relative_luminance(parse_hex_or_neutral(&scheme.terminal.colors[i])))
}
