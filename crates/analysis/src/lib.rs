#![deny(unsafe_code)]
//! Scheme analysis.
//!
//! Scores any [`ColorScheme`] on four independent 0–100 axes (OLED burn-in
//! safety, WCAG contrast, hue harmony, distinctiveness) and blends them into
//! an overall score. Color-vision simulation and per-pair accessibility live
//! in [`vision`] and [`accessibility`].
//!
//! Analysis never mutates or rejects a scheme: malformed hex reads as the
//! neutral fallback and every score is clamped into range.

pub mod accessibility;
pub mod contrast;
pub mod distinct;
pub mod harmony;
pub mod oled;
pub mod vision;

pub use accessibility::{
    assess_accessibility, assess_scheme, AccessibilityScore, SchemeAccessibility, UsageContext,
};
pub use contrast::{contrast_ratio, contrast_ratio_hex, WcagCompliance, WcagLevel};
pub use oled::BurnInRisk;
pub use vision::{simulate, simulate_hex, VisionType};

use oledscheme_core::color::hex_to_oklch;
use oledscheme_core::scheme::{ColorScheme, ANSI_COUNT};
use serde::Serialize;

const OLED_WEIGHT: f64 = 0.3;
const CONTRAST_WEIGHT: f64 = 0.3;
const HARMONY_WEIGHT: f64 = 0.2;
const DISTINCT_WEIGHT: f64 = 0.2;

/// ANSI slots below this chroma count as neutral.
const NEUTRAL_CHROMA: f64 = 0.03;
/// Chromatic ANSI slots below this lightness count as dark.
const DARK_LIGHTNESS: f64 = 0.5;

/// Tally of the 16 ANSI slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColorCount {
    pub dark: usize,
    pub bright: usize,
    pub neutral: usize,
}

/// Full analysis of one scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub overall_score: f64,
    pub oled_score: f64,
    pub contrast_score: f64,
    pub harmony_score: f64,
    pub distinctiveness: f64,
    pub burn_in_risk: BurnInRisk,
    pub wcag_compliance: WcagCompliance,
    /// WCAG relative luminance of `color0..=color15`.
    pub luminance_profile: [f64; ANSI_COUNT],
    pub color_count: ColorCount,
    pub insights: Vec<String>,
    pub warnings: Vec<String>,
}

/// Classifies `color0..=color15`: neutral when nearly achromatic, otherwise
/// dark or bright by OKLab lightness.
pub fn color_count(scheme: &ColorScheme) -> ColorCount {
    scheme
        .terminal
        .colors
        .iter()
        .map(|hex| hex_to_oklch(hex))
        .fold(ColorCount::default(), |mut count, lch| {
            if lch.c < NEUTRAL_CHROMA {
                count.neutral += 1;
            } else if lch.l < DARK_LIGHTNESS {
                count.dark += 1;
            } else {
                count.bright += 1;
            }
            count
        })
}

/// Analyzes `scheme`. Pure and total.
pub fn analyze(scheme: &ColorScheme) -> AnalysisResult {
    let oled = oled::assess_oled(scheme);
    let contrast_score = contrast::contrast_score(scheme);
    let harmony_score = harmony::harmony_score(scheme);
    let distinctiveness = distinct::distinctiveness_score(scheme);
    let wcag_compliance = contrast::wcag_compliance(scheme);

    let overall_score = (OLED_WEIGHT * oled.score
        + CONTRAST_WEIGHT * contrast_score
        + HARMONY_WEIGHT * harmony_score
        + DISTINCT_WEIGHT * distinctiveness)
        .clamp(0.0, 100.0);

    let mut result = AnalysisResult {
        overall_score,
        oled_score: oled.score,
        contrast_score,
        harmony_score,
        distinctiveness,
        burn_in_risk: oled.risk,
        wcag_compliance,
        luminance_profile: contrast::luminance_profile(scheme),
        color_count: color_count(scheme),
        insights: Vec::new(),
        warnings: Vec::new(),
    };
    annotate(&mut result, &oled);

    tracing::debug!(
        name = %scheme.name,
        overall = result.overall_score,
        risk = %result.burn_in_risk,
        "analyzed scheme"
    );
    result
}

fn annotate(result: &mut AnalysisResult, oled: &oled::OledAssessment) {
    let insights = &mut result.insights;
    let warnings = &mut result.warnings;

    match result.burn_in_risk {
        BurnInRisk::Low => insights.push("Low burn-in risk: the palette stays dim on OLED panels".into()),
        BurnInRisk::Medium => {}
        BurnInRisk::High => warnings.push(format!(
            "High burn-in risk: {} of the colors sit above 0.6 lightness",
            oled.above_high
        )),
    }
    if oled.max_lightness > 0.9 {
        warnings.push("Near-white colors will age OLED subpixels fastest".into());
    }

    if result.contrast_score >= 90.0 {
        insights.push("Text colors reach AAA contrast against the black background".into());
    } else if result.contrast_score < 60.0 {
        warnings.push("Text colors have weak contrast against the black background".into());
    }
    let wcag = result.wcag_compliance;
    if !wcag.foreground.passes() {
        warnings.push("Foreground fails WCAG AA against the background".into());
    }
    if !wcag.accent.passes() || !wcag.accent_bright.passes() {
        warnings.push("An accent color fails WCAG AA against the background".into());
    }
    if !wcag.selection.passes() {
        warnings.push("Selected text is hard to read on the selection background".into());
    }

    if result.harmony_score >= 80.0 {
        insights.push("Hue spread matches the declared harmony style".into());
    } else if result.harmony_score < 50.0 {
        warnings.push("Hue spread drifts from the declared harmony style".into());
    }

    if result.distinctiveness >= 80.0 {
        insights.push("Colors are well separated and easy to tell apart".into());
    } else if result.distinctiveness < 40.0 {
        warnings.push("Several colors are too close to tell apart".into());
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use oledscheme_core::risk::RiskTier;
    use oledscheme_core::scheme::{ColorScheme, CoreColors, TerminalColors};

    /// Black background, `foreground` in the foreground slot, `rest` everywhere else.
    pub fn scheme_with(foreground: &str, rest: &str) -> ColorScheme {
        ColorScheme {
            name: "Test".into(),
            description: String::new(),
            seed: "test".into(),
            style: "monochrome".into(),
            hue: 0,
            risk_tier: RiskTier::Balanced,
            created_at: None,
            core: CoreColors {
                background: "#000000".into(),
                foreground: foreground.into(),
                accent: rest.into(),
                accent_bright: rest.into(),
                cursor: rest.into(),
                selection_bg: rest.into(),
                selection_fg: rest.into(),
            },
            terminal: TerminalColors {
                colors: std::array::from_fn(|_| rest.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scheme_with;

    #[test]
    fn white_foreground_on_black_scheme() {
        let all_black = analyze(&scheme_with("#000000", "#000000"));
        let scheme = scheme_with("#ffffff", "#000000");
        let result = analyze(&scheme);

        assert!((result.contrast_score - 100.0).abs() < 1e-9);
        assert_eq!(result.wcag_compliance.foreground, WcagLevel::Aaa);
        assert!(contrast_ratio_hex(&scheme.core.foreground, &scheme.core.background) > 20.9);
        assert!(result.distinctiveness < 15.0);
        assert!(result.oled_score < all_black.oled_score);
        assert!(result.warnings.iter().any(|w| w.contains("Near-white")));
    }

    #[test]
    fn text_contrast_is_full_when_all_text_is_white() {
        let mut scheme = scheme_with("#ffffff", "#000000");
        scheme.core.accent = "#ffffff".into();
        scheme.core.accent_bright = "#ffffff".into();
        let result = analyze(&scheme);
        assert!((result.contrast_score - 100.0).abs() < 1e-9);
        assert!(result.insights.iter().any(|i| i.contains("AAA")));
    }

    #[test]
    fn overall_is_the_weighted_blend() {
        let result = analyze(&scheme_with("#c0c0c0", "#404040"));
        let blend = 0.3 * result.oled_score
            + 0.3 * result.contrast_score
            + 0.2 * result.harmony_score
            + 0.2 * result.distinctiveness;
        assert!((result.overall_score - blend).abs() < 1e-9);
    }

    #[test]
    fn color_count_tallies_sixteen_slots() {
        let mut scheme = scheme_with("#ffffff", "#000000");
        scheme.terminal.colors[1] = "#aa0000".into();
        scheme.terminal.colors[9] = "#ff5555".into();
        let count = color_count(&scheme);
        assert_eq!(count, ColorCount { dark: 1, bright: 1, neutral: 14 });
    }

    #[test]
    fn weak_scheme_gets_warnings() {
        let result = analyze(&scheme_with("#333333", "#333333"));
        assert!(!result.warnings.is_empty());
        assert_eq!(result.wcag_compliance.foreground, WcagLevel::Fail);
    }

    #[test]
    fn result_serializes_to_json() {
        let result = analyze(&scheme_with("#ffffff", "#000000"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["burn_in_risk"], "low");
        assert_eq!(json["wcag_compliance"]["foreground"], "AAA");
        assert_eq!(json["luminance_profile"].as_array().unwrap().len(), 16);
    }

    mod proptests {
        use super::*;
        use oledscheme_core::color::Rgb8;
        use proptest::prelude::*;

        fn hex() -> impl Strategy<Value = String> {
            any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb8::new(r, g, b).to_hex())
        }

        fn scheme() -> impl Strategy<Value = ColorScheme> {
            (
                prop::collection::vec(hex(), 22),
                prop::sample::select(vec![
                    "monochrome",
                    "complementary",
                    "triadic",
                    "analogous",
                    "split-complementary",
                    "tetradic",
                    "spectral",
                    "custom",
                ]),
            )
                .prop_map(|(hexes, style)| {
                    let mut s = scheme_with(&hexes[0], "#000000");
                    s.style = style.to_string();
                    s.core.accent = hexes[1].clone();
                    s.core.accent_bright = hexes[2].clone();
                    s.core.cursor = hexes[3].clone();
                    s.core.selection_bg = hexes[4].clone();
                    s.core.selection_fg = hexes[5].clone();
                    for (slot, hex) in s.terminal.colors.iter_mut().zip(&hexes[6..]) {
                        *slot = hex.clone();
                    }
                    s
                })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(64))]

            #[test]
            fn scores_stay_in_range(scheme in scheme()) {
                let r = analyze(&scheme);
                for score in [
                    r.overall_score,
                    r.oled_score,
                    r.contrast_score,
                    r.harmony_score,
                    r.distinctiveness,
                ] {
                    prop_assert!((0.0..=100.0).contains(&score), "score {}", score);
                }
                let count = r.color_count;
                prop_assert_eq!(count.dark + count.bright + count.neutral, 16);
            }

            #[test]
            fn analysis_is_pure(scheme in scheme()) {
                let before = scheme.clone();
                let a = analyze(&scheme);
                let b = analyze(&scheme);
                prop_assert_eq!(a, b);
                prop_assert_eq!(scheme, before);
            }
        }
    }
}
