//! OLED burn-in risk tiers and their per-role caps.
//!
//! A [`RiskProfile`] is a constant table row: lightness and chroma ceilings per
//! [`RoleClass`], the contrast floor against the black background, and the
//! chroma-compensation multiplier applied when a color had to be darkened.
//! Every field is non-decreasing from `UltraConservative` to `Aggressive`.

use crate::color::{oklab_to_rgb, oklch_to_oklab, rgb_to_oklab, OkLch, Rgb8};
use crate::error::SchemeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named OLED-safety tier, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    UltraConservative,
    Conservative,
    #[default]
    Balanced,
    Aggressive,
}

/// The UI role classes the caps are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleClass {
    Foreground,
    Accent,
    BrightAccent,
    DarkColors,
    BrightColors,
}

/// One numeric value per [`RoleClass`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoleCaps {
    pub foreground: f64,
    pub accent: f64,
    pub bright_accent: f64,
    pub dark_colors: f64,
    pub bright_colors: f64,
}

impl RoleCaps {
    pub fn get(&self, role: RoleClass) -> f64 {
        match role {
            RoleClass::Foreground => self.foreground,
            RoleClass::Accent => self.accent,
            RoleClass::BrightAccent => self.bright_accent,
            RoleClass::DarkColors => self.dark_colors,
            RoleClass::BrightColors => self.bright_colors,
        }
    }
}

/// Caps and compensation for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskProfile {
    pub tier: RiskTier,
    /// OKLab lightness ceiling per role.
    pub max_lightness: RoleCaps,
    /// OKLCh chroma ceiling per role.
    pub max_chroma: RoleCaps,
    /// Minimum WCAG contrast ratio text roles should reach against black.
    pub min_contrast: f64,
    /// Chroma multiplier applied to colors whose lightness was capped.
    pub chroma_compensation: f64,
}

const ULTRA_CONSERVATIVE: RiskProfile = RiskProfile {
    tier: RiskTier::UltraConservative,
    max_lightness: RoleCaps {
        foreground: 0.62,
        accent: 0.55,
        bright_accent: 0.60,
        dark_colors: 0.45,
        bright_colors: 0.55,
    },
    max_chroma: RoleCaps {
        foreground: 0.04,
        accent: 0.12,
        bright_accent: 0.13,
        dark_colors: 0.10,
        bright_colors: 0.12,
    },
    min_contrast: 4.5,
    chroma_compensation: 1.15,
};

const CONSERVATIVE: RiskProfile = RiskProfile {
    tier: RiskTier::Conservative,
    max_lightness: RoleCaps {
        foreground: 0.70,
        accent: 0.62,
        bright_accent: 0.68,
        dark_colors: 0.50,
        bright_colors: 0.62,
    },
    max_chroma: RoleCaps {
        foreground: 0.05,
        accent: 0.14,
        bright_accent: 0.15,
        dark_colors: 0.12,
        bright_colors: 0.14,
    },
    min_contrast: 4.5,
    chroma_compensation: 1.20,
};

const BALANCED: RiskProfile = RiskProfile {
    tier: RiskTier::Balanced,
    max_lightness: RoleCaps {
        foreground: 0.78,
        accent: 0.70,
        bright_accent: 0.76,
        dark_colors: 0.55,
        bright_colors: 0.70,
    },
    max_chroma: RoleCaps {
        foreground: 0.06,
        accent: 0.16,
        bright_accent: 0.17,
        dark_colors: 0.14,
        bright_colors: 0.16,
    },
    min_contrast: 5.0,
    chroma_compensation: 1.25,
};

const AGGRESSIVE: RiskProfile = RiskProfile {
    tier: RiskTier::Aggressive,
    max_lightness: RoleCaps {
        foreground: 0.88,
        accent: 0.80,
        bright_accent: 0.86,
        dark_colors: 0.62,
        bright_colors: 0.80,
    },
    max_chroma: RoleCaps {
        foreground: 0.08,
        accent: 0.20,
        bright_accent: 0.22,
        dark_colors: 0.17,
        bright_colors: 0.20,
    },
    min_contrast: 7.0,
    chroma_compensation: 1.30,
};

impl RiskTier {
    pub const ALL: [RiskTier; 4] = [
        RiskTier::UltraConservative,
        RiskTier::Conservative,
        RiskTier::Balanced,
        RiskTier::Aggressive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::UltraConservative => "ultra-conservative",
            RiskTier::Conservative => "conservative",
            RiskTier::Balanced => "balanced",
            RiskTier::Aggressive => "aggressive",
        }
    }

    /// The constant profile row for this tier.
    pub fn profile(self) -> &'static RiskProfile {
        match self {
            RiskTier::UltraConservative => &ULTRA_CONSERVATIVE,
            RiskTier::Conservative => &CONSERVATIVE,
            RiskTier::Balanced => &BALANCED,
            RiskTier::Aggressive => &AGGRESSIVE,
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        RiskTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == wanted)
            .ok_or_else(|| SchemeError::UnknownRiskTier(s.to_string()))
    }
}

impl RiskProfile {
    /// Applies this tier's caps for `role` to `lch`.
    ///
    /// Lightness is clamped to the role ceiling. When that lowered the
    /// lightness, chroma is multiplied by [`Self::chroma_compensation`] so the
    /// darker color keeps its saturation. Chroma is then capped at
    /// `max_chroma[role] * saturation_scale`.
    pub fn constrain(&self, role: RoleClass, lch: OkLch, saturation_scale: f64) -> OkLch {
        let max_l = self.max_lightness.get(role);
        let scale = unit(saturation_scale);
        let max_c = self.max_chroma.get(role) * scale;

        let l = unit(lch.l);
        let c = if lch.c.is_nan() { 0.0 } else { lch.c.max(0.0) };

        let (l, c) = if l > max_l {
            (max_l, c * self.chroma_compensation)
        } else {
            (l, c)
        };

        OkLch {
            l,
            c: c.min(max_c),
            h: crate::color::normalize_hue(lch.h),
        }
    }

    /// Whether `color` reaches this tier's contrast floor against pure black.
    pub fn meets_min_contrast(&self, color: Rgb8) -> bool {
        contrast_against_black(color) >= self.min_contrast
    }

    /// Role ceiling for OKLab lightness.
    pub fn lightness_cap(&self, role: RoleClass) -> f64 {
        self.max_lightness.get(role)
    }

    /// Role ceiling for chroma.
    pub fn chroma_cap(&self, role: RoleClass) -> f64 {
        self.max_chroma.get(role)
    }
}

/// Renders `lch` to 8-bit sRGB, lowering lightness until the quantized color
/// measures at or below `max_lightness`.
///
/// Gamut clipping and 8-bit rounding both move the measured lightness, so the
/// cap is checked on the rendered color rather than on the OKLCh input.
pub fn render_within_cap(lch: OkLch, max_lightness: f64) -> Rgb8 {
    const STEP: f64 = 0.004;
    let mut probe = lch;
    for _ in 0..300 {
        let rgb = oklab_to_rgb(oklch_to_oklab(probe));
        if lightness_of(rgb) <= max_lightness || probe.l <= 0.0 {
            return rgb;
        }
        probe.l = (probe.l - STEP).max(0.0);
    }
    Rgb8::BLACK
}

/// Raises lightness in small steps until the rendered color reaches
/// `min_contrast` against black, never past `max_lightness`.
pub fn lift_for_contrast(lch: OkLch, max_lightness: f64, min_contrast: f64) -> OkLch {
    const STEP: f64 = 0.01;
    let mut probe = lch;
    while probe.l < max_lightness {
        let rgb = oklab_to_rgb(oklch_to_oklab(probe));
        if contrast_against_black(rgb) >= min_contrast {
            break;
        }
        probe.l = (probe.l + STEP).min(max_lightness);
    }
    probe
}

/// WCAG contrast ratio of `color` against `#000000`.
pub fn contrast_against_black(color: Rgb8) -> f64 {
    let lin = crate::color::srgb_to_linear(color.into());
    let y = 0.2126 * lin.r + 0.7152 * lin.g + 0.0722 * lin.b;
    (y + 0.05) / 0.05
}

/// OKLab lightness of a quantized color.
pub fn lightness_of(color: Rgb8) -> f64 {
    rgb_to_oklab(color).l
}

fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
