//! Color types and conversion functions for scheme synthesis and analysis.
//!
//! Provides the color types (`Rgb8`, `Srgb`, `LinearRgb`, `OkLab`, `OkLch`,
//! `Hsl`) and pure conversion functions between them. All conversions are
//! total: out-of-domain values are clamped, never rejected. Uses `f64`
//! throughout for precision.
//!
//! OKLab is the working space of the engine: lightness caps, chroma
//! compensation and perceptual distance are all expressed in OKLab/OKLCh.

use crate::error::SchemeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Neutral gray substituted for hex literals that cannot be parsed.
pub const NEUTRAL_FALLBACK: Rgb8 = Rgb8 {
    r: 0x80,
    g: 0x80,
    b: 0x80,
};

/// 8-bit sRGB channel triple, the quantized form every hex string maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// sRGB color with components in [0, 1].
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex round-trip has 8-bit quantization (1/255 precision loss),
/// which is acceptable since hex colors are inherently 8-bit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// Legacy HSL: hue in degrees, saturation and lightness in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8 { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb8 = Rgb8 {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `"#rrggbb"` or `"rrggbb"` (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Rgb8, SchemeError> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(SchemeError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| SchemeError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Rgb8 {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Lowercase `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb8> for Srgb {
    fn from(c: Rgb8) -> Self {
        Srgb {
            r: f64::from(c.r) / 255.0,
            g: f64::from(c.g) / 255.0,
            b: f64::from(c.b) / 255.0,
        }
    }
}

impl From<Srgb> for Rgb8 {
    /// Quantizes with rounding; out-of-range components are clamped.
    fn from(c: Srgb) -> Self {
        Rgb8 {
            r: quantize(c.r),
            g: quantize(c.g),
            b: quantize(c.b),
        }
    }
}

fn quantize(v: f64) -> u8 {
    let v = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    (v * 255.0).round() as u8
}

/// Parses a hex literal, substituting [`NEUTRAL_FALLBACK`] when it is malformed.
///
/// This is the lenient path used when scoring or optimizing palettes that come
/// from outside the engine; it never fails.
pub fn parse_hex_or_neutral(hex: &str) -> Rgb8 {
    match Rgb8::from_hex(hex) {
        Ok(c) => c,
        Err(err) => {
            tracing::warn!(input = hex, %err, "malformed hex color, using neutral fallback");
            NEUTRAL_FALLBACK
        }
    }
}

impl Srgb {
    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `SchemeError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Srgb, SchemeError> {
        Rgb8::from_hex(hex).map(Srgb::from)
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Components are quantized to 8-bit (0–255) with rounding.
    pub fn to_hex(self) -> String {
        Rgb8::from(self).to_hex()
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Applies inverse sRGB gamma to convert a single sRGB component to linear.
pub fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies sRGB gamma to convert a single linear component to sRGB.
fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to sRGB by applying sRGB gamma.
pub fn linear_to_srgb(c: LinearRgb) -> Srgb {
    Srgb {
        r: linear_component_to_srgb(c.r),
        g: linear_component_to_srgb(c.g),
        b: linear_component_to_srgb(c.b),
    }
}

/// Converts linear RGB to OKLab via the OKLab matrix transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let l_c = l_.cbrt();
    let m_c = m_.cbrt();
    let s_c = s_.cbrt();

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to linear RGB via the inverse OKLab matrix transform.
///
/// The result may lie outside [0, 1] for out-of-gamut colors.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let l_ = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
    let m_ = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
    let s_ = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// 8-bit sRGB to OKLab.
pub fn rgb_to_oklab(c: Rgb8) -> OkLab {
    linear_to_oklab(srgb_to_linear(Srgb::from(c)))
}

/// OKLab to 8-bit sRGB.
///
/// Linear values are clamped to [0, 1] before gamma encoding so out-of-gamut
/// colors land on the nearest displayable channel values.
pub fn oklab_to_rgb(c: OkLab) -> Rgb8 {
    let lin = oklab_to_linear(c);
    let clamped = LinearRgb {
        r: clamp_unit(lin.r),
        g: clamp_unit(lin.g),
        b: clamp_unit(lin.b),
    };
    Rgb8::from(linear_to_srgb(clamped))
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Converts OKLab to OKLCh (cylindrical form).
///
/// NaN guard: if chroma is less than 1e-10, hue is set to 0.0 to avoid
/// indeterminate `atan2(0, 0)` results.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let ch = (c.a * c.a + c.b * c.b).sqrt();
    let h = if ch < 1e-10 {
        0.0
    } else {
        normalize_hue(c.b.atan2(c.a).to_degrees())
    };
    OkLch { l: c.l, c: ch, h }
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let h_rad = c.h.to_radians();
    OkLab {
        l: c.l,
        a: c.c * h_rad.cos(),
        b: c.c * h_rad.sin(),
    }
}

/// Convenience: sRGB to OKLCh via the chain sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

/// Convenience: OKLCh to sRGB via the chain OKLCh -> OKLab -> linear -> sRGB,
/// with linear output clamped to the gamut.
pub fn oklch_to_srgb(c: OkLch) -> Srgb {
    let lin = oklab_to_linear(oklch_to_oklab(c));
    linear_to_srgb(LinearRgb {
        r: clamp_unit(lin.r),
        g: clamp_unit(lin.g),
        b: clamp_unit(lin.b),
    })
}

/// Hex literal to OKLCh, lenient (malformed input maps to the neutral fallback).
pub fn hex_to_oklch(hex: &str) -> OkLch {
    oklab_to_oklch(rgb_to_oklab(parse_hex_or_neutral(hex)))
}

/// OKLCh to a quantized hex literal.
pub fn oklch_to_hex(c: OkLch) -> String {
    oklab_to_rgb(oklch_to_oklab(c)).to_hex()
}

/// Converts HSL to sRGB.
pub fn hsl_to_srgb(c: Hsl) -> Srgb {
    let h = normalize_hue(c.h) / 360.0;
    let s = clamp_unit(c.s);
    let l = clamp_unit(c.l);
    if s == 0.0 {
        return Srgb { r: l, g: l, b: l };
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Srgb {
        r: hue_to_channel(p, q, h + 1.0 / 3.0),
        g: hue_to_channel(p, q, h),
        b: hue_to_channel(p, q, h - 1.0 / 3.0),
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Converts sRGB to HSL.
pub fn srgb_to_hsl(c: Srgb) -> Hsl {
    let (r, g, b) = (clamp_unit(c.r), clamp_unit(c.g), clamp_unit(c.b));
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d < 1e-12 {
        return Hsl { h: 0.0, s: 0.0, l };
    }
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    Hsl {
        h: normalize_hue(h * 60.0),
        s,
        l,
    }
}

/// Bridges legacy HSL input into OKLCh via RGB and OKLab.
pub fn hsl_to_oklch(c: Hsl) -> OkLch {
    srgb_to_oklch(hsl_to_srgb(c))
}

/// Bridges OKLCh back to HSL through the 8-bit gamut.
pub fn oklch_to_hsl(c: OkLch) -> Hsl {
    srgb_to_hsl(oklch_to_srgb(c))
}

/// Perceptual distance between two OKLab colors.
///
/// A CIE94-style weighting evaluated on OKLab scaled by 100 (so L spans
/// 0–100): `sqrt(ΔL² + (ΔC/SC)² + (ΔH/SH)²)` with `SC = 1 + 0.045·C̄`,
/// `SH = 1 + 0.015·C̄`, and `ΔH² = Δa² + Δb² − ΔC²`. Score thresholds in the
/// analysis engine are calibrated to this formula, not to CIEDE2000.
pub fn delta_e(x: OkLab, y: OkLab) -> f64 {
    const SCALE: f64 = 100.0;
    let (l1, a1, b1) = (x.l * SCALE, x.a * SCALE, x.b * SCALE);
    let (l2, a2, b2) = (y.l * SCALE, y.a * SCALE, y.b * SCALE);

    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let mean_c = (c1 + c2) / 2.0;

    let dl = l1 - l2;
    let dc = c1 - c2;
    let da = a1 - a2;
    let db = b1 - b2;
    let dh_sq = (da * da + db * db - dc * dc).max(0.0);

    let sc = 1.0 + 0.045 * mean_c;
    let sh = 1.0 + 0.015 * mean_c;

    (dl * dl + (dc / sc).powi(2) + dh_sq / (sh * sh)).sqrt()
}

/// Normalizes a hue angle to [0, 360).
pub fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let n = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if n >= 360.0 {
        0.0
    } else {
        n
    }
}

/// Shortest angular distance between two hues, in [0, 180].
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let d = (h1 - h2).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    // -- sRGB <-> Linear --

    #[test]
    fn srgb_to_linear_black_is_zero_and_white_is_one() {
        let lin = srgb_to_linear(Srgb::from(Rgb8::BLACK));
        assert!(approx_eq(lin.r, 0.0) && approx_eq(lin.g, 0.0) && approx_eq(lin.b, 0.0));
        let lin = srgb_to_linear(Srgb::from(Rgb8::WHITE));
        assert!(approx_eq(lin.r, 1.0) && approx_eq(lin.g, 1.0) && approx_eq(lin.b, 1.0));
    }

    #[test]
    fn srgb_gamma_boundary_at_0_04045() {
        assert!(approx_eq(srgb_component_to_linear(0.04045), 0.04045 / 12.92));
        let expected = ((0.04046 + 0.055) / 1.055_f64).powf(2.4);
        assert!(approx_eq(srgb_component_to_linear(0.04046), expected));
    }

    #[test]
    fn linear_to_srgb_boundary_at_0_0031308() {
        let srgb = linear_to_srgb(LinearRgb {
            r: 0.0031308,
            g: 0.0,
            b: 0.0,
        });
        assert!(approx_eq(srgb.r, 0.0031308 * 12.92));
    }

    // -- OKLab / OKLCh --

    #[test]
    fn white_in_oklab_has_l_near_one_and_zero_chroma() {
        let lab = rgb_to_oklab(Rgb8::WHITE);
        assert!(approx_eq(lab.l, 1.0), "expected L~1.0, got {}", lab.l);
        assert!(lab.a.abs() < 1e-4, "expected a~0.0, got {}", lab.a);
        assert!(lab.b.abs() < 1e-4, "expected b~0.0, got {}", lab.b);
    }

    #[test]
    fn black_in_oklab_has_l_zero() {
        let lab = rgb_to_oklab(Rgb8::BLACK);
        assert!(approx_eq(lab.l, 0.0));
        assert!(approx_eq(lab.a, 0.0));
        assert!(approx_eq(lab.b, 0.0));
    }

    #[test]
    fn oklch_pure_red_has_hue_near_29_degrees() {
        let lch = oklab_to_oklch(rgb_to_oklab(Rgb8::new(255, 0, 0)));
        assert!((lch.h - 29.2).abs() < 1.0, "expected red hue ~29.2, got {}", lch.h);
        assert!(lch.c > 0.2);
    }

    #[test]
    fn oklch_nan_guard_zero_chroma_sets_hue_to_zero() {
        let lch = oklab_to_oklch(OkLab {
            l: 0.5,
            a: 0.0,
            b: 0.0,
        });
        assert_eq!(lch.h, 0.0);
        assert!(!lch.h.is_nan());
    }

    #[test]
    fn oklch_oklab_round_trip() {
        let original = OkLch {
            l: 0.7,
            c: 0.15,
            h: 250.0,
        };
        let back = oklab_to_oklch(oklch_to_oklab(original));
        assert!(approx_eq(back.l, original.l));
        assert!(approx_eq(back.c, original.c));
        assert!(approx_eq(back.h, original.h));
    }

    #[test]
    fn oklab_to_rgb_clamps_out_of_gamut() {
        let wild = OkLab {
            l: 0.9,
            a: 0.4,
            b: -0.4,
        };
        // any channel value is valid u8; the point is it must not panic or wrap
        let rgb = oklab_to_rgb(wild);
        assert!(rgb.r > 200, "expected saturated red channel, got {rgb:?}");
    }

    #[test]
    fn oklab_to_rgb_handles_nan() {
        let rgb = oklab_to_rgb(OkLab {
            l: f64::NAN,
            a: 0.0,
            b: 0.0,
        });
        assert_eq!(rgb, Rgb8::BLACK);
    }

    // -- HSL bridge --

    #[test]
    fn hsl_primary_red_round_trips_through_srgb() {
        let red = hsl_to_srgb(Hsl {
            h: 0.0,
            s: 1.0,
            l: 0.5,
        });
        assert_eq!(Rgb8::from(red), Rgb8::new(255, 0, 0));
        let hsl = srgb_to_hsl(red);
        assert!(approx_eq(hsl.h, 0.0) && approx_eq(hsl.s, 1.0) && approx_eq(hsl.l, 0.5));
    }

    #[test]
    fn hsl_to_oklch_and_back_preserves_color() {
        let original = Hsl {
            h: 210.0,
            s: 0.6,
            l: 0.4,
        };
        let back = oklch_to_hsl(hsl_to_oklch(original));
        assert!((back.h - original.h).abs() < 1.0, "h: {}", back.h);
        assert!((back.s - original.s).abs() < 0.01, "s: {}", back.s);
        assert!((back.l - original.l).abs() < 0.01, "l: {}", back.l);
    }

    #[test]
    fn gray_hsl_has_zero_saturation() {
        let hsl = srgb_to_hsl(Srgb::from(Rgb8::new(128, 128, 128)));
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.h, 0.0);
    }

    // -- Hex parsing --

    #[test]
    fn from_hex_accepts_with_and_without_hash() {
        assert_eq!(Rgb8::from_hex("#ff0000").unwrap(), Rgb8::new(255, 0, 0));
        assert_eq!(Rgb8::from_hex("00FF00").unwrap(), Rgb8::new(0, 255, 0));
    }

    #[test]
    fn from_hex_returns_error_for_invalid_hex() {
        assert!(Rgb8::from_hex("#gggggg").is_err());
        assert!(Rgb8::from_hex("#fff").is_err());
        assert!(Rgb8::from_hex("").is_err());
        assert!(Rgb8::from_hex("#ff00ff00").is_err());
        assert!(Rgb8::from_hex("#ééé").is_err());
    }

    #[test]
    fn malformed_hex_maps_to_neutral_fallback() {
        assert_eq!(parse_hex_or_neutral("not a color"), NEUTRAL_FALLBACK);
        assert_eq!(parse_hex_or_neutral("#123456"), Rgb8::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn to_hex_is_lowercase_and_padded() {
        assert_eq!(Rgb8::new(10, 0, 255).to_hex(), "#0a00ff");
    }

    #[test]
    fn srgb_to_hex_clamps_out_of_range() {
        let color = Srgb {
            r: 1.5,
            g: -0.1,
            b: 0.5,
        };
        assert_eq!(color.to_hex(), "#ff0080");
    }

    #[test]
    fn srgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Srgb::from(Rgb8::new(255, 0, 0))).unwrap();
        assert_eq!(json, "\"#ff0000\"");
        let result: Result<Srgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    // -- Distance --

    #[test]
    fn delta_e_is_zero_for_identical_colors() {
        let c = rgb_to_oklab(Rgb8::new(40, 120, 200));
        assert_eq!(delta_e(c, c), 0.0);
    }

    #[test]
    fn delta_e_black_white_is_one_hundred() {
        let d = delta_e(rgb_to_oklab(Rgb8::BLACK), rgb_to_oklab(Rgb8::WHITE));
        assert!((d - 100.0).abs() < 0.01, "got {d}");
    }

    #[test]
    fn delta_e_weights_chroma_down_at_high_chroma() {
        let a = OkLab {
            l: 0.6,
            a: 0.2,
            b: 0.0,
        };
        let b = OkLab {
            l: 0.6,
            a: 0.1,
            b: 0.0,
        };
        // pure ΔC of 10 units, divided by SC = 1 + 0.045 * 15
        let expected = 10.0 / (1.0 + 0.045 * 15.0);
        assert!((delta_e(a, b) - expected).abs() < 1e-9);
    }

    #[test]
    fn hue_distance_wraps_around() {
        assert!(approx_eq(hue_distance(350.0, 10.0), 20.0));
        assert!(approx_eq(hue_distance(0.0, 180.0), 180.0));
        assert!(approx_eq(hue_distance(90.0, 90.0), 0.0));
    }

    #[test]
    fn normalize_hue_handles_negative_and_non_finite() {
        assert!(approx_eq(normalize_hue(-30.0), 330.0));
        assert!(approx_eq(normalize_hue(720.0), 0.0));
        assert_eq!(normalize_hue(f64::NAN), 0.0);
        assert!(normalize_hue(-1e-20) < 360.0);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn rgb_oklab_round_trip_within_one_step(r: u8, g: u8, b: u8) {
                let original = Rgb8::new(r, g, b);
                let back = oklab_to_rgb(rgb_to_oklab(original));
                prop_assert!((i16::from(back.r) - i16::from(r)).abs() <= 1, "r: {back:?} vs {original:?}");
                prop_assert!((i16::from(back.g) - i16::from(g)).abs() <= 1, "g: {back:?} vs {original:?}");
                prop_assert!((i16::from(back.b) - i16::from(b)).abs() <= 1, "b: {back:?} vs {original:?}");
            }

            #[test]
            fn hex_round_trip_is_exact(r: u8, g: u8, b: u8) {
                let original = Rgb8::new(r, g, b);
                prop_assert_eq!(Rgb8::from_hex(&original.to_hex()).unwrap(), original);
            }

            #[test]
            fn oklch_hue_is_in_range_and_never_nan(
                l in 0.0_f64..=1.0,
                a in -0.5_f64..=0.5,
                b_val in -0.5_f64..=0.5,
            ) {
                let lch = oklab_to_oklch(OkLab { l, a, b: b_val });
                prop_assert!(!lch.h.is_nan());
                prop_assert!(lch.h >= 0.0 && lch.h < 360.0, "hue {} out of range", lch.h);
            }

            #[test]
            fn delta_e_is_symmetric_and_non_negative(
                r1: u8, g1: u8, b1: u8, r2: u8, g2: u8, b2: u8,
            ) {
                let x = rgb_to_oklab(Rgb8::new(r1, g1, b1));
                let y = rgb_to_oklab(Rgb8::new(r2, g2, b2));
                let d1 = delta_e(x, y);
                let d2 = delta_e(y, x);
                prop_assert!(d1 >= 0.0);
                prop_assert!((d1 - d2).abs() < 1e-9);
            }

            #[test]
            fn hue_distance_is_bounded(h1 in -720.0_f64..720.0, h2 in -720.0_f64..720.0) {
                let d = hue_distance(h1, h2);
                prop_assert!((0.0..=180.0).contains(&d), "distance {d}");
            }
        }
    }
}
