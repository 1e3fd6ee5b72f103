#![deny(unsafe_code)]
//! Palette optimizer.
//!
//! Remaps an externally curated palette into an OLED-safe scheme: every
//! source role is converted to OKLCh, its lightness capped by the risk tier
//! (with chroma compensation when it had to be darkened) and its chroma capped
//! at the tier's role ceiling scaled by `preserve_saturation`. The ANSI 16 are
//! built from eight role swatches plus a brightened copy of each, and the
//! background is forced to pure black.

use oledscheme_core::color::{hex_to_oklch, normalize_hue, OkLch};
use oledscheme_core::params::param_key;
use oledscheme_core::risk::{lift_for_contrast, render_within_cap, RiskProfile, RiskTier, RoleClass};
use oledscheme_core::scheme::{ColorScheme, CoreColors, TerminalColors, ANSI_COUNT, BACKGROUND_HEX};
use oledscheme_core::{Role, RoleMap, SchemeError, SchemeGenerator, SourcePalette};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default share of the tier's chroma ceiling a color may use.
pub const DEFAULT_PRESERVE_SATURATION: f64 = 0.85;
/// Default weight of the source lightness against a uniform dim-down.
pub const DEFAULT_PRESERVE_BRIGHTNESS: f64 = 0.9;
/// Default pull of each color toward its role's lightness cap.
pub const DEFAULT_CONTRAST_BOOST: f64 = 0.2;

/// Lightness added to each dark ANSI swatch to get its bright twin.
const BRIGHT_DELTA: f64 = 0.12;
/// Selection background: a dim, desaturated accent tint.
const SELECTION_LIGHTNESS: f64 = 0.22;
const SELECTION_CHROMA_SCALE: f64 = 0.35;
/// `color0`: near-black tinted with the accent hue.
const ANSI_BLACK_LIGHTNESS: f64 = 0.18;
const ANSI_BLACK_CHROMA: f64 = 0.02;
/// `color7`: the foreground dimmed to sit under it.
const ANSI_WHITE_SCALE: f64 = 0.85;

/// Source roles feeding `color1..=color6`, in ANSI order (red, green, yellow,
/// blue, magenta, cyan).
const ANSI_ROLES: [Role; 6] = [
    Role::Error,
    Role::Success,
    Role::Warning,
    Role::Info,
    Role::Magenta,
    Role::Cyan,
];

/// Options for one optimization run. Every field is optional in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizeOptions {
    pub risk_tier: RiskTier,
    /// Share of the role's chroma ceiling colors may keep, in [0, 1].
    pub preserve_saturation: f64,
    /// 1 keeps source lightness (under the cap); 0 dims everything by a quarter.
    pub preserve_brightness: f64,
    /// Pull toward the role's lightness cap, in [0, 1].
    pub contrast_boost: f64,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            risk_tier: RiskTier::default(),
            preserve_saturation: DEFAULT_PRESERVE_SATURATION,
            preserve_brightness: DEFAULT_PRESERVE_BRIGHTNESS,
            contrast_boost: DEFAULT_CONTRAST_BOOST,
        }
    }
}

impl OptimizeOptions {
    /// Creates options, clamping every factor into [0, 1] (NaN becomes 0).
    pub fn new(
        risk_tier: RiskTier,
        preserve_saturation: f64,
        preserve_brightness: f64,
        contrast_boost: f64,
    ) -> Self {
        Self {
            risk_tier,
            preserve_saturation,
            preserve_brightness,
            contrast_boost,
        }
        .clamped()
    }

    /// Builds options from a loosely typed JSON object. Keys may be snake_case
    /// or camelCase; missing or mistyped keys keep their defaults and an
    /// unknown tier falls back to `balanced`.
    pub fn from_json(params: &Value) -> Self {
        let defaults = Self::default();
        let factor = |snake: &str, camel: &str, default: f64| {
            param_key(params, snake, camel)
                .and_then(Value::as_f64)
                .unwrap_or(default)
        };
        let risk_tier = match param_key(params, "risk_tier", "riskTier").and_then(Value::as_str) {
            Some(name) => name.parse().unwrap_or_else(|_| {
                tracing::warn!(tier = name, "unknown risk tier, using balanced");
                RiskTier::default()
            }),
            None => defaults.risk_tier,
        };
        Self::new(
            risk_tier,
            factor("preserve_saturation", "preserveSaturation", defaults.preserve_saturation),
            factor("preserve_brightness", "preserveBrightness", defaults.preserve_brightness),
            factor("contrast_boost", "contrastBoost", defaults.contrast_boost),
        )
    }

    /// Copy with every factor clamped into [0, 1].
    pub fn clamped(self) -> Self {
        Self {
            preserve_saturation: unit(self.preserve_saturation),
            preserve_brightness: unit(self.preserve_brightness),
            contrast_boost: unit(self.contrast_boost),
            ..self
        }
    }
}

fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

/// Remaps one source color into `class` under `profile`.
///
/// The tier's constraint step caps lightness (compensating chroma when it
/// darkened the color) and chroma; brightness preservation and the contrast
/// boost then move lightness within `[0, cap]`.
pub fn remap_color(
    profile: &RiskProfile,
    class: RoleClass,
    source: OkLch,
    options: &OptimizeOptions,
) -> OkLch {
    let constrained = profile.constrain(class, source, options.preserve_saturation);
    let cap = profile.lightness_cap(class);
    let dimmed = constrained.l * (0.75 + 0.25 * options.preserve_brightness);
    let l = dimmed + (cap - dimmed).max(0.0) * options.contrast_boost;
    OkLch {
        l: l.min(cap),
        ..constrained
    }
}

/// Role class whose caps govern a source role in the UI slots.
fn class_of(role: Role) -> RoleClass {
    match role {
        Role::Foreground => RoleClass::Foreground,
        Role::Accent => RoleClass::Accent,
        Role::AccentBright => RoleClass::BrightAccent,
        _ => RoleClass::DarkColors,
    }
}

/// Optimizer bound to one source palette and one set of options.
#[derive(Debug, Clone)]
pub struct Optimizer {
    palette: SourcePalette,
    options: OptimizeOptions,
}

impl Optimizer {
    /// Looks `palette_id` up in the registry.
    ///
    /// Returns `SchemeError::PaletteNotFound` for unknown ids.
    pub fn new(palette_id: &str, options: OptimizeOptions) -> Result<Self, SchemeError> {
        let palette = SourcePalette::find(palette_id)?;
        Ok(Self::from_source(palette.clone(), options))
    }

    /// Uses a caller-supplied palette instead of a registry entry.
    pub fn from_source(palette: SourcePalette, options: OptimizeOptions) -> Self {
        Self {
            palette,
            options: options.clamped(),
        }
    }

    /// Reads `palette` (or `palette_id` / `paletteId`) plus the option keys
    /// from a JSON object.
    pub fn from_json(params: &Value) -> Result<Self, SchemeError> {
        let id = params
            .get("palette")
            .or_else(|| param_key(params, "palette_id", "paletteId"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        Self::new(id, OptimizeOptions::from_json(params))
    }

    pub fn palette(&self) -> &SourcePalette {
        &self.palette
    }

    pub fn options(&self) -> &OptimizeOptions {
        &self.options
    }

    /// Builds the optimized scheme. Malformed source hex degrades to the
    /// neutral fallback; this never fails.
    pub fn optimize(&self) -> ColorScheme {
        let options = &self.options;
        let profile = options.risk_tier.profile();
        let source: RoleMap<OkLch> = self.palette.roles.map(|_, hex| hex_to_oklch(hex));

        let remapped = source.map(|role, lch| {
            let class = class_of(role);
            let out = remap_color(profile, class, *lch, options);
            tracing::trace!(role = %role, l = out.l, c = out.c, h = out.h, "role remapped");
            out
        });

        let text = |role: Role| {
            let class = class_of(role);
            let cap = profile.lightness_cap(class);
            let lifted = lift_for_contrast(remapped[role], cap, profile.min_contrast);
            render_within_cap(lifted, cap).to_hex()
        };

        let accent = remapped[Role::Accent];
        let dark_cap = profile.lightness_cap(RoleClass::DarkColors);
        let selection = OkLch {
            l: SELECTION_LIGHTNESS.min(dark_cap),
            c: accent.c * SELECTION_CHROMA_SCALE,
            h: accent.h,
        };

        let foreground = text(Role::Foreground);
        let terminal = self.ansi(profile, &source, &remapped);

        let scheme = ColorScheme {
            name: format!("{} OLED", self.palette.name),
            description: format!(
                "{} remapped for the {} OLED profile",
                self.palette.description, options.risk_tier
            ),
            seed: self.palette.id.to_string(),
            style: "optimized".to_string(),
            hue: whole_degrees(accent.h),
            risk_tier: options.risk_tier,
            created_at: None,
            core: CoreColors {
                background: BACKGROUND_HEX.to_string(),
                selection_fg: foreground.clone(),
                foreground,
                accent: text(Role::Accent),
                accent_bright: text(Role::AccentBright),
                cursor: text(Role::Accent),
                selection_bg: render_within_cap(selection, dark_cap).to_hex(),
            },
            terminal,
        };

        tracing::debug!(
            palette = self.palette.id,
            hue = scheme.hue,
            tier = %scheme.risk_tier,
            "optimized palette"
        );
        scheme
    }

    /// Eight dark swatches (`color0..=7`) from the role colors, each with a
    /// brightened twin (`color8..=15`).
    fn ansi(
        &self,
        profile: &RiskProfile,
        source: &RoleMap<OkLch>,
        remapped: &RoleMap<OkLch>,
    ) -> TerminalColors {
        let options = &self.options;
        let accent = remapped[Role::Accent];
        let fg = source[Role::Foreground];

        let mut swatches = [OkLch {
            l: ANSI_BLACK_LIGHTNESS,
            c: ANSI_BLACK_CHROMA,
            h: accent.h,
        }; 8];
        for (slot, role) in ANSI_ROLES.into_iter().enumerate() {
            swatches[slot + 1] = source[role];
        }
        swatches[7] = OkLch {
            l: fg.l * ANSI_WHITE_SCALE,
            ..fg
        };

        let dark_cap = profile.lightness_cap(RoleClass::DarkColors);
        let bright_cap = profile.lightness_cap(RoleClass::BrightColors);
        let mut colors: [String; ANSI_COUNT] = Default::default();
        for (i, swatch) in swatches.into_iter().enumerate() {
            let dark = remap_color(profile, RoleClass::DarkColors, swatch, options);
            let bright = profile.constrain(
                RoleClass::BrightColors,
                OkLch {
                    l: (dark.l + BRIGHT_DELTA).min(bright_cap),
                    ..dark
                },
                options.preserve_saturation,
            );
            colors[i] = render_within_cap(dark, dark_cap).to_hex();
            colors[i + 8] = render_within_cap(bright, bright_cap).to_hex();
        }
        TerminalColors { colors }
    }
}

fn whole_degrees(h: f64) -> u16 {
    let whole = normalize_hue(h).round();
    if whole >= 360.0 {
        0
    } else {
        whole as u16
    }
}

impl SchemeGenerator for Optimizer {
    fn generate(&self) -> Result<ColorScheme, SchemeError> {
        Ok(self.optimize())
    }

    fn params(&self) -> Value {
        json!({
            "palette": self.palette.id,
            "risk_tier": self.options.risk_tier.as_str(),
            "preserve_saturation": self.options.preserve_saturation,
            "preserve_brightness": self.options.preserve_brightness,
            "contrast_boost": self.options.contrast_boost,
        })
    }

    fn param_schema(&self) -> Value {
        let tiers: Vec<&str> = RiskTier::ALL.iter().map(|t| t.as_str()).collect();
        json!({
            "palette": {
                "type": "string",
                "enum": SourcePalette::list_ids(),
                "description": "Id of a registered source palette"
            },
            "risk_tier": {
                "type": "string",
                "default": RiskTier::Balanced.as_str(),
                "enum": tiers,
                "description": "OLED burn-in risk tier"
            },
            "preserve_saturation": {
                "type": "number",
                "default": DEFAULT_PRESERVE_SATURATION,
                "min": 0.0,
                "max": 1.0,
                "description": "Share of the tier's chroma ceiling colors may keep"
            },
            "preserve_brightness": {
                "type": "number",
                "default": DEFAULT_PRESERVE_BRIGHTNESS,
                "min": 0.0,
                "max": 1.0,
                "description": "How closely lightness follows the source under the cap"
            },
            "contrast_boost": {
                "type": "number",
                "default": DEFAULT_CONTRAST_BOOST,
                "min": 0.0,
                "max": 1.0,
                "description": "Pull toward the role's lightness cap"
            }
        })
    }
}

/// Optimizes a registered palette.
///
/// Returns `SchemeError::PaletteNotFound` when `palette_id` is unknown; no
/// partial scheme is produced.
pub fn optimize_palette(
    palette_id: &str,
    options: &OptimizeOptions,
) -> Result<ColorScheme, SchemeError> {
    Ok(Optimizer::new(palette_id, *options)?.optimize())
}

/// Optimizes a caller-supplied palette.
pub fn optimize_source(palette: &SourcePalette, options: &OptimizeOptions) -> ColorScheme {
    Optimizer::from_source(palette.clone(), *options).optimize()
}
