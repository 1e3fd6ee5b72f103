#![deny(unsafe_code)]
//! Palette synthesizer.
//!
//! Builds a complete 23-slot OLED scheme from a base hue, a harmony style, a
//! seed string and a risk tier:
//!
//! 1. the style's six harmony descriptors place one hue per swatch slot, and
//!    are cycled over eight slots for each ANSI spectrum;
//! 2. every slot gets a target OKLCh from its role (or ANSI index) shifted by
//!    the descriptor's lightness offset and chroma multiplier;
//! 3. the risk tier caps lightness, boosting chroma by the tier's
//!    compensation factor whenever lightness was lowered;
//! 4. a seeded jitter perturbs hue, lightness and chroma, scaled inversely to
//!    the descriptor's harmony strength, then the caps are re-applied;
//! 5. text roles are lifted toward the tier's contrast floor and every color
//!    is rendered so its measured lightness honors the cap.
//!
//! The background is always `#000000`.

use chrono::Utc;
use oledscheme_core::color::{normalize_hue, OkLch, Rgb8};
use oledscheme_core::harmony::{derive_descriptors, HarmonyDescriptor, HarmonyStyle, SLOT_COUNT};
use oledscheme_core::prng::SeededRng;
use oledscheme_core::risk::{lift_for_contrast, render_within_cap, RiskProfile, RiskTier, RoleClass};
use oledscheme_core::scheme::{ColorScheme, CoreColors, TerminalColors, ANSI_COUNT, BACKGROUND_HEX};
use oledscheme_core::{SchemeError, SchemeGenerator, SchemeRecipe};
use serde_json::{json, Value};

/// Target lightness and chroma of a UI role before harmony offsets and caps.
#[derive(Debug, Clone, Copy)]
struct RoleTarget {
    class: RoleClass,
    lightness: f64,
    chroma: f64,
}

const FOREGROUND: RoleTarget = RoleTarget {
    class: RoleClass::Foreground,
    lightness: 0.92,
    chroma: 0.035,
};
const ACCENT: RoleTarget = RoleTarget {
    class: RoleClass::Accent,
    lightness: 0.74,
    chroma: 0.17,
};
const ACCENT_BRIGHT: RoleTarget = RoleTarget {
    class: RoleClass::BrightAccent,
    lightness: 0.82,
    chroma: 0.19,
};
const CURSOR: RoleTarget = RoleTarget {
    class: RoleClass::Accent,
    lightness: 0.78,
    chroma: 0.16,
};
const SELECTION: RoleTarget = RoleTarget {
    class: RoleClass::DarkColors,
    lightness: 0.24,
    chroma: 0.05,
};

/// Harmonic hues per ANSI spectrum.
const SPECTRUM_LEN: usize = 8;
/// Extra rotation for hues reused when six descriptors cover eight slots.
const CYCLE_SHIFT: f64 = 45.0;
/// ANSI slots take half of a descriptor's lightness offset.
const ANSI_OFFSET_SCALE: f64 = 0.5;

// Per-index targets. Index 0 is the near-black slot and index 7 the
// near-white slot, hence the low chroma at both ends.
const DARK_LIGHTNESS: [f64; SPECTRUM_LEN] = [0.22, 0.50, 0.52, 0.55, 0.50, 0.52, 0.55, 0.72];
const DARK_CHROMA: [f64; SPECTRUM_LEN] = [0.02, 0.14, 0.13, 0.12, 0.13, 0.14, 0.12, 0.02];
const BRIGHT_LIGHTNESS: [f64; SPECTRUM_LEN] = [0.40, 0.66, 0.68, 0.72, 0.66, 0.68, 0.72, 0.88];
const BRIGHT_CHROMA: [f64; SPECTRUM_LEN] = [0.025, 0.17, 0.16, 0.15, 0.16, 0.17, 0.15, 0.03];

// Jitter magnitude = MIN + SPAN * (1 - harmony_strength).
const HUE_JITTER_MIN: f64 = 1.5;
const HUE_JITTER_SPAN: f64 = 24.0;
const LIGHTNESS_JITTER_MIN: f64 = 0.008;
const LIGHTNESS_JITTER_SPAN: f64 = 0.08;
const CHROMA_JITTER_MIN: f64 = 0.04;
const CHROMA_JITTER_SPAN: f64 = 0.3;

const RANDOM_ADJECTIVES: [&str; 12] = [
    "Silent", "Deep", "Hollow", "Velvet", "Distant", "Frozen", "Quiet", "Ember", "Lunar", "Abyssal",
    "Faint", "Eternal",
];
const RANDOM_NOUNS: [&str; 12] = [
    "Singularity", "Eclipse", "Nebula", "Horizon", "Void", "Orbit", "Aurora", "Umbra", "Pulsar",
    "Tide", "Comet", "Meridian",
];

/// Seeded perturbation of one slot.
#[derive(Debug, Clone, Copy)]
struct Jitter {
    hue: f64,
    lightness: f64,
    chroma_scale: f64,
}

impl Jitter {
    /// Draws hue, lightness and chroma perturbations, in that order.
    fn draw(rng: &mut SeededRng, harmony_strength: f64) -> Self {
        let looseness = 1.0 - harmony_strength.clamp(0.0, 1.0);
        Self {
            hue: rng.jitter(HUE_JITTER_MIN + HUE_JITTER_SPAN * looseness),
            lightness: rng.jitter(LIGHTNESS_JITTER_MIN + LIGHTNESS_JITTER_SPAN * looseness),
            chroma_scale: 1.0 + rng.jitter(CHROMA_JITTER_MIN + CHROMA_JITTER_SPAN * looseness),
        }
    }

    fn apply(self, lch: OkLch) -> OkLch {
        OkLch {
            l: (lch.l + self.lightness).clamp(0.0, 1.0),
            c: (lch.c * self.chroma_scale).max(0.0),
            h: normalize_hue(lch.h + self.hue),
        }
    }
}

/// Caps, jitters, then re-caps a target color for `class`.
fn shape(profile: &RiskProfile, class: RoleClass, target: OkLch, jitter: Jitter) -> OkLch {
    let capped = profile.constrain(class, target, 1.0);
    let moved = jitter.apply(capped);
    OkLch {
        l: moved.l.min(profile.lightness_cap(class)),
        c: moved.c.min(profile.chroma_cap(class)),
        h: moved.h,
    }
}

/// Palette synthesizer for one [`SchemeRecipe`].
#[derive(Debug, Clone)]
pub struct Synthesizer {
    recipe: SchemeRecipe,
}

impl Synthesizer {
    /// Creates a synthesizer; the recipe's hue is wrapped into [0, 360) and
    /// rounded to whole degrees.
    pub fn new(recipe: SchemeRecipe) -> Self {
        Self {
            recipe: recipe.normalized(),
        }
    }

    /// Creates a synthesizer from a JSON params object, falling back to
    /// defaults for missing keys.
    pub fn from_json(params: &Value) -> Self {
        Self::new(SchemeRecipe::from_json(params))
    }

    pub fn recipe(&self) -> &SchemeRecipe {
        &self.recipe
    }

    /// Builds the scheme. Total and deterministic: equal recipes give equal schemes.
    pub fn synthesize(&self) -> ColorScheme {
        let recipe = &self.recipe;
        let style = recipe.harmony_style();
        if style.is_none() {
            tracing::warn!(style = %recipe.style, "unknown harmony style, using flat descriptors");
        }
        let descriptors = derive_descriptors(style);
        let profile = recipe.risk_tier.profile();
        let base_hue = recipe.base_hue;
        let mut rng = SeededRng::new(&recipe.seed);

        let foreground = role_color(profile, FOREGROUND, &descriptors[0], base_hue, &mut rng, true);
        let accent = role_color(profile, ACCENT, &descriptors[1], base_hue, &mut rng, true);
        let accent_bright =
            role_color(profile, ACCENT_BRIGHT, &descriptors[2], base_hue, &mut rng, true);
        let cursor = role_color(profile, CURSOR, &descriptors[3], base_hue, &mut rng, true);
        let selection_bg = role_color(profile, SELECTION, &descriptors[4], base_hue, &mut rng, false);

        let terminal = ansi_spectrum(profile, descriptors, base_hue, &mut rng);

        let foreground = foreground.to_hex();
        let scheme = ColorScheme {
            name: recipe.name.clone(),
            description: describe(style, base_hue, recipe.risk_tier),
            seed: recipe.seed.clone(),
            style: recipe.style.clone(),
            hue: base_hue as u16,
            risk_tier: recipe.risk_tier,
            created_at: None,
            core: CoreColors {
                background: BACKGROUND_HEX.to_string(),
                selection_fg: foreground.clone(),
                foreground,
                accent: accent.to_hex(),
                accent_bright: accent_bright.to_hex(),
                cursor: cursor.to_hex(),
                selection_bg: selection_bg.to_hex(),
            },
            terminal,
        };

        tracing::debug!(
            name = %scheme.name,
            hue = scheme.hue,
            style = %scheme.style,
            tier = %scheme.risk_tier,
            "synthesized scheme"
        );
        scheme
    }
}

/// One UI role: target → caps → jitter → (contrast lift) → capped render.
fn role_color(
    profile: &RiskProfile,
    target: RoleTarget,
    descriptor: &HarmonyDescriptor,
    base_hue: f64,
    rng: &mut SeededRng,
    lift: bool,
) -> Rgb8 {
    let lch = OkLch {
        l: target.lightness + descriptor.lightness_offset,
        c: target.chroma * descriptor.chroma_multiplier,
        h: descriptor.hue_for(base_hue),
    };
    let jitter = Jitter::draw(rng, descriptor.harmony_strength);
    let cap = profile.lightness_cap(target.class);
    let shaped = shape(profile, target.class, lch, jitter);
    let shaped = if lift {
        lift_for_contrast(shaped, cap, profile.min_contrast)
    } else {
        shaped
    };
    tracing::trace!(class = ?target.class, l = shaped.l, c = shaped.c, h = shaped.h, "role shaped");
    render_within_cap(shaped, cap)
}

/// Eight harmonic hues rendered twice: dark (`color0..=7`) and bright (`color8..=15`).
fn ansi_spectrum(
    profile: &RiskProfile,
    descriptors: &[HarmonyDescriptor; SLOT_COUNT],
    base_hue: f64,
    rng: &mut SeededRng,
) -> TerminalColors {
    let mut colors: [String; ANSI_COUNT] = Default::default();
    let dark_cap = profile.lightness_cap(RoleClass::DarkColors);
    let bright_cap = profile.lightness_cap(RoleClass::BrightColors);

    for i in 0..SPECTRUM_LEN {
        let descriptor = &descriptors[i % SLOT_COUNT];
        let cycle = (i / SLOT_COUNT) as f64;
        let hue = normalize_hue(descriptor.hue_for(base_hue) + cycle * CYCLE_SHIFT);
        let offset = descriptor.lightness_offset * ANSI_OFFSET_SCALE;
        // shared so both spectra keep the same hue set
        let jitter = Jitter::draw(rng, descriptor.harmony_strength);

        let dark = OkLch {
            l: DARK_LIGHTNESS[i] + offset,
            c: DARK_CHROMA[i] * descriptor.chroma_multiplier,
            h: hue,
        };
        let bright = OkLch {
            l: BRIGHT_LIGHTNESS[i] + offset,
            c: BRIGHT_CHROMA[i] * descriptor.chroma_multiplier,
            h: hue,
        };

        let dark = shape(profile, RoleClass::DarkColors, dark, jitter);
        let bright = shape(profile, RoleClass::BrightColors, bright, jitter);
        colors[i] = render_within_cap(dark, dark_cap).to_hex();
        colors[i + SPECTRUM_LEN] = render_within_cap(bright, bright_cap).to_hex();
    }

    TerminalColors { colors }
}

fn describe(style: Option<HarmonyStyle>, base_hue: f64, tier: RiskTier) -> String {
    let style = style.map_or("flat", HarmonyStyle::as_str);
    format!("{style} harmony around {base_hue:.0}° tuned for the {tier} OLED profile")
}

impl SchemeGenerator for Synthesizer {
    fn generate(&self) -> Result<ColorScheme, SchemeError> {
        self.recipe.validate()?;
        Ok(self.synthesize())
    }

    fn params(&self) -> Value {
        json!({
            "base_hue": self.recipe.base_hue,
            "style": self.recipe.style,
            "seed": self.recipe.seed,
            "name": self.recipe.name,
            "risk_tier": self.recipe.risk_tier.as_str(),
        })
    }

    fn param_schema(&self) -> Value {
        let styles: Vec<&str> = HarmonyStyle::ALL.iter().map(|s| s.as_str()).collect();
        let tiers: Vec<&str> = RiskTier::ALL.iter().map(|t| t.as_str()).collect();
        json!({
            "base_hue": {
                "type": "number",
                "default": 0.0,
                "min": 0.0,
                "max": 359.0,
                "description": "Base hue in degrees; wrapped into [0, 360)"
            },
            "style": {
                "type": "string",
                "default": HarmonyStyle::Monochrome.as_str(),
                "enum": styles,
                "description": "Harmony style; unknown names use flat descriptors"
            },
            "seed": {
                "type": "string",
                "default": "oled",
                "description": "Seed string for reproducible jitter"
            },
            "name": {
                "type": "string",
                "default": "Untitled",
                "description": "Display name of the scheme"
            },
            "risk_tier": {
                "type": "string",
                "default": RiskTier::Balanced.as_str(),
                "enum": tiers,
                "description": "OLED burn-in risk tier"
            }
        })
    }
}

/// Synthesizes a scheme from explicit inputs.
///
/// `style` is matched leniently; unknown names synthesize with flat
/// descriptors rather than failing.
pub fn synthesize(
    base_hue: f64,
    style: &str,
    seed: &str,
    name: &str,
    risk_tier: RiskTier,
) -> ColorScheme {
    let recipe = SchemeRecipe {
        base_hue,
        style: style.to_string(),
        seed: seed.to_string(),
        name: name.to_string(),
        risk_tier,
    };
    Synthesizer::new(recipe).synthesize()
}

/// Synthesizes a scheme with hue, style, seed and name drawn from `rng`,
/// on the `balanced` tier.
pub fn synthesize_random_with(rng: &mut SeededRng) -> ColorScheme {
    let base_hue = (rng.next_f64() * 360.0).floor();
    let style = *rng.pick(&HarmonyStyle::ALL);
    let adjective = *rng.pick(&RANDOM_ADJECTIVES);
    let noun = *rng.pick(&RANDOM_NOUNS);
    let seed = format!("{}-{:04}", noun.to_ascii_lowercase(), rng.next_usize(10_000));
    let name = format!("{adjective} {noun}");
    synthesize(base_hue, style.as_str(), &seed, &name, RiskTier::Balanced)
}

/// Synthesizes a random scheme seeded from the clock and stamps it with the
/// current time.
pub fn synthesize_random() -> ColorScheme {
    let now = Utc::now();
    let mut rng = SeededRng::new(&now.timestamp_millis().to_string());
    synthesize_random_with(&mut rng).stamped(now)
}
