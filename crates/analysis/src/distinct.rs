//! Distinctiveness: how easily a scheme's colors can be told apart.

use oledscheme_core::color::{delta_e, parse_hex_or_neutral, rgb_to_oklab, OkLab};
use oledscheme_core::scheme::ColorScheme;

/// Mean pairwise ΔE at which a UI palette reads as well separated.
pub const TARGET_DELTA_E: f64 = 10.0;
/// Pairs closer than this count as indistinguishable.
pub const MIN_SEPARATION: f64 = 2.0;
/// Above this mean ΔE the palette starts to look disjointed.
const DISJOINT_DELTA_E: f64 = 40.0;
const DISJOINT_DECAY: f64 = 0.5;

/// Pairwise ΔE summary of a color set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairStats {
    pub mean: f64,
    /// Fraction of pairs closer than [`MIN_SEPARATION`].
    pub close_fraction: f64,
}

/// `None` with fewer than two colors.
pub fn pair_stats(colors: &[OkLab]) -> Option<PairStats> {
    if colors.len() < 2 {
        return None;
    }
    let mut total = 0.0;
    let mut close = 0usize;
    let mut pairs = 0usize;
    for (i, &a) in colors.iter().enumerate() {
        for &b in &colors[i + 1..] {
            let d = delta_e(a, b);
            total += d;
            if d < MIN_SEPARATION {
                close += 1;
            }
            pairs += 1;
        }
    }
    Some(PairStats {
        mean: total / pairs as f64,
        close_fraction: close as f64 / pairs as f64,
    })
}

/// Scores 0–100 over the non-background colors.
///
/// The mean ΔE ramps linearly up to [`TARGET_DELTA_E`], holds at 100, and
/// decays gently past a disjoint threshold. The result is scaled by the share
/// of pairs that are at least [`MIN_SEPARATION`] apart.
pub fn distinctiveness_score(scheme: &ColorScheme) -> f64 {
    let labs: Vec<OkLab> = scheme
        .non_background_colors()
        .into_iter()
        .map(|hex| rgb_to_oklab(parse_hex_or_neutral(hex)))
        .collect();
    let Some(stats) = pair_stats(&labs) else {
        return 0.0;
    };
    let base = if stats.mean < TARGET_DELTA_E {
        100.0 * stats.mean / TARGET_DELTA_E
    } else if stats.mean > DISJOINT_DELTA_E {
        100.0 - DISJOINT_DECAY * (stats.mean - DISJOINT_DELTA_E)
    } else {
        100.0
    };
    (base * (1.0 - stats.close_fraction)).clamp(0.0, 100.0)
}
