//! Pure-computation swatch rendering of a [`ColorScheme`].
//!
//! This module is always available (no feature gate) so that both the `png`
//! preview path and the WASM `ImageData` path can share the same layout.
//!
//! The preview is a grid of square swatches, eight columns by three rows:
//! the seven core slots (padded with the background), then `color0..=7`,
//! then `color8..=15`.

use oledscheme_core::color::parse_hex_or_neutral;
use oledscheme_core::scheme::ColorScheme;

/// Swatches per row.
pub const COLUMNS: usize = 8;
/// Rows: core, dark ANSI, bright ANSI.
pub const ROWS: usize = 3;
/// Largest accepted swatch edge in pixels.
pub const MAX_SWATCH: usize = 256;

/// Pixel size `(width, height)` of a preview with `swatch`-pixel cells.
/// `swatch` is clamped into `[1, MAX_SWATCH]`.
pub fn preview_size(swatch: usize) -> (usize, usize) {
    let s = swatch.clamp(1, MAX_SWATCH);
    (COLUMNS * s, ROWS * s)
}

/// Hex literals in grid order, row-major.
fn grid(scheme: &ColorScheme) -> [&str; COLUMNS * ROWS] {
    let all = scheme.all_colors();
    // all_colors: background, six core roles, then the 16 ANSI slots
    std::array::from_fn(|i| match i {
        0..=5 => all[i + 1],
        6 | 7 => all[0],
        _ => all[i - COLUMNS + 7],
    })
}

/// Renders the scheme as an RGBA8 buffer of `preview_size(swatch)` pixels.
/// Malformed hex reads as the neutral fallback.
pub fn scheme_to_rgba(scheme: &ColorScheme, swatch: usize) -> Vec<u8> {
    let s = swatch.clamp(1, MAX_SWATCH);
    let (width, height) = preview_size(s);
    let cells = grid(scheme).map(parse_hex_or_neutral);
    let mut buf = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let c = cells[(y / s) * COLUMNS + x / s];
            buf.extend_from_slice(&[c.r, c.g, c.b, 255]);
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use oledscheme_core::risk::RiskTier;

    fn scheme() -> ColorScheme {
        oledscheme_synth::synthesize(200.0, "triadic", "pixels", "Pixels", RiskTier::Balanced)
    }

    fn pixel(buf: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
        let i = (y * width + x) * 4;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    }

    fn rgba(hex: &str) -> [u8; 4] {
        let c = parse_hex_or_neutral(hex);
        [c.r, c.g, c.b, 255]
    }

    #[test]
    fn buffer_has_expected_length() {
        let buf = scheme_to_rgba(&scheme(), 4);
        assert_eq!(buf.len(), 8 * 4 * 3 * 4 * 4);
        assert_eq!(preview_size(4), (32, 12));
    }

    #[test]
    fn alpha_always_255() {
        let buf = scheme_to_rgba(&scheme(), 2);
        for (i, &byte) in buf.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 255, "alpha at pixel {} should be 255", i / 4);
            }
        }
    }

    #[test]
    fn cells_follow_slot_layout() {
        let s = scheme();
        let buf = scheme_to_rgba(&s, 3);
        let (width, _) = preview_size(3);
        assert_eq!(pixel(&buf, width, 0, 0), rgba(&s.core.foreground));
        assert_eq!(pixel(&buf, width, 3, 0), rgba(&s.core.accent));
        assert_eq!(pixel(&buf, width, 6 * 3, 0), rgba(&s.core.background));
        assert_eq!(pixel(&buf, width, 5 * 3 + 1, 2), rgba(&s.core.selection_fg));
        assert_eq!(pixel(&buf, width, 0, 3), rgba(&s.terminal.colors[0]));
        assert_eq!(pixel(&buf, width, 7 * 3, 5), rgba(&s.terminal.colors[7]));
        assert_eq!(pixel(&buf, width, 2 * 3, 6), rgba(&s.terminal.colors[10]));
        assert_eq!(pixel(&buf, width, 7 * 3 + 2, 8), rgba(&s.terminal.colors[15]));
    }

    #[test]
    fn zero_swatch_is_clamped_to_one_pixel() {
        let buf = scheme_to_rgba(&scheme(), 0);
        assert_eq!(buf.len(), COLUMNS * ROWS * 4);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn buffer_length_matches_preview_size(swatch in 0usize..40) {
                let (width, height) = preview_size(swatch);
                let buf = scheme_to_rgba(&scheme(), swatch);
                prop_assert_eq!(buf.len(), width * height * 4);
            }

            #[test]
            fn oversized_swatch_is_capped(swatch in MAX_SWATCH..MAX_SWATCH * 4) {
                prop_assert_eq!(preview_size(swatch), preview_size(MAX_SWATCH));
            }
        }
    }
}
