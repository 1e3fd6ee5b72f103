//! PNG rendering of a scheme preview.
//!
//! This module is feature-gated behind `png` (default on) so that WASM builds
//! can depend on the `generators` crate without pulling in the `image` crate.
//! The swatch layout itself lives in [`crate::pixel`] (always available).

use oledscheme_core::scheme::ColorScheme;
use oledscheme_core::SchemeError;
use std::path::Path;

use crate::pixel::{preview_size, scheme_to_rgba};

/// Writes the scheme's swatch grid as a PNG image.
///
/// Returns `SchemeError::Io` on write failure.
pub fn write_png(scheme: &ColorScheme, swatch: usize, path: &Path) -> Result<(), SchemeError> {
    let rgba = scheme_to_rgba(scheme, swatch);
    let (width, height) = preview_size(swatch);
    let w = u32::try_from(width).map_err(|_| SchemeError::Io("preview too wide".into()))?;
    let h = u32::try_from(height).map_err(|_| SchemeError::Io("preview too tall".into()))?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SchemeError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SchemeError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oledscheme_core::risk::RiskTier;

    #[test]
    fn write_png_round_trip() {
        let scheme =
            oledscheme_synth::synthesize(180.0, "monochrome", "singularity", "Singularity", RiskTier::Balanced);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");

        write_png(&scheme, 16, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 128);
        assert_eq!(img.height(), 48);
        // the padding cell at the end of the core row is the background
        assert_eq!(img.get_pixel(127, 0).0, [0, 0, 0, 255]);
    }

    #[test]
    fn write_png_reports_io_errors() {
        let scheme = oledscheme_synth::synthesize(0.0, "spectral", "x", "X", RiskTier::Balanced);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("preview.png");
        assert!(matches!(write_png(&scheme, 4, &path), Err(SchemeError::Io(_))));
    }
}
