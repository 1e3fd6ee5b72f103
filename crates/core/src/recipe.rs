//! Reproducible input for a synthesized scheme.
//!
//! A [`SchemeRecipe`] captures every input the synthesizer reads: base hue,
//! harmony style, seed string, display name and risk tier. Two identical
//! recipes always synthesize byte-identical schemes.

use crate::color::normalize_hue;
use crate::error::SchemeError;
use crate::harmony::HarmonyStyle;
use crate::params::{param_f64, param_key, param_string};
use crate::risk::RiskTier;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inputs of one synthesis run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SchemeRecipe {
    /// Base hue in degrees; clamped into [0, 360) by [`Self::normalized`].
    pub base_hue: f64,
    /// Harmony style name. Unknown names synthesize with flat descriptors.
    pub style: String,
    pub seed: String,
    pub name: String,
    #[serde(default)]
    pub risk_tier: RiskTier,
}

impl SchemeRecipe {
    /// Creates a recipe with the default `balanced` tier.
    pub fn new(base_hue: f64, style: HarmonyStyle, seed: &str, name: &str) -> Self {
        Self {
            base_hue,
            style: style.as_str().to_string(),
            seed: seed.to_string(),
            name: name.to_string(),
            risk_tier: RiskTier::default(),
        }
    }

    pub fn with_risk_tier(mut self, tier: RiskTier) -> Self {
        self.risk_tier = tier;
        self
    }

    /// Builds a recipe from a loosely typed JSON object, falling back to
    /// defaults for missing or mistyped keys. An unknown risk tier falls back
    /// to `balanced`.
    pub fn from_json(params: &Value) -> Self {
        let risk_tier = param_key(params, "risk_tier", "riskTier")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let base_hue = param_key(params, "base_hue", "baseHue")
            .and_then(Value::as_f64)
            .unwrap_or_else(|| param_f64(params, "hue", 0.0));
        Self {
            base_hue,
            style: param_string(params, "style", HarmonyStyle::Monochrome.as_str()),
            seed: param_string(params, "seed", "oled"),
            name: param_string(params, "name", "Untitled"),
            risk_tier,
        }
    }

    /// Parsed style, `None` when the name is not one of the seven styles.
    pub fn harmony_style(&self) -> Option<HarmonyStyle> {
        HarmonyStyle::from_name(&self.style)
    }

    /// Validates that the recipe can name a scheme.
    pub fn validate(&self) -> Result<(), SchemeError> {
        if self.name.trim().is_empty() {
            return Err(SchemeError::InvalidRecipe("name must not be empty".into()));
        }
        Ok(())
    }

    /// Copy with the hue wrapped into [0, 360) and rounded to whole degrees.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        let whole = normalize_hue(self.base_hue).round();
        out.base_hue = if whole >= 360.0 { 0.0 } else { whole };
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_uses_balanced_tier() {
        let r = SchemeRecipe::new(180.0, HarmonyStyle::Monochrome, "singularity", "Singularity");
        assert_eq!(r.risk_tier, RiskTier::Balanced);
        assert_eq!(r.style, "monochrome");
        assert_eq!(r.harmony_style(), Some(HarmonyStyle::Monochrome));
    }

    #[test]
    fn json_round_trip() {
        let original = SchemeRecipe::new(42.0, HarmonyStyle::Triadic, "s", "Tri")
            .with_risk_tier(RiskTier::Aggressive);
        let json = serde_json::to_string(&original).unwrap();
        let restored: SchemeRecipe = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn deserialize_defaults_missing_tier() {
        let r: SchemeRecipe = serde_json::from_value(json!({
            "base_hue": 10.0, "style": "analogous", "seed": "x", "name": "X"
        }))
        .unwrap();
        assert_eq!(r.risk_tier, RiskTier::Balanced);
    }

    #[test]
    fn from_json_accepts_camel_case_and_falls_back() {
        let r = SchemeRecipe::from_json(&json!({
            "baseHue": 300, "style": "tetradic", "riskTier": "conservative"
        }));
        assert_eq!(r.base_hue, 300.0);
        assert_eq!(r.risk_tier, RiskTier::Conservative);
        assert_eq!(r.name, "Untitled");

        let r = SchemeRecipe::from_json(&json!({"risk_tier": "reckless"}));
        assert_eq!(r.risk_tier, RiskTier::Balanced);
        assert_eq!(r.base_hue, 0.0);
    }

    #[test]
    fn unknown_style_is_kept_but_unparsed() {
        let r = SchemeRecipe::from_json(&json!({"style": "plaid"}));
        assert_eq!(r.style, "plaid");
        assert_eq!(r.harmony_style(), None);
    }

    #[test]
    fn validate_rejects_blank_name() {
        let mut r = SchemeRecipe::new(0.0, HarmonyStyle::Spectral, "s", "ok");
        assert!(r.validate().is_ok());
        r.name = "   ".into();
        assert!(matches!(r.validate(), Err(SchemeError::InvalidRecipe(_))));
    }

    #[test]
    fn normalized_wraps_and_rounds_hue() {
        let r = SchemeRecipe::new(-30.4, HarmonyStyle::Spectral, "s", "n").normalized();
        assert_eq!(r.base_hue, 330.0);
        let r = SchemeRecipe::new(359.7, HarmonyStyle::Spectral, "s", "n").normalized();
        assert_eq!(r.base_hue, 0.0);
        let r = SchemeRecipe::new(f64::NAN, HarmonyStyle::Spectral, "s", "n").normalized();
        assert_eq!(r.base_hue, 0.0);
    }
}
