//! The synthesized artifact: a 23-slot OLED theme plus metadata.
//!
//! A [`ColorScheme`] is produced once by the synthesizer or optimizer and
//! treated as an immutable value afterwards. `core.background` is always
//! `#000000`.

use crate::risk::RiskTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Hex literal of the background every scheme carries.
pub const BACKGROUND_HEX: &str = "#000000";

/// Number of ANSI terminal slots.
pub const ANSI_COUNT: usize = 16;

/// Total color slots: seven core roles plus the ANSI spectrum.
pub const SLOT_TOTAL: usize = 7 + ANSI_COUNT;

/// UI role colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreColors {
    pub background: String,
    pub foreground: String,
    pub accent: String,
    pub accent_bright: String,
    pub cursor: String,
    pub selection_bg: String,
    pub selection_fg: String,
}

/// The 16 ANSI slots: `color0..=color7` dark, `color8..=color15` bright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalColors {
    pub colors: [String; ANSI_COUNT],
}

impl TerminalColors {
    /// `color0..=color7`.
    pub fn dark(&self) -> &[String] {
        &self.colors[..8]
    }

    /// `color8..=color15`.
    pub fn bright(&self) -> &[String] {
        &self.colors[8..]
    }

    /// Slot by ANSI index; `None` past 15.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }
}

/// A complete theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,
    pub description: String,
    pub seed: String,
    /// Harmony style name the scheme was requested with (may be a source
    /// palette id for optimized schemes).
    pub style: String,
    /// Base hue in whole degrees.
    pub hue: u16,
    pub risk_tier: RiskTier,
    /// Set by the caller; pure synthesis leaves it empty so equal inputs give
    /// equal schemes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub core: CoreColors,
    pub terminal: TerminalColors,
}

impl ColorScheme {
    /// Returns the scheme with `created_at` set.
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// All 23 slots in order: background, foreground, accent, accent_bright,
    /// cursor, selection_bg, selection_fg, color0..=color15.
    pub fn all_colors(&self) -> Vec<&str> {
        let mut out = Vec::with_capacity(SLOT_TOTAL);
        out.push(self.core.background.as_str());
        out.extend(self.non_background_colors());
        out
    }

    /// Every slot except `core.background` (22 colors).
    pub fn non_background_colors(&self) -> Vec<&str> {
        let c = &self.core;
        [
            &c.foreground,
            &c.accent,
            &c.accent_bright,
            &c.cursor,
            &c.selection_bg,
            &c.selection_fg,
        ]
        .into_iter()
        .chain(self.terminal.colors.iter())
        .map(String::as_str)
        .collect()
    }

    /// Slot labels matching [`Self::all_colors`].
    pub fn slot_names() -> [&'static str; SLOT_TOTAL] {
        [
            "background",
            "foreground",
            "accent",
            "accent_bright",
            "cursor",
            "selection_bg",
            "selection_fg",
            "color0",
            "color1",
            "color2",
            "color3",
            "color4",
            "color5",
            "color6",
            "color7",
            "color8",
            "color9",
            "color10",
            "color11",
            "color12",
            "color13",
            "color14",
            "color15",
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::uniform;
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn all_colors_has_twenty_three_slots_starting_with_background() {
        let scheme = uniform("#112233");
        let all = scheme.all_colors();
        assert_eq!(all.len(), SLOT_TOTAL);
        assert_eq!(all[0], BACKGROUND_HEX);
        assert_eq!(ColorScheme::slot_names().len(), all.len());
    }

    #[test]
    fn non_background_colors_excludes_only_the_background_slot() {
        let mut scheme = uniform("#000000");
        scheme.core.foreground = "#ffffff".into();
        let rest = scheme.non_background_colors();
        assert_eq!(rest.len(), SLOT_TOTAL - 1);
        assert_eq!(rest[0], "#ffffff");
        assert_eq!(rest.iter().filter(|c| **c == "#000000").count(), 21);
    }

    #[test]
    fn terminal_halves_split_at_eight() {
        let mut scheme = uniform("#000000");
        scheme.terminal.colors[8] = "#abcdef".into();
        assert_eq!(scheme.terminal.dark().len(), 8);
        assert_eq!(scheme.terminal.bright()[0], "#abcdef");
        assert_eq!(scheme.terminal.get(8), Some("#abcdef"));
        assert_eq!(scheme.terminal.get(16), None);
    }

    #[test]
    fn json_round_trip_preserves_scheme() {
        let scheme = uniform("#445566").stamped(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());
        let json = serde_json::to_string_pretty(&scheme).unwrap();
        let restored: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(scheme, restored);
    }

    #[test]
    fn unstamped_scheme_omits_created_at() {
        let v = serde_json::to_value(uniform("#445566")).unwrap();
        assert!(v.get("created_at").is_none());
        assert_eq!(v["risk_tier"], "balanced");
        assert_eq!(v["terminal"]["colors"].as_array().unwrap().len(), ANSI_COUNT);
    }
}
