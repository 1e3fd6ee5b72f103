//! Semantic roles and the registry of curated source palettes.
//!
//! Source palettes are externally curated themes described as a role → hex
//! map. The optimizer reclamps them into OLED-safe schemes.

use crate::error::SchemeError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Semantic color role of a source palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Foreground,
    Accent,
    AccentBright,
    Error,
    Warning,
    Success,
    Info,
    Magenta,
    Cyan,
}

impl Role {
    pub const COUNT: usize = 9;

    pub const ALL: [Role; Role::COUNT] = [
        Role::Foreground,
        Role::Accent,
        Role::AccentBright,
        Role::Error,
        Role::Warning,
        Role::Success,
        Role::Info,
        Role::Magenta,
        Role::Cyan,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Foreground => "foreground",
            Role::Accent => "accent",
            Role::AccentBright => "accent_bright",
            Role::Error => "error",
            Role::Warning => "warning",
            Role::Success => "success",
            Role::Info => "info",
            Role::Magenta => "magenta",
            Role::Cyan => "cyan",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-size map with one value per [`Role`], indexed by the role itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleMap<T>([T; Role::COUNT]);

impl<T> RoleMap<T> {
    /// Values in [`Role::ALL`] order.
    pub const fn new(values: [T; Role::COUNT]) -> Self {
        Self(values)
    }

    pub fn from_fn(mut f: impl FnMut(Role) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Role::ALL[i])))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Role, &T) -> U) -> RoleMap<U> {
        RoleMap::from_fn(|role| f(role, &self.0[role.index()]))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Role, &T)> {
        Role::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Role> for RoleMap<T> {
    type Output = T;

    fn index(&self, role: Role) -> &T {
        &self.0[role.index()]
    }
}

impl<T> IndexMut<Role> for RoleMap<T> {
    fn index_mut(&mut self, role: Role) -> &mut T {
        &mut self.0[role.index()]
    }
}

impl<T: Serialize> Serialize for RoleMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(role, v)| (role.as_str(), v)))
    }
}

/// An externally curated palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcePalette {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub roles: RoleMap<&'static str>,
}

const fn palette(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    roles: [&'static str; Role::COUNT],
) -> SourcePalette {
    SourcePalette {
        id,
        name,
        description,
        roles: RoleMap::new(roles),
    }
}

// role order: fg, accent, accent_bright, error, warning, success, info, magenta, cyan
static REGISTRY: [SourcePalette; 7] = [
    palette(
        "dracula",
        "Dracula",
        "Purple-forward dark theme with candy accents",
        [
            "#f8f8f2", "#bd93f9", "#ff79c6", "#ff5555", "#f1fa8c", "#50fa7b", "#6272a4",
            "#ff79c6", "#8be9fd",
        ],
    ),
    palette(
        "nord",
        "Nord",
        "Arctic, north-bluish frost and aurora colors",
        [
            "#eceff4", "#88c0d0", "#8fbcbb", "#bf616a", "#ebcb8b", "#a3be8c", "#81a1c1",
            "#b48ead", "#88c0d0",
        ],
    ),
    palette(
        "gruvbox",
        "Gruvbox",
        "Retro groove with warm earthy contrast",
        [
            "#ebdbb2", "#fe8019", "#fabd2f", "#fb4934", "#fabd2f", "#b8bb26", "#83a598",
            "#d3869b", "#8ec07c",
        ],
    ),
    palette(
        "tokyo-night",
        "Tokyo Night",
        "Neon city lights over deep indigo",
        [
            "#c0caf5", "#7aa2f7", "#bb9af7", "#f7768e", "#e0af68", "#9ece6a", "#7dcfff",
            "#bb9af7", "#7dcfff",
        ],
    ),
    palette(
        "catppuccin-mocha",
        "Catppuccin Mocha",
        "Soothing pastels on a dark base",
        [
            "#cdd6f4", "#cba6f7", "#f5c2e7", "#f38ba8", "#f9e2af", "#a6e3a1", "#89b4fa",
            "#f5c2e7", "#94e2d5",
        ],
    ),
    palette(
        "solarized",
        "Solarized",
        "Precision colors with fixed lightness relationships",
        [
            "#839496", "#268bd2", "#2aa198", "#dc322f", "#b58900", "#859900", "#268bd2",
            "#d33682", "#2aa198",
        ],
    ),
    palette(
        "one-dark",
        "One Dark",
        "Balanced editor palette with clear syntax hues",
        [
            "#abb2bf", "#61afef", "#c678dd", "#e06c75", "#e5c07b", "#98c379", "#61afef",
            "#c678dd", "#56b6c2",
        ],
    ),
];

impl SourcePalette {
    /// All registered palettes.
    pub fn registry() -> &'static [SourcePalette] {
        &REGISTRY
    }

    /// Looks up a palette by id (case insensitive).
    ///
    /// Returns `SchemeError::PaletteNotFound` for unknown ids.
    pub fn find(id: &str) -> Result<&'static SourcePalette, SchemeError> {
        let wanted = id.trim();
        REGISTRY
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SchemeError::PaletteNotFound(id.to_string()))
    }

    /// Ids of all registered palettes.
    pub fn list_ids() -> Vec<&'static str> {
        REGISTRY.iter().map(|p| p.id).collect()
    }
}
