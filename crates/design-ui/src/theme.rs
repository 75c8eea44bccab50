//! Light/dark theme state
//!
//! The theme toggle flips between exactly two themes. Persistence and
//! system-preference detection belong to the embedder; this module only
//! tracks which theme is current.

use serde::{Deserialize, Serialize};

/// The two themes of the design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Whether this is the dark theme.
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Current theme plus the toggle over it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    /// The current theme
    pub theme: ThemeName,
}

impl ThemeState {
    /// Start on the given theme.
    pub fn new(theme: ThemeName) -> Self {
        Self { theme }
    }

    /// Set the theme directly.
    pub fn set(&mut self, theme: ThemeName) {
        self.theme = theme;
    }

    /// Flip to the other theme and return it.
    pub fn toggle(&mut self) -> ThemeName {
        self.theme = self.theme.opposite();
        self.theme
    }

    /// Whether the dark theme is current.
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_light() {
        let state = ThemeState::default();
        assert!(!state.is_dark());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = ThemeState::new(ThemeName::Light);
        assert_eq!(state.toggle(), ThemeName::Dark);
        assert!(state.is_dark());
        assert_eq!(state.toggle(), ThemeName::Light);
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_value(ThemeName::Dark).unwrap();
        assert_eq!(json, "dark");
    }
}
