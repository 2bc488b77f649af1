//! Tab appearance configuration
//!
//! This module provides:
//! - `TabConfig` with the colors, font, and tab height used by the tab strip
//! - Built-in themes (default, solarized-dark, nord, gruvbox-dark)
//! - TOML deserialization for host configuration files
//!
//! # Configuration
//!
//! A host window manager embeds the tab section in its own config file:
//!
//! ```toml
//! active_color = "#657b83"
//! inactive_color = "#dddddd"
//! active_border_color = "#ffffff"
//! inactive_border_color = "#777777"
//! active_text_color = "#ceffac"
//! inactive_text_color = "#222222"
//! font = "-misc-fixed-*-*-*-*-10-*-*-*-*-*-*-*"
//! tab_height = 20
//! ```

use serde::{Deserialize, Serialize};

/// Font spec tried when the configured font fails to load
pub const FALLBACK_FONT: &str = "-misc-fixed-*-*-*-*-10-*-*-*-*-*-*-*";

/// Colors, font, and sizing for the tab strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    /// Fill color of the focused window's tab
    pub active_color: String,
    /// Fill color of every other tab
    pub inactive_color: String,
    /// Border color of the focused window's tab
    pub active_border_color: String,
    /// Border color of every other tab
    pub inactive_border_color: String,
    /// Label color of the focused window's tab
    pub active_text_color: String,
    /// Label color of every other tab
    pub inactive_text_color: String,
    /// Font spec for tab labels
    pub font: String,
    /// Height of the tab strip in pixels
    pub tab_height: u32,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl TabConfig {
    /// Default theme
    pub fn default_theme() -> Self {
        Self {
            active_color: "#999999".to_string(),
            inactive_color: "#666666".to_string(),
            active_border_color: "#ffffff".to_string(),
            inactive_border_color: "#bbbbbb".to_string(),
            active_text_color: "#ffffff".to_string(),
            inactive_text_color: "#bfbfbf".to_string(),
            font: FALLBACK_FONT.to_string(),
            tab_height: 20,
        }
    }

    /// Solarized Dark theme
    pub fn solarized_dark() -> Self {
        Self {
            active_color: "#268bd2".to_string(),
            inactive_color: "#073642".to_string(),
            active_border_color: "#fdf6e3".to_string(),
            inactive_border_color: "#586e75".to_string(),
            active_text_color: "#fdf6e3".to_string(),
            inactive_text_color: "#839496".to_string(),
            ..Self::default_theme()
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            active_color: "#88c0d0".to_string(),
            inactive_color: "#3b4252".to_string(),
            active_border_color: "#eceff4".to_string(),
            inactive_border_color: "#4c566a".to_string(),
            active_text_color: "#2e3440".to_string(),
            inactive_text_color: "#d8dee9".to_string(),
            ..Self::default_theme()
        }
    }

    /// Gruvbox Dark theme
    pub fn gruvbox_dark() -> Self {
        Self {
            active_color: "#d79921".to_string(),
            inactive_color: "#3c3836".to_string(),
            active_border_color: "#ebdbb2".to_string(),
            inactive_border_color: "#665c54".to_string(),
            active_text_color: "#282828".to_string(),
            inactive_text_color: "#a89984".to_string(),
            ..Self::default_theme()
        }
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "solarized-dark" | "solarized_dark" => Self::solarized_dark(),
            "nord" => Self::nord(),
            "gruvbox-dark" | "gruvbox_dark" | "gruvbox" => Self::gruvbox_dark(),
            _ => Self::default_theme(),
        }
    }

    /// List available themes
    pub fn list() -> Vec<&'static str> {
        vec!["default", "solarized-dark", "nord", "gruvbox-dark"]
    }

    /// Parse a config from a TOML document
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
