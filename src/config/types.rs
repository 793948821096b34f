use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Profile file to show instead of the built-in résumé.
    #[serde(default)]
    pub profile: Option<PathBuf>,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// How the page is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Use ASCII labels instead of emoji glyphs (default: false).
    #[serde(default)]
    pub ascii_icons: bool,
    /// Fetch and draw the profile photo (default: true).
    #[serde(default = "default_true")]
    pub show_photo: bool,
    /// Capture mouse events for scrolling and clicking links (default: true).
    #[serde(default = "default_true")]
    pub mouse: bool,
}

/// Colour overrides, as `#RRGGBB` or a named terminal colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_secondary")]
    pub secondary: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_detail")]
    pub detail: String,
}

fn default_true() -> bool {
    true
}

fn default_primary() -> String {
    "#28A745".to_string()
}

fn default_secondary() -> String {
    "#F1FFF1".to_string()
}

fn default_text() -> String {
    "#333333".to_string()
}

fn default_background() -> String {
    "#FFFFFF".to_string()
}

fn default_detail() -> String {
    "#6C757D".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ascii_icons: false,
            show_photo: true,
            mouse: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            text: default_text(),
            background: default_background(),
            detail: default_detail(),
        }
    }
}
