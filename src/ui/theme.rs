//! Style table shared by every component.
//!
//! A [`Theme`] is passed explicitly into each render call; nothing reads
//! colours or spacing from module-level state.

use crate::config::{ConfigError, DisplayConfig, ThemeConfig};
use crate::ui::platform::HostPlatform;
use ratatui::style::Color;
use std::str::FromStr;

/// Colours of the page, keyed by visual role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub text: Color,
    pub background: Color,
    pub detail: Color,
}

/// Spacing in terminal cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spacing {
    /// Left/right indent of every section.
    pub section_padding: u16,
    /// Blank rows after each section.
    pub section_gap: u16,
    /// Blank rows between experience cards.
    pub list_gap: u16,
    /// Blank columns between skill tags.
    pub tag_gap: u16,
    pub header_padding_tall: u16,
    pub header_padding: u16,
    /// Viewports taller than this get `header_padding_tall`.
    pub tall_viewport_rows: u16,
    pub bottom_spacer_apple: u16,
    pub bottom_spacer_other: u16,
    pub photo_columns: u16,
    pub photo_rows: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconStyle {
    #[default]
    Emoji,
    Ascii,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub palette: Palette,
    pub spacing: Spacing,
    pub icons: IconStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x28, 0xa7, 0x45),
            secondary: Color::Rgb(0xf1, 0xff, 0xf1),
            text: Color::Rgb(0x33, 0x33, 0x33),
            background: Color::Rgb(0xff, 0xff, 0xff),
            detail: Color::Rgb(0x6c, 0x75, 0x7d),
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            section_padding: 2,
            section_gap: 1,
            list_gap: 1,
            tag_gap: 1,
            header_padding_tall: 2,
            header_padding: 1,
            tall_viewport_rows: 40,
            bottom_spacer_apple: 4,
            bottom_spacer_other: 2,
            photo_columns: 16,
            photo_rows: 8,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            spacing: Spacing::default(),
            icons: IconStyle::Emoji,
        }
    }
}

impl Spacing {
    /// Rows of empty space closing the page.
    pub fn bottom_spacer(&self, platform: HostPlatform) -> u16 {
        match platform {
            HostPlatform::Apple => self.bottom_spacer_apple,
            HostPlatform::Other => self.bottom_spacer_other,
        }
    }

    /// Rows above the photo, larger on tall viewports.
    pub fn header_top_padding(&self, viewport_rows: u16) -> u16 {
        if viewport_rows > self.tall_viewport_rows {
            self.header_padding_tall
        } else {
            self.header_padding
        }
    }
}

impl Theme {
    pub fn from_config(theme: &ThemeConfig, display: &DisplayConfig) -> Result<Self, ConfigError> {
        let palette = Palette {
            primary: parse_color("primary", &theme.primary)?,
            secondary: parse_color("secondary", &theme.secondary)?,
            text: parse_color("text", &theme.text)?,
            background: parse_color("background", &theme.background)?,
            detail: parse_color("detail", &theme.detail)?,
        };
        let icons = if display.ascii_icons {
            IconStyle::Ascii
        } else {
            IconStyle::Emoji
        };
        Ok(Self {
            palette,
            spacing: Spacing::default(),
            icons,
        })
    }
}

fn parse_color(role: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value.trim()).map_err(|_| ConfigError::ValidationError {
        message: format!("Invalid {} colour '{}'", role, value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_default_theme() {
        let theme = Theme::from_config(&ThemeConfig::default(), &DisplayConfig::default())
            .expect("default theme parses");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn invalid_colour_names_role() {
        let config = ThemeConfig {
            detail: "not-a-colour".to_string(),
            ..ThemeConfig::default()
        };
        let err = Theme::from_config(&config, &DisplayConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid detail colour 'not-a-colour'"));
    }

    #[test]
    fn ascii_display_selects_ascii_icons() {
        let display = DisplayConfig {
            ascii_icons: true,
            ..DisplayConfig::default()
        };
        let theme = Theme::from_config(&ThemeConfig::default(), &display).unwrap();
        assert_eq!(theme.icons, IconStyle::Ascii);
    }

    #[test]
    fn spacer_depends_on_platform() {
        let spacing = Spacing::default();
        assert_eq!(spacing.bottom_spacer(HostPlatform::Apple), 4);
        assert_eq!(spacing.bottom_spacer(HostPlatform::Other), 2);
    }

    #[test]
    fn tall_viewports_get_more_header_padding() {
        let spacing = Spacing::default();
        assert_eq!(spacing.header_top_padding(41), 2);
        assert_eq!(spacing.header_top_padding(40), 1);
    }
}
