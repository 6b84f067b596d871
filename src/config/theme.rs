//! Theme configuration options for fm
//!
//! This module defines the theme configuration options which are read from the fm.toml
//! configuration file.

use crate::utils::parse_color;

use ratatui::style::{Color, Style};
use serde::Deserialize;

/// Theme configuration options
/// Holds all color options for the list pane and the status bar.
/// # Examples
/// ```toml
/// [theme.directory]
/// fg = "cyan"
/// [theme.selection]
/// bg = "#3c3836"
/// [theme.status_bar.logo]
/// fg = "black"
/// bg = "yellow"
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Theme {
    selection: ColorPair,
    entry: ColorPair,
    directory: ColorPair,
    accent: ColorPair,
    path: ColorPair,
    selection_icon: String,
    status_bar: StatusBarTheme,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            selection: ColorPair::new(Color::Reset, Color::Indexed(236)),
            entry: ColorPair::default(),
            directory: ColorPair::new(Color::Blue, Color::Reset),
            accent: ColorPair::new(Color::Indexed(238), Color::Reset),
            path: ColorPair::new(Color::Magenta, Color::Reset),
            selection_icon: "> ".into(),
            status_bar: StatusBarTheme::default(),
        }
    }
}

/// Theme implementation
impl Theme {
    pub fn selection(&self) -> &ColorPair {
        &self.selection
    }

    pub fn entry(&self) -> &ColorPair {
        &self.entry
    }

    pub fn directory(&self) -> &ColorPair {
        &self.directory
    }

    pub fn accent(&self) -> &ColorPair {
        &self.accent
    }

    pub fn path(&self) -> &ColorPair {
        &self.path
    }

    pub fn selection_icon(&self) -> &str {
        &self.selection_icon
    }

    pub fn status_bar(&self) -> &StatusBarTheme {
        &self.status_bar
    }
}

/// One color pair per status bar column, left to right.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct StatusBarTheme {
    selected_file: ColorPair,
    status: ColorPair,
    file_count: ColorPair,
    logo: ColorPair,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        let light = Color::Rgb(0xff, 0xff, 0xdf);
        StatusBarTheme {
            selected_file: ColorPair::new(light, Color::Rgb(0xf2, 0x5d, 0x94)),
            status: ColorPair::new(light, Color::Rgb(0x3c, 0x38, 0x36)),
            file_count: ColorPair::new(light, Color::Rgb(0xa5, 0x50, 0xdf)),
            logo: ColorPair::new(light, Color::Rgb(0x61, 0x24, 0xdf)),
        }
    }
}

impl StatusBarTheme {
    /// Styles for the four columns in display order.
    pub fn column_styles(&self) -> [Style; 4] {
        [
            self.selected_file.as_style(),
            self.status.as_style(),
            self.file_count.as_style(),
            self.logo.as_style(),
        ]
    }
}

/// ColorPair struct to hold foreground and background colors.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    #[serde(default = "reset", deserialize_with = "deserialize_color_field")]
    fg: Color,
    #[serde(default = "reset", deserialize_with = "deserialize_color_field")]
    bg: Color,
}

/// Default implementation for ColorPair
/// Sets both foreground and background to Color::Reset
impl Default for ColorPair {
    fn default() -> Self {
        Self {
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

impl ColorPair {
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn bg(&self) -> Color {
        self.bg
    }

    /// Converts to a Style. `Reset` leaves that side unset, so patching this
    /// style over another keeps the other's color.
    pub fn as_style(&self) -> Style {
        let mut style = Style::default();
        if self.fg != Color::Reset {
            style = style.fg(self.fg);
        }
        if self.bg != Color::Reset {
            style = style.bg(self.bg);
        }
        style
    }
}

fn reset() -> Color {
    Color::Reset
}

/// Deserializes a color field from a string using [parse_color]
fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_pairs_keep_reset_for_missing_side() -> Result<(), Box<dyn std::error::Error>> {
        let theme: Theme = toml::from_str(
            r##"
            [directory]
            fg = "cyan"

            [status_bar.logo]
            bg = "#112233"
            "##,
        )?;
        assert_eq!(theme.directory().fg(), Color::Cyan);
        assert_eq!(theme.directory().bg(), Color::Reset);
        assert_eq!(theme.status_bar().logo.bg(), Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.status_bar().logo.fg(), Color::Reset);
        // untouched sections keep their defaults
        assert_eq!(theme.selection(), Theme::default().selection());
        Ok(())
    }

    #[test]
    fn reset_sides_are_left_unset() {
        let style = ColorPair::new(Color::Reset, Color::Red).as_style();
        assert_eq!(style.fg, None);
        assert_eq!(style.bg, Some(Color::Red));

        let base = Style::default().fg(Color::Green);
        assert_eq!(base.patch(style).fg, Some(Color::Green));
    }
}
