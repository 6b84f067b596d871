//! `[display]` section of fm.toml: what a listing row shows and whether the
//! list pane is framed.

use ratatui::widgets::BorderType;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Display {
    /// Nerd-Font glyph in front of every name and in the logo.
    icons: bool,
    /// Reserve a column for the selection icon on every row.
    selection_marker: bool,
    borders: Borders,
    border_shape: BorderShape,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            icons: false,
            selection_marker: true,
            borders: Borders::default(),
            border_shape: BorderShape::default(),
        }
    }
}

impl Display {
    pub fn icons(&self) -> bool {
        self.icons
    }

    pub fn selection_marker(&self) -> bool {
        self.selection_marker
    }

    pub fn borders(&self) -> Borders {
        self.borders
    }

    /// The list pane sits in a single frame carrying the path as its title.
    pub fn is_unified(&self) -> bool {
        self.borders == Borders::Unified
    }

    pub fn border_type(&self) -> BorderType {
        self.border_shape.into()
    }
}

/// `borders = "unified" | "none"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Borders {
    None,
    #[default]
    Unified,
}

/// `border_shape = "square" | "rounded" | "double" | "thick"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderShape {
    #[default]
    Square,
    Rounded,
    Double,
    Thick,
}

impl From<BorderShape> for BorderType {
    fn from(shape: BorderShape) -> Self {
        match shape {
            BorderShape::Square => BorderType::Plain,
            BorderShape::Rounded => BorderType::Rounded,
            BorderShape::Double => BorderType::Double,
            BorderShape::Thick => BorderType::Thick,
        }
    }
}
