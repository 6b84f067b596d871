//! The general configuration settings for fm.
//!
//! Listing preferences, delete behavior and the runtime switches for
//! logging and mouse input.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct General {
    dirs_first: bool,
    show_hidden: bool,
    case_insensitive: bool,
    move_to_trash: bool,
    enable_logging: bool,
    enable_mouse_wheel: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            dirs_first: true,
            show_hidden: false,
            case_insensitive: true,
            move_to_trash: true,
            enable_logging: false,
            enable_mouse_wheel: true,
        }
    }
}

impl General {
    #[inline]
    pub fn dirs_first(&self) -> bool {
        self.dirs_first
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    #[inline]
    pub fn case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    #[inline]
    pub fn move_to_trash(&self) -> bool {
        self.move_to_trash
    }

    #[inline]
    pub fn enable_logging(&self) -> bool {
        self.enable_logging
    }

    #[inline]
    pub fn enable_mouse_wheel(&self) -> bool {
        self.enable_mouse_wheel
    }
}
