//! Widget configuration and color theme.

use serde::{Deserialize, Serialize};

use crate::position::{DEFAULT_MAX_HEIGHT, DEFAULT_VIEWPORT_MARGIN};
use crate::types::Color;

/// Settings shared by every select a host creates.
///
/// All fields have defaults, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    /// Rows the option list may take when the props give no `max_height`.
    pub max_height: u16,
    /// Rows kept free below the option list.
    pub viewport_margin: u16,
    pub theme: SelectTheme,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            viewport_margin: DEFAULT_VIEWPORT_MARGIN,
            theme: SelectTheme::default(),
        }
    }
}

impl SelectConfig {
    pub fn max_height(mut self, rows: u16) -> Self {
        self.max_height = rows;
        self
    }

    pub fn viewport_margin(mut self, rows: u16) -> Self {
        self.viewport_margin = rows;
        self
    }

    pub fn theme(mut self, theme: SelectTheme) -> Self {
        self.theme = theme;
        self
    }
}

/// Colors used to draw the label row, the box and the option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectTheme {
    pub background: Color,
    pub label: Color,
    pub required: Color,
    pub text: Color,
    pub placeholder: Color,
    pub muted: Color,
    pub box_bg: Color,
    pub focused_bg: Color,
    pub grey_bg: Color,
    pub list_bg: Color,
    pub highlighted_bg: Color,
    pub selected_bg: Color,
}

impl Default for SelectTheme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0, 0, 0),
            label: Color::rgb(180, 180, 190),
            required: Color::hex(0xFF6B6B),
            text: Color::rgb(230, 230, 235),
            placeholder: Color::rgb(130, 130, 140),
            muted: Color::rgb(110, 110, 120),
            box_bg: Color::rgb(40, 40, 50),
            focused_bg: Color::rgb(80, 80, 100),
            grey_bg: Color::rgb(60, 60, 64),
            list_bg: Color::rgb(30, 30, 40),
            highlighted_bg: Color::hex(0xA277FF),
            selected_bg: Color::hex(0x6E5494),
        }
    }
}
