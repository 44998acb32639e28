//! Lesson themes and the animation colour palettes they select

use crate::render::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Content and colour theme of the course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Classic,
    /// Middle-earth flavoured lessons with an earthy palette
    Lotr,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Lotr => "lotr",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(Theme::Classic),
            "lotr" => Some(Theme::Lotr),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Classic => Theme::Lotr,
            Theme::Lotr => Theme::Classic,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colours shared by every animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Rgba,
    pub secondary: Rgba,
    pub accent: Rgba,
    pub success: Rgba,
    pub danger: Rgba,
    pub warning: Rgba,
    pub background: Rgba,
    pub text: Rgba,
    pub code_bg: Rgba,
    pub terminal_bg: Rgba,
}

/// Yellow outline of the active node
pub const ACTIVE_HIGHLIGHT: Rgba = Rgba::rgb(255, 209, 102);

/// Grey used for inactive arrows and outlines
pub const INACTIVE: Rgba = Rgba::gray(150);

const CLASSIC: Palette = Palette {
    primary: Rgba::rgb(44, 62, 80),
    secondary: Rgba::rgb(52, 152, 219),
    accent: Rgba::rgb(231, 76, 60),
    success: Rgba::rgb(46, 204, 113),
    danger: Rgba::rgb(231, 76, 60),
    warning: Rgba::rgb(243, 156, 18),
    background: Rgba::rgb(236, 240, 241),
    text: Rgba::rgb(44, 62, 80),
    code_bg: Rgba::rgb(40, 44, 52),
    terminal_bg: Rgba::rgb(20, 20, 20),
};

const LOTR: Palette = Palette {
    primary: Rgba::rgb(78, 52, 46),
    secondary: Rgba::rgb(141, 110, 99),
    accent: Rgba::rgb(215, 204, 200),
    success: Rgba::rgb(104, 159, 56),
    danger: Rgba::rgb(211, 47, 47),
    warning: Rgba::rgb(255, 160, 0),
    background: Rgba::rgb(245, 245, 245),
    text: Rgba::rgb(62, 39, 35),
    code_bg: Rgba::rgb(46, 36, 32),
    terminal_bg: Rgba::rgb(26, 18, 14),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Classic => &CLASSIC,
        Theme::Lotr => &LOTR,
    }
}
