//! Terminal colours for each lesson theme

use crate::animation::Theme;
use crate::render::Rgba;
use ratatui::style::Color;

pub struct UiTheme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,
    pub secondary: Color,
    pub comment: Color,
    pub success: Color,
    pub error: Color,
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color,
    pub preprocessor: Color,
}

pub const CLASSIC_THEME: UiTheme = UiTheme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    string: Color::Rgb(250, 179, 135),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175),
    type_name: Color::Rgb(148, 226, 213),
    preprocessor: Color::Rgb(203, 166, 247),
};

/// Parchment and forest tones
pub const LOTR_THEME: UiTheme = UiTheme {
    bg: Color::Rgb(36, 30, 22),
    fg: Color::Rgb(236, 222, 190),
    primary: Color::Rgb(212, 175, 55),
    secondary: Color::Rgb(205, 133, 63),
    comment: Color::Rgb(130, 115, 90),
    success: Color::Rgb(124, 179, 66),
    error: Color::Rgb(200, 80, 60),
    keyword: Color::Rgb(212, 175, 55),
    string: Color::Rgb(188, 143, 143),
    number: Color::Rgb(205, 133, 63),
    border_focused: Color::Rgb(212, 175, 55),
    border_normal: Color::Rgb(110, 95, 70),
    current_line_bg: Color::Rgb(60, 50, 36),
    function: Color::Rgb(222, 184, 135),
    type_name: Color::Rgb(143, 188, 143),
    preprocessor: Color::Rgb(176, 140, 200),
};

pub fn ui_theme(theme: Theme) -> &'static UiTheme {
    match theme {
        Theme::Classic => &CLASSIC_THEME,
        Theme::Lotr => &LOTR_THEME,
    }
}

/// Terminal colour for an opaque canvas colour
pub fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
