//! The built-in palette from which `CalendarStyle::default()` is assembled
use ratatui::style::{Color, Modifier};

pub(crate) const BACKGROUND: Color = Color::Black;

pub(crate) const FOREGROUND: Color = Color::White;

pub(crate) mod cell {
    use super::*;

    pub(crate) const FONT: Modifier = Modifier::empty();

    pub(crate) const TODAY_TEXT: Color = Color::Black;

    pub(crate) const TODAY_FILL: Color = Color::LightRed;

    pub(crate) const WEEKEND_TEXT: Color = Color::LightRed;

    pub(crate) const SELECTED_TEXT: Color = Color::Black;

    pub(crate) const SELECTED_FILL: Color = Color::LightCyan;

    pub(crate) const SELECTED_BORDER: Color = Color::Cyan;

    pub(crate) const OUT_OF_RANGE_TEXT: Color = Color::DarkGray;

    pub(crate) const ADJACENT_TEXT: Color = Color::Gray;

    pub(crate) const EVENT: Color = Color::LightYellow;
}

pub(crate) mod header {
    use super::*;

    pub(crate) const FONT: Modifier = Modifier::BOLD;

    pub(crate) const WEEKDAYS_FONT: Modifier = Modifier::BOLD;
}
