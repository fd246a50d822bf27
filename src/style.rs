use crate::locale::Locale;
use crate::theme::{self, BACKGROUND, FOREGROUND};
use ratatui::style::{Color, Modifier};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{Date, OffsetDateTime, UtcOffset};

/// Display configuration shared by the day cells and the header of a
/// calendar.
///
/// A style is resolved in full before it is handed to a component, and the
/// components never modify it.  All lengths are in terminal cells.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CalendarStyle {
    pub cell_font: Modifier,
    pub cell_text_color: Color,
    pub today_text_color: Color,
    pub weekend_text_color: Color,
    pub selected_text_color: Color,
    pub out_of_range_text_color: Color,
    pub adjacent_text_color: Color,
    pub cell_fill: Color,
    pub today_fill: Color,
    pub selected_fill: Color,
    pub event_color: Color,
    pub border_color: Color,
    pub border_width: u16,
    pub selected_border_color: Color,
    pub selected_border_width: u16,
    pub cell_shape: CellShape,

    pub header_font: Modifier,
    pub header_text_color: Color,
    pub header_top_margin: u16,
    pub weekdays_font: Modifier,
    pub weekdays_text_color: Color,
    pub weekdays_background: Color,
    pub weekdays_height: u16,
    pub weekdays_top_margin: u16,
    pub weekdays_bottom_margin: u16,

    pub locale: Locale,
    /// Offset of the calendar's time zone, used when determining the current
    /// date
    pub utc_offset: UtcOffset,
    pub first_weekday: FirstWeekday,
    pub weekday_transform: WeekdayTransform,
}

impl Default for CalendarStyle {
    fn default() -> CalendarStyle {
        CalendarStyle {
            cell_font: theme::cell::FONT,
            cell_text_color: FOREGROUND,
            today_text_color: theme::cell::TODAY_TEXT,
            weekend_text_color: theme::cell::WEEKEND_TEXT,
            selected_text_color: theme::cell::SELECTED_TEXT,
            out_of_range_text_color: theme::cell::OUT_OF_RANGE_TEXT,
            adjacent_text_color: theme::cell::ADJACENT_TEXT,
            cell_fill: BACKGROUND,
            today_fill: theme::cell::TODAY_FILL,
            selected_fill: theme::cell::SELECTED_FILL,
            event_color: theme::cell::EVENT,
            border_color: BACKGROUND,
            border_width: 0,
            selected_border_color: theme::cell::SELECTED_BORDER,
            selected_border_width: 1,
            cell_shape: CellShape::Square,
            header_font: theme::header::FONT,
            header_text_color: FOREGROUND,
            header_top_margin: 0,
            weekdays_font: theme::header::WEEKDAYS_FONT,
            weekdays_text_color: FOREGROUND,
            weekdays_background: BACKGROUND,
            weekdays_height: 1,
            weekdays_top_margin: 1,
            weekdays_bottom_margin: 1,
            locale: Locale::English,
            utc_offset: UtcOffset::UTC,
            first_weekday: FirstWeekday::Sunday,
            weekday_transform: WeekdayTransform::Capitalized,
        }
    }
}

impl CalendarStyle {
    /// The calendar date of the instant `now` in the style's time zone
    ///
    /// # Panics
    ///
    /// Panics if converting `now` to `utc_offset` lands outside the range of
    /// representable dates.
    pub fn today(&self, now: OffsetDateTime) -> Date {
        now.to_offset(self.utc_offset).date()
    }
}

/// Outline of a day cell's background
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CellShape {
    #[default]
    Square,
    /// A circle, or whatever a terminal can make of one
    Round,
    /// Rounded corners with the given radius
    Bevel(u16),
}

impl fmt::Display for CellShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellShape::Square => write!(f, "square"),
            CellShape::Round => write!(f, "round"),
            CellShape::Bevel(radius) => write!(f, "bevel={radius}"),
        }
    }
}

impl FromStr for CellShape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<CellShape, ParseShapeError> {
        match s.split_once('=') {
            None if s.eq_ignore_ascii_case("square") => Ok(CellShape::Square),
            None if s.eq_ignore_ascii_case("round") => Ok(CellShape::Round),
            None if s.eq_ignore_ascii_case("bevel") => Ok(CellShape::Bevel(1)),
            Some((name, radius)) if name.eq_ignore_ascii_case("bevel") => radius
                .trim()
                .parse::<u16>()
                .map(CellShape::Bevel)
                .map_err(|source| ParseShapeError::Radius {
                    value: radius.to_owned(),
                    source,
                }),
            _ => Err(ParseShapeError::Name(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseShapeError {
    #[error("unknown cell shape {0:?}; expected \"square\", \"round\", or \"bevel[=RADIUS]\"")]
    Name(String),
    #[error("invalid bevel radius {value:?}")]
    Radius {
        value: String,
        source: std::num::ParseIntError,
    },
}

/// The day on which displayed weeks begin
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum FirstWeekday {
    #[default]
    Sunday,
    Monday,
}

impl FirstWeekday {
    /// Offset of the first displayed day into a Sunday-first week
    pub fn offset(self) -> usize {
        match self {
            FirstWeekday::Sunday => 0,
            FirstWeekday::Monday => 1,
        }
    }

    pub fn weekday(self) -> time::Weekday {
        match self {
            FirstWeekday::Sunday => time::Weekday::Sunday,
            FirstWeekday::Monday => time::Weekday::Monday,
        }
    }
}

/// Casing applied to weekday labels
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum WeekdayTransform {
    /// Uppercase the first letter of each word and lowercase the rest
    #[default]
    Capitalized,
    Uppercase,
}

impl WeekdayTransform {
    pub fn apply(self, s: &str) -> String {
        match self {
            WeekdayTransform::Capitalized => {
                let mut out = String::with_capacity(s.len());
                let mut word_start = true;
                for ch in s.chars() {
                    if word_start {
                        out.extend(ch.to_uppercase());
                    } else {
                        out.extend(ch.to_lowercase());
                    }
                    word_start = ch.is_whitespace();
                }
                out
            }
            WeekdayTransform::Uppercase => s.to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime, offset};

    #[test]
    fn test_parse_shape() {
        assert_eq!("square".parse::<CellShape>(), Ok(CellShape::Square));
        assert_eq!("Round".parse::<CellShape>(), Ok(CellShape::Round));
        assert_eq!("bevel".parse::<CellShape>(), Ok(CellShape::Bevel(1)));
        assert_eq!("bevel=3".parse::<CellShape>(), Ok(CellShape::Bevel(3)));
        assert_eq!(
            "oval".parse::<CellShape>(),
            Err(ParseShapeError::Name(String::from("oval")))
        );
        assert!(matches!(
            "bevel=x".parse::<CellShape>(),
            Err(ParseShapeError::Radius { value, .. }) if value == "x"
        ));
        assert!("round=2".parse::<CellShape>().is_err());
    }

    #[test]
    fn test_shape_display() {
        assert_eq!(CellShape::Square.to_string(), "square");
        assert_eq!(CellShape::Bevel(2).to_string(), "bevel=2");
        assert_eq!(
            CellShape::Bevel(2).to_string().parse::<CellShape>(),
            Ok(CellShape::Bevel(2))
        );
    }

    #[test]
    fn test_today_uses_utc_offset() {
        let now = datetime!(2025-01-21 20:30 UTC);
        let style = CalendarStyle::default();
        assert_eq!(style.today(now), date!(2025 - 01 - 21));
        let tokyo = CalendarStyle {
            utc_offset: offset!(+9),
            ..CalendarStyle::default()
        };
        assert_eq!(tokyo.today(now), date!(2025 - 01 - 22));
        let honolulu = CalendarStyle {
            utc_offset: offset!(-10),
            ..CalendarStyle::default()
        };
        assert_eq!(honolulu.today(datetime!(2025-01-22 05:00 UTC)), date!(2025 - 01 - 21));
    }

    #[test]
    fn test_first_weekday_offset() {
        assert_eq!(FirstWeekday::Sunday.offset(), 0);
        assert_eq!(FirstWeekday::Monday.offset(), 1);
        assert_eq!(FirstWeekday::Sunday.weekday(), time::Weekday::Sunday);
        assert_eq!(FirstWeekday::Monday.weekday(), time::Weekday::Monday);
    }

    #[test]
    fn test_capitalize() {
        let t = WeekdayTransform::Capitalized;
        assert_eq!(t.apply("dim."), "Dim.");
        assert_eq!(t.apply("MIÉ"), "Mié");
        assert_eq!(t.apply("sun"), "Sun");
        assert_eq!(t.apply("יום א׳"), "יום א׳");
    }

    #[test]
    fn test_uppercase() {
        let t = WeekdayTransform::Uppercase;
        assert_eq!(t.apply("sáb"), "SÁB");
        assert_eq!(t.apply("Mo."), "MO.");
    }
}
