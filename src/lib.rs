//! Calendar building blocks for [ratatui]: a day cell that resolves its look
//! from a handful of independent flags, and a header showing the month,
//! navigation controls, and locale-aware weekday names.
//!
//! Both components take their colors, metrics, and locale from a shared
//! [`CalendarStyle`].  Neither owns any calendar state; the grid that hosts
//! them decides which month is shown and which day is selected, and pushes
//! that state down into the cells.
mod cell;
mod header;
mod locale;
mod style;
mod theme;
pub use crate::cell::{
    centered_square, CellFlags, CellLayout, DayCell, Fill, Indicator, Photo, TextTone, CELL_INSET,
    INDICATOR_RADIUS,
};
pub use crate::header::{weekday_labels, HeaderControl, HeaderLayout, HeaderListener, HeaderView};
pub use crate::locale::{LayoutDirection, Locale, ParseLocaleError};
pub use crate::style::{
    CalendarStyle, CellShape, FirstWeekday, ParseShapeError, WeekdayTransform,
};
