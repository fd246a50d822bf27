mod layout;
mod state;
mod widget;
pub use self::layout::{centered_square, CellLayout, CELL_INSET, INDICATOR_RADIUS};
pub use self::state::{CellFlags, Fill, TextTone};
use crate::style::CalendarStyle;
use ratatui::{layout::Rect, style::Color};
use std::fmt;

/// A small picture shown in a day cell's indicator slot.  In a terminal, this
/// is a glyph.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Photo(String);

impl Photo {
    pub fn new<S: Into<String>>(glyph: S) -> Photo {
        Photo(glyph.into())
    }

    pub fn glyph(&self) -> &str {
        &self.0
    }
}

/// What occupies a day cell's indicator slot
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Indicator<'a> {
    Photo(&'a Photo),
    Dot,
}

/// A single day in a calendar grid.
///
/// Cells are meant to be reused: the owning grid calls
/// [`DayCell::clear_styles()`] before configuring a cell for a new day.
/// Changes to the style do not mark the cell for layout; the owner must call
/// [`DayCell::set_needs_layout()`] when a new style alters the cell's
/// geometry.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DayCell {
    style: CalendarStyle,
    day: Option<u32>,
    events_count: u32,
    photo: Option<Photo>,
    flags: CellFlags,
    tone: TextTone,
    fill: Fill,
    needs_layout: bool,
    layout: Option<CellLayout>,
}

impl DayCell {
    pub fn new(style: CalendarStyle) -> DayCell {
        DayCell {
            style,
            needs_layout: true,
            ..DayCell::default()
        }
    }

    pub fn style(&self) -> &CalendarStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: CalendarStyle) {
        self.style = style;
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn set_day(&mut self, day: Option<u32>) {
        self.day = day;
    }

    /// The text displayed for the day, if any
    pub fn text(&self) -> Option<String> {
        self.day.map(|d| d.to_string())
    }

    pub fn events_count(&self) -> u32 {
        self.events_count
    }

    pub fn set_events_count(&mut self, count: u32) {
        self.events_count = count;
        self.needs_layout = true;
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref()
    }

    pub fn set_photo(&mut self, photo: Option<Photo>) {
        self.photo = photo;
        self.needs_layout = true;
    }

    /// Returns what the indicator slot currently shows.  A photo takes the
    /// slot over from the event dot.
    pub fn indicator(&self) -> Option<Indicator<'_>> {
        match (&self.photo, self.events_count) {
            (Some(photo), _) => Some(Indicator::Photo(photo)),
            (None, 0) => None,
            (None, _) => Some(Indicator::Dot),
        }
    }

    pub fn flags(&self) -> CellFlags {
        self.flags
    }

    pub fn set_flags(&mut self, today: bool, out_of_range: bool, adjacent: bool, weekend: bool) {
        self.flags = CellFlags {
            today,
            out_of_range,
            adjacent,
            weekend,
            ..self.flags
        };
        self.restyle();
    }

    pub fn is_today(&self) -> bool {
        self.flags.today
    }

    pub fn set_today(&mut self, today: bool) {
        self.flags.today = today;
        self.restyle();
    }

    pub fn is_out_of_range(&self) -> bool {
        self.flags.out_of_range
    }

    pub fn set_out_of_range(&mut self, out_of_range: bool) {
        self.flags.out_of_range = out_of_range;
        self.restyle();
    }

    pub fn is_adjacent(&self) -> bool {
        self.flags.adjacent
    }

    pub fn set_adjacent(&mut self, adjacent: bool) {
        self.flags.adjacent = adjacent;
        self.restyle();
    }

    pub fn is_weekend(&self) -> bool {
        self.flags.weekend
    }

    pub fn set_weekend(&mut self, weekend: bool) {
        self.flags.weekend = weekend;
        self.restyle();
    }

    pub fn is_selected(&self) -> bool {
        self.flags.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        let before = self.fill;
        self.flags.selected = selected;
        self.restyle();
        if before.border_width(&self.style) != self.fill.border_width(&self.style) {
            self.needs_layout = true;
        }
    }

    /// Reset the cell to its default appearance: no flags, no events, no
    /// photo, default colors and border.  The day is left as-is.
    pub fn clear_styles(&mut self) {
        self.flags = CellFlags::default();
        self.events_count = 0;
        self.photo = None;
        self.restyle();
        self.needs_layout = true;
    }

    fn restyle(&mut self) {
        self.tone = TextTone::resolve(self.flags);
        self.fill = Fill::resolve(self.flags);
    }

    pub fn text_tone(&self) -> TextTone {
        self.tone
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }

    pub fn text_color(&self) -> Color {
        self.tone.color(&self.style)
    }

    pub fn background_color(&self) -> Color {
        self.fill.color(&self.style)
    }

    pub fn border_color(&self) -> Color {
        self.fill.border_color(&self.style)
    }

    pub fn border_width(&self) -> u16 {
        self.fill.border_width(&self.style)
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    pub fn set_needs_layout(&mut self) {
        self.needs_layout = true;
    }

    /// The geometry computed by the most recent layout pass
    pub fn layout(&self) -> Option<&CellLayout> {
        self.layout.as_ref()
    }

    /// Recompute the cell's geometry if it has been marked dirty or if
    /// `area` differs from the area of the last layout pass
    pub fn layout_if_needed(&mut self, area: Rect) -> CellLayout {
        match self.layout {
            Some(layout) if !self.needs_layout && layout.area == area => layout,
            _ => {
                let layout =
                    CellLayout::compute(area, self.style.cell_shape, self.border_width());
                log::trace!("laid out {self} in {area}: {layout:?}");
                self.layout = Some(layout);
                self.needs_layout = false;
                layout
            }
        }
    }
}

impl fmt::Display for DayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            Some(day) => write!(f, "<DayCell (text:\"{day}\")>"),
            None => write!(f, "<DayCell (text:\" \")>"),
        }
    }
}
