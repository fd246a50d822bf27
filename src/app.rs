use crate::help::Help;
use crate::month::{grid_dates, is_weekend, DayMarker, Navigator, GRID_DAYS, GRID_WEEKS};
use crossterm::event::{
    read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use daycells::{
    CalendarStyle, DayCell, HeaderControl, HeaderLayout, HeaderView, LayoutDirection,
};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Position, Rect},
    style::Style,
    widgets::Widget,
    Terminal,
};
use std::io::{self, Write};
use std::rc::Rc;
use time::Date;

/// Number of columns per day of week
const CELL_WIDTH: u16 = 7;

/// Day cells are never drawn shorter than this, even if the bottom of the
/// calendar has to be cut off
const MIN_CELL_HEIGHT: u16 = 3;

const WEEK_WIDTH: u16 = CELL_WIDTH * 7;

/// The calendar application, acting as the grid that hosts the header and the
/// day cells
#[derive(Debug)]
pub(crate) struct App<M> {
    style: CalendarStyle,
    header: HeaderView,
    cells: [DayCell; GRID_DAYS],
    dates: [Option<Date>; GRID_DAYS],
    nav: Rc<Navigator>,
    marker: M,
    state: AppState,
    header_area: Rect,
    cell_areas: Vec<(Rect, Date)>,
}

impl<M: DayMarker> App<M> {
    pub(crate) fn new(
        style: CalendarStyle,
        nav: Navigator,
        marker: M,
        direction: Option<LayoutDirection>,
    ) -> App<M> {
        let nav = Rc::new(nav);
        let mut header = HeaderView::new(style.clone());
        header.set_listener(&nav);
        header.set_semantic_direction(direction);
        let cells = std::array::from_fn(|_| DayCell::new(style.clone()));
        App {
            style,
            header,
            cells,
            dates: [None; GRID_DAYS],
            nav,
            marker,
            state: AppState::Calendar,
            header_area: Rect::default(),
            cell_areas: Vec::with_capacity(GRID_DAYS),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_event(read()?)?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                    self.state = AppState::Quitting;
                } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                    self.beep()?;
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if !self.handle_click(Position::new(column, row)) {
                    self.beep()?;
                }
            }
            // Redraw on resize, and we might as well redraw on other stuff
            // too
            _ => (),
        }
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('t') | KeyCode::Home => {
                    self.header.tap(HeaderControl::Today);
                    true
                }
                KeyCode::Char('p' | '<') | KeyCode::PageUp => {
                    self.header.tap(HeaderControl::Previous);
                    true
                }
                KeyCode::Char('n' | '>') | KeyCode::PageDown => {
                    self.header.tap(HeaderControl::Next);
                    true
                }
                KeyCode::Char('h') | KeyCode::Left => self.nav.move_selection(-self.rightward()),
                KeyCode::Char('l') | KeyCode::Right => self.nav.move_selection(self.rightward()),
                KeyCode::Char('k') | KeyCode::Up => self.nav.move_selection(-7),
                KeyCode::Char('j') | KeyCode::Down => self.nav.move_selection(7),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    // Returns `false` if nothing actionable was clicked
    fn handle_click(&mut self, pos: Position) -> bool {
        match self.state {
            AppState::Calendar => {
                if self.header_area.contains(pos) {
                    self.header.click(self.header_area, pos)
                } else {
                    self.cell_areas
                        .iter()
                        .find(|(rect, _)| rect.contains(pos))
                        .is_some_and(|&(_, date)| self.nav.select(date))
                }
            }
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    /// The number of days by which the selection moves when going one cell to
    /// the right
    fn rightward(&self) -> i64 {
        match self.header.layout_direction() {
            LayoutDirection::LeftToRight => 1,
            LayoutDirection::RightToLeft => -1,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }

    /// Push the navigator's state down into the header and the (recycled) day
    /// cells
    fn sync(&mut self) {
        let month_start = self.nav.month_start();
        let today = self.nav.today();
        let range = self.nav.range();
        let selected = self.nav.selected();
        self.header.set_month(month_start.year(), month_start.month());
        self.dates = grid_dates(month_start, self.style.first_weekday);
        for (cell, date) in std::iter::zip(&mut self.cells, self.dates) {
            cell.clear_styles();
            cell.set_day(date.map(|d| u32::from(d.day())));
            let Some(date) = date else {
                continue;
            };
            let adjacent = (date.year(), date.month()) != (month_start.year(), month_start.month());
            cell.set_flags(date == today, !range.contains(date), adjacent, is_weekend(date));
            cell.set_selected(selected == Some(date));
            let mark = self.marker.mark(date);
            cell.set_events_count(mark.events);
            cell.set_photo(mark.photo);
        }
    }
}

impl<M: DayMarker> Widget for &mut App<M> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(
            area,
            Style::new()
                .fg(self.style.cell_text_color)
                .bg(self.style.cell_fill),
        );
        self.sync();
        let [column] = Layout::horizontal([WEEK_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let header_height = HeaderLayout::preferred_height(&self.style).min(column.height);
        let [header_area, grid_area] =
            Layout::vertical([Constraint::Length(header_height), Constraint::Fill(1)])
                .areas(column);
        self.header_area = header_area;
        self.header.render(header_area, buf);
        let cell_height = (grid_area.height / GRID_WEEKS).max(MIN_CELL_HEIGHT);
        let rtl = self.header.layout_direction() == LayoutDirection::RightToLeft;
        self.cell_areas.clear();
        for ((i, cell), date) in std::iter::zip(0u16.., &mut self.cells).zip(self.dates) {
            let col = if rtl { 6 - i % 7 } else { i % 7 };
            let cell_area = Rect {
                x: grid_area.x.saturating_add(col * CELL_WIDTH),
                y: grid_area.y.saturating_add((i / 7) * cell_height),
                width: CELL_WIDTH,
                height: cell_height,
            };
            cell.render(cell_area, buf);
            if let Some(date) = date {
                let visible = cell_area.intersection(area);
                if !visible.is_empty() {
                    self.cell_areas.push((visible, date));
                }
            }
        }
        if self.state == AppState::Helping {
            Help(
                Style::new()
                    .fg(self.style.header_text_color)
                    .bg(self.style.weekdays_background),
            )
            .render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}
