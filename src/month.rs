use daycells::{FirstWeekday, HeaderListener, HeaderView, Photo};
use std::cell::Cell;
use std::iter::successors;
use time::{Date, Duration, Weekday};

/// Number of weeks shown in a month grid, enough for any month to fit
pub(crate) const GRID_WEEKS: u16 = 6;

pub(crate) const GRID_DAYS: usize = 42;

/// What to show on a given day besides its number
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Mark {
    pub(crate) events: u32,
    pub(crate) photo: Option<Photo>,
}

pub(crate) trait DayMarker {
    fn mark(&self, date: Date) -> Mark;
}

/// The span of dates that may be selected; either end may be open
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct DateRange {
    pub(crate) min: Option<Date>,
    pub(crate) max: Option<Date>,
}

impl DateRange {
    pub(crate) fn contains(&self, date: Date) -> bool {
        self.min.map_or(true, |min| min <= date) && self.max.map_or(true, |max| date <= max)
    }
}

/// Which month is on display and which day is selected.
///
/// This listens to the calendar header, and so all state lives in `Cell`s that
/// can be updated through a shared reference.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Navigator {
    today: Date,
    range: DateRange,
    month_start: Cell<Date>,
    selected: Cell<Option<Date>>,
}

impl Navigator {
    pub(crate) fn new(today: Date, range: DateRange) -> Navigator {
        Navigator {
            today,
            range,
            month_start: Cell::new(first_of_month(today)),
            selected: Cell::new(None),
        }
    }

    pub(crate) fn start_date(self, date: Date) -> Navigator {
        self.month_start.set(first_of_month(date));
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn range(&self) -> DateRange {
        self.range
    }

    /// The first day of the month on display
    pub(crate) fn month_start(&self) -> Date {
        self.month_start.get()
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.selected.get()
    }

    /// Select `date` and show its month.  Returns `false` if the date is not
    /// selectable.
    pub(crate) fn select(&self, date: Date) -> bool {
        if !self.range.contains(date) {
            log::debug!("refusing to select out-of-range date {date}");
            return false;
        }
        self.selected.set(Some(date));
        self.month_start.set(first_of_month(date));
        true
    }

    /// Move the selection by `days` days, starting from today if nothing is
    /// selected yet
    pub(crate) fn move_selection(&self, days: i64) -> bool {
        self.selected()
            .unwrap_or(self.today)
            .checked_add(Duration::days(days))
            .is_some_and(|date| self.select(date))
    }

    pub(crate) fn previous_month(&self) -> bool {
        self.shift_month(
            self.month_start()
                .previous_day()
                .map(first_of_month),
        )
    }

    pub(crate) fn next_month(&self) -> bool {
        // 31 days after the start of a month is always in the following month
        self.shift_month(
            self.month_start()
                .checked_add(Duration::days(31))
                .map(first_of_month),
        )
    }

    fn shift_month(&self, month_start: Option<Date>) -> bool {
        match month_start {
            Some(date) => {
                self.month_start.set(date);
                true
            }
            None => {
                log::debug!("no month to move to from {}", self.month_start());
                false
            }
        }
    }

    pub(crate) fn go_to_today(&self) {
        self.month_start.set(first_of_month(self.today));
        if self.range.contains(self.today) {
            self.selected.set(Some(self.today));
        }
    }
}

impl HeaderListener for Navigator {
    fn on_today(&self, _sender: &HeaderView) {
        self.go_to_today();
    }

    fn on_previous(&self, _sender: &HeaderView) {
        self.previous_month();
    }

    fn on_next(&self, _sender: &HeaderView) {
        self.next_month();
    }
}

pub(crate) fn first_of_month(date: Date) -> Date {
    date.replace_day(1)
        .expect("every month should have a first day")
}

pub(crate) fn is_weekend(date: Date) -> bool {
    matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
}

/// Returns the dates to show in a six-week grid for the month starting at
/// `month_start`, in display order.  Days that cannot be represented are
/// `None`.
pub(crate) fn grid_dates(month_start: Date, first_weekday: FirstWeekday) -> [Option<Date>; GRID_DAYS] {
    let first = first_weekday.weekday();
    let lead = successors(Some(month_start.weekday()), |w| Some(w.previous()))
        .position(|w| w == first)
        .unwrap_or(0);
    let mut days = [None; GRID_DAYS];
    let (before, after) = days.split_at_mut(lead);
    for (slot, date) in after
        .iter_mut()
        .zip(successors(Some(month_start), |d| d.next_day()))
    {
        *slot = Some(date);
    }
    for (slot, date) in before
        .iter_mut()
        .rev()
        .zip(successors(Some(month_start), |d| d.previous_day()).skip(1))
    {
        *slot = Some(date);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use daycells::{CalendarStyle, HeaderControl};
    use std::rc::Rc;
    use time::macros::date;

    #[test]
    fn test_grid_sunday_first() {
        let days = grid_dates(date!(2025 - 01 - 01), FirstWeekday::Sunday);
        assert_eq!(days[0], Some(date!(2024 - 12 - 29)));
        assert_eq!(days[3], Some(date!(2025 - 01 - 01)));
        assert_eq!(days[33], Some(date!(2025 - 01 - 31)));
        assert_eq!(days[41], Some(date!(2025 - 02 - 08)));
    }

    #[test]
    fn test_grid_monday_first() {
        let days = grid_dates(date!(2025 - 01 - 01), FirstWeekday::Monday);
        assert_eq!(days[0], Some(date!(2024 - 12 - 30)));
        assert_eq!(days[2], Some(date!(2025 - 01 - 01)));
        assert_eq!(days[0].map(Date::weekday), Some(Weekday::Monday));
    }

    #[test]
    fn test_grid_month_starting_on_first_weekday() {
        let days = grid_dates(date!(2026 - 02 - 01), FirstWeekday::Sunday);
        assert_eq!(days[0], Some(date!(2026 - 02 - 01)));
        let days = grid_dates(date!(2025 - 09 - 01), FirstWeekday::Monday);
        assert_eq!(days[0], Some(date!(2025 - 09 - 01)));
    }

    #[test]
    fn test_grid_at_end_of_time() {
        let days = grid_dates(date!(9999 - 12 - 01), FirstWeekday::Sunday);
        assert!(days.contains(&Some(date!(9999 - 12 - 31))));
        assert_eq!(days[GRID_DAYS - 1], None);
    }

    #[test]
    fn test_month_navigation() {
        let nav = Navigator::new(date!(2025 - 01 - 22), DateRange::default());
        assert_eq!(nav.month_start(), date!(2025 - 01 - 01));
        assert!(nav.previous_month());
        assert_eq!(nav.month_start(), date!(2024 - 12 - 01));
        assert!(nav.next_month());
        assert!(nav.next_month());
        assert_eq!(nav.month_start(), date!(2025 - 02 - 01));
        assert!(nav.next_month());
        assert_eq!(nav.month_start(), date!(2025 - 03 - 01));
        assert_eq!(nav.selected(), None);
    }

    #[test]
    fn test_navigation_at_end_of_time() {
        let nav = Navigator::new(date!(9999 - 12 - 25), DateRange::default());
        assert!(!nav.next_month());
        assert_eq!(nav.month_start(), date!(9999 - 12 - 01));
    }

    #[test]
    fn test_go_to_today() {
        let nav = Navigator::new(date!(2025 - 01 - 22), DateRange::default())
            .start_date(date!(2030 - 06 - 15));
        assert_eq!(nav.month_start(), date!(2030 - 06 - 01));
        nav.go_to_today();
        assert_eq!(nav.month_start(), date!(2025 - 01 - 01));
        assert_eq!(nav.selected(), Some(date!(2025 - 01 - 22)));
    }

    #[test]
    fn test_move_selection() {
        let nav = Navigator::new(date!(2025 - 01 - 22), DateRange::default());
        assert!(nav.move_selection(10));
        assert_eq!(nav.selected(), Some(date!(2025 - 02 - 01)));
        assert_eq!(nav.month_start(), date!(2025 - 02 - 01));
        assert!(nav.move_selection(-7));
        assert_eq!(nav.selected(), Some(date!(2025 - 01 - 25)));
        assert_eq!(nav.month_start(), date!(2025 - 01 - 01));
    }

    #[test]
    fn test_range_limits_selection() {
        let range = DateRange {
            min: Some(date!(2025 - 01 - 10)),
            max: Some(date!(2025 - 01 - 31)),
        };
        let nav = Navigator::new(date!(2025 - 01 - 12), range);
        assert!(nav.move_selection(-2));
        assert!(!nav.move_selection(-1));
        assert_eq!(nav.selected(), Some(date!(2025 - 01 - 10)));
        assert!(!nav.select(date!(2025 - 02 - 01)));
        assert!(range.contains(date!(2025 - 01 - 31)));
        assert!(!range.contains(date!(2025 - 02 - 01)));
    }

    #[test]
    fn test_today_out_of_range_is_not_selected() {
        let range = DateRange {
            min: Some(date!(2026 - 01 - 01)),
            max: None,
        };
        let nav = Navigator::new(date!(2025 - 01 - 22), range);
        nav.go_to_today();
        assert_eq!(nav.month_start(), date!(2025 - 01 - 01));
        assert_eq!(nav.selected(), None);
    }

    #[test]
    fn test_listens_to_header() {
        let nav = Rc::new(Navigator::new(date!(2025 - 01 - 22), DateRange::default()));
        let mut header = HeaderView::new(CalendarStyle::default());
        header.set_listener(&nav);
        header.tap(HeaderControl::Next);
        assert_eq!(nav.month_start(), date!(2025 - 02 - 01));
        header.tap(HeaderControl::Previous);
        header.tap(HeaderControl::Previous);
        assert_eq!(nav.month_start(), date!(2024 - 12 - 01));
        header.tap(HeaderControl::Today);
        assert_eq!(nav.selected(), Some(date!(2025 - 01 - 22)));
    }

    #[test]
    fn test_weekend() {
        assert!(is_weekend(date!(2025 - 01 - 25)));
        assert!(is_weekend(date!(2025 - 01 - 26)));
        assert!(!is_weekend(date!(2025 - 01 - 27)));
    }
}
