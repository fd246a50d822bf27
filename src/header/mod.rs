mod layout;
mod widget;
pub use self::layout::HeaderLayout;
use crate::locale::{LayoutDirection, Locale, DAYS_IN_WEEK};
use crate::style::{CalendarStyle, FirstWeekday, WeekdayTransform};
use ratatui::layout::{Position, Rect};
use std::fmt;
use std::rc::{Rc, Weak};
use time::Month;

/// Receiver of the notifications sent when a header's controls are tapped.
///
/// Each method is passed the header that was tapped.
pub trait HeaderListener {
    fn on_today(&self, sender: &HeaderView);
    fn on_previous(&self, sender: &HeaderView);
    fn on_next(&self, sender: &HeaderView);
}

/// The navigation controls shown in a header
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HeaderControl {
    Today,
    Previous,
    Next,
}

impl HeaderControl {
    pub(crate) fn label(self) -> &'static str {
        match self {
            HeaderControl::Today => " Today ",
            HeaderControl::Previous => " ‹ ",
            HeaderControl::Next => " › ",
        }
    }
}

impl fmt::Display for HeaderControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderControl::Today => write!(f, "Today"),
            HeaderControl::Previous => write!(f, "Previous"),
            HeaderControl::Next => write!(f, "Next"),
        }
    }
}

/// Compute the weekday labels to show, in display order
pub fn weekday_labels(
    locale: Locale,
    first_weekday: FirstWeekday,
    transform: WeekdayTransform,
) -> [String; DAYS_IN_WEEK] {
    let symbols = locale.short_weekday_symbols();
    let start = first_weekday.offset();
    std::array::from_fn(|i| transform.apply(symbols[(start + i) % DAYS_IN_WEEK]))
}

/// The strip above a calendar grid showing the month, navigation controls, and
/// weekday names.
///
/// The header only reports taps on its controls to its listener; changing the
/// displayed month is up to whoever is listening.  The listener is held
/// weakly, so a header never keeps its owner alive, and taps made while no
/// listener is alive are dropped.
pub struct HeaderView {
    style: CalendarStyle,
    weekday_labels: [String; DAYS_IN_WEEK],
    month: Option<(i32, Month)>,
    semantic_direction: Option<LayoutDirection>,
    listener: Option<Weak<dyn HeaderListener>>,
}

impl HeaderView {
    pub fn new(style: CalendarStyle) -> HeaderView {
        let mut header = HeaderView {
            style: CalendarStyle::default(),
            weekday_labels: <[String; DAYS_IN_WEEK]>::default(),
            month: None,
            semantic_direction: None,
            listener: None,
        };
        header.set_style(style);
        header
    }

    /// Restoring a header from an archived form is not supported; headers
    /// must be built with [`HeaderView::new()`].
    ///
    /// # Panics
    ///
    /// Always.
    pub fn from_archive(_archive: &[u8]) -> HeaderView {
        panic!("HeaderView cannot be restored from an archive; construct it with HeaderView::new()")
    }

    pub fn style(&self) -> &CalendarStyle {
        &self.style
    }

    /// Set the header's style, immediately recomputing the weekday labels
    pub fn set_style(&mut self, style: CalendarStyle) {
        self.weekday_labels =
            weekday_labels(style.locale, style.first_weekday, style.weekday_transform);
        log::debug!(
            "header restyled for locale {}; weekday labels: {:?}",
            style.locale,
            self.weekday_labels
        );
        self.style = style;
    }

    pub fn weekday_labels(&self) -> &[String; DAYS_IN_WEEK] {
        &self.weekday_labels
    }

    pub fn month(&self) -> Option<(i32, Month)> {
        self.month
    }

    pub fn set_month(&mut self, year: i32, month: Month) {
        self.month = Some((year, month));
    }

    /// The month label's text, in the style's locale
    pub fn title(&self) -> Option<String> {
        self.month
            .map(|(year, month)| format!("{} {year}", self.style.locale.month_name(month)))
    }

    /// Force a text direction regardless of locale, or pass `None` to follow
    /// the locale again
    pub fn set_semantic_direction(&mut self, direction: Option<LayoutDirection>) {
        self.semantic_direction = direction;
    }

    /// The text direction in effect for the next layout pass
    pub fn layout_direction(&self) -> LayoutDirection {
        self.semantic_direction
            .unwrap_or_else(|| self.style.locale.layout_direction())
    }

    pub fn layout(&self, area: Rect) -> HeaderLayout {
        let layout = HeaderLayout::compute(area, &self.style, self.layout_direction());
        log::trace!("laid out header in {area}: {layout:?}");
        layout
    }

    pub fn set_listener<L: HeaderListener + 'static>(&mut self, listener: &Rc<L>) {
        let weak: Weak<L> = Rc::downgrade(listener);
        self.listener = Some(weak);
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    /// Notify the listener that `control` was tapped
    pub fn tap(&self, control: HeaderControl) {
        let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) else {
            log::debug!("{control} tapped with no listener attached");
            return;
        };
        log::debug!("dispatching {control} tap");
        match control {
            HeaderControl::Today => listener.on_today(self),
            HeaderControl::Previous => listener.on_previous(self),
            HeaderControl::Next => listener.on_next(self),
        }
    }

    /// Returns the control under `pos` when the header occupies `area`
    pub fn control_at(&self, area: Rect, pos: Position) -> Option<HeaderControl> {
        let layout = self.layout(area);
        [
            (HeaderControl::Today, layout.today),
            (HeaderControl::Previous, layout.previous),
            (HeaderControl::Next, layout.next),
        ]
        .into_iter()
        .find_map(|(control, rect)| rect.contains(pos).then_some(control))
    }

    /// Tap whatever control is under `pos`.  Returns `true` if there was one.
    pub fn click(&self, area: Rect, pos: Position) -> bool {
        match self.control_at(area, pos) {
            Some(control) => {
                self.tap(control);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for HeaderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderView")
            .field("style", &self.style)
            .field("weekday_labels", &self.weekday_labels)
            .field("month", &self.month)
            .field("semantic_direction", &self.semantic_direction)
            .field("has_listener", &self.has_listener())
            .finish()
    }
}
