use crate::locale::{LayoutDirection, DAYS_IN_WEEK};
use crate::style::CalendarStyle;
use ratatui::layout::Rect;

/// Column at which the month label starts
const MONTH_LABEL_X: u16 = 2;

/// Height of the row of navigation controls
const CONTROL_HEIGHT: u16 = 1;

// Controls are placed at these distances from the header's right edge
const TODAY_OFFSET: u16 = 18;
const TODAY_WIDTH: u16 = 7;
const PREVIOUS_OFFSET: u16 = 10;
const PREVIOUS_WIDTH: u16 = 3;
const NEXT_OFFSET: u16 = 6;
const NEXT_WIDTH: u16 = 3;

/// Geometry of a header's parts within the area it's rendered into
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HeaderLayout {
    pub area: Rect,
    pub direction: LayoutDirection,
    pub month_label: Rect,
    pub today: Rect,
    pub previous: Rect,
    pub next: Rect,
    /// Areas for the weekday labels, in display order
    pub weekdays: [Rect; DAYS_IN_WEEK],
}

impl HeaderLayout {
    pub fn compute(area: Rect, style: &CalendarStyle, direction: LayoutDirection) -> HeaderLayout {
        let top = area.y.saturating_add(style.header_top_margin);
        let month_label = Rect {
            x: area.x.saturating_add(MONTH_LABEL_X),
            y: top,
            width: area.width / 2,
            height: area
                .height
                .saturating_sub(style.header_top_margin)
                .saturating_sub(style.weekdays_height)
                .saturating_sub(style.weekdays_bottom_margin)
                .saturating_sub(style.weekdays_top_margin),
        };
        let control = |offset: u16, width: u16| Rect {
            x: area.x + area.width.saturating_sub(offset),
            y: top,
            width: width.min(area.width),
            height: CONTROL_HEIGHT,
        };
        let strip_y = area.y
            + area
                .height
                .saturating_sub(style.weekdays_bottom_margin)
                .saturating_sub(style.weekdays_height);
        let label_width = area.width / 7;
        let mut x = match direction {
            LayoutDirection::LeftToRight => area.x,
            LayoutDirection::RightToLeft => area.right().saturating_sub(label_width),
        };
        let weekdays = std::array::from_fn(|_| {
            let rect = Rect {
                x,
                y: strip_y,
                width: label_width,
                height: style.weekdays_height,
            };
            x = match direction {
                LayoutDirection::LeftToRight => x.saturating_add(label_width),
                LayoutDirection::RightToLeft => x.saturating_sub(label_width),
            };
            rect
        });
        HeaderLayout {
            area,
            direction,
            month_label,
            today: control(TODAY_OFFSET, TODAY_WIDTH),
            previous: control(PREVIOUS_OFFSET, PREVIOUS_WIDTH),
            next: control(NEXT_OFFSET, NEXT_WIDTH),
            weekdays,
        }
    }

    /// The number of rows a header needs to show all of its parts
    pub fn preferred_height(style: &CalendarStyle) -> u16 {
        style
            .header_top_margin
            .saturating_add(CONTROL_HEIGHT)
            .saturating_add(style.weekdays_top_margin)
            .saturating_add(style.weekdays_height)
            .saturating_add(style.weekdays_bottom_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_to_right() {
        let style = CalendarStyle::default();
        let layout = HeaderLayout::compute(
            Rect::new(0, 0, 49, 4),
            &style,
            LayoutDirection::LeftToRight,
        );
        assert_eq!(layout.month_label, Rect::new(2, 0, 24, 1));
        assert_eq!(layout.today, Rect::new(31, 0, 7, 1));
        assert_eq!(layout.previous, Rect::new(39, 0, 3, 1));
        assert_eq!(layout.next, Rect::new(43, 0, 3, 1));
        let xs = layout.weekdays.map(|r| r.x);
        assert_eq!(xs, [0, 7, 14, 21, 28, 35, 42]);
        for r in layout.weekdays {
            assert_eq!(r.y, 2);
            assert_eq!(r.width, 7);
            assert_eq!(r.height, 1);
        }
    }

    #[test]
    fn test_right_to_left() {
        let style = CalendarStyle::default();
        let layout = HeaderLayout::compute(
            Rect::new(0, 0, 49, 4),
            &style,
            LayoutDirection::RightToLeft,
        );
        let xs = layout.weekdays.map(|r| r.x);
        assert_eq!(xs, [42, 35, 28, 21, 14, 7, 0]);
        // Controls stay anchored to the right edge
        assert_eq!(layout.next, Rect::new(43, 0, 3, 1));
    }

    #[test]
    fn test_controls_in_reading_order() {
        let style = CalendarStyle::default();
        let layout = HeaderLayout::compute(
            Rect::new(5, 3, 80, 6),
            &style,
            LayoutDirection::LeftToRight,
        );
        assert!(layout.today.right() <= layout.previous.left());
        assert!(layout.previous.right() <= layout.next.left());
        assert!(layout.next.right() <= layout.area.right());
        assert_eq!(layout.today.y, 3);
    }

    #[test]
    fn test_margins() {
        let style = CalendarStyle {
            header_top_margin: 1,
            weekdays_height: 2,
            weekdays_top_margin: 1,
            weekdays_bottom_margin: 2,
            ..CalendarStyle::default()
        };
        let layout = HeaderLayout::compute(
            Rect::new(0, 10, 70, 9),
            &style,
            LayoutDirection::LeftToRight,
        );
        assert_eq!(layout.month_label, Rect::new(2, 11, 35, 3));
        assert_eq!(layout.weekdays[0], Rect::new(0, 15, 10, 2));
        assert_eq!(layout.weekdays[6], Rect::new(60, 15, 10, 2));
        assert_eq!(HeaderLayout::preferred_height(&style), 7);
    }

    #[test]
    fn test_preferred_height() {
        assert_eq!(
            HeaderLayout::preferred_height(&CalendarStyle::default()),
            4
        );
    }
}
