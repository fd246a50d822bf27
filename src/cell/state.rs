use crate::style::CalendarStyle;
use ratatui::style::Color;

/// The independent boolean conditions a day cell can be in
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct CellFlags {
    pub selected: bool,
    pub today: bool,
    pub out_of_range: bool,
    pub adjacent: bool,
    pub weekend: bool,
}

type Predicate = fn(&CellFlags) -> bool;

/// Which of the style's text colors a cell's day number is drawn in
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TextTone {
    Selected,
    Today,
    OutOfRange,
    Adjacent,
    Weekend,
    #[default]
    Default,
}

impl TextTone {
    /// Tones in order of decreasing precedence, each paired with the condition
    /// under which it applies
    const RANKING: [(TextTone, Predicate); 5] = [
        (TextTone::Selected, |f| f.selected),
        (TextTone::Today, |f| f.today),
        (TextTone::OutOfRange, |f| f.out_of_range),
        (TextTone::Adjacent, |f| f.adjacent),
        (TextTone::Weekend, |f| f.weekend),
    ];

    pub fn resolve(flags: CellFlags) -> TextTone {
        TextTone::RANKING
            .iter()
            .find(|(_, applies)| applies(&flags))
            .map_or(TextTone::Default, |&(tone, _)| tone)
    }

    pub fn color(self, style: &CalendarStyle) -> Color {
        match self {
            TextTone::Selected => style.selected_text_color,
            TextTone::Today => style.today_text_color,
            TextTone::OutOfRange => style.out_of_range_text_color,
            TextTone::Adjacent => style.adjacent_text_color,
            TextTone::Weekend => style.weekend_text_color,
            TextTone::Default => style.cell_text_color,
        }
    }
}

/// Which of the style's background treatments a cell is drawn with.
///
/// This is resolved separately from [`TextTone`]: only selection and "today"
/// affect the background and border.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Fill {
    Selected,
    Today,
    #[default]
    Default,
}

impl Fill {
    pub fn resolve(flags: CellFlags) -> Fill {
        if flags.selected {
            Fill::Selected
        } else if flags.today {
            Fill::Today
        } else {
            Fill::Default
        }
    }

    pub fn color(self, style: &CalendarStyle) -> Color {
        match self {
            Fill::Selected => style.selected_fill,
            Fill::Today => style.today_fill,
            Fill::Default => style.cell_fill,
        }
    }

    pub fn border_color(self, style: &CalendarStyle) -> Color {
        match self {
            Fill::Selected => style.selected_border_color,
            Fill::Today | Fill::Default => style.border_color,
        }
    }

    pub fn border_width(self, style: &CalendarStyle) -> u16 {
        match self {
            Fill::Selected => style.selected_border_width,
            Fill::Today | Fill::Default => style.border_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flags() -> impl Iterator<Item = CellFlags> {
        (0u8..32).map(|bits| CellFlags {
            selected: bits & 1 != 0,
            today: bits & 2 != 0,
            out_of_range: bits & 4 != 0,
            adjacent: bits & 8 != 0,
            weekend: bits & 16 != 0,
        })
    }

    #[test]
    fn test_text_tone_first_match_wins() {
        for flags in all_flags() {
            let expected = if flags.selected {
                TextTone::Selected
            } else if flags.today {
                TextTone::Today
            } else if flags.out_of_range {
                TextTone::OutOfRange
            } else if flags.adjacent {
                TextTone::Adjacent
            } else if flags.weekend {
                TextTone::Weekend
            } else {
                TextTone::Default
            };
            assert_eq!(TextTone::resolve(flags), expected, "{flags:?}");
        }
    }

    #[test]
    fn test_lower_flags_are_shadowed() {
        let base = CellFlags {
            today: true,
            ..CellFlags::default()
        };
        for flags in all_flags().filter(|f| !f.selected) {
            let flags = CellFlags {
                today: true,
                ..flags
            };
            assert_eq!(TextTone::resolve(flags), TextTone::resolve(base), "{flags:?}");
        }
    }

    #[test]
    fn test_fill_ignores_text_only_flags() {
        for flags in all_flags() {
            let expected = if flags.selected {
                Fill::Selected
            } else if flags.today {
                Fill::Today
            } else {
                Fill::Default
            };
            assert_eq!(Fill::resolve(flags), expected, "{flags:?}");
        }
    }

    #[test]
    fn test_selected_weekend() {
        let flags = CellFlags {
            selected: true,
            weekend: true,
            ..CellFlags::default()
        };
        let style = CalendarStyle::default();
        assert_eq!(TextTone::resolve(flags).color(&style), style.selected_text_color);
        assert_eq!(Fill::resolve(flags).color(&style), style.selected_fill);
        assert_eq!(
            Fill::resolve(flags).border_color(&style),
            style.selected_border_color
        );
        assert_eq!(
            Fill::resolve(flags).border_width(&style),
            style.selected_border_width
        );
    }

    #[test]
    fn test_colors_follow_style() {
        let style = CalendarStyle {
            cell_text_color: Color::Indexed(1),
            out_of_range_text_color: Color::Indexed(2),
            adjacent_text_color: Color::Indexed(3),
            cell_fill: Color::Indexed(4),
            today_fill: Color::Indexed(5),
            ..CalendarStyle::default()
        };
        assert_eq!(TextTone::Default.color(&style), Color::Indexed(1));
        assert_eq!(TextTone::OutOfRange.color(&style), Color::Indexed(2));
        assert_eq!(TextTone::Adjacent.color(&style), Color::Indexed(3));
        assert_eq!(Fill::Default.color(&style), Color::Indexed(4));
        assert_eq!(Fill::Today.color(&style), Color::Indexed(5));
        assert_eq!(Fill::Today.border_width(&style), style.border_width);
    }
}
