use crate::month::{DayMarker, Mark};
use daycells::Photo;
use time::Date;

const FULL_MOON_GLYPH: &str = "○";

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
enum Phase {
    Normal,
    Full,
    New,
}

impl Phase {
    // NetHack's phase-of-the-moon approximation
    fn for_date(date: Date) -> Phase {
        // Will give wrong results pre-1900
        let year = date.year().abs_diff(1900);
        let goldn = (year % 19) + 1;
        let mut epact = (11 * goldn + 18) % 30;
        if (epact == 25 && goldn > 11) || epact == 24 {
            epact += 1;
        }
        let ordinal0 = u32::from(date.ordinal() - 1);
        match (((((ordinal0 + epact) * 6) + 11) % 177) / 22) & 7 {
            0 => Phase::New,
            4 => Phase::Full,
            _ => Phase::Normal,
        }
    }
}

/// Marks new moons with an event dot and full moons with a moon glyph
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Phoon;

impl DayMarker for Phoon {
    fn mark(&self, date: Date) -> Mark {
        match Phase::for_date(date) {
            Phase::Normal => Mark::default(),
            Phase::Full => Mark {
                events: 0,
                photo: Some(Photo::new(FULL_MOON_GLYPH)),
            },
            Phase::New => Mark {
                events: 1,
                photo: None,
            },
        }
    }
}
