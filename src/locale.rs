use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) trait WeekdayExt {
    /// Index of the weekday in a Sunday-first week
    fn index0(&self) -> usize;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> usize {
        self.number_days_from_sunday().into()
    }
}

/// Direction in which text and horizontally-sequenced content flows
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// The locales for which weekday and month names are built in
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Locale {
    #[default]
    English,
    French,
    German,
    Spanish,
    Arabic,
    Hebrew,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::French => "fr",
            Locale::German => "de",
            Locale::Spanish => "es",
            Locale::Arabic => "ar",
            Locale::Hebrew => "he",
        }
    }

    /// The locale's abbreviated weekday names, starting with Sunday
    pub fn short_weekday_symbols(self) -> [&'static str; DAYS_IN_WEEK] {
        match self {
            Locale::English => ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
            Locale::French => ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
            Locale::German => ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
            Locale::Spanish => ["dom", "lun", "mar", "mié", "jue", "vie", "sáb"],
            Locale::Arabic => [
                "الأحد",
                "الاثنين",
                "الثلاثاء",
                "الأربعاء",
                "الخميس",
                "الجمعة",
                "السبت",
            ],
            Locale::Hebrew => [
                "יום א׳",
                "יום ב׳",
                "יום ג׳",
                "יום ד׳",
                "יום ה׳",
                "יום ו׳",
                "שבת",
            ],
        }
    }

    pub fn short_weekday_symbol(self, wd: Weekday) -> &'static str {
        self.short_weekday_symbols()[wd.index0()]
    }

    pub fn month_name(self, month: Month) -> &'static str {
        let names = match self {
            Locale::English => [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
            Locale::French => [
                "janvier",
                "février",
                "mars",
                "avril",
                "mai",
                "juin",
                "juillet",
                "août",
                "septembre",
                "octobre",
                "novembre",
                "décembre",
            ],
            Locale::German => [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
            Locale::Spanish => [
                "enero",
                "febrero",
                "marzo",
                "abril",
                "mayo",
                "junio",
                "julio",
                "agosto",
                "septiembre",
                "octubre",
                "noviembre",
                "diciembre",
            ],
            Locale::Arabic => [
                "يناير",
                "فبراير",
                "مارس",
                "أبريل",
                "مايو",
                "يونيو",
                "يوليو",
                "أغسطس",
                "سبتمبر",
                "أكتوبر",
                "نوفمبر",
                "ديسمبر",
            ],
            Locale::Hebrew => [
                "ינואר",
                "פברואר",
                "מרץ",
                "אפריל",
                "מאי",
                "יוני",
                "יולי",
                "אוגוסט",
                "ספטמבר",
                "אוקטובר",
                "נובמבר",
                "דצמבר",
            ],
        };
        names[usize::from(u8::from(month) - 1)]
    }

    pub fn layout_direction(self) -> LayoutDirection {
        match self {
            Locale::Arabic | Locale::Hebrew => LayoutDirection::RightToLeft,
            _ => LayoutDirection::LeftToRight,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    // Accepts bare language codes as well as tags with a region suffix, e.g.
    // "fr", "fr-CA", "fr_FR.UTF-8"
    fn from_str(s: &str) -> Result<Locale, ParseLocaleError> {
        let lang = s
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" | "c" | "posix" => Ok(Locale::English),
            "fr" => Ok(Locale::French),
            "de" => Ok(Locale::German),
            "es" => Ok(Locale::Spanish),
            "ar" => Ok(Locale::Arabic),
            "he" | "iw" => Ok(Locale::Hebrew),
            _ => Err(ParseLocaleError(s.to_owned())),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unsupported locale: {0:?}")]
pub struct ParseLocaleError(String);
