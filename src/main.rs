mod app;
mod help;
mod moon;
mod month;
use crate::app::App;
use crate::month::{DateRange, Navigator};
use crate::moon::Phoon;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use daycells::{CalendarStyle, CellShape, FirstWeekday, LayoutDirection, Locale, WeekdayTransform};
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use std::ffi::OsString;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Environment variables consulted, in order, when no `--locale` is given
static LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Options {
    monday: bool,
    uppercase: bool,
    shape: Option<CellShape>,
    locale: Option<Locale>,
    direction: Option<LayoutDirection>,
    min: Option<Date>,
    max: Option<Date>,
    log: Option<PathBuf>,
    date: Option<Date>,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('m') | Arg::Long("monday") => opts.monday = true,
                Arg::Short('u') | Arg::Long("uppercase") => opts.uppercase = true,
                Arg::Short('s') | Arg::Long("shape") => opts.shape = Some(parser.value()?.parse()?),
                Arg::Short('L') | Arg::Long("locale") => {
                    opts.locale = Some(parser.value()?.parse()?);
                }
                Arg::Long("rtl") => opts.direction = Some(LayoutDirection::RightToLeft),
                Arg::Long("ltr") => opts.direction = Some(LayoutDirection::LeftToRight),
                Arg::Long("min") => opts.min = Some(parse_date(parser.value()?)?),
                Arg::Long("max") => opts.max = Some(parse_date(parser.value()?)?),
                Arg::Long("log") => opts.log = Some(PathBuf::from(parser.value()?)),
                Arg::Value(value) if opts.date.is_none() => opts.date = Some(parse_date(value)?),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(opts) => {
                if let Some(path) = &opts.log {
                    init_logging(path)?;
                }
                if let (Some(min), Some(max)) = (opts.min, opts.max) {
                    if min > max {
                        anyhow::bail!("--min date {min} is after --max date {max}");
                    }
                }
                let now = OffsetDateTime::now_local().context("failed to determine local date")?;
                let style = opts.style(now);
                log::debug!("starting with {style:?}");
                let mut nav = Navigator::new(
                    style.today(now),
                    DateRange {
                        min: opts.min,
                        max: opts.max,
                    },
                );
                if let Some(date) = opts.date {
                    nav = nav.start_date(date);
                }
                let app = App::new(style, nav, Phoon, opts.direction);
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    app.run(&mut terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: daycells [<options>] [YYYY-MM-DD]");
                println!();
                println!("Month calendar built from day cells, marking NetHack's new & full moons");
                println!();
                println!("Options:");
                println!("  -m, --monday          Start weeks on Monday");
                println!("  -u, --uppercase       Show weekday names in uppercase");
                println!("  -s, --shape <SHAPE>   Day cell shape: square, round, bevel[=N]");
                println!("  -L, --locale <CODE>   Locale for month & weekday names [default: from $LANG]");
                println!("      --rtl             Lay out the calendar right-to-left");
                println!("      --ltr             Lay out the calendar left-to-right");
                println!("      --min <DATE>      Earliest selectable date");
                println!("      --max <DATE>      Latest selectable date");
                println!("      --log <FILE>      Write debug logs to FILE (filter with $RUST_LOG)");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Options {
    fn style(&self, now: OffsetDateTime) -> CalendarStyle {
        let mut style = CalendarStyle {
            locale: self.locale.unwrap_or_else(locale_from_env),
            utc_offset: now.offset(),
            ..CalendarStyle::default()
        };
        if self.monday {
            style.first_weekday = FirstWeekday::Monday;
        }
        if self.uppercase {
            style.weekday_transform = WeekdayTransform::Uppercase;
        }
        if let Some(shape) = self.shape {
            style.cell_shape = shape;
        }
        style
    }
}

fn parse_date(value: OsString) -> Result<Date, lexopt::Error> {
    value.parse_with(|s| Date::parse(s, &YMD_FMT))
}

fn locale_from_env() -> Locale {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| match value.parse() {
            Ok(locale) => Some(locale),
            Err(e) => {
                log::debug!("ignoring locale from environment: {e}");
                None
            }
        })
        .unwrap_or_default()
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableMouseCapture)
        .context("failed to enable mouse capture")
        .and_then(|()| func(terminal));
    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    r
}
