//! Log line formatting keyed to the simulation tick.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use time::macros::format_description;
use time::{format_description::FormatItem, OffsetDateTime};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// Tick of the game currently being simulated, as last reported by [`set_tick`]
static CURRENT_TICK: AtomicU64 = AtomicU64::new(0);

/// Labels wrap after four hex digits
const TICK_LABEL_MASK: u64 = 0xFFFF;

const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

/// ANSI styles used by [`TickFormatter`]; ignored when the writer has no escapes.
#[derive(Clone, Copy)]
enum Style {
    Dim,
    Bold,
    Color(&'static str),
}

impl Style {
    fn code(self) -> &'static str {
        match self {
            Style::Dim => "2",
            Style::Bold => "1",
            Style::Color(code) => code,
        }
    }
}

fn paint(writer: &mut Writer<'_>, style: Style, value: impl fmt::Display) -> fmt::Result {
    if writer.has_ansi_escapes() {
        write!(writer, "\x1b[{}m{}\x1b[0m", style.code(), value)
    } else {
        write!(writer, "{}", value)
    }
}

fn level_style(level: &Level) -> Style {
    match *level {
        Level::TRACE => Style::Color("35"),
        Level::DEBUG => Style::Color("34"),
        Level::INFO => Style::Color("32"),
        Level::WARN => Style::Color("33"),
        Level::ERROR => Style::Color("31"),
    }
}

/// Formats events as `time tick level spans: target: fields`.
///
/// The tick label lets log lines be matched up with the game tick that produced them.
pub struct TickFormatter;

impl<S, N> FormatEvent<S, N> for TickFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let meta = event.metadata();

        let timestamp = OffsetDateTime::now_utc().format(&TIMESTAMP_FORMAT).map_err(|_| fmt::Error)?;
        paint(&mut writer, Style::Dim, timestamp)?;
        writer.write_char(' ')?;
        paint(&mut writer, Style::Dim, tick_label(get_tick()))?;
        writer.write_char(' ')?;
        paint(&mut writer, level_style(meta.level()), format_args!("{:>5}", meta.level()))?;
        writer.write_char(' ')?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                paint(&mut writer, Style::Bold, span.metadata().name())?;
                if let Some(fields) = span.extensions().get::<FormattedFields<N>>().filter(|f| !f.is_empty()) {
                    paint(&mut writer, Style::Bold, format_args!("{{{}}}", fields))?;
                }
                paint(&mut writer, Style::Dim, ":")?;
                writer.write_char(' ')?;
            }
        }

        paint(&mut writer, Style::Dim, format_args!("{}:", meta.target()))?;
        writer.write_char(' ')?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Renders a tick as the fixed-width hexadecimal label used in log lines.
pub fn tick_label(tick: u64) -> String {
    format!("0x{:04X}", tick & TICK_LABEL_MASK)
}

/// Records the tick the game has reached; [`crate::game::Game::tick`] calls this as each tick begins.
pub fn set_tick(tick: u64) {
    CURRENT_TICK.store(tick, Ordering::Relaxed);
}

pub fn get_tick() -> u64 {
    CURRENT_TICK.load(Ordering::Relaxed)
}
