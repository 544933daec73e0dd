use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::print::PRINT_TARGET;

/// Installs the global subscriber.
///
/// See [`filter`] for what gets shown.
pub fn init(quiet: u8) -> anyhow::Result<()> {
    let filter: EnvFilter = filter(quiet, std::env::var("RUST_LOG").ok().as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(SolidFormatter)
        .init();
    Ok(())
}

/// Diagnostics follow `directives` (usually `RUST_LOG`) when given, otherwise
/// `info` upwards, or `warn` upwards when running quiet. Terminal output on
/// [`PRINT_TARGET`] is added on top and always let through.
pub fn filter(quiet: u8, directives: Option<&str>) -> anyhow::Result<EnvFilter> {
    let base: EnvFilter = match directives {
        Some(directives) => EnvFilter::try_new(directives)?,
        None if quiet > 0 => EnvFilter::new("warn"),
        None => EnvFilter::new("info"),
    };

    Ok(base.add_directive(format!("{PRINT_TARGET}=info").parse()?))
}

pub struct SolidFormatter;

impl<S, N> FormatEvent<S, N> for SolidFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}
