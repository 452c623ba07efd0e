use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::config::Config;
use crate::terminal::print::PRINT_TARGET;

pub fn init_logging(cfg: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_level()))
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ValidaFormatter)
        .init();
    Ok(())
}

pub struct ValidaFormatter;

impl<S, N> FormatEvent<S, N> for ValidaFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // Screen output is already styled, write it untouched.
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

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" && self.0.is_none() {
            self.0 = Some(format!("{value:?}"));
        }
    }
}
