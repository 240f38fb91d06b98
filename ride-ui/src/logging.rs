use std::{
    fs::File,
    io::{self, IsTerminal},
    sync::{Mutex, OnceLock},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

/// `timestamp LEVEL file:line fields`, colored when the writer supports ANSI.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            let color = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m \x1b[{color}m{:>5}\x1b[0m ",
                meta.level()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

type SetStrFn = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

static SET_LOG_LEVEL: OnceLock<SetStrFn> = OnceLock::new();

fn parse_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"))
}

fn make_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_level(level),
    }
}

fn store_level_handle<S>(handle: reload::Handle<EnvFilter, S>)
where
    S: Subscriber + Send + Sync + 'static,
{
    let _ = SET_LOG_LEVEL.set(Box::new(move |level: &str| {
        let filter = parse_level(level)?;
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    }));
}

/// Changes the active log filter at runtime.
///
/// Accepts a bare level ("warn", "debug", ...) or a full `EnvFilter`
/// directive. The previous filter stays in place when `level` is invalid.
pub fn set_log_level(level: &str) -> Result<()> {
    match SET_LOG_LEVEL.get() {
        Some(set) => set(level),
        None => anyhow::bail!("logging not yet initialized"),
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// - Stdout: colored on a terminal, plain when piped, omitted when disabled.
/// - File: appended to when `config.file` is set. The directory must exist.
/// - Level: `RUST_LOG` when set, otherwise `config.level`.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let (level_filter, level_handle) = reload::Layer::new(make_filter(&config.level)?);

    let stdout_layer = config.stdout.then(|| {
        tracing_subscriber::fmt::layer()
            .event_format(LocalFmt)
            .with_ansi(io::stdout().is_terminal())
    });

    let file_layer = match &config.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(LocalFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")?;

    store_level_handle(level_handle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_log_level_before_init_is_an_error() {
        let err = set_log_level("debug").unwrap_err();

        assert!(err.to_string().contains("not yet initialized"));
    }

    #[test]
    fn bare_levels_and_directives_parse() {
        for level in ["warn", "debug", "info,ride_core=trace"] {
            assert!(parse_level(level).is_ok(), "{level}");
        }
    }

    #[test]
    fn unknown_level_is_rejected() {
        let err = parse_level("ride_core=verbose").unwrap_err();

        assert!(err.to_string().contains("ride_core=verbose"));
    }
}
