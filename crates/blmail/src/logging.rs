//! Tracing setup for the `blmail` binary.
//!
//! Events go to stderr, filtered by `-q`/`-v` unless `RUST_LOG` is set.
//! With `--log-file`, a second layer writes the same events to that file
//! through a non-blocking writer; the returned guard must live until exit
//! so buffered lines are flushed.

use anyhow::Context;
use anyhow::Result;
use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::Registry;

use crate::args::GlobalArgs;

pub fn init_logging(global: &GlobalArgs) -> Result<Option<WorkerGuard>> {
    let level = level_for(global);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(env_filter(level));

    let (file_layer, guard) = match &global.log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|parent| !parent.as_str().is_empty())
                .unwrap_or(Utf8Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("Log file path `{path}` has no file name"))?;

            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name)
                .build(directory)
                .with_context(|| format!("Failed to open log file `{path}`"))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_thread_names(true)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(env_filter(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(guard)
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn level_for(global: &GlobalArgs) -> &'static str {
    if global.quiet {
        return "error";
    }
    match global.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(quiet: bool, verbose: u8) -> GlobalArgs {
        GlobalArgs {
            quiet,
            verbose,
            log_file: None,
            config: None,
        }
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(&global(true, 0)), "error");
        assert_eq!(level_for(&global(false, 0)), "warn");
        assert_eq!(level_for(&global(false, 1)), "info");
        assert_eq!(level_for(&global(false, 2)), "debug");
        assert_eq!(level_for(&global(false, 5)), "trace");
    }
}
