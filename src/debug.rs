//! Minimal stderr logger for the command-line tools.
//!
//! `QR_DEBUG` (any value) turns on debug output; `QR_LOG` picks an explicit
//! level (`error`, `warn`, `info`, `debug`, `trace`) and wins over `QR_DEBUG`.

use log::{LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn level_from_env() -> LevelFilter {
    if let Some(level) = std::env::var("QR_LOG")
        .ok()
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
    {
        return level;
    }
    if std::env::var("QR_DEBUG").is_ok() {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the stderr logger. Calling it twice is harmless.
pub fn init_logging() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_from_env());
    }
}
