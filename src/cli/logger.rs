//! Diagnostics on stderr for the `log` facade.

use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = match record.level() {
            Level::Error => "error".bold().red(),
            Level::Warn => "warning".bold().yellow(),
            Level::Info => "info".bold().green(),
            Level::Debug => "debug".bold().blue(),
            Level::Trace => "trace".dimmed(),
        };
        eprintln!("{}: {}", level, record.args());
    }

    fn flush(&self) {}
}

pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the stderr logger.
///
/// Only the level is updated when a logger is already installed.
pub fn init(verbose: bool) {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level_filter(verbose));
}
