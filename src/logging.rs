#![cfg(feature = "std")]

use std::env;

use log::{LevelFilter, Metadata, Record};

/// Environment variable holding the log level filter.
pub const LOG_ENV: &str = "BATTLESHIP_AI_LOG";

struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

/// Install the stdout logger, taking the level from `BATTLESHIP_AI_LOG` unless
/// `level` overrides it. Defaults to `info`. Safe to call more than once.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level
        .or_else(|| env::var(LOG_ENV).ok().and_then(|lvl| lvl.parse().ok()))
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
