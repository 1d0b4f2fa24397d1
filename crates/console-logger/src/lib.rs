//! Console Logger
//!
//! `log` backend for browser builds. Records go to the developer console
//! at the matching severity (`console.error`, `console.warn`, ...), one
//! line each:
//!
//! ```text
//! 14:03:22.117 INFO  [sis_ui::app] Loaded 12 students
//! ```
//!
//! Off the browser (native tests) lines go to stderr instead.

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing every enabled record to the console
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(Utc::now(), record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the logger globally. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}

pub fn format_line(at: DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", at.format("%H:%M:%S%.3f"), level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use web_sys::console;

    let value = line.into();
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug => console::log_1(&value),
        Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_line() {
        let at = Utc.with_ymd_and_hms(2024, 9, 1, 14, 3, 22).unwrap();
        let line = format_line(at, Level::Info, "sis_ui::app", "Loaded 12 students");
        assert_eq!(line, "14:03:22.000 INFO  [sis_ui::app] Loaded 12 students");
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn);
        let warn = Metadata::builder().level(Level::Warn).target("t").build();
        let info = Metadata::builder().level(Level::Info).target("t").build();
        assert!(logger.enabled(&warn));
        assert!(!logger.enabled(&info));
    }
}
