//! Console Logger
//!
//! `log` backend for the browser. Records go to the devtools console at the
//! matching console level, and the most recent formatted lines are kept in a
//! circular buffer so the page can inspect them without devtools.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Console logger with a bounded history of formatted lines
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }

    fn buffer(&self) -> MutexGuard<'_, VecDeque<String>> {
        // A panic while holding the lock only loses buffered text.
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut lines = self.buffer();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
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
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        chrono::Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    }
}

/// Install the global logger with the default buffer capacity
pub fn init(level: LevelFilter) -> Result<&'static ConsoleLogger, SetLoggerError> {
    init_with_capacity(level, DEFAULT_CAPACITY)
}

/// Install the global logger
///
/// Fails if another logger was already installed for this process.
pub fn init_with_capacity(
    level: LevelFilter,
    capacity: usize,
) -> Result<&'static ConsoleLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Recent lines of the global logger (empty before `init`)
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

/// Drop the global logger's buffered lines
pub fn clear_lines() {
    if let Some(logger) = LOGGER.get() {
        logger.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_line(logger: &ConsoleLogger, level: Level, target: &str, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target(target)
                .build(),
        );
    }

    #[test]
    fn test_buffer_keeps_latest_lines() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 3);
        for i in 0..5 {
            log_line(&logger, Level::Info, "app", &format!("line {}", i));
        }

        let lines = logger.recent();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("line 2"));
        assert!(lines[2].ends_with("line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        log_line(&logger, Level::Debug, "app", "hidden");
        log_line(&logger, Level::Info, "app", "hidden too");
        log_line(&logger, Level::Warn, "app", "shown");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("WARN"));
    }

    #[test]
    fn test_line_format_has_target() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 10);
        log_line(&logger, Level::Info, "tasks", "added #7");

        let line = &logger.recent()[0];
        assert!(line.contains("[tasks] added #7"));
    }

    #[test]
    fn test_zero_capacity_and_clear() {
        let silent = ConsoleLogger::new(LevelFilter::Info, 0);
        log_line(&silent, Level::Info, "app", "dropped");
        assert!(silent.recent().is_empty());

        let logger = ConsoleLogger::new(LevelFilter::Info, 4);
        log_line(&logger, Level::Info, "app", "one");
        logger.clear();
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_global_helpers_without_logger() {
        clear_lines();
        assert!(recent_lines().is_empty());
    }
}
