//! Rolling Logger
//!
//! `log` backend that keeps the most recent formatted records in a ring
//! buffer and forwards each one to the browser console (stderr when not
//! running under wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Records kept by default
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Logger with a bounded history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::new()),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.buffer().iter().cloned().collect()
    }

    fn buffer(&self) -> std::sync::MutexGuard<'_, VecDeque<String>> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn push(&self, line: String) {
        let mut lines = self.buffer();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

/// `HH:MM:SS.mmm LEVEL target: message`
pub fn format_record(record: &Record<'_>) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::info_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Later calls return an error and leave the
/// first logger in place.
pub fn init(level: LevelFilter) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, DEFAULT_CAPACITY));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// The installed logger, if `init` has run
pub fn global() -> Option<&'static RollingLogger> {
    LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new(LevelFilter::Debug, 3);
        for i in 0..5 {
            write(&logger, Level::Info, &format!("line {}", i));
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("line 2"));
        assert!(recent[2].ends_with("line 4"));
    }

    #[test]
    fn test_init_exposes_global_history() {
        let logger = init(LevelFilter::Debug).expect("first init");
        log::info!("board started");

        assert!(global().is_some());
        assert!(logger.recent().iter().any(|l| l.ends_with("board started")));
        assert!(init(LevelFilter::Debug).is_err());
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        write(&logger, Level::Debug, "hidden");
        write(&logger, Level::Error, "shown");

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("ERROR"));
        assert!(recent[0].contains("test: shown"));
    }
}
