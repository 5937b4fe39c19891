//! Rolling Logger
//!
//! A `log` backend that keeps the most recent records in a circular buffer
//! and forwards every record to the browser console (stderr off wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Fixed-capacity buffer of formatted log lines, oldest first
#[derive(Debug, Clone)]
pub struct RecordBuffer {
    capacity: usize,
    records: VecDeque<String>,
}

impl RecordBuffer {
    /// Create a buffer holding at most `capacity` lines (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&mut self, line: String) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(line);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

struct RollingLogger {
    level: LevelFilter,
    buffer: &'static Mutex<RecordBuffer>,
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

static BUFFER: OnceLock<Mutex<RecordBuffer>> = OnceLock::new();

/// Install the rolling logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let buffer = BUFFER.get_or_init(|| Mutex::new(RecordBuffer::new(capacity)));
    log::set_boxed_logger(Box::new(RollingLogger { level, buffer }))?;
    log::set_max_level(level);
    Ok(())
}

/// Snapshot of the buffered lines, oldest first (empty before `init`)
pub fn recent() -> Vec<String> {
    BUFFER
        .get()
        .and_then(|buffer| buffer.lock().ok().map(|b| b.snapshot()))
        .unwrap_or_default()
}

fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
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
    eprintln!("{line}");
}
