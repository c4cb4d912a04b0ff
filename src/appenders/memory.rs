//! In-memory sinks
//!
//! Both types are cheap handles over shared storage: keep a clone, hand the
//! other to a logger, and inspect what arrived.

use crate::core::{Appender, LogRecord, Result};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Appender keeping every record it receives
#[derive(Debug, Clone)]
pub struct MemoryAppender {
    name: String,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of the received records
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| r.message().to_string())
            .collect()
    }

    /// Whether a record with this message and level name arrived
    pub fn has_record(&self, message: &str, level_name: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|r| r.message() == message && r.level_name().eq_ignore_ascii_case(level_name))
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for MemoryAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for MemoryAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        self.records.lock().push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Byte buffer usable as a [`Write`] target for the single-sink logger
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LogLevel, RecordBuilder};

    #[test]
    fn test_clones_share_records() {
        let appender = MemoryAppender::named("shared");
        let mut handle = appender.clone();

        handle
            .append(&RecordBuilder::new(LogLevel::Info, "Info message").build())
            .unwrap();

        assert_eq!(appender.len(), 1);
        assert!(appender.has_record("Info message", "INFO"));
        assert!(!appender.has_record("Info message", "debug"));
        assert_eq!(handle.name(), "shared");

        appender.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn test_shared_buffer() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();
        writer.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(buffer.lines(), vec!["one", "two"]);
        buffer.clear();
        assert!(buffer.contents().is_empty());
    }
}
