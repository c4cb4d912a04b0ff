//! File appender implementation

use crate::core::{Appender, LineFormatter, LogRecord, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends formatted lines to a file, creating it if needed
pub struct FileAppender {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    formatter: LineFormatter,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                LoggerError::io_operation("opening log file", path.display().to_string(), e)
            })?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
            formatter: LineFormatter::new(),
        })
    }

    /// Replace the line formatter for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use filtered_logger::appenders::FileAppender;
    /// use filtered_logger::LineFormatter;
    ///
    /// let mut formatter = LineFormatter::new();
    /// formatter.set_log_format("{datetime} {LEVEL} {message}").unwrap();
    ///
    /// let appender = FileAppender::new("/var/log/app.log")
    ///     .unwrap()
    ///     .with_formatter(formatter);
    /// ```
    #[must_use]
    pub fn with_formatter(mut self, formatter: LineFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("File writer not initialized"))?;

        let line = self.formatter.format(record);
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.flush();
    }
}
