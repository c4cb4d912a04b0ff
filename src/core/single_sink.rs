//! Single-sink logger
//!
//! One target, one threshold, one [`LineFormatter`]. Records less severe than
//! the threshold are dropped silently; everything else is formatted and
//! written immediately.
//!
//! The target is a file (opened lazily with create + truncate on the first
//! write that passes the threshold), a caller-supplied writer, or stderr when
//! no filename is configured. Reconfiguring the target releases the open
//! handle straight away.

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    formatter::LineFormatter,
    log_context::LogContext,
    log_level::{LogLevel, ToLogLevel},
    log_record::RecordBuilder,
    timestamp::TimestampFormat,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

type Sink = Box<dyn Write + Send>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Stderr,
    File(PathBuf),
    Writer,
}

pub struct SingleSinkLogger {
    threshold: LogLevel,
    formatter: LineFormatter,
    target: Target,
    /// Open handle for `target`, if any write happened since the last release
    sink: Option<Sink>,
}

impl SingleSinkLogger {
    /// Log everything to stderr with the default format
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::Debug,
            formatter: LineFormatter::new(),
            target: Target::Stderr,
            sink: None,
        }
    }

    /// Apply every key present in `config` through its setter
    ///
    /// # Example
    ///
    /// ```
    /// use filtered_logger::prelude::*;
    ///
    /// let config = LoggerConfig::new().with_level("warning").with_eol("\r\n");
    /// let logger = SingleSinkLogger::with_config(config).unwrap();
    /// assert_eq!(logger.level(), LogLevel::Warning);
    ///
    /// let bad = LoggerConfig::new().with_date_format("");
    /// assert!(SingleSinkLogger::with_config(bad).is_err());
    /// ```
    pub fn with_config(config: LoggerConfig) -> Result<Self> {
        let mut logger = Self::new();
        if let Some(filename) = config.filename {
            logger.set_filename(filename);
        }
        if let Some(log_format) = config.log_format {
            logger.set_log_format(log_format)?;
        }
        if let Some(date_format) = config.date_format {
            logger.set_date_format(date_format)?;
        }
        if let Some(level) = config.level {
            logger.set_level(level)?;
        }
        if let Some(eol) = config.eol {
            logger.set_eol(eol);
        }
        Ok(logger)
    }

    /// Point the logger at a file. An empty name selects stderr.
    pub fn set_filename(&mut self, filename: impl AsRef<Path>) {
        let filename = filename.as_ref();
        self.release_sink();
        self.target = if filename.as_os_str().is_empty() {
            Target::Stderr
        } else {
            Target::File(filename.to_path_buf())
        };
    }

    /// Write to an already open writer instead of a file
    pub fn set_writer<W: Write + Send + 'static>(&mut self, writer: W) {
        self.release_sink();
        self.target = Target::Writer;
        self.sink = Some(Box::new(writer));
    }

    /// Configured file, `None` when writing to stderr or a custom writer
    pub fn filename(&self) -> Option<&Path> {
        match &self.target {
            Target::File(path) => Some(path),
            Target::Stderr | Target::Writer => None,
        }
    }

    pub fn set_log_format(&mut self, log_format: impl Into<String>) -> Result<()> {
        self.formatter.set_log_format(log_format)
    }

    pub fn set_date_format(&mut self, date_format: impl Into<String>) -> Result<()> {
        self.formatter.set_date_format(date_format)
    }

    pub fn set_timestamp_format(&mut self, format: TimestampFormat) {
        self.formatter.set_timestamp_format(format);
    }

    pub fn set_eol(&mut self, eol: impl Into<String>) {
        self.formatter.set_eol(eol);
    }

    /// Set the threshold from a name or rank
    pub fn set_level(&mut self, level: impl ToLogLevel) -> Result<()> {
        self.threshold = level.to_log_level()?;
        Ok(())
    }

    pub fn level(&self) -> LogLevel {
        self.threshold
    }

    pub fn formatter(&self) -> &LineFormatter {
        &self.formatter
    }

    /// Whether a target handle is currently held
    pub fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    /// Format and write a record if `level` passes the threshold
    ///
    /// An unknown level is an error even when the record would be dropped.
    pub fn log_at(
        &mut self,
        level: impl ToLogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) -> Result<()> {
        let level = level.to_log_level()?;
        if !level.passes_threshold(self.threshold) {
            return Ok(());
        }

        let record = RecordBuilder::new(level, message).context(context).build();
        let line = self.formatter.format(&record);

        let sink = match self.sink.take() {
            Some(sink) => sink,
            None => self.open_target()?,
        };
        let sink = self.sink.insert(sink);
        sink.write_all(line.as_bytes())?;
        sink.flush()?;
        Ok(())
    }

    /// Flush and release the open handle. The next write reopens the target.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut sink) = self.sink.take() {
            sink.flush()?;
        }
        Ok(())
    }

    fn open_target(&self) -> Result<Sink> {
        match &self.target {
            Target::Stderr => Ok(Box::new(io::stderr())),
            Target::File(path) => {
                let file = File::create(path).map_err(|e| {
                    LoggerError::io_operation("opening log file", path.display().to_string(), e)
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
            Target::Writer => Err(LoggerError::writer(
                "custom writer was released; set a new target",
            )),
        }
    }

    fn release_sink(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("[LOGGER ERROR] Failed to flush released sink: {}", e);
        }
    }
}

impl Default for SingleSinkLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SingleSinkLogger {
    fn drop(&mut self) {
        self.release_sink();
    }
}
