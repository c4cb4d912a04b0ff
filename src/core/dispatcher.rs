//! Multi-destination logger
//!
//! Every destination carries its own [`Selector`]. A record is dispatched in
//! two passes over the registry:
//!
//! 1. find the first destination that accepts the record's level; if there is
//!    none the record is dropped and `dispatch` returns `false`,
//! 2. run the processors once, then walk from that first index to the end of
//!    the registry and write to every destination that accepts the level.
//!
//! Destinations registered in front of the first accepting one are not
//! consulted again in the second pass.
//!
//! # Example
//!
//! ```
//! use filtered_logger::prelude::*;
//!
//! let errors = MemoryAppender::named("errors");
//! let everything = MemoryAppender::named("everything");
//!
//! let mut logger = MultiDestinationLogger::builder()
//!     .appender(everything.clone(), "all -debug")
//!     .appender(errors.clone(), "none +error +critical")
//!     .build();
//!
//! assert!(logger.add_record("error", "disk failure", LogContext::new()).unwrap());
//! assert_eq!(everything.len(), 1);
//! assert_eq!(errors.len(), 1);
//! ```

use super::{
    appender::Appender,
    destination::{Destination, DestinationRegistry, Selector},
    error::Result,
    log_context::LogContext,
    log_level::{LogLevel, ToLogLevel},
    log_record::{LogRecord, RecordBuilder},
    metrics::DispatchMetrics,
};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A record transform applied once per dispatched record
pub type Processor = Box<dyn Fn(LogRecord) -> LogRecord + Send + Sync>;

pub struct MultiDestinationLogger {
    channel: String,
    destinations: DestinationRegistry,
    processors: Vec<Processor>,
    /// Counters for handled, unhandled and failed writes
    metrics: DispatchMetrics,
}

impl MultiDestinationLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_channel("")
    }

    #[must_use]
    pub fn with_channel(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            destinations: DestinationRegistry::new(),
            processors: Vec::new(),
            metrics: DispatchMetrics::new(),
        }
    }

    #[must_use]
    pub fn builder() -> MultiDestinationLoggerBuilder {
        MultiDestinationLoggerBuilder::new()
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Register an appender behind every existing destination
    pub fn add_appender(&mut self, appender: Box<dyn Appender>, selector: impl Into<Selector>) {
        self.destinations.add(appender, selector);
    }

    /// Register an appender in front of every existing destination
    pub fn push_appender(&mut self, appender: Box<dyn Appender>, selector: impl Into<Selector>) {
        self.destinations.push(appender, selector);
    }

    /// Remove the front destination, returning its appender
    pub fn pop_appender(&mut self) -> Option<Box<dyn Appender>> {
        self.destinations.pop()
    }

    pub fn destinations(&self) -> &DestinationRegistry {
        &self.destinations
    }

    /// Append a processor; processors run in registration order
    pub fn add_processor<F>(&mut self, processor: F)
    where
        F: Fn(LogRecord) -> LogRecord + Send + Sync + 'static,
    {
        self.processors.push(Box::new(processor));
    }

    /// True when some destination would accept a record at `level`
    pub fn is_handling(&self, level: LogLevel) -> bool {
        self.destinations.first_accepting(level).is_some()
    }

    /// Build a record and dispatch it
    ///
    /// Fails only when `level` does not name a severity. `Ok(false)` means no
    /// destination accepted the record.
    pub fn add_record(
        &mut self,
        level: impl ToLogLevel,
        message: impl Into<String>,
        context: LogContext,
    ) -> Result<bool> {
        let level = level.to_log_level()?;
        if self.destinations.is_empty() {
            self.metrics.record_unhandled();
            return Ok(false);
        }

        let record = RecordBuilder::new(level, message)
            .context(context)
            .channel(self.channel.as_str())
            .build();
        Ok(self.dispatch(record))
    }

    /// Dispatch a prepared record
    ///
    /// Returns whether any destination accepted it. Write failures are
    /// reported on stderr and counted, never returned.
    pub fn dispatch(&mut self, record: LogRecord) -> bool {
        let level = record.level();

        let Some(first) = self.destinations.first_accepting(level) else {
            self.metrics.record_unhandled();
            return false;
        };

        let record = self
            .processors
            .iter()
            .fold(record, |record, processor| processor(record));

        for (idx, destination) in self.destinations.iter_mut().enumerate().skip(first) {
            if destination.accepts(level) {
                Self::write_isolated(idx, destination, &record, &self.metrics);
            }
        }

        self.metrics.record_handled();
        true
    }

    /// Write to one destination so that an error or panic stays contained
    fn write_isolated(
        idx: usize,
        destination: &mut Destination,
        record: &LogRecord,
        metrics: &DispatchMetrics,
    ) {
        let append_result = catch_unwind(AssertUnwindSafe(|| {
            destination.appender_mut().append(record)
        }));

        match append_result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!(
                    "[LOGGER ERROR] Destination #{} ({}) failed: {}",
                    idx,
                    destination.appender().name(),
                    e
                );
                metrics.record_write_failure();
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                eprintln!(
                    "[LOGGER CRITICAL] Destination #{} ({}) panicked: {}. \
                     Other destinations continue to function.",
                    idx,
                    destination.appender().name(),
                    panic_msg
                );
                metrics.record_write_failure();
            }
        }
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Flush every destination, stopping at the first failure
    pub fn flush(&mut self) -> Result<()> {
        for destination in self.destinations.iter_mut() {
            destination.appender_mut().flush()?;
        }
        Ok(())
    }
}

impl Default for MultiDestinationLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MultiDestinationLogger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing a [`MultiDestinationLogger`] with a fluent API
///
/// # Example
/// ```
/// use filtered_logger::prelude::*;
///
/// let logger = MultiDestinationLogger::builder()
///     .channel("billing")
///     .appender(MemoryAppender::new(), "all")
///     .appender(MemoryAppender::new(), LogLevel::Error)
///     .processor(|record| record.with_extra("pid", std::process::id()))
///     .build();
///
/// assert_eq!(logger.destinations().len(), 2);
/// ```
pub struct MultiDestinationLoggerBuilder {
    channel: String,
    destinations: Vec<(Box<dyn Appender>, Selector)>,
    processors: Vec<Processor>,
}

impl MultiDestinationLoggerBuilder {
    pub fn new() -> Self {
        Self {
            channel: String::new(),
            destinations: Vec::new(),
            processors: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Add an appender at the back of the registry
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A, selector: impl Into<Selector>) -> Self {
        self.destinations.push((Box::new(appender), selector.into()));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn processor<F>(mut self, processor: F) -> Self
    where
        F: Fn(LogRecord) -> LogRecord + Send + Sync + 'static,
    {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn build(self) -> MultiDestinationLogger {
        let mut logger = MultiDestinationLogger::with_channel(self.channel);
        for (appender, selector) in self.destinations {
            logger.add_appender(appender, selector);
        }
        logger.processors = self.processors;
        logger
    }
}

impl Default for MultiDestinationLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
