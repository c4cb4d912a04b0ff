//! # Filtered Logger
//!
//! A small, synchronous structured-logging facade built around the eight
//! syslog severities.
//!
//! ## Features
//!
//! - **Per-destination filters**: each appender carries a threshold or a filter
//!   expression such as `"all -debug"` or `"none +error +critical"`
//! - **Processors**: transform a record once before it reaches any destination
//! - **Single-sink logger**: one file (or stderr), one threshold, one template
//! - **Templates**: `{datetime}`, `{level}`, `{LEVEL}`, `{message}`, `{context}`
//!
//! Every call filters, formats and writes before it returns. Nothing is queued
//! and no type here synchronizes access across threads.

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, JsonAppender, MemoryAppender, SharedBuffer};
    pub use crate::core::{
        Appender, DispatchMetrics, FieldValue, LevelFilter, LevelSpec, LineFormatter, Log,
        LogContext, LogLevel, LogRecord, Logger, LoggerConfig, LoggerError,
        MultiDestinationLogger, RecordBuilder, Result, Selector, SingleSinkLogger,
        TimestampFormat, ToLogLevel,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender, JsonAppender, MemoryAppender, SharedBuffer};
pub use crate::core::{
    accepts, compare_threshold, format_line, normalize, Appender, Destination,
    DestinationRegistry, DispatchMetrics, FieldValue, LevelFilter, LevelSpec, LineFormatter, Log,
    LogContext, LogLevel, LogRecord, Logger, LoggerConfig, LoggerError, MultiDestinationLogger,
    MultiDestinationLoggerBuilder, Processor, RecordBuilder, Result, Selector, SingleSinkLogger,
    TimestampFormat, ToLogLevel, ALL_LEVELS,
};
