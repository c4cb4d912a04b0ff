//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod destination;
pub mod dispatcher;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod log_context;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod single_sink;
pub mod timestamp;

pub use appender::Appender;
pub use config::{LevelSpec, LoggerConfig};
pub use destination::{Destination, DestinationRegistry, Selector};
pub use dispatcher::{MultiDestinationLogger, MultiDestinationLoggerBuilder, Processor};
pub use error::{LoggerError, Result};
pub use filter::{accepts, LevelFilter};
pub use formatter::{format_line, LineFormatter, DEFAULT_EOL, DEFAULT_LOG_FORMAT};
pub use log_context::{FieldValue, LogContext};
pub use log_level::{compare_threshold, normalize, LogLevel, ToLogLevel, ALL_LEVELS};
pub use log_record::{LogRecord, RecordBuilder, MAX_SEVERITY_TAG};
pub use logger::{Log, Logger};
pub use metrics::DispatchMetrics;
pub use single_sink::SingleSinkLogger;
pub use timestamp::{TimestampFormat, DEFAULT_DATE_FORMAT};
