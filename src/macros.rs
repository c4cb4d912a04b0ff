//! Logging macros for ergonomic log message formatting.
//!
//! Each macro formats its arguments like `format!` and forwards to the
//! [`Log`](crate::Log) trait, so it works with either logger variant. The
//! macros evaluate to the `Result` returned by the logger.
//!
//! # Examples
//!
//! ```
//! use filtered_logger::prelude::*;
//! use filtered_logger::info;
//!
//! let mut logger = SingleSinkLogger::new();
//! logger.set_writer(SharedBuffer::new());
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use filtered_logger::prelude::*;
/// # let mut logger = MultiDestinationLogger::new();
/// use filtered_logger::log;
/// log!(logger, LogLevel::Notice, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.log($level, &format!($($arg)+))
    }};
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Emergency, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use filtered_logger::prelude::*;
/// # let mut logger = MultiDestinationLogger::new();
/// use filtered_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use filtered_logger::prelude::*;
/// # let mut logger = MultiDestinationLogger::new();
/// use filtered_logger::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::MemoryAppender;
    use crate::core::{LogLevel, MultiDestinationLogger};

    fn capturing() -> (MultiDestinationLogger, MemoryAppender) {
        let sink = MemoryAppender::new();
        let logger = MultiDestinationLogger::builder()
            .appender(sink.clone(), "all")
            .build();
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (mut logger, sink) = capturing();
        log!(logger, LogLevel::Info, "Test message").unwrap();
        log!(logger, LogLevel::Info, "Formatted: {}", 42).unwrap();
        assert_eq!(sink.messages(), vec!["Test message", "Formatted: 42"]);
    }

    #[test]
    fn test_level_macros() {
        let (mut logger, sink) = capturing();
        emergency!(logger, "e{}", 0).unwrap();
        alert!(logger, "a").unwrap();
        critical!(logger, "c").unwrap();
        error!(logger, "Code: {}", 500).unwrap();
        warning!(logger, "Retry {} of {}", 1, 3).unwrap();
        notice!(logger, "n").unwrap();
        info!(logger, "Items: {}", 100).unwrap();
        debug!(logger, "Count: {}", 5).unwrap();

        let levels: Vec<LogLevel> = sink.records().iter().map(|r| r.level()).collect();
        assert_eq!(levels, crate::core::ALL_LEVELS.to_vec());
        assert!(sink.has_record("Retry 1 of 3", "warning"));
    }

    #[test]
    fn test_macro_through_mutable_reference() {
        let (mut logger, sink) = capturing();
        let logger_ref = &mut logger;
        info!(logger_ref, "via reference").unwrap();
        assert_eq!(sink.len(), 1);
    }
}
