//! Common logging capability shared by both logger variants

use super::{
    config::LoggerConfig,
    dispatcher::MultiDestinationLogger,
    error::Result,
    log_context::LogContext,
    log_level::LogLevel,
    single_sink::SingleSinkLogger,
};

/// Accepts a level, a message and a context
///
/// Implementors provide [`Log::log_with_context`]; every other method forwards
/// to it.
pub trait Log {
    fn log_with_context(&mut self, level: LogLevel, message: &str, context: LogContext)
        -> Result<()>;

    fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        self.log_with_context(level, message, LogContext::new())
    }

    #[inline]
    fn emergency(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Emergency, message)
    }

    #[inline]
    fn alert(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Alert, message)
    }

    #[inline]
    fn critical(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Critical, message)
    }

    #[inline]
    fn error(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    fn warning(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Warning, message)
    }

    #[inline]
    fn notice(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Notice, message)
    }

    #[inline]
    fn info(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    fn debug(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }
}

impl Log for MultiDestinationLogger {
    fn log_with_context(
        &mut self,
        level: LogLevel,
        message: &str,
        context: LogContext,
    ) -> Result<()> {
        self.add_record(level, message, context).map(|_| ())
    }
}

impl Log for SingleSinkLogger {
    fn log_with_context(
        &mut self,
        level: LogLevel,
        message: &str,
        context: LogContext,
    ) -> Result<()> {
        self.log_at(level, message, context)
    }
}

/// One of the two logger variants, chosen at construction
///
/// # Example
/// ```
/// use filtered_logger::prelude::*;
///
/// let mut logger = Logger::multi(
///     MultiDestinationLogger::builder()
///         .appender(MemoryAppender::new(), "all")
///         .build(),
/// );
/// logger.info("routed by filter").unwrap();
///
/// let mut logger = Logger::single(LoggerConfig::new().with_level("error")).unwrap();
/// logger.debug("below threshold, dropped").unwrap();
/// ```
pub enum Logger {
    Multi(MultiDestinationLogger),
    Single(SingleSinkLogger),
}

impl Logger {
    #[must_use]
    pub fn multi(logger: MultiDestinationLogger) -> Self {
        Logger::Multi(logger)
    }

    pub fn single(config: LoggerConfig) -> Result<Self> {
        SingleSinkLogger::with_config(config).map(Logger::Single)
    }

    pub fn as_multi(&self) -> Option<&MultiDestinationLogger> {
        match self {
            Logger::Multi(logger) => Some(logger),
            Logger::Single(_) => None,
        }
    }

    pub fn as_single(&self) -> Option<&SingleSinkLogger> {
        match self {
            Logger::Single(logger) => Some(logger),
            Logger::Multi(_) => None,
        }
    }
}

impl Log for Logger {
    fn log_with_context(
        &mut self,
        level: LogLevel,
        message: &str,
        context: LogContext,
    ) -> Result<()> {
        match self {
            Logger::Multi(logger) => logger.log_with_context(level, message, context),
            Logger::Single(logger) => logger.log_with_context(level, message, context),
        }
    }
}

impl From<MultiDestinationLogger> for Logger {
    fn from(logger: MultiDestinationLogger) -> Self {
        Logger::Multi(logger)
    }
}

impl From<SingleSinkLogger> for Logger {
    fn from(logger: SingleSinkLogger) -> Self {
        Logger::Single(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::{MemoryAppender, SharedBuffer};
    use crate::core::log_level::ALL_LEVELS;

    fn log_every_level(logger: &mut dyn Log) {
        logger.emergency("emergency").unwrap();
        logger.alert("alert").unwrap();
        logger.critical("critical").unwrap();
        logger.error("error").unwrap();
        logger.warning("warning").unwrap();
        logger.notice("notice").unwrap();
        logger.info("info").unwrap();
        logger.debug("debug").unwrap();
    }

    #[test]
    fn test_convenience_methods_forward_their_level() {
        let sink = MemoryAppender::new();
        let mut logger = Logger::multi(
            MultiDestinationLogger::builder()
                .appender(sink.clone(), "all")
                .build(),
        );
        log_every_level(&mut logger);

        let levels: Vec<LogLevel> = sink.records().iter().map(|r| r.level()).collect();
        assert_eq!(levels, ALL_LEVELS.to_vec());
        assert_eq!(sink.messages()[3], "error");
    }

    #[test]
    fn test_single_variant_through_trait() {
        let buffer = SharedBuffer::new();
        let mut single = SingleSinkLogger::with_config(
            LoggerConfig::new()
                .with_level("notice")
                .with_log_format("{level}")
                .with_eol(","),
        )
        .unwrap();
        single.set_writer(buffer.clone());

        let mut logger = Logger::from(single);
        log_every_level(&mut logger);

        assert_eq!(
            buffer.contents(),
            "emergency,alert,critical,error,warning,notice,"
        );
        assert!(logger.as_single().is_some());
        assert!(logger.as_multi().is_none());
    }

    #[test]
    fn test_single_rejects_invalid_config() {
        assert!(Logger::single(LoggerConfig::new().with_log_format("")).is_err());
        assert!(Logger::single(LoggerConfig::new().with_level("loud")).is_err());
    }
}
