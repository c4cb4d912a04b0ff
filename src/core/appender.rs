//! Appender trait for log output destinations

use super::{error::Result, log_record::LogRecord};

/// A sink receiving structured records from the multi-destination logger
pub trait Appender: Send {
    fn append(&mut self, record: &LogRecord) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
