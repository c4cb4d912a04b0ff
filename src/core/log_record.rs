//! Log record structure and its builder

use super::log_context::{FieldValue, LogContext};
use super::log_level::LogLevel;
use chrono::{DateTime, FixedOffset, Local};
use serde::Serialize;

/// Severity tag carried for compatibility with structured consumers. Every
/// record uses the same value, filtering never looks at it.
pub const MAX_SEVERITY_TAG: i64 = 2_147_483_647;

/// Immutable unit of data produced per log call
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    message: String,
    context: LogContext,
    #[serde(rename = "level_name")]
    level: LogLevel,
    datetime: DateTime<FixedOffset>,
    extra: LogContext,
    #[serde(rename = "level")]
    severity_tag: i64,
    channel: String,
}

impl LogRecord {
    /// Start building a record for `level`
    pub fn builder(level: LogLevel, message: impl Into<String>) -> RecordBuilder {
        RecordBuilder::new(level, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &LogContext {
        &self.context
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn level_name(&self) -> &'static str {
        self.level.as_str()
    }

    pub fn datetime(&self) -> &DateTime<FixedOffset> {
        &self.datetime
    }

    /// Fields computed by processors during dispatch
    pub fn extra(&self) -> &LogContext {
        &self.extra
    }

    pub fn severity_tag(&self) -> i64 {
        self.severity_tag
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Return a copy of this record carrying one more computed field
    #[must_use]
    pub fn with_extra<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.extra.add_field(key, value);
        self
    }
}

/// Builder for [`LogRecord`]
///
/// # Example
///
/// ```
/// use filtered_logger::prelude::*;
///
/// let record = RecordBuilder::new(LogLevel::Info, "Request processed")
///     .field("user_id", 12345)
///     .field("latency_ms", 42.5)
///     .channel("http")
///     .build();
///
/// assert_eq!(record.level_name(), "info");
/// assert_eq!(record.context().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    level: LogLevel,
    message: String,
    context: LogContext,
    channel: String,
    datetime: Option<DateTime<FixedOffset>>,
}

impl RecordBuilder {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            context: LogContext::new(),
            channel: String::new(),
            datetime: None,
        }
    }

    /// Replace the whole context
    #[must_use]
    pub fn context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    /// Add a structured field to the context
    #[must_use]
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    #[must_use]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Pin the timestamp instead of reading the local clock at build time
    #[must_use]
    pub fn datetime(mut self, datetime: DateTime<FixedOffset>) -> Self {
        self.datetime = Some(datetime);
        self
    }

    pub fn build(self) -> LogRecord {
        LogRecord {
            message: self.message,
            context: self.context,
            level: self.level,
            datetime: self
                .datetime
                .unwrap_or_else(|| Local::now().fixed_offset()),
            extra: LogContext::new(),
            severity_tag: MAX_SEVERITY_TAG,
            channel: self.channel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_builder_defaults() {
        let record = RecordBuilder::new(LogLevel::Warning, "disk almost full").build();

        assert_eq!(record.message(), "disk almost full");
        assert_eq!(record.level(), LogLevel::Warning);
        assert_eq!(record.level_name(), "warning");
        assert!(record.context().is_empty());
        assert!(record.extra().is_empty());
        assert_eq!(record.severity_tag(), MAX_SEVERITY_TAG);
        assert_eq!(record.channel(), "");
    }

    #[test]
    fn test_builder_keeps_subsecond_precision() {
        let dt = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .unwrap()
            + chrono::Duration::microseconds(654321);
        let record = RecordBuilder::new(LogLevel::Info, "x").datetime(dt).build();

        assert_eq!(record.datetime().timestamp_subsec_micros(), 654321);
    }

    #[test]
    fn test_with_extra_does_not_touch_context() {
        let record = RecordBuilder::new(LogLevel::Debug, "x")
            .field("a", 1)
            .build()
            .with_extra("computed", true);

        assert_eq!(record.context().len(), 1);
        assert_eq!(record.extra().get("computed"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_serialized_keys() {
        let record = RecordBuilder::new(LogLevel::Notice, "hello")
            .field("foo", "bar")
            .channel("app")
            .build();
        let value = serde_json::to_value(&record).expect("serialize");

        assert_eq!(value["message"], "hello");
        assert_eq!(value["level_name"], "notice");
        assert_eq!(value["level"], MAX_SEVERITY_TAG);
        assert_eq!(value["channel"], "app");
        assert_eq!(value["context"]["foo"], "bar");
        assert!(value["datetime"].is_string());
    }
}
