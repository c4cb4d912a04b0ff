//! Timestamp formatting utilities
//!
//! Renders the `{datetime}` placeholder. Record timestamps carry the local
//! offset they were taken in, so every format keeps that offset.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// strftime pattern used when no date format is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use filtered_logger::core::TimestampFormat;
///
/// // Apache log format
/// let format = TimestampFormat::custom("%d/%b/%Y:%H:%M:%S %z").unwrap();
/// assert!(!format.is_numeric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123+02:00`
    Iso8601,

    /// RFC 3339 with seconds: `2025-01-08T10:30:45+02:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format, validated by [`TimestampFormat::custom`]
    Custom(String),
}

impl Default for TimestampFormat {
    fn default() -> Self {
        TimestampFormat::Custom(DEFAULT_DATE_FORMAT.to_string())
    }
}

impl TimestampFormat {
    /// Build a custom format, rejecting empty patterns and unknown specifiers
    pub fn custom(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(LoggerError::invalid_argument(
                "dateFormat",
                "date format must not be empty",
            ));
        }
        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::invalid_argument(
                "dateFormat",
                format!("'{}' is not a valid strftime pattern", pattern),
            ));
        }
        Ok(TimestampFormat::Custom(pattern))
    }

    #[must_use]
    pub fn format(&self, datetime: &DateTime<FixedOffset>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.to_rfc3339_opts(SecondsFormat::Millis, false),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, false),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::new();
                // only reachable with a pattern that bypassed `custom`
                if write!(out, "{}", datetime.format(pattern)).is_err() {
                    return datetime.to_rfc3339();
                }
                out
            }
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<FixedOffset> {
        // 2025-01-08 10:30:45.123456 +02:00
        FixedOffset::east_opt(2 * 3600)
            .expect("valid offset")
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123+02:00");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45+02:00");
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        assert_eq!(secs * 1000 + 123, millis);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::custom("%Y/%m/%d %H:%M").unwrap();
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_default_format() {
        let result = TimestampFormat::default().format(&fixed_datetime());
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_custom_rejects_empty_and_invalid() {
        assert!(matches!(
            TimestampFormat::custom(""),
            Err(LoggerError::InvalidArgument { .. })
        ));
        assert!(matches!(
            TimestampFormat::custom("%Q"),
            Err(LoggerError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_is_numeric() {
        assert!(!TimestampFormat::Iso8601.is_numeric());
        assert!(TimestampFormat::Unix.is_numeric());
        assert!(TimestampFormat::UnixMillis.is_numeric());
        assert!(!TimestampFormat::default().is_numeric());
    }
}
