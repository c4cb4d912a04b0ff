//! Log level definitions
//!
//! The eight syslog severities, most severe first. The rank of a level is its
//! position in [`ALL_LEVELS`]: `0` is `emergency`, `7` is `debug`. A lower rank
//! means a more severe record.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    Info = 6,
    Debug = 7,
}

/// Every level ordered by rank.
pub const ALL_LEVELS: [LogLevel; 8] = [
    LogLevel::Emergency,
    LogLevel::Alert,
    LogLevel::Critical,
    LogLevel::Error,
    LogLevel::Warning,
    LogLevel::Notice,
    LogLevel::Info,
    LogLevel::Debug,
];

impl LogLevel {
    /// Numeric rank used for threshold comparisons
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        ALL_LEVELS.get(usize::from(rank)).copied()
    }

    /// Canonical lowercase name
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Emergency => "emergency",
            LogLevel::Alert => "alert",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    pub const fn as_upper_str(self) -> &'static str {
        match self {
            LogLevel::Emergency => "EMERGENCY",
            LogLevel::Alert => "ALERT",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Notice => "NOTICE",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// True when this level is at least as severe as `threshold`
    #[inline]
    pub fn passes_threshold(self, threshold: LogLevel) -> bool {
        self.rank() <= threshold.rank()
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Emergency | LogLevel::Alert => BrightRed,
            LogLevel::Critical | LogLevel::Error => Red,
            LogLevel::Warning => Yellow,
            LogLevel::Notice => Cyan,
            LogLevel::Info => Green,
            LogLevel::Debug => Blue,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        ALL_LEVELS
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LoggerError::invalid_level(s))
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(rank: u8) -> Result<Self> {
        LogLevel::from_rank(rank).ok_or_else(|| LoggerError::invalid_level(rank.to_string()))
    }
}

/// Anything that can name a level: a [`LogLevel`], a case-insensitive name or a rank `0..=7`.
pub trait ToLogLevel {
    fn to_log_level(&self) -> Result<LogLevel>;
}

impl ToLogLevel for LogLevel {
    fn to_log_level(&self) -> Result<LogLevel> {
        Ok(*self)
    }
}

impl ToLogLevel for str {
    fn to_log_level(&self) -> Result<LogLevel> {
        self.parse()
    }
}

impl ToLogLevel for String {
    fn to_log_level(&self) -> Result<LogLevel> {
        self.parse()
    }
}

impl<T: ToLogLevel + ?Sized> ToLogLevel for &T {
    fn to_log_level(&self) -> Result<LogLevel> {
        (**self).to_log_level()
    }
}

macro_rules! impl_rank_to_log_level {
    ($($ty:ty),*) => {
        $(
            impl ToLogLevel for $ty {
                fn to_log_level(&self) -> Result<LogLevel> {
                    u8::try_from(*self)
                        .ok()
                        .and_then(LogLevel::from_rank)
                        .ok_or_else(|| LoggerError::invalid_level(self.to_string()))
                }
            }
        )*
    };
}

impl_rank_to_log_level!(u8, u16, u32, u64, usize, i8, i16, i32, i64);

/// Resolve a name or rank to its canonical level
pub fn normalize(input: impl ToLogLevel) -> Result<LogLevel> {
    input.to_log_level()
}

/// True iff `rank(level) <= rank(threshold)`
pub fn compare_threshold(level: impl ToLogLevel, threshold: impl ToLogLevel) -> Result<bool> {
    Ok(normalize(level)?.passes_threshold(normalize(threshold)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_table_order() {
        for (idx, level) in ALL_LEVELS.iter().enumerate() {
            assert_eq!(usize::from(level.rank()), idx);
            assert_eq!(LogLevel::from_rank(level.rank()), Some(*level));
        }
        assert_eq!(LogLevel::from_rank(8), None);
    }

    #[test]
    fn test_normalize_names_and_ranks() {
        assert_eq!(normalize("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(normalize("debug").unwrap(), LogLevel::Debug);
        assert_eq!(normalize(7).unwrap(), LogLevel::Debug);
        assert_eq!(normalize("Warning").unwrap(), LogLevel::Warning);
        assert_eq!(normalize(0u8).unwrap(), LogLevel::Emergency);
        assert_eq!(normalize(LogLevel::Notice).unwrap(), LogLevel::Notice);
    }

    #[test]
    fn test_normalize_rejects_unknown() {
        assert!(matches!(normalize("warn"), Err(LoggerError::InvalidLevel { .. })));
        assert!(matches!(normalize(8), Err(LoggerError::InvalidLevel { .. })));
        assert!(matches!(normalize(-1), Err(LoggerError::InvalidLevel { .. })));
        assert!(matches!(normalize(""), Err(LoggerError::InvalidLevel { .. })));
    }

    #[test]
    fn test_compare_threshold() {
        assert!(compare_threshold("warning", "debug").unwrap());
        assert!(!compare_threshold("warning", "error").unwrap());
        assert!(compare_threshold("emergency", "error").unwrap());
        assert!(compare_threshold("error", "error").unwrap());
        assert!(compare_threshold("bogus", "error").is_err());
    }

    #[test]
    fn test_display_and_upper() {
        assert_eq!(LogLevel::Critical.to_string(), "critical");
        assert_eq!(LogLevel::Critical.as_upper_str(), "CRITICAL");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&LogLevel::Notice).expect("serialize");
        assert_eq!(json, "\"notice\"");
        let level: LogLevel = serde_json::from_str("\"alert\"").expect("deserialize");
        assert_eq!(level, LogLevel::Alert);
    }
}
