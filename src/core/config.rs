//! Construction-time configuration for the single-sink logger
//!
//! Keys mirror the setters of [`SingleSinkLogger`](super::SingleSinkLogger):
//!
//! ```json
//! {
//!   "filename": "/var/log/app.log",
//!   "logFormat": "{datetime} {LEVEL}: {message} {context}",
//!   "dateFormat": "%Y-%m-%d %H:%M:%S",
//!   "level": "info",
//!   "eol": "\n"
//! }
//! ```
//!
//! Every key is optional. `level` may be a name or a rank `0..=7`.

use super::error::Result;
use super::log_level::{LogLevel, ToLogLevel};
use serde::{Deserialize, Serialize};

/// A level as it appears in configuration: either a name or a rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelSpec {
    Rank(i64),
    Name(String),
}

impl ToLogLevel for LevelSpec {
    fn to_log_level(&self) -> Result<LogLevel> {
        match self {
            LevelSpec::Rank(rank) => rank.to_log_level(),
            LevelSpec::Name(name) => name.to_log_level(),
        }
    }
}

impl From<LogLevel> for LevelSpec {
    fn from(level: LogLevel) -> Self {
        LevelSpec::Name(level.as_str().to_string())
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        LevelSpec::Name(name.to_string())
    }
}

impl From<i64> for LevelSpec {
    fn from(rank: i64) -> Self {
        LevelSpec::Rank(rank)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<LevelSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eol: Option<String>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    #[must_use]
    pub fn with_log_format(mut self, log_format: impl Into<String>) -> Self {
        self.log_format = Some(log_format.into());
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = Some(date_format.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<LevelSpec>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = Some(eol.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;

    #[test]
    fn test_from_json_all_keys() {
        let config = LoggerConfig::from_json(
            r#"{"filename":"app.log","logFormat":"{message}","dateFormat":"%H:%M","level":"INFO","eol":"|"}"#,
        )
        .expect("valid config");

        assert_eq!(config.filename.as_deref(), Some("app.log"));
        assert_eq!(config.log_format.as_deref(), Some("{message}"));
        assert_eq!(config.date_format.as_deref(), Some("%H:%M"));
        assert_eq!(config.level, Some(LevelSpec::Name("INFO".to_string())));
        assert_eq!(config.eol.as_deref(), Some("|"));
    }

    #[test]
    fn test_level_by_rank() {
        let config = LoggerConfig::from_json(r#"{"level":3}"#).expect("valid config");
        let level = config.level.expect("level set").to_log_level().unwrap();
        assert_eq!(level, LogLevel::Error);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = LoggerConfig::from_json("{}").expect("valid config");
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            LoggerConfig::from_json(r#"{"rotate":true}"#),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_builder_methods() {
        let config = LoggerConfig::new()
            .with_level(LogLevel::Notice)
            .with_eol("")
            .with_filename("");
        assert_eq!(config.level, Some(LevelSpec::Name("notice".to_string())));
        assert_eq!(config.eol.as_deref(), Some(""));
        assert_eq!(config.filename.as_deref(), Some(""));
    }
}
