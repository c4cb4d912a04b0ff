//! Template-based line formatting
//!
//! Recognized placeholders:
//!
//! | placeholder  | renders as                                             |
//! |--------------|--------------------------------------------------------|
//! | `{datetime}` | record timestamp in the configured date format         |
//! | `{level}`    | lowercase level name                                   |
//! | `{LEVEL}`    | uppercase level name                                   |
//! | `{message}`  | record message                                         |
//! | `{context}`  | context as a JSON object, empty string when no fields  |
//!
//! Anything else between braces is copied through literally.

use super::error::{LoggerError, Result};
use super::log_record::LogRecord;
use super::timestamp::TimestampFormat;

pub const DEFAULT_LOG_FORMAT: &str = "[{datetime}] [{level}] {message} {context}";
pub const DEFAULT_EOL: &str = "\n";

/// Render `record` through `template`, then append `eol`
pub fn format_line(
    record: &LogRecord,
    template: &str,
    date_format: &TimestampFormat,
    eol: &str,
) -> String {
    let mut out = String::with_capacity(template.len() + record.message().len() + eol.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        let Some(close) = candidate.find('}') else {
            out.push_str(candidate);
            rest = "";
            break;
        };

        match &candidate[1..close] {
            "datetime" => out.push_str(&date_format.format(record.datetime())),
            "level" => out.push_str(record.level().as_str()),
            "LEVEL" => out.push_str(record.level().as_upper_str()),
            "message" => out.push_str(record.message()),
            "context" => out.push_str(&record.context().to_json_string()),
            _ => {
                // not a placeholder; keep the brace and rescan after it
                out.push('{');
                rest = &candidate[1..];
                continue;
            }
        }
        rest = &candidate[close + 1..];
    }

    out.push_str(rest);
    out.push_str(eol);
    out
}

/// Template, date format and line terminator applied to every record
///
/// # Examples
///
/// ```
/// use filtered_logger::core::LineFormatter;
///
/// let mut formatter = LineFormatter::new();
/// formatter.set_log_format("{LEVEL}: {message}").unwrap();
/// formatter.set_eol("");
/// assert!(formatter.set_date_format("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormatter {
    template: String,
    date_format: TimestampFormat,
    eol: String,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self {
            template: DEFAULT_LOG_FORMAT.to_string(),
            date_format: TimestampFormat::default(),
            eol: DEFAULT_EOL.to_string(),
        }
    }
}

impl LineFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self, record: &LogRecord) -> String {
        format_line(record, &self.template, &self.date_format, &self.eol)
    }

    /// Replace the template. Must not be empty.
    pub fn set_log_format(&mut self, template: impl Into<String>) -> Result<()> {
        let template = template.into();
        if template.is_empty() {
            return Err(LoggerError::invalid_argument(
                "logFormat",
                "log format must not be empty",
            ));
        }
        self.template = template;
        Ok(())
    }

    /// Replace the date format with a strftime pattern. Must not be empty.
    pub fn set_date_format(&mut self, pattern: impl Into<String>) -> Result<()> {
        self.date_format = TimestampFormat::custom(pattern)?;
        Ok(())
    }

    pub fn set_timestamp_format(&mut self, format: TimestampFormat) {
        self.date_format = format;
    }

    /// Replace the line terminator. An empty terminator is allowed.
    pub fn set_eol(&mut self, eol: impl Into<String>) {
        self.eol = eol.into();
    }

    pub fn log_format(&self) -> &str {
        &self.template
    }

    pub fn date_format(&self) -> &TimestampFormat {
        &self.date_format
    }

    pub fn eol(&self) -> &str {
        &self.eol
    }
}
