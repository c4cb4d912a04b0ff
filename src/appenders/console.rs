//! Console appender implementation

use crate::core::{Appender, LineFormatter, LogLevel, LogRecord, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

pub struct ConsoleAppender {
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
    formatter: LineFormatter,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_colors(cfg!(feature = "console"))
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            formatter: LineFormatter::new(),
        }
    }

    /// Replace the line formatter for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use filtered_logger::appenders::ConsoleAppender;
    /// use filtered_logger::LineFormatter;
    ///
    /// let mut formatter = LineFormatter::new();
    /// formatter.set_log_format("{LEVEL} {message}").unwrap();
    /// let appender = ConsoleAppender::new().with_formatter(formatter);
    /// ```
    #[must_use]
    pub fn with_formatter(mut self, formatter: LineFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    fn render(&self, record: &LogRecord) -> String {
        let line = self.formatter.format(record);
        #[cfg(feature = "console")]
        if self.use_colors {
            return line.color(record.level().color_code()).to_string();
        }
        line
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let output = self.render(record);

        // Error and anything more severe goes to stderr, the rest to stdout
        if record.level().passes_threshold(LogLevel::Error) {
            std::io::stderr().write_all(output.as_bytes())?;
        } else {
            std::io::stdout().write_all(output.as_bytes())?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
