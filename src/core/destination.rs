//! Ordered registry of destinations for the multi-destination logger
//!
//! The front of the registry behaves like a stack (`push`/`pop`), the back
//! like an array (`add`). Iteration always runs front to back.

use super::appender::Appender;
use super::filter::LevelFilter;
use super::log_level::LogLevel;
use std::fmt;

/// Decides which records a destination wants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Accept records at least as severe as this level
    Threshold(LogLevel),
    /// Accept records the parsed filter expression lets through
    Filter(LevelFilter),
}

impl Selector {
    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        match self {
            Selector::Threshold(threshold) => level.passes_threshold(*threshold),
            Selector::Filter(filter) => filter.accepts(level),
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Selector::Filter(LevelFilter::all())
    }
}

impl From<LogLevel> for Selector {
    fn from(threshold: LogLevel) -> Self {
        Selector::Threshold(threshold)
    }
}

impl From<LevelFilter> for Selector {
    fn from(filter: LevelFilter) -> Self {
        Selector::Filter(filter)
    }
}

impl From<&str> for Selector {
    fn from(expression: &str) -> Self {
        Selector::Filter(LevelFilter::parse(Some(expression)))
    }
}

impl From<Option<&str>> for Selector {
    fn from(expression: Option<&str>) -> Self {
        Selector::Filter(LevelFilter::parse(expression))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Threshold(level) => write!(f, "<= {}", level),
            Selector::Filter(filter) => write!(f, "{}", filter),
        }
    }
}

/// An appender paired with its selector
pub struct Destination {
    appender: Box<dyn Appender>,
    selector: Selector,
}

impl Destination {
    pub fn new(appender: Box<dyn Appender>, selector: impl Into<Selector>) -> Self {
        Self {
            appender,
            selector: selector.into(),
        }
    }

    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.selector.accepts(level)
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn appender(&self) -> &dyn Appender {
        self.appender.as_ref()
    }

    pub fn appender_mut(&mut self) -> &mut dyn Appender {
        self.appender.as_mut()
    }

    pub fn into_appender(self) -> Box<dyn Appender> {
        self.appender
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("appender", &self.appender.name())
            .field("selector", &self.selector)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct DestinationRegistry {
    destinations: Vec<Destination>,
}

impl DestinationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register at the back
    pub fn add(&mut self, appender: Box<dyn Appender>, selector: impl Into<Selector>) {
        self.destinations.push(Destination::new(appender, selector));
    }

    /// Register at the front
    pub fn push(&mut self, appender: Box<dyn Appender>, selector: impl Into<Selector>) {
        self.destinations
            .insert(0, Destination::new(appender, selector));
    }

    /// Remove the front destination and hand its appender back
    pub fn pop(&mut self) -> Option<Box<dyn Appender>> {
        if self.destinations.is_empty() {
            return None;
        }
        Some(self.destinations.remove(0).into_appender())
    }

    pub fn clear(&mut self) {
        self.destinations.clear();
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Destination> {
        self.destinations.get(index)
    }

    /// Index of the first destination accepting `level`
    pub fn first_accepting(&self, level: LogLevel) -> Option<usize> {
        self.destinations.iter().position(|d| d.accepts(level))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.destinations.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Destination> {
        self.destinations.iter_mut()
    }
}
