//! Per-destination level filter expressions
//!
//! A filter expression is a small, permissive language over level names:
//!
//! ```text
//! <expr> ::= "all" {"-" <level>} | "none" {"+" <level>}
//! ```
//!
//! * An expression that starts with `none` rejects every level except those
//!   named after a `+` marker.
//! * Any other expression (including `all`, an empty string or a bare level
//!   name) accepts every level except those named after a `-` marker.
//! * Markers may be separated by whitespace or written back to back
//!   (`none+info+error`). Matching is case-insensitive and exact.
//! * Unrecognized tokens are ignored.

use super::log_level::LogLevel;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Parsed form of a filter expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelFilter {
    /// Accept everything except the listed names
    AcceptAll { excluded: BTreeSet<String> },
    /// Reject everything except the listed names
    AcceptNone { included: BTreeSet<String> },
}

impl LevelFilter {
    /// Filter accepting every level
    pub fn all() -> Self {
        LevelFilter::AcceptAll {
            excluded: BTreeSet::new(),
        }
    }

    /// Filter rejecting every level
    pub fn none() -> Self {
        LevelFilter::AcceptNone {
            included: BTreeSet::new(),
        }
    }

    /// Parse an expression. `None` and blank input yield [`LevelFilter::all`].
    pub fn parse(expression: Option<&str>) -> Self {
        let Some(expression) = expression else {
            return Self::all();
        };

        let expression = expression.trim().to_lowercase();
        let reject_by_default = expression.starts_with("none");
        let marker = if reject_by_default { '+' } else { '-' };
        let names = marked_names(&expression, marker);

        if reject_by_default {
            LevelFilter::AcceptNone { included: names }
        } else {
            LevelFilter::AcceptAll { excluded: names }
        }
    }

    /// Decide whether a record with the given level name passes
    pub fn accepts_name(&self, level_name: &str) -> bool {
        let level_name = level_name.to_lowercase();
        match self {
            LevelFilter::AcceptAll { excluded } => !excluded.contains(&level_name),
            LevelFilter::AcceptNone { included } => included.contains(&level_name),
        }
    }

    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        self.accepts_name(level.as_str())
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for LevelFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LevelFilter::parse(Some(s)))
    }
}

impl From<&str> for LevelFilter {
    fn from(s: &str) -> Self {
        LevelFilter::parse(Some(s))
    }
}

impl From<String> for LevelFilter {
    fn from(s: String) -> Self {
        LevelFilter::parse(Some(&s))
    }
}

impl fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (keyword, marker, names) = match self {
            LevelFilter::AcceptAll { excluded } => ("all", '-', excluded),
            LevelFilter::AcceptNone { included } => ("none", '+', included),
        };
        f.write_str(keyword)?;
        for name in names {
            write!(f, " {}{}", marker, name)?;
        }
        Ok(())
    }
}

/// Collect every name that directly follows `marker`. A name runs until
/// whitespace or the next `+`/`-`.
fn marked_names(expression: &str, marker: char) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    let mut rest = expression;

    while let Some(pos) = rest.find(marker) {
        rest = &rest[pos + marker.len_utf8()..];
        let end = rest
            .find(|c: char| c.is_whitespace() || c == '+' || c == '-')
            .unwrap_or(rest.len());
        if end > 0 {
            names.insert(rest[..end].to_string());
        }
        rest = &rest[end..];
    }

    names
}

/// Evaluate `expression` against `level_name` without keeping the parsed form
pub fn accepts(level_name: &str, expression: Option<&str>) -> bool {
    LevelFilter::parse(expression).accepts_name(level_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::ALL_LEVELS;

    #[test]
    fn test_absent_or_empty_accepts_everything() {
        for level in ALL_LEVELS {
            assert!(accepts(level.as_str(), None));
            assert!(accepts(level.as_str(), Some("")));
            assert!(accepts(level.as_str(), Some("   ")));
        }
    }

    #[test]
    fn test_all_accepts_everything() {
        for level in ALL_LEVELS {
            assert!(accepts(level.as_str(), Some("all")));
        }
    }

    #[test]
    fn test_none_rejects_everything() {
        for level in ALL_LEVELS {
            assert!(!accepts(level.as_str(), Some("none")));
        }
    }

    #[test]
    fn test_none_with_inclusion() {
        assert!(accepts("info", Some("none+info")));
        assert!(!accepts("error", Some("none+info")));
        assert!(accepts("error", Some("none +info +error")));
        assert!(accepts("info", Some("none+info+error")));
        assert!(!accepts("debug", Some("none +info +error")));
    }

    #[test]
    fn test_all_with_exclusion() {
        assert!(accepts("info", Some("all -error")));
        assert!(!accepts("error", Some("all -error")));
        assert!(!accepts("debug", Some("all -error -debug")));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(!accepts("ERROR", Some("All -Error")));
        assert!(accepts("INFO", Some("NONE +INFO")));
    }

    #[test]
    fn test_bare_level_name_is_permissive() {
        for level in ALL_LEVELS {
            assert!(accepts(level.as_str(), Some("debug")));
        }
    }

    #[test]
    fn test_markers_of_the_other_mode_are_ignored() {
        // inclusions mean nothing in accept-all mode and vice versa
        assert!(accepts("info", Some("all +info")));
        assert!(!accepts("info", Some("none -info")));
    }

    #[test]
    fn test_exact_match_only() {
        assert!(accepts("error", Some("all -err")));
        assert!(!accepts("info", Some("none +inf")));
    }

    #[test]
    fn test_unrecognized_tokens_ignored() {
        assert!(accepts("info", Some("all whatever -bogus")));
        assert!(!accepts("info", Some("none garbage")));
    }

    #[test]
    fn test_display_normalizes() {
        let filter = LevelFilter::parse(Some("ALL -Error  -debug"));
        assert_eq!(filter.to_string(), "all -debug -error");
        let filter: LevelFilter = "none+info".into();
        assert_eq!(filter.to_string(), "none +info");
    }
}
