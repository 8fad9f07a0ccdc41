//! Syslog-style message priority levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LoggerError;

/// Message priority. Higher-priority messages have lower numeric value,
/// following the classic syslog(3) taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Priority {
    /// The system is unusable
    Emergency = 0,
    /// Critical conditions
    Critical = 1,
    /// Error conditions
    Error = 2,
    /// Warning conditions
    #[default]
    Warning = 3,
    /// Normal but significant
    Notice = 4,
    /// Informational
    Info = 5,
    /// Debugging
    Debug = 6,
}

impl Priority {
    /// All levels, most severe first.
    pub const ALL: [Priority; 7] = [
        Priority::Emergency,
        Priority::Critical,
        Priority::Error,
        Priority::Warning,
        Priority::Notice,
        Priority::Info,
        Priority::Debug,
    ];

    /// Whether a logger configured at `self` emits a message at `other`.
    ///
    /// True iff `other` is at least as severe, i.e. numerically not above
    /// `self`. A logger set to `Warning` enables `Error` and `Warning`
    /// messages but drops `Notice` and below.
    ///
    /// ```
    /// use log_relay::Priority;
    ///
    /// assert!(Priority::Info.enables(Priority::Critical));
    /// assert!(!Priority::Warning.enables(Priority::Debug));
    /// ```
    #[must_use]
    pub fn enables(self, other: Priority) -> bool {
        other as u8 <= self as u8
    }

    /// Canonical capitalized name.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Emergency => "Emergency",
            Priority::Critical => "Critical",
            Priority::Error => "Error",
            Priority::Warning => "Warning",
            Priority::Notice => "Notice",
            Priority::Info => "Info",
            Priority::Debug => "Debug",
        }
    }

    /// Single-character marker used in emitted lines, wrapped in square
    /// brackets by the sink: `!` `C` `E` `W` `N` `I` `D`.
    pub fn code(self) -> char {
        match self {
            Priority::Emergency => '!',
            Priority::Critical => 'C',
            Priority::Error => 'E',
            Priority::Warning => 'W',
            Priority::Notice => 'N',
            Priority::Info => 'I',
            Priority::Debug => 'D',
        }
    }

    /// Case-insensitive lookup of a canonical name or synonym.
    ///
    /// Returns `None` for unknown tokens so callers can compose their own
    /// error with context. Accepted spellings: `emerg`/`emergency`,
    /// `crit`/`critical`, `error`, `warn`/`warning`, `notice`, `info`,
    /// `debug`.
    pub fn parse(token: &str) -> Option<Priority> {
        match token.to_ascii_lowercase().as_str() {
            "emerg" | "emergency" => Some(Priority::Emergency),
            "crit" | "critical" => Some(Priority::Critical),
            "error" => Some(Priority::Error),
            "warn" | "warning" => Some(Priority::Warning),
            "notice" => Some(Priority::Notice),
            "info" => Some(Priority::Info),
            "debug" => Some(Priority::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::parse(s).ok_or_else(|| LoggerError::invalid_priority(s))
    }
}

impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enables_matches_numeric_order() {
        for a in Priority::ALL {
            for b in Priority::ALL {
                assert_eq!(a.enables(b), b as u8 <= a as u8, "{} enables {}", a, b);
            }
        }
    }

    #[test]
    fn test_enables_spot_checks() {
        assert!(Priority::Info.enables(Priority::Critical));
        assert!(!Priority::Warning.enables(Priority::Debug));
        assert!(Priority::Warning.enables(Priority::Warning));
    }

    #[test]
    fn test_parse_names_and_synonyms() {
        let cases: [(Priority, &[&str]); 7] = [
            (Priority::Emergency, &["Emergency", "EmeRgenCY", "emerg"]),
            (Priority::Critical, &["Critical", "critical", "CRIT"]),
            (Priority::Error, &["Error", "error"]),
            (Priority::Warning, &["Warning", "wARN", "warning"]),
            (Priority::Notice, &["Notice", "notice"]),
            (Priority::Info, &["Info", "info"]),
            (Priority::Debug, &["Debug", "DeBug"]),
        ];
        for (pri, inputs) in cases {
            for s in inputs {
                assert_eq!(Priority::parse(s), Some(pri), "parsing {}", s);
            }
        }
        assert_eq!(Priority::parse("wrn"), None);
        assert_eq!(Priority::parse(""), None);
    }

    #[test]
    fn test_round_trip() {
        for pri in Priority::ALL {
            assert_eq!(Priority::parse(pri.as_str()), Some(pri));
            assert_eq!(pri.as_str().parse::<Priority>().unwrap(), pri);
        }
    }

    #[test]
    fn test_from_str_reports_token() {
        let err = "important".parse::<Priority>().unwrap_err();
        assert_eq!(err.to_string(), "invalid priority: important");
    }

    #[test]
    fn test_default_is_warning() {
        assert_eq!(Priority::default(), Priority::Warning);
    }

    #[test]
    fn test_codes() {
        let expected = ['!', 'C', 'E', 'W', 'N', 'I', 'D'];
        for (pri, code) in Priority::ALL.iter().zip(expected) {
            assert_eq!(pri.code(), code);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        for pri in Priority::ALL {
            let json = serde_json::to_string(&pri).unwrap();
            assert_eq!(json, format!("\"{}\"", pri.as_str()));
            let back: Priority = serde_json::from_str(&json).unwrap();
            assert_eq!(back, pri);
        }
        let lax: Priority = serde_json::from_str("\"warn\"").unwrap();
        assert_eq!(lax, Priority::Warning);
        assert!(serde_json::from_str::<Priority>("\"fatal\"").is_err());
    }
}
