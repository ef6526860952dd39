//! Wall-clock time of day as used by the plan generator
//!
//! Times are `"HH:MM"` strings at the boundary and a typed value internally.
//! Schedule arithmetic does not wrap at midnight: a task starting 23:40 with
//! a 30 minute duration ends at `"24:10"`, rendered literally. Parsing
//! therefore accepts hours past 23 so a serialized schedule reads back.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error parsing an `"HH:MM"` time string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Expected HH:MM, got '{0}'")]
    BadFormat(String),

    #[error("Minute out of range in '{0}'")]
    MinuteOutOfRange(String),
}

/// A time of day in hours and minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Build a time from raw hour/minute components
    ///
    /// The hour is not bounded: schedule end times may run past 23.
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Parse an `"HH:MM"` string (single-digit hours accepted)
    pub fn parse(s: &str) -> Result<Self, TimeParseError> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeParseError::BadFormat(s.to_string()))?;

        let hour: u32 = h.trim().parse().map_err(|_| TimeParseError::BadFormat(s.to_string()))?;
        let minute: u32 = m.trim().parse().map_err(|_| TimeParseError::BadFormat(s.to_string()))?;

        if minute > 59 {
            return Err(TimeParseError::MinuteOutOfRange(s.to_string()));
        }

        Ok(Self { hour, minute })
    }

    /// Add a duration in minutes, carrying overflow into the hour
    ///
    /// The hour is left unwrapped past 24:00.
    pub fn add_minutes(&self, minutes: u32) -> Self {
        let total = self.minute + minutes;
        Self {
            hour: self.hour + total / 60,
            minute: total % 60,
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zero_padded() {
        assert_eq!(TimeOfDay::parse("09:00").unwrap(), TimeOfDay::new(9, 0));
        assert_eq!(TimeOfDay::parse("23:59").unwrap(), TimeOfDay::new(23, 59));
    }

    #[test]
    fn test_parse_single_digit_hour() {
        assert_eq!(TimeOfDay::parse("9:05").unwrap(), TimeOfDay::new(9, 5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(TimeOfDay::parse("morning"), Err(TimeParseError::BadFormat(_))));
        assert!(matches!(TimeOfDay::parse("09-00"), Err(TimeParseError::BadFormat(_))));
        assert!(matches!(TimeOfDay::parse(""), Err(TimeParseError::BadFormat(_))));
        assert!(matches!(
            TimeOfDay::parse("09:75"),
            Err(TimeParseError::MinuteOutOfRange(_))
        ));
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(TimeOfDay::new(1, 50).to_string(), "01:50");
        assert_eq!(TimeOfDay::new(9, 5).to_string(), "09:05");
    }

    #[test]
    fn test_add_minutes_simple() {
        let t = TimeOfDay::new(9, 0).add_minutes(45);
        assert_eq!(t, TimeOfDay::new(9, 45));
    }

    #[test]
    fn test_add_minutes_carries_hours() {
        let t = TimeOfDay::new(9, 30).add_minutes(90);
        assert_eq!(t, TimeOfDay::new(11, 0));
    }

    #[test]
    fn test_add_minutes_does_not_wrap_midnight() {
        // Running past 23:59 keeps counting hours
        let t = TimeOfDay::new(23, 40).add_minutes(30);
        assert_eq!(t, TimeOfDay::new(24, 10));
        assert_eq!(t.to_string(), "24:10");
    }

    #[test]
    fn test_past_midnight_round_trips() {
        let t = TimeOfDay::parse("24:10").unwrap();
        assert_eq!(t, TimeOfDay::new(24, 10));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&TimeOfDay::new(7, 15)).unwrap();
        assert_eq!(json, "\"07:15\"");

        let t: TimeOfDay = serde_json::from_str("\"18:30\"").unwrap();
        assert_eq!(t, TimeOfDay::new(18, 30));
    }
}
