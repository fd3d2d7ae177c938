//! Wall-clock time of day as minutes since midnight.
//!
//! The engine works in plain minute arithmetic; this newtype is the
//! boundary representation. It parses and formats `HH:MM` and
//! serializes as that string, matching the database column format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SchedulerError};

/// Minutes in one day; valid times are in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A time of day, stored as minutes since midnight (0..=1439).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day from minutes since midnight.
    ///
    /// Returns `None` when the value does not fall within one day.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// Minutes since midnight.
    pub const fn minutes(self) -> u16 {
        self.0
    }

    /// Engine-internal constructor for minute values already known to
    /// lie within one day (slots carved from a valid availability
    /// window).
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }
}

impl FromStr for TimeOfDay {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SchedulerError::InvalidTime {
            value: s.to_string(),
        };

        let (hours, mins) = s.split_once(':').ok_or_else(invalid)?;
        if hours.is_empty() || hours.len() > 2 || mins.len() != 2 {
            return Err(invalid());
        }

        let h: u16 = hours.parse().map_err(|_| invalid())?;
        let m: u16 = mins.parse().map_err(|_| invalid())?;
        if h >= 24 || m >= 60 {
            return Err(invalid());
        }

        Ok(Self(h * 60 + m))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a `HH:MM-HH:MM` span, requiring `start < end`.
pub fn parse_span(s: &str) -> Result<(TimeOfDay, TimeOfDay)> {
    let (start, end) = s.split_once('-').ok_or_else(|| SchedulerError::InvalidTime {
        value: s.to_string(),
    })?;
    let start: TimeOfDay = start.trim().parse()?;
    let end: TimeOfDay = end.trim().parse()?;
    if start >= end {
        return Err(SchedulerError::invalid_input(
            "span",
            format!("start {start} must be before end {end}"),
        ));
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_formats_hhmm() {
        let t: TimeOfDay = "09:05".parse().expect("valid time");
        assert_eq!(t.minutes(), 545);
        assert_eq!(t.to_string(), "09:05");

        // Single-digit hours are accepted on input, zero-padded on output.
        let t: TimeOfDay = "9:30".parse().expect("valid time");
        assert_eq!(t.to_string(), "09:30");
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["24:00", "12:60", "noon", "12", "12:5", "121:00", ":30"] {
            assert!(
                bad.parse::<TimeOfDay>().is_err(),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn parses_spans() {
        let (start, end) = parse_span("09:00-17:30").expect("valid span");
        assert_eq!(start.minutes(), 540);
        assert_eq!(end.minutes(), 1050);

        assert!(parse_span("17:00-09:00").is_err());
        assert!(parse_span("09:00").is_err());
    }

    #[test]
    fn serde_round_trip() {
        let t: TimeOfDay = "14:30".parse().expect("valid time");
        let json = serde_json::to_string(&t).expect("serialize");
        assert_eq!(json, "\"14:30\"");
        let back: TimeOfDay = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, t);
    }
}
