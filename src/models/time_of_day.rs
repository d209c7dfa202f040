//! Wall-clock time value type.
//!
//! [`TimeOfDay`] is a time without a date, stored as minutes since midnight.
//! Construction is range-checked, so every calculation rule can treat its
//! inputs as well-formed.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A wall-clock time of day with minute precision.
///
/// Serialises to and from the 24-hour `"HH:MM"` form.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::TimeOfDay;
///
/// let check_in: TimeOfDay = "08:05".parse().unwrap();
/// assert_eq!(check_in.minutes(), 485);
/// assert_eq!(check_in.to_string(), "08:05");
///
/// assert!(TimeOfDay::new(24, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// 00:00.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { minutes: 0 };

    /// Builds a time from literal hour and minute values.
    ///
    /// Only for compile-time constants whose range is known to be valid.
    pub(crate) const fn from_hm(hour: u16, minute: u16) -> Self {
        Self {
            minutes: hour * 60 + minute,
        }
    }

    /// Creates a time of day, rejecting hours outside 0-23 and minutes outside 0-59.
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour > 23 {
            return Err(EngineError::InvalidTimeOfDay {
                value: format!("{:02}:{:02}", hour, minute),
                message: "hour must be between 0 and 23".to_string(),
            });
        }
        if minute > 59 {
            return Err(EngineError::InvalidTimeOfDay {
                value: format!("{:02}:{:02}", hour, minute),
                message: "minute must be between 0 and 59".to_string(),
            });
        }
        Ok(Self::from_hm(hour as u16, minute as u16))
    }

    /// Creates a time of day from minutes since midnight (0-1439).
    pub fn from_minutes(minutes: u32) -> EngineResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(EngineError::InvalidTimeOfDay {
                value: minutes.to_string(),
                message: format!("minutes since midnight must be below {}", MINUTES_PER_DAY),
            });
        }
        Ok(Self {
            minutes: minutes as u16,
        })
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        u32::from(self.minutes)
    }

    /// The hour component (0-23).
    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    /// The minute component (0-59).
    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| {
            EngineError::InvalidTimeOfDay {
                value: s.to_string(),
                message: format!("expected 24-hour HH:MM ({})", e),
            }
        })?;
        Ok(time.into())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Drops seconds and sub-second precision.
    fn from(time: NaiveTime) -> Self {
        Self::from_hm(time.hour() as u16, time.minute() as u16)
    }
}
