//! Wall-clock conversions between 12-hour and 24-hour strings.
//!
//! The session form shows times as `H:MM AM|PM` while the backend stores
//! `HH:MM`. Parsing never fails loudly: input that does not look like a time
//! yields `None` (or an empty string from the string helpers), which callers
//! treat as "no time entered".

use chrono::{Duration, Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A time of day with minute precision.
///
/// # Examples
///
/// ```
/// use playroom_engine::calculation::ClockTime;
///
/// let time = ClockTime::parse_12h("12:30 AM").unwrap();
/// assert_eq!(time.to_24h_string(), "00:30");
/// assert_eq!(time.add_minutes(45).to_12h_string(), "1:15 AM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Creates a time from a 24-hour hour and a minute.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Returns the current local time, truncated to the minute.
    pub fn now_local() -> Self {
        let now = Local::now().time();
        Self::from_hm(now.hour(), now.minute()).unwrap_or(Self(now))
    }

    /// Parses `H:MM AM|PM` or `HH:MM AM|PM`.
    ///
    /// The period is case-insensitive and may be separated from the minutes
    /// by any amount of whitespace. The hour must be in 1..=12.
    pub fn parse_12h(input: &str) -> Option<Self> {
        let input = input.trim();
        let split = input.len().checked_sub(2)?;
        let period = input.get(split..)?;
        let clock = input.get(..split)?.trim_end();

        let (hour, minute) = split_clock(clock)?;
        if !(1..=12).contains(&hour) {
            return None;
        }

        let hour = if period.eq_ignore_ascii_case("PM") {
            if hour == 12 { 12 } else { hour + 12 }
        } else if period.eq_ignore_ascii_case("AM") {
            if hour == 12 { 0 } else { hour }
        } else {
            return None;
        };

        Self::from_hm(hour, minute)
    }

    /// Parses `HH:MM` (a single-digit hour is accepted).
    pub fn parse_24h(input: &str) -> Option<Self> {
        let (hour, minute) = split_clock(input.trim())?;
        Self::from_hm(hour, minute)
    }

    /// The hour in 24-hour form (0..=23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// The minute (0..=59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Formats as zero-padded `HH:MM`.
    pub fn to_24h_string(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    /// Formats as `H:MM AM|PM`.
    ///
    /// Hours 0 and 12 both display as 12.
    pub fn to_12h_string(&self) -> String {
        let hour = self.hour();
        let period = if hour < 12 { "AM" } else { "PM" };
        let display_hour = match hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", display_hour, self.minute(), period)
    }

    /// Adds minutes, wrapping around midnight in either direction.
    pub fn add_minutes(self, minutes: i64) -> Self {
        let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
        let (time, _) = self
            .0
            .overflowing_add_signed(Duration::minutes(wrapped));
        Self(time)
    }
}

/// Splits `H:MM` / `HH:MM` into numbers. Minutes must have two digits.
fn split_clock(clock: &str) -> Option<(u32, u32)> {
    let (hour, minute) = clock.split_once(':')?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
        return None;
    }

    Some((hour.parse().ok()?, minute.parse().ok()?))
}

/// Converts `H:MM AM|PM` to `HH:MM`.
///
/// Returns an empty string when the input does not match.
///
/// ```
/// use playroom_engine::calculation::to_24_hour;
///
/// assert_eq!(to_24_hour("12:05 PM"), "12:05");
/// assert_eq!(to_24_hour("12:05 AM"), "00:05");
/// assert_eq!(to_24_hour("half past four"), "");
/// ```
pub fn to_24_hour(time12: &str) -> String {
    ClockTime::parse_12h(time12)
        .map(|t| t.to_24h_string())
        .unwrap_or_default()
}

/// Converts `HH:MM` to `H:MM AM|PM`.
///
/// Returns an empty string for empty or invalid input.
pub fn to_12_hour(time24: &str) -> String {
    ClockTime::parse_24h(time24)
        .map(|t| t.to_12h_string())
        .unwrap_or_default()
}

/// Adds minutes to an `HH:MM` time, wrapping modulo 24 hours.
///
/// Returns an empty string for empty or invalid input.
pub fn add_minutes(time24: &str, minutes: i64) -> String {
    ClockTime::parse_24h(time24)
        .map(|t| t.add_minutes(minutes).to_24h_string())
        .unwrap_or_default()
}
