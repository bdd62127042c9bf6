//! Paid and pending time input.
//!
//! The session form collects durations as separate hour and minute fields.
//! Hours are capped at 12 and minutes at 59; a blank field counts as zero.

use serde::{Deserialize, Serialize};

/// Largest value accepted in the hours field.
pub const MAX_INPUT_HOURS: u32 = 12;

/// Largest value accepted in the minutes field.
pub const MAX_INPUT_MINUTES: u32 = 59;

/// Hour and minute fields of a duration input. `None` is a blank field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationInput {
    /// The hours field.
    pub hours: Option<u32>,
    /// The minutes field.
    pub minutes: Option<u32>,
}

impl DurationInput {
    /// Splits a total number of minutes into fields, for editing a stored session.
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: Some(total / 60),
            minutes: Some(total % 60),
        }
    }

    /// Updates the hours field from raw text.
    pub fn set_hours(&mut self, raw: &str) {
        self.hours = parse_field(raw, MAX_INPUT_HOURS);
    }

    /// Updates the minutes field from raw text.
    pub fn set_minutes(&mut self, raw: &str) {
        self.minutes = parse_field(raw, MAX_INPUT_MINUTES);
    }

    /// Total minutes represented by both fields.
    pub fn total_minutes(&self) -> u32 {
        self.hours.unwrap_or(0) * 60 + self.minutes.unwrap_or(0)
    }
}

/// Parses a numeric field the way a browser number input reads.
///
/// Blank text stays blank. Otherwise the leading digits are read, anything
/// unreadable or negative becomes 0, and the value is capped at `max`.
fn parse_field(raw: &str, max: u32) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let digits: String = raw.chars().take_while(|c| c.is_ascii_digit()).collect();
    let value = match digits.as_str() {
        "" => 0,
        d => d.parse::<u64>().unwrap_or(u64::MAX),
    };
    Some(value.min(u64::from(max)) as u32)
}

/// Formats minutes for display: `0 min`, `45 min`, `2h`, `1h 30min`.
///
/// ```
/// use playroom_engine::calculation::minutes_to_text;
///
/// assert_eq!(minutes_to_text(90), "1h 30min");
/// ```
pub fn minutes_to_text(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    match (hours, rest) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}min", h, m),
    }
}
