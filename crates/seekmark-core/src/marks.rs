//! Synthetic mark generation
//!
//! Marks arrive as wall-clock timestamps (epoch milliseconds). Each one is
//! projected onto its time of day, `h * 3600 + m * 60 + s`, which becomes the
//! offset into the media. Sub-second precision is dropped.

use chrono::{DateTime, FixedOffset, Local, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Mark;

/// Errors raised while generating marks
#[derive(Debug, Error, PartialEq)]
pub enum MarkError {
    #[error("UTC offset of {0} hours is out of range")]
    InvalidOffset(i32),

    #[error("timestamp {0}ms is out of range")]
    TimestampOutOfRange(i64),

    #[error("{0} marks requested, at most {max} supported", max = MAX_MARKS)]
    TooManyMarks(u32),
}

/// Upper bound on `MarkSchedule::count`
pub const MAX_MARKS: u32 = 10_000;

/// Parameters of the synthetic mark feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkSchedule {
    /// Number of marks to generate
    pub count: u32,
    /// Epoch timestamp of the first mark in milliseconds
    pub base_timestamp_ms: i64,
    /// Spacing between consecutive marks in milliseconds
    pub step_ms: i64,
    /// Hours east of UTC used for the time-of-day projection.
    /// `None` uses the machine's local zone.
    pub utc_offset_hours: Option<i32>,
}

impl Default for MarkSchedule {
    fn default() -> Self {
        Self {
            count: 100,
            base_timestamp_ms: 1_735_142_400_600, // 2024-12-26 00:00:00.600 +08:00
            step_ms: 2000,
            utc_offset_hours: Some(8),
        }
    }
}

/// Generate the marks for a schedule, in feed order
///
/// Labels are 1-based indices. Schedules above `MAX_MARKS` are rejected.
pub fn generate_marks(schedule: &MarkSchedule) -> Result<Vec<Mark>, MarkError> {
    if schedule.count > MAX_MARKS {
        return Err(MarkError::TooManyMarks(schedule.count));
    }
    let offset = match schedule.utc_offset_hours {
        Some(hours) => Some(
            FixedOffset::east_opt(hours.saturating_mul(3600))
                .ok_or(MarkError::InvalidOffset(hours))?,
        ),
        None => None,
    };

    let mut marks = Vec::with_capacity(schedule.count as usize);
    for i in 0..schedule.count as i64 {
        let timestamp = schedule
            .step_ms
            .checked_mul(i)
            .and_then(|delta| schedule.base_timestamp_ms.checked_add(delta))
            .ok_or(MarkError::TimestampOutOfRange(schedule.base_timestamp_ms))?;
        let utc = DateTime::from_timestamp_millis(timestamp)
            .ok_or(MarkError::TimestampOutOfRange(timestamp))?;

        let seconds = match offset {
            Some(offset) => seconds_of_day(&utc.with_timezone(&offset)),
            None => seconds_of_day(&utc.with_timezone(&Local)),
        };
        marks.push(Mark::new(seconds as f64, (i + 1).to_string()));
    }

    log::debug!(
        "generate_marks: {} marks from {}ms every {}ms",
        marks.len(),
        schedule.base_timestamp_ms,
        schedule.step_ms
    );
    Ok(marks)
}

fn seconds_of_day<T: Timelike>(time: &T) -> u32 {
    time.hour() * 3600 + time.minute() * 60 + time.second()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_starts_at_midnight() {
        let marks = generate_marks(&MarkSchedule::default()).unwrap();
        assert_eq!(marks.len(), 100);
        assert_eq!(marks[0], Mark::new(0.0, "1"));
        assert_eq!(marks[1], Mark::new(2.0, "2"));
        assert_eq!(marks[99], Mark::new(198.0, "100"));
    }

    #[test]
    fn test_marks_are_in_feed_order() {
        let marks = generate_marks(&MarkSchedule::default()).unwrap();
        assert!(marks.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn test_utc_projection() {
        let schedule = MarkSchedule {
            count: 3,
            utc_offset_hours: Some(0),
            ..MarkSchedule::default()
        };
        let times: Vec<f64> = generate_marks(&schedule)
            .unwrap()
            .iter()
            .map(|m| m.time)
            .collect();
        // 16:00:00 UTC
        assert_eq!(times, vec![57600.0, 57602.0, 57604.0]);
    }

    #[test]
    fn test_wraps_at_midnight() {
        let schedule = MarkSchedule {
            count: 2,
            base_timestamp_ms: 86_399_000, // 23:59:59 UTC
            step_ms: 1000,
            utc_offset_hours: Some(0),
        };
        let marks = generate_marks(&schedule).unwrap();
        assert_eq!(marks[0].time, 86399.0);
        assert_eq!(marks[1].time, 0.0);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = MarkSchedule {
            count: 0,
            ..MarkSchedule::default()
        };
        assert!(generate_marks(&schedule).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_offset() {
        let schedule = MarkSchedule {
            utc_offset_hours: Some(30),
            ..MarkSchedule::default()
        };
        assert_eq!(generate_marks(&schedule), Err(MarkError::InvalidOffset(30)));
    }

    #[test]
    fn test_count_is_capped() {
        let schedule = MarkSchedule {
            count: 4_000_000_000,
            ..MarkSchedule::default()
        };
        assert_eq!(
            generate_marks(&schedule),
            Err(MarkError::TooManyMarks(4_000_000_000))
        );

        let schedule = MarkSchedule {
            count: MAX_MARKS,
            step_ms: 1000,
            ..MarkSchedule::default()
        };
        assert_eq!(generate_marks(&schedule).unwrap().len(), MAX_MARKS as usize);
    }

    #[test]
    fn test_timestamp_overflow() {
        let schedule = MarkSchedule {
            count: 2,
            base_timestamp_ms: i64::MAX,
            step_ms: 1,
            utc_offset_hours: Some(0),
        };
        assert!(matches!(
            generate_marks(&schedule),
            Err(MarkError::TimestampOutOfRange(_))
        ));
    }

    #[test]
    fn test_local_zone_stays_within_a_day() {
        let schedule = MarkSchedule {
            count: 5,
            utc_offset_hours: None,
            ..MarkSchedule::default()
        };
        for mark in generate_marks(&schedule).unwrap() {
            assert!((0.0..86400.0).contains(&mark.time));
        }
    }
}
