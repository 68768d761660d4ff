//! Time Range Rules
//!
//! Inline checks for the start/end clock inputs.

use chrono::{NaiveTime, TimeDelta};
use serde::Deserialize;
use thiserror::Error;

/// Daily window reservations must fit in, and the minimum duration. Only
/// checked on the client when the page opts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OperatingWindow {
    pub opens: NaiveTime,
    pub closes: NaiveTime,
    pub min_minutes: i64,
}

impl Default for OperatingWindow {
    fn default() -> Self {
        Self {
            opens: NaiveTime::from_hms_opt(8, 30, 0).unwrap_or_default(),
            closes: NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default(),
            min_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeRangeIssue {
    #[error("La hora de término debe ser posterior a la de inicio.")]
    EndNotAfterStart,
    #[error("El horario de funcionamiento es de {opens} a {closes} hrs.")]
    OutsideOperatingHours { opens: String, closes: String },
    #[error("La reserva debe tener una duración mínima de {0} minutos.")]
    TooShort(i64),
}

fn parse_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Returns the issue to show, or `None` to hide the notice. Empty or
/// unparseable inputs hide it: the range is only judged once both are set.
/// Without a window only the end-after-start rule applies.
pub fn check_time_range(
    start: &str,
    end: &str,
    window: Option<&OperatingWindow>,
) -> Option<TimeRangeIssue> {
    let (start, end) = (parse_clock(start)?, parse_clock(end)?);

    if end <= start {
        return Some(TimeRangeIssue::EndNotAfterStart);
    }
    let window = window?;
    if start < window.opens || end > window.closes {
        return Some(TimeRangeIssue::OutsideOperatingHours {
            opens: window.opens.format("%H:%M").to_string(),
            closes: window.closes.format("%H:%M").to_string(),
        });
    }
    if end - start < TimeDelta::minutes(window.min_minutes) {
        return Some(TimeRangeIssue::TooShort(window.min_minutes));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(start: &str, end: &str) -> Option<TimeRangeIssue> {
        check_time_range(start, end, None)
    }

    fn check_in_window(start: &str, end: &str) -> Option<TimeRangeIssue> {
        check_time_range(start, end, Some(&OperatingWindow::default()))
    }

    #[test]
    fn test_end_before_start_shows_error() {
        assert_eq!(check("10:00", "09:00"), Some(TimeRangeIssue::EndNotAfterStart));
    }

    #[test]
    fn test_corrected_end_hides_error() {
        assert_eq!(check("10:00", "11:00"), None);
    }

    #[test]
    fn test_equal_times_show_error() {
        assert_eq!(check("10:00", "10:00"), Some(TimeRangeIssue::EndNotAfterStart));
    }

    #[test]
    fn test_incomplete_range_hides_error() {
        assert_eq!(check("", "09:00"), None);
        assert_eq!(check("10:00", ""), None);
    }

    #[test]
    fn test_accepts_seconds() {
        assert_eq!(check("10:00:00", "09:30:00"), Some(TimeRangeIssue::EndNotAfterStart));
    }

    #[test]
    fn test_ordered_ranges_hide_error_without_window() {
        assert_eq!(check("08:00", "09:00"), None);
        assert_eq!(check("10:00", "10:30"), None);
        assert_eq!(check("20:00", "22:00"), None);
    }

    #[test]
    fn test_outside_operating_hours() {
        let issue = check_in_window("08:00", "10:00").unwrap();
        assert_eq!(issue.to_string(), "El horario de funcionamiento es de 08:30 a 21:00 hrs.");
        assert!(check_in_window("20:00", "21:30").is_some());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(check_in_window("10:00", "10:45"), Some(TimeRangeIssue::TooShort(60)));
    }

    #[test]
    fn test_window_still_requires_ordering() {
        assert_eq!(check_in_window("12:00", "11:00"), Some(TimeRangeIssue::EndNotAfterStart));
    }

    #[test]
    fn test_window_deserializes_with_defaults() {
        let window: OperatingWindow = serde_json::from_str(r#"{"min_minutes": 30}"#).unwrap();
        assert_eq!(window.min_minutes, 30);
        assert_eq!(window.opens, OperatingWindow::default().opens);
    }
}
