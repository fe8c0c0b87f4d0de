use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::types::error::AppError;

/// Whole minutes from `start` to `end`. Negative when `end` precedes `start`.
pub fn duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_minutes()
}

/// Renders a non-negative minute count as `HH:MMh`, e.g. 90 -> "01:30h".
/// Hours are zero-padded to two digits and grow past 99 unchanged.
pub fn format_hm(minutes: i64) -> String {
    debug_assert!(minutes >= 0, "format_hm called with negative minutes");
    let minutes = minutes.max(0);
    format!("{:02}:{:02}h", minutes / 60, minutes % 60)
}

/// Minutes to hours, rounded to two decimal places.
pub fn total_hours(minutes: i64) -> f64 {
    (minutes as f64 / 60.0 * 100.0).round() / 100.0
}

/// Anchors a same-day shift to its date. Fails unless `end` is strictly
/// after `start`; shifts crossing midnight are not representable.
pub fn shift_span(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
) -> Result<(NaiveDateTime, NaiveDateTime), AppError> {
    let start = date.and_time(start);
    let end = date.and_time(end);
    if end <= start {
        return Err(AppError::InvalidTimeRange);
    }
    Ok((start, end))
}
