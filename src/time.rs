//! Conversion of the dataset's Julian times.

use chrono::{Duration, NaiveDate, NaiveDateTime};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Convert a Julian time, days relative to 2000-01-01 00:00 UTC, to a calendar time.
///
/// The result is rounded to the nearest millisecond. Returns `None` if the value isn't finite or
/// is too large to represent.
pub fn julian_to_datetime(days: f64) -> Option<NaiveDateTime> {
    if !days.is_finite() {
        return None;
    }

    let millis = (days * MILLIS_PER_DAY).round();
    if millis.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }

    let epoch = NaiveDate::from_ymd_opt(2000, 1, 1)?.and_hms_opt(0, 0, 0)?;
    epoch.checked_add_signed(Duration::milliseconds(millis as i64))
}
