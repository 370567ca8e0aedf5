//! Calendar helpers for "now"-relative statistics
//!
//! All dashboard windows are computed in UTC.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Utc};

use crate::entities::EXPIRY_WINDOW_DAYS;

/// First instant of the calendar month containing `now` (UTC).
pub fn month_start(now: DateTime<Utc>) -> DateTime<Utc> {
    let first = NaiveDate::from_ymd_opt(now.year(), now.month(), 1)
        .unwrap_or_else(|| now.date_naive())
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default();
    Utc.from_utc_datetime(&first)
}

/// Last day considered "expiring soon" relative to `today`.
pub fn expiry_cutoff(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(EXPIRY_WINDOW_DAYS))
        .unwrap_or(today)
}
