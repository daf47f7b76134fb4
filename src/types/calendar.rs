// src/types/calendar.rs
//! Reporting-period helpers.
//!
//! "Previous week" and "previous month" are computed on the Stockholm
//! calendar, where the API's users keep their time reports.

use super::DateOnly;
use crate::constants::CALENDAR_TIMEZONE;
use chrono::{DateTime, Datelike, Duration, Month, NaiveDate, TimeZone, Utc};

/// Monday and Sunday of the week before the one containing `now`.
pub fn previous_week<Tz: TimeZone>(now: &DateTime<Tz>) -> (DateOnly, DateOnly) {
    let today = local_date(now);
    let most_recent_monday =
        today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let monday = most_recent_monday - Duration::days(7);
    let sunday = monday + Duration::days(6);
    (DateOnly::new(monday), DateOnly::new(sunday))
}

/// First and last day of the month before the one containing `now`.
pub fn previous_month<Tz: TimeZone>(now: &DateTime<Tz>) -> (DateOnly, DateOnly) {
    let today = local_date(now);
    let first_this_month = today - Duration::days(i64::from(today.day0()));
    let last = first_this_month - Duration::days(1);
    let first = last - Duration::days(i64::from(last.day0()));
    (DateOnly::new(first), DateOnly::new(last))
}

/// [`previous_week`] relative to the current instant.
pub fn previous_week_now() -> (DateOnly, DateOnly) {
    previous_week(&Utc::now())
}

/// [`previous_month`] relative to the current instant.
pub fn previous_month_now() -> (DateOnly, DateOnly) {
    previous_month(&Utc::now())
}

pub fn first_day_of_month(year: i32, month: Month) -> Option<DateOnly> {
    DateOnly::from_ymd(year, month.number_from_month(), 1)
}

pub fn last_day_of_month(year: i32, month: Month) -> Option<DateOnly> {
    let (next_year, next_month) = match month {
        Month::December => (year.checked_add(1)?, 1),
        other => (year, other.number_from_month() + 1),
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(DateOnly::new)
}

fn local_date<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.with_timezone(&CALENDAR_TIMEZONE).date_naive()
}
