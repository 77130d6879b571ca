//! Calendar arithmetic shared by the expander and the week orchestration.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use weekgrid_core::config::LayoutConfig;

use crate::error::{EngineError, EngineResult};
use crate::model::Weekday;

/// ## Summary
/// Returns the first day of the week containing `date`, for weeks beginning on `first_day`.
#[must_use]
pub fn start_of_week(date: NaiveDate, first_day: chrono::Weekday) -> NaiveDate {
    let offset = days_into_week(date.weekday(), first_day);
    date.checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(date)
}

/// Position of `day` in a week beginning on `first_day` (0..=6).
#[must_use]
pub fn days_into_week(day: chrono::Weekday, first_day: chrono::Weekday) -> u32 {
    (day.num_days_from_monday() + 7 - first_day.num_days_from_monday()) % 7
}

/// Shifts `date` by `days`, which may be negative. `None` on calendar overflow.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Signed number of days from `from` to `to`.
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Signed number of calendar-month boundaries from `from` to `to`, ignoring the day.
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.year() - from.year()) * 12 + i64::from(to.month0()) - i64::from(from.month0())
}

/// Returns the date `months` calendar months after `date` keeping its day-of-month,
/// or `None` when the target month is too short.
#[must_use]
pub fn same_day_months_later(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.with_day(1)?
        .checked_add_months(Months::new(months))?
        .with_day(date.day())
}

#[must_use]
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

#[must_use]
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last whole second of `date`.
#[must_use]
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59)
        .unwrap_or_else(|| day_start(date))
}

/// ## Summary
/// Resolves the configured first day of the week.
///
/// ## Errors
/// Returns an error if `week_starts_on` is not a weekday code.
pub fn first_weekday(layout: &LayoutConfig) -> EngineResult<chrono::Weekday> {
    let index = layout.week_start_index()?;
    Weekday::from_index_from_sunday(index)
        .map(chrono::Weekday::from)
        .ok_or_else(|| {
            EngineError::CoreError(weekgrid_core::error::CoreError::InvalidInput(format!(
                "weekday index {index} out of range"
            )))
        })
}
