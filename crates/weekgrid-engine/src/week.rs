//! Week orchestration: expand every event, bucket by day column, pack each day.

use chrono::NaiveDate;
use weekgrid_core::constants::DAYS_PER_WEEK;

use crate::date::{add_days, start_of_week};
use crate::expand::expand;
use crate::model::{Event, Geometry, Occurrence, WeekLayout};
use crate::pack::pack;

/// ## Summary
/// Lays out the seven days beginning at `week_start`.
///
/// ## Side Effects
/// None - pure function. Events are read, never modified.
#[must_use]
#[tracing::instrument(skip(events, geometry), fields(events = events.len()))]
pub fn layout_week(events: &[Event], week_start: NaiveDate, geometry: &Geometry) -> WeekLayout {
    let week_end = add_days(week_start, i64::from(DAYS_PER_WEEK) - 1).unwrap_or(week_start);

    let mut by_day: [Vec<Occurrence>; 7] = std::array::from_fn(|_| Vec::new());
    for occurrence in events
        .iter()
        .flat_map(|event| expand(event, week_start, week_end, geometry))
    {
        if let Some(day) = by_day.get_mut(usize::from(occurrence.day_index)) {
            day.push(occurrence);
        }
    }

    let days = by_day.map(pack);
    let layout = WeekLayout {
        week_start,
        week_end,
        days,
    };

    tracing::debug!(
        %week_start,
        recurring = events.iter().filter(|event| event.is_recurring()).count(),
        occurrences = layout.len(),
        "Week laid out"
    );
    layout
}

/// ## Summary
/// Lays out the week containing `date`, for weeks beginning on `first_day`.
#[must_use]
pub fn layout_week_containing(
    events: &[Event],
    date: NaiveDate,
    first_day: chrono::Weekday,
    geometry: &Geometry,
) -> WeekLayout {
    layout_week(events, start_of_week(date, first_day), geometry)
}
