//! Recurrence expansion for one event over one week window.
//!
//! Every occurrence reuses the event's start and end time-of-day on its own
//! calendar date. Candidates are walked day by day from the later of the
//! rule's start and the day before the window, and only dates inside the
//! window are emitted. Numbering of occurrences (used by `COUNT`) follows
//! calendar position, so exception dates never shift later occurrences.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use weekgrid_core::constants::DAYS_PER_WEEK;

use crate::date::{
    add_days, day_end, day_start, days_between, days_into_week, months_between,
    same_day_months_later, start_of_week,
};
use crate::model::{Event, Frequency, Geometry, Occurrence, RecurrenceRule};

/// ## Summary
/// Expands `event` into the occurrences falling in `[week_start, week_end]`.
///
/// Malformed input never fails: unsupported frequencies yield nothing and
/// occurrences that cannot be placed in a day column are dropped.
///
/// ## Side Effects
/// None - pure function.
#[must_use]
pub fn expand(
    event: &Event,
    week_start: NaiveDate,
    week_end: NaiveDate,
    geometry: &Geometry,
) -> Vec<Occurrence> {
    match &event.recurrence {
        None => expand_single(event, week_start, week_end, geometry)
            .into_iter()
            .collect(),
        Some(rule) => expand_recurring(event, rule, week_start, week_end, geometry),
    }
}

/// A non-recurring event is shown only when it starts inside the window.
/// Multi-day events that began earlier are not carried over.
fn expand_single(
    event: &Event,
    week_start: NaiveDate,
    week_end: NaiveDate,
    geometry: &Geometry,
) -> Option<Occurrence> {
    let overlaps_window = event.start <= day_end(week_end) && event.end >= day_start(week_start);
    let start_date = event.start.date();
    if !overlaps_window || start_date < week_start || start_date > week_end {
        return None;
    }

    place(event, event.start, event.end, week_start, geometry)
}

fn expand_recurring(
    event: &Event,
    rule: &RecurrenceRule,
    week_start: NaiveDate,
    week_end: NaiveDate,
    geometry: &Geometry,
) -> Vec<Occurrence> {
    let first_date = event.start.date();
    let Some(cadence) = Cadence::new(rule, first_date, week_start.weekday()) else {
        tracing::debug!(event_id = %event.id, "Unsupported recurrence frequency, skipping event");
        return Vec::new();
    };

    let exceptions: HashSet<NaiveDate> = rule.exceptions.iter().copied().collect();
    let scan_from = add_days(week_start, -1).map_or(first_date, |day_before| day_before.max(first_date));

    let mut occurrences = Vec::new();
    for candidate in scan_from.iter_days().take_while(|day| *day <= week_end) {
        let Some(index) = cadence.ordinal(candidate) else {
            continue;
        };
        if rule.count.is_some_and(|count| index > u64::from(count)) {
            break;
        }
        if rule.until.is_some_and(|until| candidate > until) {
            break;
        }
        if exceptions.contains(&candidate) {
            tracing::trace!(event_id = %event.id, %candidate, "Skipping exception date");
            continue;
        }
        if candidate < week_start {
            continue;
        }

        let (start, end) = instance_bounds(event, candidate);
        occurrences.extend(place(event, start, end, week_start, geometry));
    }

    occurrences
}

/// Start and end of the occurrence on `date`. An end time-of-day at or before
/// the start time-of-day rolls over to the next day.
fn instance_bounds(event: &Event, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start_time = event.start.time();
    let end_time = event.end.time();
    let end_date = if end_time <= start_time {
        date.succ_opt().unwrap_or(date)
    } else {
        date
    };
    (date.and_time(start_time), end_date.and_time(end_time))
}

fn place(
    event: &Event,
    start: NaiveDateTime,
    end: NaiveDateTime,
    week_start: NaiveDate,
    geometry: &Geometry,
) -> Option<Occurrence> {
    let offset = days_between(week_start, start.date());
    let day_index = match u8::try_from(offset) {
        Ok(index) if index < DAYS_PER_WEEK => index,
        _ => {
            tracing::trace!(event_id = %event.id, offset, "Occurrence outside week columns, dropping");
            return None;
        }
    };

    Some(Occurrence {
        event_id: event.id.clone(),
        title: event.title.clone(),
        color: event.color.clone(),
        start,
        end,
        day_index,
        top: geometry.top_for(start.time()),
        height: geometry.height_for(end.signed_duration_since(start).num_minutes()),
    })
}

/// Membership test and occurrence numbering for one rule anchored at its start date.
#[derive(Debug)]
struct Cadence {
    first: NaiveDate,
    interval: i64,
    kind: CadenceKind,
}

#[derive(Debug)]
enum CadenceKind {
    Daily,
    Weekly {
        weekdays: Vec<chrono::Weekday>,
        week_begins: chrono::Weekday,
    },
    Monthly,
    Yearly,
}

impl Cadence {
    fn new(rule: &RecurrenceRule, first: NaiveDate, week_begins: chrono::Weekday) -> Option<Self> {
        let kind = match rule.frequency {
            Frequency::Daily => CadenceKind::Daily,
            Frequency::Weekly => {
                let mut weekdays: Vec<chrono::Weekday> = if rule.weekdays.is_empty() {
                    vec![first.weekday()]
                } else {
                    rule.weekdays.iter().copied().map(chrono::Weekday::from).collect()
                };
                weekdays.sort_by_key(|day| days_into_week(*day, week_begins));
                weekdays.dedup();
                CadenceKind::Weekly {
                    weekdays,
                    week_begins,
                }
            }
            Frequency::Monthly => CadenceKind::Monthly,
            Frequency::Yearly => CadenceKind::Yearly,
            Frequency::Unsupported => return None,
        };

        Some(Self {
            first,
            interval: rule.effective_interval(),
            kind,
        })
    }

    /// 1-based index of `candidate` in the rule's sequence, or `None` if the
    /// rule does not produce that date.
    fn ordinal(&self, candidate: NaiveDate) -> Option<u64> {
        if candidate < self.first {
            return None;
        }
        match &self.kind {
            CadenceKind::Daily => self.daily_ordinal(candidate),
            CadenceKind::Weekly {
                weekdays,
                week_begins,
            } => self.weekly_ordinal(candidate, weekdays, *week_begins),
            CadenceKind::Monthly => self.monthly_ordinal(candidate),
            CadenceKind::Yearly => self.yearly_ordinal(candidate),
        }
    }

    fn daily_ordinal(&self, candidate: NaiveDate) -> Option<u64> {
        let days = days_between(self.first, candidate);
        if days % self.interval != 0 {
            return None;
        }
        u64::try_from(days / self.interval + 1).ok()
    }

    fn weekly_ordinal(
        &self,
        candidate: NaiveDate,
        weekdays: &[chrono::Weekday],
        week_begins: chrono::Weekday,
    ) -> Option<u64> {
        if !weekdays.contains(&candidate.weekday()) {
            return None;
        }
        let first_week = start_of_week(self.first, week_begins);
        let candidate_week = start_of_week(candidate, week_begins);
        let weeks = days_between(first_week, candidate_week) / i64::from(DAYS_PER_WEEK);
        if weeks % self.interval != 0 {
            return None;
        }

        let in_week = |week: NaiveDate, keep: &dyn Fn(NaiveDate) -> bool| -> u64 {
            let hits = weekdays
                .iter()
                .filter_map(|day| add_days(week, i64::from(days_into_week(*day, week_begins))))
                .filter(|date| keep(*date))
                .count();
            u64::try_from(hits).unwrap_or(u64::MAX)
        };

        if weeks == 0 {
            return Some(in_week(first_week, &|date| date >= self.first && date <= candidate));
        }

        let leading = in_week(first_week, &|date| date >= self.first);
        let full_weeks = u64::try_from(weeks / self.interval - 1).ok()?;
        let per_week = u64::try_from(weekdays.len()).ok()?;
        let trailing = in_week(candidate_week, &|date| date <= candidate);
        Some(leading + full_weeks * per_week + trailing)
    }

    fn monthly_ordinal(&self, candidate: NaiveDate) -> Option<u64> {
        if candidate.day() != self.first.day() {
            return None;
        }
        let months = months_between(self.first, candidate);
        if months % self.interval != 0 {
            return None;
        }
        // Months too short for the start day produce no occurrence and take no index.
        let existing = (0..=months / self.interval)
            .filter_map(|step| u32::try_from(step * self.interval).ok())
            .filter(|offset| same_day_months_later(self.first, *offset).is_some())
            .count();
        u64::try_from(existing).ok()
    }

    fn yearly_ordinal(&self, candidate: NaiveDate) -> Option<u64> {
        if candidate.month() != self.first.month() || candidate.day() != self.first.day() {
            return None;
        }
        let years = i64::from(candidate.year() - self.first.year());
        if years % self.interval != 0 {
            return None;
        }
        let existing = (0..=years / self.interval)
            .filter_map(|step| i32::try_from(step * self.interval).ok())
            .filter(|offset| {
                NaiveDate::from_ymd_opt(self.first.year() + offset, self.first.month(), self.first.day())
                    .is_some()
            })
            .count();
        u64::try_from(existing).ok()
    }
}
