//! Event and recurrence rule records as handed over by the storage layer.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use weekgrid_core::constants::WEEKDAY_CODES;

use crate::error::RuleParseError;

/// Recurrence frequency.
///
/// Deserialization goes through [`Frequency::parse`], so names are matched
/// case-insensitively and anything other than the four supported frequencies
/// becomes [`Frequency::Unsupported`], which expands to no occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Unsupported,
}

impl Frequency {
    /// Returns the RRULE representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
            Self::Unsupported => "UNSUPPORTED",
        }
    }

    /// Parses a frequency (case-insensitive). Unknown names map to `Unsupported`.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            "MONTHLY" => Self::Monthly,
            "YEARLY" => Self::Yearly,
            _ => Self::Unsupported,
        }
    }
}

impl From<String> for Frequency {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day of the week, written with its two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "SU")]
    Sunday,
    #[serde(rename = "MO")]
    Monday,
    #[serde(rename = "TU")]
    Tuesday,
    #[serde(rename = "WE")]
    Wednesday,
    #[serde(rename = "TH")]
    Thursday,
    #[serde(rename = "FR")]
    Friday,
    #[serde(rename = "SA")]
    Saturday,
}

impl Weekday {
    /// Returns all weekdays in order (Sunday through Saturday).
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Sunday,
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
        ]
    }

    /// Position in a Sunday-first week.
    #[must_use]
    pub const fn index_from_sunday(self) -> usize {
        self as usize
    }

    /// Inverse of [`Weekday::index_from_sunday`].
    #[must_use]
    pub fn from_index_from_sunday(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    /// Returns the two-letter code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        WEEKDAY_CODES[self.index_from_sunday()]
    }

    /// Parses a weekday from a two-letter code (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim().to_ascii_uppercase();
        WEEKDAY_CODES
            .iter()
            .position(|candidate| *candidate == code)
            .and_then(Self::from_index_from_sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sunday => Self::Sun,
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
        }
    }
}

/// Recurrence rule attached to an event.
///
/// Deserializes either from a field map or from RRULE text
/// (`"FREQ=WEEKLY;BYDAY=MO,WE;COUNT=10"`). A rule that cannot be read is
/// kept as an unsupported rule, so the event survives and expands to nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleRepr")]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Step between active periods. Values below 1 expand as 1.
    pub interval: i64,
    /// Allowed weekdays for weekly rules. Empty means the start date's weekday.
    pub weekdays: Vec<Weekday>,
    /// Maximum number of occurrences, counted from the start date.
    pub count: Option<u32>,
    /// Last date (inclusive) an occurrence may fall on.
    pub until: Option<NaiveDate>,
    /// Dates that are skipped without renumbering later occurrences.
    pub exceptions: Vec<NaiveDate>,
}

impl RecurrenceRule {
    /// Creates an unbounded rule with interval 1.
    #[must_use]
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            interval: 1,
            weekdays: Vec::new(),
            count: None,
            until: None,
            exceptions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: i64) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_weekdays(mut self, weekdays: impl IntoIterator<Item = Weekday>) -> Self {
        self.weekdays = weekdays.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    #[must_use]
    pub fn with_exception(mut self, date: NaiveDate) -> Self {
        self.exceptions.push(date);
        self
    }

    /// Interval used for expansion; never below 1.
    #[must_use]
    pub fn effective_interval(&self) -> i64 {
        self.interval.max(1)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RuleRepr {
    Text(String),
    Fields(RuleFields),
    Malformed(IgnoredAny),
}

#[derive(Deserialize)]
struct RuleFields {
    frequency: Frequency,
    #[serde(default = "default_interval")]
    interval: i64,
    #[serde(default)]
    weekdays: Vec<Weekday>,
    #[serde(default)]
    count: Option<u32>,
    #[serde(default)]
    until: Option<NaiveDate>,
    #[serde(default, deserialize_with = "dates_ignoring_time")]
    exceptions: Vec<NaiveDate>,
}

const fn default_interval() -> i64 {
    1
}

impl From<RuleRepr> for RecurrenceRule {
    fn from(repr: RuleRepr) -> Self {
        match repr {
            RuleRepr::Text(text) => text.parse().unwrap_or_else(|e: RuleParseError| {
                tracing::warn!(
                    rule = %text,
                    error = %e,
                    "Unreadable recurrence rule, event will not repeat"
                );
                Self::new(Frequency::Unsupported)
            }),
            RuleRepr::Fields(fields) => Self {
                frequency: fields.frequency,
                interval: fields.interval,
                weekdays: fields.weekdays,
                count: fields.count,
                until: fields.until,
                exceptions: fields.exceptions,
            },
            RuleRepr::Malformed(_) => {
                tracing::warn!("Malformed recurrence rule fields, event will not repeat");
                Self::new(Frequency::Unsupported)
            }
        }
    }
}

/// Accepts `YYYY-MM-DD` or a full date-time and keeps the calendar date.
fn dates_ignoring_time<'de, D>(deserializer: D) -> Result<Vec<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    raw.iter()
        .map(|text| {
            text.parse::<NaiveDate>()
                .or_else(|_| text.parse::<NaiveDateTime>().map(|dt| dt.date()))
                .map_err(|e| serde::de::Error::custom(format!("invalid exception date {text:?}: {e}")))
        })
        .collect()
}

/// A calendar event. Its start and end double as the time-of-day template
/// for every occurrence when a recurrence rule is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub color: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub recurrence: Option<RecurrenceRule>,
}

impl Event {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            color: None,
            start,
            end,
            recurrence: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_recurrence(mut self, rule: RecurrenceRule) -> Self {
        self.recurrence = Some(rule);
        self
    }

    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }
}
