//! Occurrences produced for one queried week, and the geometry that places them.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use weekgrid_core::config::LayoutConfig;
use weekgrid_core::constants::{DEFAULT_MINIMUM_HEIGHT, DEFAULT_PIXELS_PER_MINUTE};

use crate::color::{TextColor, contrast_text_color};
use crate::date::minutes_since_midnight;
use crate::error::EngineResult;

/// Pixel scale for turning times and durations into vertical geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub pixels_per_minute: f64,
    pub minimum_height: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            pixels_per_minute: DEFAULT_PIXELS_PER_MINUTE,
            minimum_height: DEFAULT_MINIMUM_HEIGHT,
        }
    }
}

impl Geometry {
    /// ## Summary
    /// Builds a geometry from validated layout settings.
    ///
    /// ## Errors
    /// Returns an error if the layout settings fail validation.
    pub fn from_layout(layout: &LayoutConfig) -> EngineResult<Self> {
        layout.validate()?;
        Ok(Self {
            pixels_per_minute: layout.pixels_per_minute,
            minimum_height: layout.minimum_height,
        })
    }

    /// Vertical offset of a time of day.
    #[must_use]
    pub fn top_for(&self, time: NaiveTime) -> f64 {
        f64::from(minutes_since_midnight(time)) * self.pixels_per_minute
    }

    /// Drawn height of a duration, floored at `minimum_height`.
    #[must_use]
    pub fn height_for(&self, duration_minutes: i64) -> f64 {
        let minutes = i32::try_from(duration_minutes).unwrap_or(if duration_minutes < 0 {
            i32::MIN
        } else {
            i32::MAX
        });
        (f64::from(minutes) * self.pixels_per_minute).max(self.minimum_height)
    }
}

/// One concrete instance of an event inside the queried week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    pub event_id: String,
    pub title: String,
    pub color: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Column of the week grid, 0 being the week's first day.
    pub day_index: u8,
    pub top: f64,
    pub height: f64,
}

impl Occurrence {
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Text colour readable on this occurrence's background, if it has one.
    #[must_use]
    pub fn text_color(&self) -> Option<TextColor> {
        self.color.as_deref().map(contrast_text_color)
    }

    /// Half-open `[top, bottom)` overlap; touching edges do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.top < other.bottom() && self.bottom() > other.top
    }
}

/// An occurrence with its horizontal lane inside its overlap cluster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedOccurrence {
    #[serde(flatten)]
    pub occurrence: Occurrence,
    pub column_index: usize,
    pub column_count: usize,
}

impl PlacedOccurrence {
    #[must_use]
    pub fn into_occurrence(self) -> Occurrence {
        self.occurrence
    }
}

/// Packed occurrences of one week, one list per day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub days: [Vec<PlacedOccurrence>; 7],
}

impl WeekLayout {
    #[must_use]
    pub fn day(&self, day_index: usize) -> &[PlacedOccurrence] {
        self.days.get(day_index).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn occurrences(&self) -> impl Iterator<Item = &PlacedOccurrence> {
        self.days.iter().flatten()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}
