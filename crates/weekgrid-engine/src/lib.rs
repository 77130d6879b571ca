//! Recurrence expansion and week-grid layout for calendar events.
//!
//! [`expand`] turns one event into the occurrences of a week, [`pack`] assigns
//! side-by-side columns to the overlapping occurrences of one day, and
//! [`layout_week`] runs both over a whole catalog of events.
//!
//! Known limitation: a non-recurring event is shown only in the week it starts
//! in, so multi-day events are not drawn across later weeks.

pub mod color;
pub mod date;
pub mod error;
pub mod expand;
pub mod model;
pub mod pack;
pub mod rrule;
pub mod week;

pub use color::{TextColor, contrast_text_color};
pub use error::{EngineError, EngineResult, RuleParseError};
pub use expand::expand;
pub use model::{
    Event, Frequency, Geometry, Occurrence, PlacedOccurrence, RecurrenceRule, WeekLayout, Weekday,
};
pub use pack::pack;
pub use week::{layout_week, layout_week_containing};
