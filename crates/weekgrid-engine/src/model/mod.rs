mod event;
mod occurrence;

pub use event::{Event, Frequency, RecurrenceRule, Weekday};
pub use occurrence::{Geometry, Occurrence, PlacedOccurrence, WeekLayout};
