/// Vertical pixels drawn for one minute of an occurrence.
pub const DEFAULT_PIXELS_PER_MINUTE: f64 = 1.0;

/// Smallest height, in pixels, an occurrence is ever drawn with.
pub const DEFAULT_MINIMUM_HEIGHT: f64 = 20.0;

/// Two-letter code of the weekday a week begins on.
pub const DEFAULT_WEEK_STARTS_ON: &str = "MO";

/// Weekday codes in Sunday-first order.
pub const WEEKDAY_CODES: [&str; 7] = ["SU", "MO", "TU", "WE", "TH", "FR", "SA"];

pub const DAYS_PER_WEEK: u8 = 7;

pub const DEFAULT_LOG_LEVEL: &str = "info";
