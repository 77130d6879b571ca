//! RRULE text form of [`RecurrenceRule`].
//!
//! Understands `FREQ`, `INTERVAL`, `BYDAY`, `COUNT`, `UNTIL` and a
//! non-standard `EXDATE` part holding comma-separated dates. Other RFC 5545
//! parts are ignored.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::RuleParseError;
use crate::model::{Frequency, RecurrenceRule, Weekday};

const DATE_FORMAT: &str = "%Y%m%d";

impl FromStr for RecurrenceRule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();
        let body = body
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("RRULE:"))
            .map_or(body, |_| &body[6..]);

        let mut frequency = None;
        let mut rule = Self::new(Frequency::Unsupported);

        for part in body.split(';').map(str::trim).filter(|part| !part.is_empty()) {
            let (name, value) = part
                .split_once('=')
                .ok_or_else(|| RuleParseError::MissingSeparator(part.to_string()))?;
            let value = value.trim();

            match name.trim().to_ascii_uppercase().as_str() {
                "FREQ" => frequency = Some(Frequency::parse(value)),
                "INTERVAL" => rule.interval = parse_number("INTERVAL", value)?,
                "COUNT" => rule.count = Some(parse_number("COUNT", value)?),
                "UNTIL" => rule.until = Some(parse_date(value)?),
                "BYDAY" => {
                    rule.weekdays = split_list(value)
                        .map(|code| {
                            Weekday::parse(code)
                                .ok_or_else(|| RuleParseError::InvalidWeekday(code.to_string()))
                        })
                        .collect::<Result<_, _>>()?;
                }
                "EXDATE" => {
                    rule.exceptions = split_list(value).map(parse_date).collect::<Result<_, _>>()?;
                }
                other => tracing::debug!(part = other, "Ignoring unsupported RRULE part"),
            }
        }

        rule.frequency = frequency.ok_or(RuleParseError::MissingFrequency)?;
        Ok(rule)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FREQ={}", self.frequency)?;
        if self.interval != 1 {
            write!(f, ";INTERVAL={}", self.interval)?;
        }
        if !self.weekdays.is_empty() {
            f.write_str(";BYDAY=")?;
            write_list(f, self.weekdays.iter().map(ToString::to_string))?;
        }
        if let Some(count) = self.count {
            write!(f, ";COUNT={count}")?;
        }
        if let Some(until) = self.until {
            write!(f, ";UNTIL={}", until.format(DATE_FORMAT))?;
        }
        if !self.exceptions.is_empty() {
            f.write_str(";EXDATE=")?;
            write_list(
                f,
                self.exceptions
                    .iter()
                    .map(|date| date.format(DATE_FORMAT).to_string()),
            )?;
        }
        Ok(())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: impl Iterator<Item = String>) -> fmt::Result {
    for (position, item) in items.enumerate() {
        if position > 0 {
            f.write_str(",")?;
        }
        f.write_str(&item)?;
    }
    Ok(())
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_number<T: FromStr>(part: &'static str, value: &str) -> Result<T, RuleParseError> {
    value.parse().map_err(|_| RuleParseError::InvalidNumber {
        part,
        value: value.to_string(),
    })
}

/// `YYYYMMDD`, optionally followed by a `THHMMSS[Z]` time which is discarded.
fn parse_date(value: &str) -> Result<NaiveDate, RuleParseError> {
    let invalid = || RuleParseError::InvalidDate(value.to_string());
    let (date, time) = value.split_at_checked(8).ok_or_else(invalid)?;
    if !(time.is_empty() || time.starts_with(['T', 't'])) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_parse_weekly_rule() {
        let rule: RecurrenceRule = "RRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,we;COUNT=10"
            .parse()
            .expect("rule should parse");

        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.interval, 2);
        assert_eq!(rule.weekdays, vec![Weekday::Monday, Weekday::Wednesday]);
        assert_eq!(rule.count, Some(10));
        assert_eq!(rule.until, None);
    }

    #[test]
    fn test_parse_until_with_time_and_exdates() {
        let rule: RecurrenceRule = "FREQ=DAILY;UNTIL=20250131T235959Z;EXDATE=20250113,20250120"
            .parse()
            .expect("rule should parse");

        assert_eq!(rule.until, Some(date(2025, 1, 31)));
        assert_eq!(rule.exceptions, vec![date(2025, 1, 13), date(2025, 1, 20)]);
    }

    #[test]
    fn test_unknown_frequency_is_not_an_error() {
        let rule: RecurrenceRule = "FREQ=HOURLY;INTERVAL=4".parse().expect("rule should parse");
        assert_eq!(rule.frequency, Frequency::Unsupported);
    }

    #[test]
    fn test_unknown_parts_are_ignored() {
        let rule: RecurrenceRule = "FREQ=MONTHLY;WKST=SU;BYSETPOS=1".parse().expect("rule should parse");
        assert_eq!(rule, RecurrenceRule::new(Frequency::Monthly));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(
            "INTERVAL=2".parse::<RecurrenceRule>(),
            Err(RuleParseError::MissingFrequency)
        );
        assert_eq!(
            "FREQ=DAILY;COUNT".parse::<RecurrenceRule>(),
            Err(RuleParseError::MissingSeparator("COUNT".to_string()))
        );
        assert!(matches!(
            "FREQ=DAILY;COUNT=-1".parse::<RecurrenceRule>(),
            Err(RuleParseError::InvalidNumber { part: "COUNT", .. })
        ));
        assert_eq!(
            "FREQ=WEEKLY;BYDAY=1MO".parse::<RecurrenceRule>(),
            Err(RuleParseError::InvalidWeekday("1MO".to_string()))
        );
        assert_eq!(
            "FREQ=DAILY;UNTIL=2025-01-31".parse::<RecurrenceRule>(),
            Err(RuleParseError::InvalidDate("2025-01-31".to_string()))
        );
    }

    #[test]
    fn test_display_writes_only_set_parts() {
        let rule = RecurrenceRule::new(Frequency::Weekly)
            .with_interval(2)
            .with_weekdays([Weekday::Tuesday, Weekday::Thursday])
            .with_until(date(2025, 6, 30))
            .with_exception(date(2025, 2, 4));

        assert_eq!(
            rule.to_string(),
            "FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,TH;UNTIL=20250630;EXDATE=20250204"
        );
        assert_eq!(rule.to_string().parse::<RecurrenceRule>(), Ok(rule));
        assert_eq!(RecurrenceRule::new(Frequency::Yearly).to_string(), "FREQ=YEARLY");
    }
}
