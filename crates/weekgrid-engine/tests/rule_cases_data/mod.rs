pub struct RuleCase {
    pub name: &'static str,
    /// Template start and end, `YYYY-MM-DDTHH:MM:SS`.
    pub start: &'static str,
    pub end: &'static str,
    pub rule: &'static str,
    pub week_start: &'static str,
    pub expected: &'static [&'static str],
}

#[expect(clippy::too_many_lines)]
pub fn rule_cases() -> Vec<RuleCase> {
    vec![
        RuleCase {
            name: "daily_basic",
            start: "2025-01-13T09:00:00",
            end: "2025-01-13T09:30:00",
            rule: "FREQ=DAILY;COUNT=3",
            week_start: "2025-01-13",
            expected: &["2025-01-13", "2025-01-14", "2025-01-15"],
        },
        RuleCase {
            name: "daily_every_other_day_from_earlier_week",
            start: "2025-01-02T07:00:00",
            end: "2025-01-02T07:30:00",
            rule: "FREQ=DAILY;INTERVAL=2",
            week_start: "2025-01-13",
            expected: &["2025-01-14", "2025-01-16", "2025-01-18"],
        },
        RuleCase {
            name: "daily_until_mid_week",
            start: "2025-01-01T12:00:00",
            end: "2025-01-01T13:00:00",
            rule: "FREQ=DAILY;UNTIL=20250114",
            week_start: "2025-01-13",
            expected: &["2025-01-13", "2025-01-14"],
        },
        RuleCase {
            name: "daily_count_exhausted_in_earlier_week",
            start: "2025-01-01T12:00:00",
            end: "2025-01-01T13:00:00",
            rule: "FREQ=DAILY;COUNT=10",
            week_start: "2025-01-13",
            expected: &[],
        },
        RuleCase {
            name: "daily_until_ends_before_count",
            start: "2025-01-13T09:00:00",
            end: "2025-01-13T09:30:00",
            rule: "FREQ=DAILY;COUNT=10;UNTIL=20250115",
            week_start: "2025-01-13",
            expected: &["2025-01-13", "2025-01-14", "2025-01-15"],
        },
        RuleCase {
            name: "daily_count_ends_before_until",
            start: "2025-01-13T09:00:00",
            end: "2025-01-13T09:30:00",
            rule: "FREQ=DAILY;COUNT=2;UNTIL=20250118",
            week_start: "2025-01-13",
            expected: &["2025-01-13", "2025-01-14"],
        },
        RuleCase {
            name: "daily_zero_count",
            start: "2025-01-13T09:00:00",
            end: "2025-01-13T09:30:00",
            rule: "FREQ=DAILY;COUNT=0",
            week_start: "2025-01-13",
            expected: &[],
        },
        RuleCase {
            name: "weekly_default_weekday",
            start: "2025-01-06T09:00:00",
            end: "2025-01-06T10:00:00",
            rule: "FREQ=WEEKLY",
            week_start: "2025-01-13",
            expected: &["2025-01-13"],
        },
        RuleCase {
            name: "weekly_byday_tu_th",
            start: "1997-09-02T09:00:00",
            end: "1997-09-02T10:00:00",
            rule: "FREQ=WEEKLY;COUNT=3;BYDAY=TU,TH",
            week_start: "1997-09-08",
            expected: &["1997-09-09"],
        },
        RuleCase {
            name: "weekly_every_third_week",
            start: "2025-01-01T16:00:00",
            end: "2025-01-01T17:00:00",
            rule: "FREQ=WEEKLY;INTERVAL=3;BYDAY=WE,FR",
            week_start: "2025-01-20",
            expected: &["2025-01-22", "2025-01-24"],
        },
        RuleCase {
            name: "weekly_off_week",
            start: "2025-01-01T16:00:00",
            end: "2025-01-01T17:00:00",
            rule: "FREQ=WEEKLY;INTERVAL=3;BYDAY=WE,FR",
            week_start: "2025-01-13",
            expected: &[],
        },
        RuleCase {
            name: "weekly_with_exdate",
            start: "2025-01-06T09:00:00",
            end: "2025-01-06T10:00:00",
            rule: "FREQ=WEEKLY;BYDAY=MO,TU;EXDATE=20250114",
            week_start: "2025-01-13",
            expected: &["2025-01-13"],
        },
        RuleCase {
            name: "monthly_basic",
            start: "2025-01-15T09:00:00",
            end: "2025-01-15T10:00:00",
            rule: "FREQ=MONTHLY",
            week_start: "2025-04-14",
            expected: &["2025-04-15"],
        },
        RuleCase {
            name: "monthly_every_other_month_off_month",
            start: "2025-01-15T09:00:00",
            end: "2025-01-15T10:00:00",
            rule: "FREQ=MONTHLY;INTERVAL=2",
            week_start: "2025-04-14",
            expected: &[],
        },
        RuleCase {
            name: "monthly_thirtieth_skips_february",
            start: "2025-01-30T09:00:00",
            end: "2025-01-30T10:00:00",
            rule: "FREQ=MONTHLY",
            week_start: "2025-02-24",
            expected: &[],
        },
        RuleCase {
            name: "yearly_basic",
            start: "2020-07-04T18:00:00",
            end: "2020-07-04T22:00:00",
            rule: "FREQ=YEARLY",
            week_start: "2025-06-30",
            expected: &["2025-07-04"],
        },
        RuleCase {
            name: "yearly_interval_off_year",
            start: "2020-07-04T18:00:00",
            end: "2020-07-04T22:00:00",
            rule: "FREQ=YEARLY;INTERVAL=2",
            week_start: "2025-06-30",
            expected: &[],
        },
        RuleCase {
            name: "yearly_leap_day_count_skips_common_years",
            start: "2016-02-29T10:00:00",
            end: "2016-02-29T11:00:00",
            rule: "FREQ=YEARLY;COUNT=3",
            week_start: "2024-02-26",
            expected: &["2024-02-29"],
        },
        RuleCase {
            name: "unsupported_frequency",
            start: "2025-01-13T09:00:00",
            end: "2025-01-13T10:00:00",
            rule: "FREQ=HOURLY",
            week_start: "2025-01-13",
            expected: &[],
        },
    ]
}
