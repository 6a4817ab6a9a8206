use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// An inclusive calendar-day range. Both endpoints count as "within".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// [today, today + days], the default span for a schedule command.
    /// None when the count overflows the calendar.
    pub fn next_days(days: i64) -> Option<Self> {
        let start = today();
        let end = start.checked_add_signed(Duration::try_days(days)?)?;
        Some(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Every day from `start` to `end` inclusive; empty when start > end.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

/// ISO weekday 1-5; Saturday (6) and Sunday (7) are never scheduled.
pub fn is_weekday(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() < 6
}

/// Canonical bucket key, e.g. "2014-02-03".
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Report header form, e.g. "Mon 3rd Feb".
pub fn format_day(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.format("%a"),
        ordinal(date.day()),
        date.format("%b")
    )
}

fn ordinal(day: u32) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{}{}", day, suffix)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
