use schedbot::utils::date::{days_between, format_day, is_weekday, today, DateSpan};

mod common;
use common::{d, span};

#[test]
fn format_day_matches_report_headers() {
    assert_eq!(format_day(d("2014-02-03")), "Mon 3rd Feb");
    assert_eq!(format_day(d("2014-02-01")), "Sat 1st Feb");
    assert_eq!(format_day(d("2014-02-02")), "Sun 2nd Feb");
    assert_eq!(format_day(d("2014-02-04")), "Tue 4th Feb");
}

#[test]
fn ordinal_suffixes_cover_the_teens() {
    assert_eq!(format_day(d("2014-02-11")), "Tue 11th Feb");
    assert_eq!(format_day(d("2014-02-12")), "Wed 12th Feb");
    assert_eq!(format_day(d("2014-02-13")), "Thu 13th Feb");
    assert_eq!(format_day(d("2014-02-21")), "Fri 21st Feb");
    assert_eq!(format_day(d("2014-02-22")), "Sat 22nd Feb");
    assert_eq!(format_day(d("2014-02-23")), "Sun 23rd Feb");
    assert_eq!(format_day(d("2014-01-31")), "Fri 31st Jan");
}

#[test]
fn days_between_is_inclusive_of_both_ends() {
    assert_eq!(
        days_between(d("2014-02-03"), d("2014-02-05")),
        vec![d("2014-02-03"), d("2014-02-04"), d("2014-02-05")]
    );
    assert_eq!(
        days_between(d("2014-02-03"), d("2014-02-03")),
        vec![d("2014-02-03")]
    );
}

#[test]
fn days_between_is_empty_when_reversed() {
    assert!(days_between(d("2014-02-05"), d("2014-02-03")).is_empty());
}

#[test]
fn iso_weekends_are_not_weekdays() {
    assert!(is_weekday(d("2014-02-03"))); // Monday
    assert!(is_weekday(d("2014-02-07"))); // Friday
    assert!(!is_weekday(d("2014-02-08"))); // Saturday
    assert!(!is_weekday(d("2014-02-09"))); // Sunday
}

#[test]
fn span_contains_both_endpoints() {
    let range = span("2014-02-03", "2014-02-05");
    assert!(range.contains(d("2014-02-03")));
    assert!(range.contains(d("2014-02-05")));
    assert!(!range.contains(d("2014-02-02")));
    assert!(!range.contains(d("2014-02-06")));
}

#[test]
fn next_days_starts_today() {
    let range = DateSpan::next_days(3).unwrap();
    assert_eq!(range.start, today());
    assert_eq!(range.end - range.start, chrono::Duration::days(3));
}

#[test]
fn next_days_rejects_counts_past_the_calendar() {
    assert!(DateSpan::next_days(100_000_000).is_none());
    assert!(DateSpan::next_days(i64::MAX).is_none());
}
