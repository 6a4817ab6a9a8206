#![allow(dead_code)]
use chrono::NaiveDate;
use schedbot::models::{Assignment, Dataset, Milestone, Person, Project};
use schedbot::utils::date::DateSpan;

pub fn d(s: &str) -> NaiveDate {
    schedbot::utils::date::parse_date(s).unwrap()
}

pub fn span(start: &str, end: &str) -> DateSpan {
    DateSpan::new(d(start), d(end))
}

pub fn person(id: u64, first: &str, last: &str) -> Person {
    Person {
        id,
        first_name: first.to_string(),
        last_name: last.to_string(),
        archived: false,
    }
}

pub fn project(id: u64, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        archived: false,
    }
}

pub fn assignment(
    id: u64,
    person_id: u64,
    project_id: u64,
    start: &str,
    end: &str,
    allocation: f64,
) -> Assignment {
    Assignment {
        id,
        person_id,
        project_id,
        start_date: d(start),
        end_date: d(end),
        allocation,
        notes: None,
    }
}

pub fn milestone(id: u64, project_id: u64, date: &str, name: &str) -> Milestone {
    Milestone {
        id,
        project_id,
        date: d(date),
        name: name.to_string(),
    }
}

/// One person, one project, one single-day assignment on Mon 2014-02-03.
pub fn ada_dataset() -> Dataset {
    Dataset::new(
        vec![project(10, "Engine")],
        vec![person(1, "Ada", "Lovelace")],
        vec![assignment(100, 1, 10, "2014-02-03", "2014-02-03", 8.0)],
        vec![],
    )
}
