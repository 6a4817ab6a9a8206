//! The aggregation core: buckets assignments and milestones by calendar
//! day and renders the indented schedule report.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::errors::AppResult;
use crate::models::{Dataset, Person, Project};
use crate::utils::date::{self, DateSpan};

/// One person's entry for one day: a project, the committed hours, and
/// any assignment notes. Notes are carried but not rendered.
#[derive(Debug, Clone)]
pub struct AllocationEntry {
    pub project_id: u64,
    pub allocation: f64,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MilestoneEntry {
    pub project_id: u64,
    pub name: String,
}

/// Everything scheduled on one calendar day. Milestones render before
/// per-person allocations; people keep first-encounter order.
#[derive(Debug, Clone, Default)]
pub struct DayBucket {
    pub milestones: Vec<MilestoneEntry>,
    pub people: IndexMap<u64, Vec<AllocationEntry>>,
}

/// Build the schedule report for everything in `data` that falls within
/// `span`, one text line per output chat message.
///
/// Day buckets render in the order they were first created while walking
/// assignments, not in chronological order. That mirrors the behavior the
/// bot has always had and readers may rely on.
pub fn build_report(
    data: &Dataset,
    span: &DateSpan,
    title: Option<String>,
) -> AppResult<Vec<String>> {
    let title = title.unwrap_or_else(|| "Schedule:".to_string());

    let mut days: IndexMap<NaiveDate, DayBucket> = IndexMap::new();

    // Assignments can start/end well outside the requested span; days
    // outside it, and weekend days, are skipped rather than bucketed.
    for assignment in &data.assignments {
        for day in date::days_between(assignment.start_date, assignment.end_date) {
            if span.contains(day) && date::is_weekday(day) {
                let bucket = days.entry(day).or_default();
                bucket
                    .people
                    .entry(assignment.person_id)
                    .or_default()
                    .push(AllocationEntry {
                        project_id: assignment.project_id,
                        allocation: assignment.allocation,
                        notes: assignment.notes.clone(),
                    });
            }
        }
    }

    if let Some(milestones) = &data.milestones {
        for milestone in milestones {
            if span.contains(milestone.date) && date::is_weekday(milestone.date) {
                days.entry(milestone.date)
                    .or_default()
                    .milestones
                    .push(MilestoneEntry {
                        project_id: milestone.project_id,
                        name: milestone.name.clone(),
                    });
            }
        }
    }

    let mut lines = vec![title];

    for (day, bucket) in &days {
        lines.push(format!("\t{}:", date::format_day(*day)));

        if !bucket.milestones.is_empty() {
            lines.push("\t\tMILESTONES:".to_string());
            for entry in &bucket.milestones {
                let project = data.project(entry.project_id)?;
                lines.push(format!("\t\t\t{} - {}", entry.name, project.name));
            }
        }

        for (person_id, entries) in &bucket.people {
            let person = data.person(*person_id)?;
            lines.push(format!("\t\t{}:", person.short_name()));
            for entry in entries {
                let project = data.project(entry.project_id)?;
                lines.push(format!("\t\t\t{} hours - {}", entry.allocation, project.name));
            }
        }
    }

    Ok(lines)
}

/// The `show forecast people` report: active people only.
pub fn people_lines(people: &[Person]) -> Vec<String> {
    let mut lines = vec!["Listing people in Forecast:".to_string()];
    for person in people.iter().filter(|p| !p.archived) {
        lines.push(format!("\t{}", person.full_name()));
    }
    lines
}

/// The `show forecast projects` report: active projects only.
pub fn project_lines(projects: &[Project]) -> Vec<String> {
    let mut lines = vec!["Listing projects in Forecast:".to_string()];
    for project in projects.iter().filter(|p| !p.archived) {
        lines.push(project.name.clone());
    }
    lines
}
