//! High-level request flow: fetch, resolve, narrow, render.

use crate::api::ForecastClient;
use crate::core::command::ChatCommand;
use crate::core::report;
use crate::core::resolver::{self, Subject};
use crate::errors::{AppError, AppResult};
use crate::utils::date::DateSpan;

/// Turn one parsed chat command into its reply lines.
pub async fn respond(
    client: &ForecastClient,
    default_days: i64,
    command: ChatCommand,
) -> AppResult<Vec<String>> {
    match command {
        ChatCommand::People => people(client).await,
        ChatCommand::Projects => projects(client).await,
        ChatCommand::Schedule { days, term } => {
            let days = days.unwrap_or(default_days);
            let span = DateSpan::next_days(days)
                .ok_or_else(|| AppError::InvalidDayCount(days.to_string()))?;
            schedule(client, term.as_deref().unwrap_or(""), &span).await
        }
    }
}

pub async fn people(client: &ForecastClient) -> AppResult<Vec<String>> {
    let people = client.people().await?;
    Ok(report::people_lines(&people))
}

pub async fn projects(client: &ForecastClient) -> AppResult<Vec<String>> {
    let projects = client.projects().await?;
    Ok(report::project_lines(&projects))
}

/// Schedule report over `span`.
/// An empty term covers everything; otherwise the dataset is narrowed to
/// the matching project or person before rendering.
pub async fn schedule(
    client: &ForecastClient,
    term: &str,
    span: &DateSpan,
) -> AppResult<Vec<String>> {
    let mut data = client.fetch_dataset(span).await?;

    if term.is_empty() {
        return report::build_report(&data, span, None);
    }

    match resolver::resolve(term, &data)? {
        Subject::Person(person) => {
            data.narrow_to_person(person.id);
            let title = format!("Schedule for {}:", person.full_name());
            report::build_report(&data, span, Some(title))
        }
        Subject::Project(project) => {
            data.narrow_to_project(project.id);
            let title = format!("Schedule for {}:", project.name);
            report::build_report(&data, span, Some(title))
        }
    }
}
