use crate::errors::{AppError, AppResult};
use crate::models::{Dataset, Person, Project};

/// What a free-text term resolved to.
#[derive(Debug, Clone)]
pub enum Subject {
    Project(Project),
    Person(Person),
}

/// Decide whether `term` names a project or a person.
///
/// Matching is exact and case-insensitive; projects are checked before
/// people. A person matches on first name alone or on "first last".
/// First match wins, so duplicate names resolve to whichever record the
/// service listed first.
pub fn resolve(term: &str, data: &Dataset) -> AppResult<Subject> {
    let lower = term.to_lowercase();

    if let Some(project) = data
        .projects
        .iter()
        .find(|p| p.name.to_lowercase() == lower)
    {
        return Ok(Subject::Project(project.clone()));
    }

    if let Some(person) = data.people.iter().find(|p| {
        p.first_name.to_lowercase() == lower || p.full_name().to_lowercase() == lower
    }) {
        return Ok(Subject::Person(person.clone()));
    }

    Err(AppError::SubjectNotFound(term.to_string()))
}
