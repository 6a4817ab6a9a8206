use std::collections::HashMap;

use super::assignment::Assignment;
use super::milestone::Milestone;
use super::person::Person;
use super::project::Project;
use crate::errors::{AppError, AppResult};

/// Everything one report request needs, fetched fresh from the remote
/// service and discarded once the reply is rendered. Never cached across
/// requests.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub people: Vec<Person>,
    pub assignments: Vec<Assignment>,
    /// None once narrowed to a person; people carry no milestones of
    /// their own.
    pub milestones: Option<Vec<Milestone>>,
    pub projects_by_id: HashMap<u64, Project>,
    pub people_by_id: HashMap<u64, Person>,
}

impl Dataset {
    /// Duplicate ids are not expected upstream; if they occur the last
    /// record wins.
    pub fn new(
        projects: Vec<Project>,
        people: Vec<Person>,
        assignments: Vec<Assignment>,
        milestones: Vec<Milestone>,
    ) -> Self {
        let projects_by_id = projects.iter().cloned().map(|p| (p.id, p)).collect();
        let people_by_id = people.iter().cloned().map(|p| (p.id, p)).collect();

        Self {
            projects,
            people,
            assignments,
            milestones: Some(milestones),
            projects_by_id,
            people_by_id,
        }
    }

    /// Look up a person by id; a miss means an assignment points at a
    /// record the service never returned.
    pub fn person(&self, id: u64) -> AppResult<&Person> {
        self.people_by_id.get(&id).ok_or(AppError::UnknownPerson(id))
    }

    pub fn project(&self, id: u64) -> AppResult<&Project> {
        self.projects_by_id
            .get(&id)
            .ok_or(AppError::UnknownProject(id))
    }

    /// Keep only the given person's assignments and drop milestones.
    pub fn narrow_to_person(&mut self, person_id: u64) {
        self.assignments.retain(|a| a.person_id == person_id);
        self.milestones = None;
    }

    /// Keep only the given project's assignments and milestones.
    pub fn narrow_to_project(&mut self, project_id: u64) {
        self.assignments.retain(|a| a.project_id == project_id);
        if let Some(milestones) = &mut self.milestones {
            milestones.retain(|m| m.project_id == project_id);
        }
    }
}
