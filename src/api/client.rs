use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Assignment, Dataset, Milestone, Person, Project};
use crate::utils::date::{day_key, DateSpan};

/// The service wraps every collection in a keyed envelope,
/// e.g. `{"projects": [...]}`.
#[derive(Debug, Deserialize)]
struct ProjectsResponse {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct PeopleResponse {
    people: Vec<Person>,
}

#[derive(Debug, Deserialize)]
struct AssignmentsResponse {
    assignments: Vec<Assignment>,
}

#[derive(Debug, Deserialize)]
struct MilestonesResponse {
    milestones: Vec<Milestone>,
}

/// Read-only client for the Forecast scheduling service.
pub struct ForecastClient {
    client: Client,
    api_base: String,
    account_id: String,
    authorization: String,
}

impl ForecastClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        cfg.check()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            account_id: cfg.account_id.clone(),
            authorization: cfg.authorization.clone(),
        })
    }

    async fn get<T>(&self, endpoint: &str, query: &[(&str, String)]) -> AppResult<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.api_base, endpoint);

        let response = self
            .client
            .get(&url)
            .header("Forecast-Account-ID", &self.account_id)
            .header("Authorization", &self.authorization)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn projects(&self) -> AppResult<Vec<Project>> {
        let resp: ProjectsResponse = self.get("projects", &[]).await?;
        Ok(resp.projects)
    }

    pub async fn people(&self) -> AppResult<Vec<Person>> {
        let resp: PeopleResponse = self.get("people", &[]).await?;
        Ok(resp.people)
    }

    /// Assignments overlapping the span.
    pub async fn assignments(&self, span: &DateSpan) -> AppResult<Vec<Assignment>> {
        let query = span_query(span);
        let resp: AssignmentsResponse = self.get("assignments", &query).await?;
        Ok(resp.assignments)
    }

    /// Milestones falling within the span.
    pub async fn milestones(&self, span: &DateSpan) -> AppResult<Vec<Milestone>> {
        let query = span_query(span);
        let resp: MilestonesResponse = self.get("milestones", &query).await?;
        Ok(resp.milestones)
    }

    /// Fetch all four collections concurrently. Fails fast on the first
    /// error; a partial dataset is never surfaced. No retries.
    pub async fn fetch_dataset(&self, span: &DateSpan) -> AppResult<Dataset> {
        let (projects, people, assignments, milestones) = tokio::try_join!(
            self.projects(),
            self.people(),
            self.assignments(span),
            self.milestones(span),
        )?;

        Ok(Dataset::new(projects, people, assignments, milestones))
    }
}

fn span_query(span: &DateSpan) -> Vec<(&'static str, String)> {
    vec![
        ("start_date", day_key(span.start)),
        ("end_date", day_key(span.end)),
    ]
}
