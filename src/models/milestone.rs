use chrono::NaiveDate;
use serde::Deserialize;

/// A one-day project event.
#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub project_id: u64,
    pub date: NaiveDate,
    pub name: String,
}
