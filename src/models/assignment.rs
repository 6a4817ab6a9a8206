use chrono::NaiveDate;
use serde::Deserialize;

/// A person's committed time on a project over a contiguous date span.
#[derive(Debug, Clone, Deserialize)]
pub struct Assignment {
    pub id: u64,
    pub person_id: u64,
    pub project_id: u64,
    pub start_date: NaiveDate, // "YYYY-MM-DD"
    pub end_date: NaiveDate,   // "YYYY-MM-DD", inclusive
    pub allocation: f64,       // hours per day
    #[serde(default)]
    pub notes: Option<String>,
}
