//! Unified application error type.
//! All modules (api, core, cli, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Remote service
    // ---------------------------
    #[error("Forecast request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Forecast returned {status} for {endpoint}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    // ---------------------------
    // Command / resolution
    // ---------------------------
    #[error("Unknown person/project matching term: {0}")]
    SubjectNotFound(String),

    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    // ---------------------------
    // Dataset integrity
    // ---------------------------
    #[error("Assignment references unknown person id {0}")]
    UnknownPerson(u64),

    #[error("Record references unknown project id {0}")]
    UnknownProject(u64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid day count: {0}")]
    InvalidDayCount(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
