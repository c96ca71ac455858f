use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CasegenError {
    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    #[error("JIRA request failed: {status} {body}")]
    JiraApi { status: u16, body: String },

    #[error("Invalid issue key: '{0}'. Keys look like PROJ-123")]
    InvalidIssueKey(String),

    #[error("Request file not found: {0}")]
    RequestNotFound(PathBuf),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid field spec: {0}")]
    InvalidFieldSpec(String),

    #[error("No acceptance criteria found in input")]
    NoAcceptanceCriteria,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Shell completion error: {0}")]
    ShellCompletion(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CasegenError>;
