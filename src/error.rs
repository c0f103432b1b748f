use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Configuration(String),
    #[error("invalid ticket pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Jira API returned status {status}")]
    TrackerApi { status: u16 },
    #[error("{0}")]
    Transport(String),
    #[error("invalid event payload: {0}")]
    Payload(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
