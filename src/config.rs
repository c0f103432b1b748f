use std::collections::HashMap;
use std::env;

use crate::domain::transition::TransitionIds;
use crate::error::{AppError, AppResult};

pub const DEFAULT_TICKET_PATTERN: &str = "[A-Z]+-[0-9]+";

pub const JIRA_BASE_URL: &str = "jira-base-url";
pub const JIRA_EMAIL: &str = "jira-email";
pub const JIRA_API_TOKEN: &str = "jira-api-token";
pub const IN_PROGRESS_TRANSITION_ID: &str = "in-progress-transition-id";
pub const UNDER_REVIEW_TRANSITION_ID: &str = "under-review-transition-id";
pub const DONE_TRANSITION_ID: &str = "done-transition-id";
pub const TICKET_PATTERN: &str = "ticket-pattern";
pub const DRY_RUN: &str = "dry-run";

/// Named string values handed to the action by the CI platform.
pub trait InputSource {
    fn input(&self, name: &str) -> Option<String>;
}

/// Reads inputs from `INPUT_<NAME>` environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvInputs;

impl EnvInputs {
    pub fn variable_name(name: &str) -> String {
        format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
    }
}

impl InputSource for EnvInputs {
    fn input(&self, name: &str) -> Option<String> {
        env::var(Self::variable_name(name)).ok()
    }
}

impl InputSource for HashMap<String, String> {
    fn input(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerCredentials {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

#[derive(Debug, Clone)]
pub struct ActionConfig {
    pub credentials: TrackerCredentials,
    pub transitions: TransitionIds,
    pub ticket_pattern: String,
    pub dry_run: bool,
}

impl ActionConfig {
    pub fn load(inputs: &dyn InputSource) -> AppResult<Self> {
        let base_url = required(inputs, JIRA_BASE_URL)?;
        let email = required(inputs, JIRA_EMAIL)?;
        let api_token = required(inputs, JIRA_API_TOKEN)?;
        let in_progress = required(inputs, IN_PROGRESS_TRANSITION_ID)?;
        let under_review = required(inputs, UNDER_REVIEW_TRANSITION_ID)?;
        let done = required(inputs, DONE_TRANSITION_ID)?;

        let ticket_pattern =
            optional(inputs, TICKET_PATTERN).unwrap_or_else(|| DEFAULT_TICKET_PATTERN.to_string());
        let dry_run = match optional(inputs, DRY_RUN) {
            Some(value) => parse_flag(DRY_RUN, &value)?,
            None => false,
        };

        Ok(Self {
            credentials: TrackerCredentials {
                base_url: base_url.trim_end_matches('/').to_string(),
                email,
                api_token,
            },
            transitions: TransitionIds {
                in_progress,
                under_review,
                done,
            },
            ticket_pattern,
            dry_run,
        })
    }
}

fn optional(inputs: &dyn InputSource, name: &str) -> Option<String> {
    inputs
        .input(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(inputs: &dyn InputSource, name: &str) -> AppResult<String> {
    optional(inputs, name)
        .ok_or_else(|| AppError::Configuration(format!("Missing required input: {name}")))
}

fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(AppError::Configuration(format!(
            "input {name} must be a boolean, got '{other}'"
        ))),
    }
}
