use async_trait::async_trait;
use base64::prelude::{BASE64_STANDARD, Engine as _};
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::Serialize;
use tracing::debug;

use crate::config::TrackerCredentials;
use crate::domain::ticket::TicketId;
use crate::domain::transition::TransitionRequest;
use crate::error::{AppError, AppResult};
use crate::services::IssueTrackerService;

pub struct JiraClient {
    http: Client,
    credentials: TrackerCredentials,
}

impl JiraClient {
    pub fn new(credentials: TrackerCredentials) -> Self {
        Self {
            http: Client::new(),
            credentials,
        }
    }

    fn auth_header(email: &str, token: &str) -> String {
        let credentials = format!("{email}:{token}");
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    fn transitions_endpoint(base_url: &str, ticket: &TicketId) -> String {
        format!("{base_url}/rest/api/3/issue/{ticket}/transitions")
    }
}

#[async_trait]
impl IssueTrackerService for JiraClient {
    async fn transition_ticket(
        &self,
        ticket: &TicketId,
        transition: &TransitionRequest,
    ) -> AppResult<()> {
        let TrackerCredentials {
            base_url,
            email,
            api_token,
        } = &self.credentials;
        let endpoint = Self::transitions_endpoint(base_url, ticket);
        debug!(%endpoint, transition = %transition.transition_id, "posting Jira transition");

        let response = self
            .http
            .post(endpoint)
            .header(AUTHORIZATION, Self::auth_header(email, api_token))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(&JiraTransitionRequest::new(&transition.transition_id))
            .send()
            .await
            .map_err(|err| AppError::Transport(err.to_string()))?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(AppError::TrackerApi {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JiraTransitionRequest<'a> {
    transition: JiraTransition<'a>,
}

impl<'a> JiraTransitionRequest<'a> {
    fn new(id: &'a str) -> Self {
        Self {
            transition: JiraTransition { id },
        }
    }
}

#[derive(Serialize)]
struct JiraTransition<'a> {
    id: &'a str,
}
