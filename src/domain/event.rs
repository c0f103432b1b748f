use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    BranchCreated,
    PullRequestUpdated,
    Other,
}

impl EventKind {
    pub fn from_event_name(name: &str) -> Self {
        match name {
            "create" => EventKind::BranchCreated,
            "pull_request" => EventKind::PullRequestUpdated,
            _ => EventKind::Other,
        }
    }
}

/// The webhook notification that started the run, reduced to the fields the
/// action looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
    pub kind: EventKind,
    pub ref_type: Option<String>,
    pub git_ref: Option<String>,
    pub pr_action: Option<String>,
    pub pr_draft: Option<bool>,
    pub pr_merged: Option<bool>,
    pub pr_head_ref: Option<String>,
}

impl TriggerEvent {
    /// Builds the event from a raw webhook payload. Fields that are missing or
    /// have an unexpected type are left unset.
    pub fn from_payload(event_name: &str, payload: &Value) -> Self {
        let kind = EventKind::from_event_name(event_name);
        let payload = WebhookPayload::deserialize(payload).unwrap_or_default();
        let pull_request = payload.pull_request.unwrap_or_default();

        Self {
            kind,
            ref_type: payload.ref_type,
            git_ref: payload.git_ref,
            pr_action: payload.action,
            pr_draft: pull_request.draft,
            pr_merged: pull_request.merged,
            pr_head_ref: pull_request.head.and_then(|head| head.git_ref),
        }
    }

    /// The branch the ticket key is looked up in.
    pub fn branch_name(&self) -> Option<&str> {
        match self.kind {
            EventKind::BranchCreated if self.is_branch_ref() => self.git_ref.as_deref(),
            EventKind::PullRequestUpdated => self.pr_head_ref.as_deref(),
            _ => None,
        }
    }

    pub fn is_branch_ref(&self) -> bool {
        self.ref_type.as_deref() == Some("branch")
    }
}

#[cfg(test)]
impl TriggerEvent {
    pub fn other() -> Self {
        Self {
            kind: EventKind::Other,
            ref_type: None,
            git_ref: None,
            pr_action: None,
            pr_draft: None,
            pr_merged: None,
            pr_head_ref: None,
        }
    }

    pub fn branch_created(branch: &str) -> Self {
        Self {
            kind: EventKind::BranchCreated,
            ref_type: Some("branch".to_string()),
            git_ref: Some(branch.to_string()),
            ..Self::other()
        }
    }

    pub fn pull_request(action: &str, head_ref: &str, draft: bool, merged: bool) -> Self {
        Self {
            kind: EventKind::PullRequestUpdated,
            pr_action: Some(action.to_string()),
            pr_draft: Some(draft),
            pr_merged: Some(merged),
            pr_head_ref: Some(head_ref.to_string()),
            ..Self::other()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct WebhookPayload {
    #[serde(default, deserialize_with = "lenient")]
    ref_type: Option<String>,
    #[serde(default, rename = "ref", deserialize_with = "lenient")]
    git_ref: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    action: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct PullRequestPayload {
    #[serde(default, deserialize_with = "lenient")]
    draft: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    merged: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    head: Option<HeadPayload>,
}

#[derive(Debug, Default, Deserialize)]
struct HeadPayload {
    #[serde(default, rename = "ref", deserialize_with = "lenient")]
    git_ref: Option<String>,
}

// Treats null or a value of the wrong shape as absent instead of failing the
// whole payload.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
