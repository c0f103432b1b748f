use crate::domain::event::{EventKind, TriggerEvent};

pub const IN_PROGRESS: &str = "In Progress";
pub const UNDER_REVIEW: &str = "Under Review";
pub const DONE: &str = "Done";

/// Workflow transition ids configured for the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionIds {
    pub in_progress: String,
    pub under_review: String,
    pub done: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRequest {
    pub transition_id: String,
    pub status_label: String,
}

impl TransitionRequest {
    fn new(transition_id: &str, status_label: &str) -> Self {
        Self {
            transition_id: transition_id.to_string(),
            status_label: status_label.to_string(),
        }
    }
}

pub fn resolve_transition(ids: &TransitionIds, event: &TriggerEvent) -> Option<TransitionRequest> {
    match event.kind {
        EventKind::BranchCreated if event.is_branch_ref() => {
            Some(TransitionRequest::new(&ids.in_progress, IN_PROGRESS))
        }
        EventKind::PullRequestUpdated => {
            let action = event.pr_action.as_deref();
            // An absent draft flag means the pull request is not a draft.
            let ready = !event.pr_draft.unwrap_or(false);
            let merged = event.pr_merged.unwrap_or(false);

            match action {
                Some("opened" | "ready_for_review") if ready => {
                    Some(TransitionRequest::new(&ids.under_review, UNDER_REVIEW))
                }
                Some("closed") if merged => Some(TransitionRequest::new(&ids.done, DONE)),
                _ => None,
            }
        }
        _ => None,
    }
}
