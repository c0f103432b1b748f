use tracing::debug;

use crate::context::AppContext;
use crate::domain::event::TriggerEvent;
use crate::domain::ticket::{TicketId, extract_ticket};
use crate::domain::transition::{TransitionRequest, resolve_transition};
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    NoTicket,
    NoTransition {
        ticket: TicketId,
    },
    Transitioned {
        ticket: TicketId,
        transition: TransitionRequest,
    },
    DryRun {
        ticket: TicketId,
        transition: TransitionRequest,
    },
}

impl TransitionOutcome {
    pub fn message(&self) -> String {
        match self {
            TransitionOutcome::NoTicket => "No Jira ticket found in branch name".to_string(),
            TransitionOutcome::NoTransition { .. } => {
                "No transition needed for this event".to_string()
            }
            TransitionOutcome::Transitioned { ticket, transition } => format!(
                "Successfully transitioned {ticket} to {}",
                transition.status_label
            ),
            TransitionOutcome::DryRun { ticket, transition } => format!(
                "Dry run: would transition {ticket} to {}",
                transition.status_label
            ),
        }
    }
}

/// Moves the ticket named by the event's branch, issuing at most one tracker
/// request.
pub async fn transition_from_event(
    ctx: &AppContext,
    event: &TriggerEvent,
) -> AppResult<TransitionOutcome> {
    let Some(ticket) = extract_ticket(&ctx.config.ticket_pattern, event)? else {
        return Ok(TransitionOutcome::NoTicket);
    };
    debug!(%ticket, "found ticket in branch name");

    let Some(transition) = resolve_transition(&ctx.config.transitions, event) else {
        return Ok(TransitionOutcome::NoTransition { ticket });
    };

    if ctx.config.dry_run {
        return Ok(TransitionOutcome::DryRun { ticket, transition });
    }

    ctx.issue_tracker
        .transition_ticket(&ticket, &transition)
        .await?;

    Ok(TransitionOutcome::Transitioned { ticket, transition })
}
