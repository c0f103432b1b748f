use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::{ActionConfig, InputSource, TrackerCredentials};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::services::{EventSource, IssueTrackerService, Reporter};
use crate::workflow::transition::{TransitionOutcome, transition_from_event};

#[derive(Debug, Clone, Default)]
pub struct RunCommandArgs {
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed,
}

/// Runs the action once. Every error ends up as a single reported failure.
pub async fn run<F>(
    inputs: &dyn InputSource,
    events: &dyn EventSource,
    reporter: &dyn Reporter,
    connect: F,
    args: RunCommandArgs,
) -> RunStatus
where
    F: FnOnce(TrackerCredentials) -> Arc<dyn IssueTrackerService>,
{
    match execute(inputs, events, reporter, connect, args).await {
        Ok(outcome) => {
            info!(?outcome, "run finished");
            RunStatus::Succeeded
        }
        Err(err) => {
            error!(%err, "run failed");
            reporter.fail(&format!("Action failed: {err}"));
            RunStatus::Failed
        }
    }
}

async fn execute<F>(
    inputs: &dyn InputSource,
    events: &dyn EventSource,
    reporter: &dyn Reporter,
    connect: F,
    args: RunCommandArgs,
) -> AppResult<TransitionOutcome>
where
    F: FnOnce(TrackerCredentials) -> Arc<dyn IssueTrackerService>,
{
    let mut config = ActionConfig::load(inputs)?;
    config.dry_run |= args.dry_run;
    reporter.mask(&config.credentials.api_token);

    let event = events.trigger_event()?;
    let issue_tracker = connect(config.credentials.clone());
    let ctx = AppContext::new(config, issue_tracker);

    let outcome = transition_from_event(&ctx, &event).await?;

    // The ticket has already moved; output failures must not fail the run.
    if let TransitionOutcome::Transitioned { ticket, transition } = &outcome {
        let outputs = [
            ("ticket", ticket.as_str()),
            ("status", transition.status_label.as_str()),
        ];
        for (name, value) in outputs {
            if let Err(err) = reporter.set_output(name, value) {
                warn!(output = name, %err, "failed to write step output");
            }
        }
    }

    reporter.info(&outcome.message());
    Ok(outcome)
}
