use async_trait::async_trait;

use crate::domain::ticket::TicketId;
use crate::domain::transition::TransitionRequest;
use crate::error::AppResult;

#[async_trait]
pub trait IssueTrackerService: Send + Sync {
    async fn transition_ticket(
        &self,
        ticket: &TicketId,
        transition: &TransitionRequest,
    ) -> AppResult<()>;
}
