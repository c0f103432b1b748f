use std::fmt;

use regex::Regex;

use crate::domain::event::TriggerEvent;
use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketId(pub String);

impl TicketId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns the first match of `pattern` in the branch the event refers to.
///
/// Events without a branch yield `None` without compiling the pattern. An
/// invalid pattern is an error whenever there is a branch to search.
pub fn extract_ticket(pattern: &str, event: &TriggerEvent) -> AppResult<Option<TicketId>> {
    let Some(branch) = event.branch_name().filter(|branch| !branch.is_empty()) else {
        return Ok(None);
    };

    let regex = Regex::new(pattern)?;
    Ok(regex
        .find(branch)
        .map(|found| TicketId(found.as_str().to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TICKET_PATTERN;
    use crate::error::AppError;

    #[test]
    fn extracts_ticket_on_branch_creation() {
        let event = TriggerEvent::branch_created("feature/PROJ-123-add-new-feature");
        let ticket = extract_ticket(DEFAULT_TICKET_PATTERN, &event).unwrap();
        assert_eq!(ticket, Some(TicketId("PROJ-123".to_string())));
    }

    #[test]
    fn extracts_ticket_from_pull_request_head() {
        let event = TriggerEvent {
            git_ref: Some("feature/OTHER-9".to_string()),
            ..TriggerEvent::pull_request("opened", "bugfix/ABC-456-fix-critical-bug", false, false)
        };
        let ticket = extract_ticket(DEFAULT_TICKET_PATTERN, &event).unwrap();
        assert_eq!(ticket.unwrap().as_str(), "ABC-456");
    }

    #[test]
    fn returns_first_match() {
        let event = TriggerEvent::branch_created("PROJ-1-and-PROJ-2");
        let ticket = extract_ticket(DEFAULT_TICKET_PATTERN, &event).unwrap();
        assert_eq!(ticket.unwrap().as_str(), "PROJ-1");
    }

    #[test]
    fn returns_none_without_match() {
        let event = TriggerEvent::pull_request("opened", "feature/no-ticket-here", false, false);
        assert_eq!(extract_ticket(DEFAULT_TICKET_PATTERN, &event).unwrap(), None);
    }

    #[test]
    fn returns_none_for_other_events() {
        let event = TriggerEvent {
            git_ref: Some("refs/heads/PROJ-123".to_string()),
            ..TriggerEvent::other()
        };
        assert_eq!(extract_ticket(DEFAULT_TICKET_PATTERN, &event).unwrap(), None);
        assert_eq!(extract_ticket("(", &event).unwrap(), None);
    }

    #[test]
    fn supports_custom_pattern() {
        let event = TriggerEvent::branch_created("feature/CUSTOM123-add-feature");
        let ticket = extract_ticket("CUSTOM[0-9]+-[a-z-]+", &event).unwrap();
        assert_eq!(ticket.unwrap().as_str(), "CUSTOM123-add-feature");
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let event = TriggerEvent::branch_created("feature/PROJ-123");
        let err = extract_ticket("[A-Z+-(", &event).unwrap_err();
        assert!(matches!(err, AppError::Pattern(_)));
    }
}
