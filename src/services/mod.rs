pub mod event_source;
pub mod issue_tracker;
pub mod reporter;

pub use event_source::EventSource;
pub use issue_tracker::IssueTrackerService;
pub use reporter::Reporter;
