use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::domain::event::TriggerEvent;
use crate::error::{AppError, AppResult};
use crate::services::EventSource;

/// Webhook payload written to disk by the runner for the current job.
#[derive(Debug, Clone)]
pub struct GithubEventFile {
    pub event_name: Option<String>,
    pub event_path: Option<PathBuf>,
}

impl GithubEventFile {
    pub fn new(event_name: Option<String>, event_path: Option<PathBuf>) -> Self {
        Self {
            event_name,
            event_path,
        }
    }
}

impl EventSource for GithubEventFile {
    fn trigger_event(&self) -> AppResult<TriggerEvent> {
        let event_name = self
            .event_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::Configuration("GITHUB_EVENT_NAME is not set".to_string()))?;
        let path = self
            .event_path
            .as_ref()
            .ok_or_else(|| AppError::Configuration("GITHUB_EVENT_PATH is not set".to_string()))?;

        let contents = fs::read_to_string(path)?;
        let payload: Value = serde_json::from_str(&contents)
            .map_err(|err| AppError::Payload(format!("{}: {err}", path.display())))?;

        debug!(event_name, path = %path.display(), "loaded webhook payload");
        Ok(TriggerEvent::from_payload(event_name, &payload))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn payload_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn reads_event_from_file() {
        let file = payload_file(r#"{"ref": "feature/PROJ-1-x", "ref_type": "branch"}"#);
        let source = GithubEventFile::new(
            Some("create".to_string()),
            Some(file.path().to_path_buf()),
        );
        let event = source.trigger_event().unwrap();
        assert_eq!(event, TriggerEvent::branch_created("feature/PROJ-1-x"));
    }

    #[test]
    fn rejects_malformed_payload() {
        let file = payload_file("{ not json");
        let source = GithubEventFile::new(
            Some("create".to_string()),
            Some(file.path().to_path_buf()),
        );
        assert!(matches!(source.trigger_event(), Err(AppError::Payload(_))));
    }

    #[test]
    fn requires_event_name_and_path() {
        let source = GithubEventFile::new(None, Some(PathBuf::from("/tmp/event.json")));
        assert!(matches!(
            source.trigger_event(),
            Err(AppError::Configuration(_))
        ));

        let source = GithubEventFile::new(Some("create".to_string()), None);
        assert!(matches!(
            source.trigger_event(),
            Err(AppError::Configuration(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = GithubEventFile::new(
            Some("create".to_string()),
            Some(PathBuf::from("/nonexistent/event.json")),
        );
        assert!(matches!(source.trigger_event(), Err(AppError::Io(_))));
    }
}
