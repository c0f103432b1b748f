use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::AppResult;
use crate::services::Reporter;

/// Talks to the GitHub Actions runner through workflow commands on stdout.
#[derive(Debug, Clone, Default)]
pub struct WorkflowCommands {
    output_file: Option<PathBuf>,
}

impl WorkflowCommands {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    fn escape_data(value: &str) -> String {
        value
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A")
    }
}

impl Reporter for WorkflowCommands {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn fail(&self, message: &str) {
        println!("::error::{}", Self::escape_data(message));
    }

    fn mask(&self, secret: &str) {
        if !secret.is_empty() {
            println!("::add-mask::{}", Self::escape_data(secret));
        }
    }

    fn set_output(&self, name: &str, value: &str) -> AppResult<()> {
        let Some(path) = &self.output_file else {
            return Ok(());
        };
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{name}={value}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn escapes_command_data() {
        assert_eq!(
            WorkflowCommands::escape_data("50% done\r\nnext"),
            "50%25 done%0D%0Anext"
        );
    }

    #[test]
    fn appends_outputs_to_file() {
        let file = NamedTempFile::new().unwrap();
        let reporter = WorkflowCommands::new(Some(file.path().to_path_buf()));

        reporter.set_output("ticket", "PROJ-123").unwrap();
        reporter.set_output("status", "In Progress").unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "ticket=PROJ-123\nstatus=In Progress\n");
    }

    #[test]
    fn skips_outputs_without_file() {
        let reporter = WorkflowCommands::default();
        reporter.set_output("ticket", "PROJ-123").unwrap();
    }
}
