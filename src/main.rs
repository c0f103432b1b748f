mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd::run::{self, RunCommandArgs, RunStatus};
use crate::config::EnvInputs;
use crate::infra::actions::WorkflowCommands;
use crate::infra::github::GithubEventFile;
use crate::infra::jira::JiraClient;
use crate::services::IssueTrackerService;

#[derive(Parser)]
#[command(
    name = "jira-transition",
    author,
    version,
    about = "Move Jira tickets through their workflow from branch and pull request events"
)]
struct Cli {
    /// Name of the webhook event that triggered the run.
    #[arg(long, env = "GITHUB_EVENT_NAME")]
    event_name: Option<String>,
    /// Path to the webhook payload JSON.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,
    /// File that receives step outputs.
    #[arg(long, env = "GITHUB_OUTPUT", hide = true)]
    output_file: Option<PathBuf>,
    /// Resolve the transition without calling Jira.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let events = GithubEventFile::new(cli.event_name, cli.event_path);
    let reporter = WorkflowCommands::new(cli.output_file);

    let status = run::run(
        &EnvInputs,
        &events,
        &reporter,
        |credentials| Arc::new(JiraClient::new(credentials)) as Arc<dyn IssueTrackerService>,
        RunCommandArgs {
            dry_run: cli.dry_run,
        },
    )
    .await;

    if status == RunStatus::Failed {
        std::process::exit(1);
    }
}
