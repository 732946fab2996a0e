//! `update_all_git_branches` - fast-forward every branch of every
//! repository under a directory.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_branch_tools::cli::commands::handle_update;
use git_branch_tools::cli::UpdateArgs;
use git_branch_tools::config::{load_config, settings::env};
use git_branch_tools::error::Result;
use git_branch_tools::git::ProcessGit;
use git_branch_tools::prompt::StdinPrompter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG_LEVEL).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Parse CLI arguments
    let args = UpdateArgs::parse();

    // Run the command
    match run(args).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(args: UpdateArgs) -> Result<bool> {
    let config = load_config()?;
    let git = ProcessGit::new(&config.git);
    handle_update(&git, &StdinPrompter, &args, &config).await
}
