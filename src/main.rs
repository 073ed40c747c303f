#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use claude_agents::cli::{Cli, Commands};
use claude_agents::commands;
use claude_agents::config::Config;
use claude_agents::project::Project;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        // arg_required_else_help prints help before we get here
        return Ok(());
    };

    let project = match &cli.project_dir {
        Some(dir) => Project::at(dir)?,
        None => Project::detect()?,
    };

    let config = Config::load(project.root())?.with_cli_overrides(&cli);
    let paths = config.resolve(project.root());
    tracing::debug!(?paths, "resolved paths");

    match command {
        Commands::Install(cmd) => commands::install::execute(&project, &paths, cmd)?,
        Commands::List { json } => commands::list::execute(&paths, *json)?,
        Commands::Status { json } => commands::status::execute(&project, &paths, *json)?,
        Commands::Regenerate => commands::regenerate::execute(&paths)?,
    }

    Ok(())
}
