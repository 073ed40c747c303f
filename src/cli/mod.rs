use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod flags;
pub use flags::SelectionFlags;

#[derive(Parser, Debug)]
#[command(name = "claude-agents")]
#[command(about = "Install Claude Code agents and keep CLAUDE.md in sync", long_about = None)]
#[command(version = env!("CLAUDE_AGENTS_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(after_help = "\
EXAMPLES:
  claude-agents list                          Show the catalog by category
  claude-agents install                       Pick agents interactively
  claude-agents install --category docs -y    Install all documentation agents
  claude-agents status --json                 Machine-readable install state
  claude-agents regenerate                    Rebuild the CLAUDE.md agent section

For details about a specific command, use:
  claude-agents <command> --help")]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Project directory (default: current directory)
    #[arg(long = "project-dir", global = true, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Agent catalog directory (overrides config and CLAUDE_AGENTS_SOURCE_DIR)
    #[arg(long = "source-dir", global = true, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install agents into the current project
    #[command(long_about = "Install agents into the current project.\n\n\
        Copies the selected definitions into .claude/agents and regenerates the\n\
        agent section of CLAUDE.md. Without --agent, --category or --all the\n\
        agents are chosen from an interactive list.")]
    Install(InstallCmd),

    /// List all available agents by category
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show installed and missing agents for this project
    Status {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Rebuild the agent section of CLAUDE.md from installed agents
    Regenerate,
}

#[derive(Parser, Debug)]
pub struct InstallCmd {
    #[command(flatten)]
    pub selection: SelectionFlags,

    /// Skip confirmation prompts
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Don't update CLAUDE.md after installing
    #[arg(long = "no-instructions")]
    pub no_instructions: bool,
}
