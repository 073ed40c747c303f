use crate::agents::Selection;
use clap::Parser;

/// Flags choosing which agents to install.
/// Without any of them, install prompts interactively.
#[derive(Parser, Debug, Clone, Default)]
pub struct SelectionFlags {
    /// Agent id to install (repeatable)
    #[arg(short = 'a', long = "agent", value_name = "ID")]
    pub agents: Vec<String>,

    /// Install every agent of a category (repeatable): docs, backend, frontend,
    /// devops, testing, security, data, mobile, other
    #[arg(short = 'c', long = "category", value_name = "KEY")]
    pub categories: Vec<String>,

    /// Install every agent not installed yet
    #[arg(long, conflicts_with_all = ["agents", "categories"])]
    pub all: bool,
}

impl SelectionFlags {
    pub fn to_selection(&self) -> Selection {
        Selection {
            agents: self.agents.clone(),
            categories: self.categories.clone(),
            all: self.all,
        }
    }
}
