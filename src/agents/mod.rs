//! Installing agents into a project.
//!
//! # Architecture
//!
//! - **selection**: resolves `--agent`, `--category` and `--all`, or an
//!   interactive answer, into the ids to install
//! - **installer**: copies the chosen definitions into the project's
//!   installed collection and reports a per-agent summary

pub mod installer;
pub mod selection;

pub use installer::{install_agents, InstallSummary};
pub use selection::Selection;
