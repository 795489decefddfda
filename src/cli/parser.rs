use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "gitmate")]
#[command(about = "Everyday git branch routines with guard rails")]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a branch after bringing the current branch up to date
    NewBranch(NewBranchArgs),
    /// Delete local branches, merged ones without extra questions
    DeleteBranch(DeleteBranchArgs),
    /// Push the current branch for the first time and track it
    NewPush,
    /// Check out another local branch
    #[command(alias = "sw")]
    SwitchBranch(SwitchBranchArgs),
    /// Undo recent commits on the current branch
    Undo(UndoArgs),
    /// Inspect or change the configuration
    Config(ConfigArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

#[derive(Args, Debug)]
pub struct NewBranchArgs {
    /// Branch name (prompted for when omitted)
    pub name: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteBranchArgs {
    /// Only offer branches whose name contains this text
    pub search: Option<String>,

    /// Delete every offered branch after one confirmation; unmerged ones are confirmed again
    #[arg(long, short = 'm')]
    pub all_merged: bool,
}

#[derive(Args, Debug)]
pub struct SwitchBranchArgs {
    /// Only offer branches whose name contains this text
    pub search: Option<String>,
}

#[derive(Args, Debug)]
pub struct UndoArgs {
    /// Number of commits to undo
    #[arg(default_value_t = 1)]
    pub count: usize,

    /// Discard the changes instead of keeping them staged
    #[arg(long)]
    pub hard: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Set the branch treated as the default branch
    SetDefaultBranch {
        /// Branch name, e.g. main or develop
        name: String,
    },
    /// Set the prefix for new branches; omit it to clear the prefix
    SetPrefix {
        prefix: Option<String>,
    },
    /// Reset configuration to defaults
    Reset,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl NewBranchArgs {
    pub fn validate(&self) -> crate::utils::Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(crate::utils::GitmateError::invalid_args(
                    "Branch name cannot be empty",
                ));
            }
        }
        Ok(())
    }
}
