use crate::core::shell::ShellExecutor;
use crate::utils::Result;

pub mod branch;
pub mod command;
pub mod commit;
pub mod repository;
pub mod sync;
pub mod validation;

pub use branch::{
    filter_branch_names_by_search, Branch, BranchLoader, BranchLocation, DefaultBranchLoader,
};
pub use command::GitCommand;
pub use commit::{CommitInfo, CommitLoader};
pub use repository::GitRepository;
pub use sync::{SyncStatus, SyncStatusResolver, DEFAULT_REMOTE};
pub use validation::BranchNameValidator;

/// Whether a remote with this name is configured.
pub fn remote_exists(shell: &dyn ShellExecutor, remote: &str) -> Result<bool> {
    let output = GitCommand::ListRemotes.run(shell)?;
    Ok(output.lines().any(|line| line.trim() == remote))
}
