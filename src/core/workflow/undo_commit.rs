use crate::config::Config;
use crate::core::git::{CommitInfo, CommitLoader, GitCommand};
use crate::core::prompt::Picker;
use crate::core::shell::ShellExecutor;
use crate::utils::{GitmateError, Result};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    pub undone: Vec<CommitInfo>,
    pub hard: bool,
}

/// Resets HEAD back by a bounded number of commits.
pub struct UndoCommitWorkflow<'a> {
    shell: &'a dyn ShellExecutor,
    picker: &'a dyn Picker,
    config: &'a Config,
}

impl<'a> UndoCommitWorkflow<'a> {
    pub fn new(shell: &'a dyn ShellExecutor, picker: &'a dyn Picker, config: &'a Config) -> Self {
        Self {
            shell,
            picker,
            config,
        }
    }

    pub fn run(&self, count: usize, hard: bool) -> Result<UndoOutcome> {
        let limit = self.config.behaviors.undo_commit_limit;
        if count == 0 || count > limit {
            return Err(GitmateError::invalid_args(format!(
                "Can only undo between 1 and {} commits, got {}",
                limit, count
            )));
        }

        let target = format!("HEAD~{}", count);
        if !(GitCommand::VerifyRef {
            reference: target.clone(),
        })
        .succeeds(self.shell)
        {
            return Err(GitmateError::invalid_args(format!(
                "The branch does not have {} commits to undo",
                count
            )));
        }

        let commits = CommitLoader::new(self.shell).recent_commits(count)?;

        let foreign = foreign_authors(&commits);
        if !foreign.is_empty() {
            self.picker.require_permission(&format!(
                "These commits include work by {}. Undo them anyway?",
                foreign.join(", ")
            ))?;
        }

        let mode = if hard {
            "discarding their changes"
        } else {
            "keeping their changes staged"
        };
        self.picker.require_permission(&format!(
            "Undo {} commit{}, {}?\n{}",
            commits.len(),
            if commits.len() == 1 { "" } else { "s" },
            mode,
            commit_summary(&commits)
        ))?;

        GitCommand::Reset { count, hard }.run(self.shell)?;
        info!(count, hard, "reset to {}", target);

        Ok(UndoOutcome {
            undone: commits,
            hard,
        })
    }
}

/// Distinct authors, in order of appearance, of commits the current user
/// did not write.
pub fn foreign_authors(commits: &[CommitInfo]) -> Vec<String> {
    let mut authors: Vec<String> = Vec::new();
    for commit in commits.iter().filter(|c| !c.was_authored_by_current_user) {
        if !authors.contains(&commit.author) {
            authors.push(commit.author.clone());
        }
    }
    authors
}

pub fn commit_summary(commits: &[CommitInfo]) -> String {
    commits
        .iter()
        .map(|c| format!("  {} {} ({}, {})", c.hash, c.message, c.author, c.date))
        .collect::<Vec<_>>()
        .join("\n")
}
