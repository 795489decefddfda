use crate::config::Config;
use crate::core::git::{
    filter_branch_names_by_search, remote_exists, Branch, BranchLoader, BranchLocation,
    GitCommand, DEFAULT_REMOTE,
};
use crate::core::prompt::Picker;
use crate::core::shell::ShellExecutor;
use crate::utils::{BranchOperation, GitmateError, Result};
use tracing::{info, warn};

const PREVIEW_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    NoMatch { search: String },
    NothingSelected,
    Deleted {
        deleted: Vec<String>,
        /// Unmerged branches whose forced delete was refused.
        skipped: Vec<String>,
        /// Branches git refused to delete.
        failed: Vec<String>,
    },
}

pub struct DeleteBranchWorkflow<'a> {
    shell: &'a dyn ShellExecutor,
    picker: &'a dyn Picker,
    loader: &'a dyn BranchLoader,
    config: &'a Config,
}

impl<'a> DeleteBranchWorkflow<'a> {
    pub fn new(
        shell: &'a dyn ShellExecutor,
        picker: &'a dyn Picker,
        loader: &'a dyn BranchLoader,
        config: &'a Config,
    ) -> Self {
        Self {
            shell,
            picker,
            loader,
            config,
        }
    }

    pub fn run(&self, search: Option<&str>, all_merged: bool) -> Result<DeleteOutcome> {
        let eligible = self.eligible_branch_names()?;
        if eligible.is_empty() {
            return Err(GitmateError::no_branches_available(BranchOperation::Deletion));
        }

        let narrowed = match search.filter(|s| !s.is_empty()) {
            Some(search) => {
                let matches = filter_branch_names_by_search(&eligible, search);
                if matches.is_empty() {
                    return Ok(DeleteOutcome::NoMatch {
                        search: search.to_string(),
                    });
                }
                matches
            }
            None => eligible,
        };

        let branches = self
            .loader
            .load_branches(Some(&narrowed), self.config.default_branch())?;

        let selected = if all_merged {
            self.confirm_batch(&branches)?;
            branches
        } else {
            let labels: Vec<String> = branches.iter().map(Branch::display_label).collect();
            let indices = self
                .picker
                .select_many("Select the branches to delete", &labels)?;
            if indices.is_empty() {
                return Ok(DeleteOutcome::NothingSelected);
            }
            indices
                .into_iter()
                .filter_map(|i| branches.get(i).cloned())
                .collect()
        };

        let outcome = self.delete_branches(&selected)?;
        self.prune_remote();

        Ok(outcome)
    }

    /// Local branches minus the current branch and the default branch.
    pub fn eligible_branch_names(&self) -> Result<Vec<String>> {
        let current = self.loader.current_branch()?;
        let names = self.loader.load_branch_names(BranchLocation::Local)?;

        Ok(names
            .into_iter()
            .filter(|name| current.as_deref() != Some(name.as_str()))
            .filter(|name| !self.config.is_default_branch(name))
            .collect())
    }

    /// One confirmation for the whole batch. Unmerged branches still get
    /// their own forced-delete prompt afterwards.
    fn confirm_batch(&self, branches: &[Branch]) -> Result<()> {
        let (merged, unmerged): (Vec<&Branch>, Vec<&Branch>) =
            branches.iter().partition(|b| b.is_merged);
        let merged: Vec<&str> = merged.iter().map(|b| b.name.as_str()).collect();
        let unmerged: Vec<&str> = unmerged.iter().map(|b| b.name.as_str()).collect();

        self.picker.require_permission(&batch_prompt(&merged, &unmerged))
    }

    fn delete_branches(&self, selected: &[Branch]) -> Result<DeleteOutcome> {
        let mut deleted = Vec::new();
        let mut skipped = Vec::new();
        let mut failed = Vec::new();

        for branch in selected {
            let forced = !branch.is_merged;
            if forced {
                let prompt = format!(
                    "'{}' has not been merged into '{}'. Force delete it anyway?",
                    branch.name,
                    self.config.default_branch()
                );
                if !self.picker.confirm(&prompt)? {
                    skipped.push(branch.name.clone());
                    continue;
                }
            }

            // Plain -d checks HEAD and the upstream, not the default branch.
            match (GitCommand::DeleteBranch {
                name: branch.name.clone(),
                forced,
            })
            .run(self.shell)
            {
                Ok(_) => {
                    info!(branch = %branch.name, forced, "deleted branch");
                    deleted.push(branch.name.clone());
                }
                Err(e) => {
                    warn!(branch = %branch.name, error = %e, "branch delete failed");
                    failed.push(branch.name.clone());
                }
            }
        }

        Ok(DeleteOutcome::Deleted {
            deleted,
            skipped,
            failed,
        })
    }

    fn prune_remote(&self) {
        if !self.config.behaviors.prune_after_delete {
            return;
        }

        if !remote_exists(self.shell, DEFAULT_REMOTE).unwrap_or(false) {
            return;
        }

        if let Err(e) = (GitCommand::PruneRemote {
            remote: DEFAULT_REMOTE.to_string(),
        })
        .run(self.shell)
        {
            warn!(error = %e, "ignoring failed remote prune");
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "es"
    }
}

pub fn batch_prompt(merged: &[&str], unmerged: &[&str]) -> String {
    let mut prompt = if merged.is_empty() {
        format!(
            "Review {} unmerged branch{} for forced deletion?",
            unmerged.len(),
            plural(unmerged.len())
        )
    } else {
        format!(
            "Delete {} merged branch{}?\n{}",
            merged.len(),
            plural(merged.len()),
            preview_names(merged, PREVIEW_LIMIT)
        )
    };

    if !unmerged.is_empty() {
        prompt.push_str(&format!(
            "\nUnmerged, each confirmed separately:\n{}",
            preview_names(unmerged, PREVIEW_LIMIT)
        ));
    }

    prompt
}

/// Up to `limit` names, one per line, followed by a remainder count.
pub fn preview_names(names: &[&str], limit: usize) -> String {
    let mut lines: Vec<String> = names
        .iter()
        .take(limit)
        .map(|name| format!("  {}", name))
        .collect();

    if names.len() > limit {
        lines.push(format!("  ...and {} more", names.len() - limit));
    }

    lines.join("\n")
}
