use crate::core::git::{filter_branch_names_by_search, BranchLoader, BranchLocation, GitCommand};
use crate::core::prompt::Picker;
use crate::core::shell::ShellExecutor;
use crate::utils::{BranchOperation, GitmateError, Result};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchOutcome {
    NoMatch { search: String },
    Switched { branch: String },
}

pub struct SwitchBranchWorkflow<'a> {
    shell: &'a dyn ShellExecutor,
    picker: &'a dyn Picker,
    loader: &'a dyn BranchLoader,
}

impl<'a> SwitchBranchWorkflow<'a> {
    pub fn new(
        shell: &'a dyn ShellExecutor,
        picker: &'a dyn Picker,
        loader: &'a dyn BranchLoader,
    ) -> Self {
        Self {
            shell,
            picker,
            loader,
        }
    }

    pub fn run(&self, search: Option<&str>) -> Result<SwitchOutcome> {
        let current = self.loader.current_branch()?;
        let candidates: Vec<String> = self
            .loader
            .load_branch_names(BranchLocation::Local)?
            .into_iter()
            .filter(|name| current.as_deref() != Some(name.as_str()))
            .collect();

        if candidates.is_empty() {
            return Err(GitmateError::no_branches_available(BranchOperation::Switching));
        }

        let candidates = match search.filter(|s| !s.is_empty()) {
            Some(search) => {
                let matches = filter_branch_names_by_search(&candidates, search);
                if matches.is_empty() {
                    return Ok(SwitchOutcome::NoMatch {
                        search: search.to_string(),
                    });
                }
                matches
            }
            None => candidates,
        };

        let branch = match candidates.as_slice() {
            [only] => only.clone(),
            _ => {
                let index = self
                    .picker
                    .select_one("Select the branch to switch to", &candidates)?;
                candidates.get(index).cloned().ok_or_else(|| {
                    GitmateError::prompt(format!("Invalid selection index {}", index))
                })?
            }
        };

        GitCommand::Checkout {
            branch: branch.clone(),
        }
        .run(self.shell)?;
        info!(branch = %branch, "switched branch");

        Ok(SwitchOutcome::Switched { branch })
    }
}
