use crate::config::Config;
use crate::core::git::sync::remote_ref;
use crate::core::git::{
    remote_exists, BranchLoader, BranchLocation, GitCommand, SyncStatusResolver, DEFAULT_REMOTE,
};
use crate::core::prompt::Picker;
use crate::core::shell::ShellExecutor;
use crate::utils::{GitmateError, Result};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPushOutcome {
    pub branch: String,
    pub remote: String,
}

/// First push of the current branch, with upstream tracking.
pub struct NewPushWorkflow<'a> {
    shell: &'a dyn ShellExecutor,
    picker: &'a dyn Picker,
    loader: &'a dyn BranchLoader,
    config: &'a Config,
}

impl<'a> NewPushWorkflow<'a> {
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

    pub fn run(&self) -> Result<NewPushOutcome> {
        if !remote_exists(self.shell, DEFAULT_REMOTE)? {
            return Err(GitmateError::NoRemoteRepository);
        }

        let current = self
            .loader
            .current_branch()?
            .ok_or(GitmateError::NoCurrentBranch)?;

        GitCommand::Fetch {
            remote: DEFAULT_REMOTE.to_string(),
        }
        .run(self.shell)?;

        let remote_name = format!("{}/{}", DEFAULT_REMOTE, current);
        let remote_names = self.loader.load_branch_names(BranchLocation::Remote)?;
        if remote_names.iter().any(|name| name == &remote_name) {
            return Err(GitmateError::remote_branch_exists(current));
        }

        if !self.config.is_default_branch(&current) {
            self.check_feature_branch(&current)?;
        }

        GitCommand::PushSetUpstream {
            remote: DEFAULT_REMOTE.to_string(),
            branch: current.clone(),
        }
        .run(self.shell)?;
        info!(branch = %current, remote = DEFAULT_REMOTE, "pushed new branch");

        Ok(NewPushOutcome {
            branch: current,
            remote: DEFAULT_REMOTE.to_string(),
        })
    }

    fn check_feature_branch(&self, current: &str) -> Result<()> {
        let status = GitCommand::StatusPorcelain.run(self.shell)?;
        if !status.trim().is_empty() {
            return Err(GitmateError::UncommittedChanges);
        }

        let default_branch = self.config.default_branch();
        let comparing = remote_ref(default_branch);
        let status = SyncStatusResolver::new(self.shell).sync_status(current, Some(&comparing));
        if status.is_behind() {
            self.picker.require_permission(&format!(
                "'{}' is behind {}/{}. Push it anyway?",
                current, DEFAULT_REMOTE, default_branch
            ))?;
        }

        Ok(())
    }
}
