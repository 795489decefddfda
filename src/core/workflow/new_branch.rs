//! Branch creation guarded by the sync state of the branch it starts from.
//!
//! The current branch is classified against its remote counterpart first:
//! unpushed commits may be pushed, a stale base is merged or rebased with the
//! user's consent, and a diverged or unknown state refuses to create anything.

use crate::config::Config;
use crate::core::git::{
    remote_exists, BranchLoader, BranchNameValidator, GitCommand, SyncStatus, SyncStatusResolver,
    DEFAULT_REMOTE,
};
use crate::core::prompt::Picker;
use crate::core::shell::ShellExecutor;
use crate::utils::{GitmateError, Result};
use tracing::info;

pub const MERGE_OPTION: &str = "Merge remote changes";
pub const REBASE_OPTION: &str = "Rebase onto remote changes";

/// What happened to the base branch before the new branch was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUpdate {
    Unchanged,
    Pushed,
    PushSkipped,
    Merged,
    Rebased,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBranchOutcome {
    pub name: String,
    pub base: String,
    pub base_update: BaseUpdate,
}

pub struct NewBranchWorkflow<'a> {
    shell: &'a dyn ShellExecutor,
    picker: &'a dyn Picker,
    loader: &'a dyn BranchLoader,
    config: &'a Config,
}

impl<'a> NewBranchWorkflow<'a> {
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

    pub fn run(&self, name: Option<&str>) -> Result<NewBranchOutcome> {
        let requested = match name {
            Some(name) => name.to_string(),
            None => self
                .picker
                .require_text("Enter the name of your new branch")?,
        };
        let branch_name = BranchNameValidator::prefixed(self.config.branch_prefix(), &requested)?;

        let current = self
            .loader
            .current_branch()?
            .ok_or(GitmateError::NoCurrentBranch)?;

        if self.config.behaviors.fetch_before_new_branch
            && remote_exists(self.shell, DEFAULT_REMOTE)?
        {
            GitCommand::Fetch {
                remote: DEFAULT_REMOTE.to_string(),
            }
            .run(self.shell)?;
        }

        let status = SyncStatusResolver::new(self.shell).sync_status(&current, None);
        let base_update = self.prepare_base(&current, status)?;

        GitCommand::CreateBranch {
            name: branch_name.clone(),
        }
        .run(self.shell)?;
        info!(branch = %branch_name, base = %current, "created branch");

        Ok(NewBranchOutcome {
            name: branch_name,
            base: current,
            base_update,
        })
    }

    fn prepare_base(&self, current: &str, status: SyncStatus) -> Result<BaseUpdate> {
        match status {
            SyncStatus::InSync | SyncStatus::NoRemoteBranch => Ok(BaseUpdate::Unchanged),
            SyncStatus::Ahead => self.offer_push(current),
            SyncStatus::Behind if self.config.is_default_branch(current) => {
                self.update_default_branch(current)
            }
            SyncStatus::Behind => self.rebase_current_branch(current),
            SyncStatus::Diverged => Err(GitmateError::BranchDiverged),
            SyncStatus::Undetermined => Err(GitmateError::BranchStatusUndetermined),
        }
    }

    fn offer_push(&self, current: &str) -> Result<BaseUpdate> {
        let prompt = format!(
            "'{}' has unpushed commits. Push them to {} before creating the new branch?",
            current, DEFAULT_REMOTE
        );
        if !self.picker.confirm(&prompt)? {
            return Ok(BaseUpdate::PushSkipped);
        }

        GitCommand::Push {
            remote: DEFAULT_REMOTE.to_string(),
            branch: current.to_string(),
        }
        .run(self.shell)?;
        Ok(BaseUpdate::Pushed)
    }

    fn update_default_branch(&self, current: &str) -> Result<BaseUpdate> {
        let options = vec![MERGE_OPTION.to_string(), REBASE_OPTION.to_string()];
        let prompt = format!(
            "'{}' is behind its remote. How would you like to update it?",
            current
        );

        let (command, update) = match self.picker.select_one(&prompt, &options)? {
            0 => (
                GitCommand::PullMerge {
                    remote: DEFAULT_REMOTE.to_string(),
                    branch: current.to_string(),
                },
                BaseUpdate::Merged,
            ),
            1 => (
                GitCommand::PullRebase {
                    remote: DEFAULT_REMOTE.to_string(),
                    branch: current.to_string(),
                },
                BaseUpdate::Rebased,
            ),
            other => {
                return Err(GitmateError::prompt(format!(
                    "Invalid selection index {}",
                    other
                )))
            }
        };

        command.run(self.shell)?;
        Ok(update)
    }

    fn rebase_current_branch(&self, current: &str) -> Result<BaseUpdate> {
        self.picker.require_permission(&format!(
            "'{}' is behind its remote. Rebase onto {}/{} before creating the new branch?",
            current, DEFAULT_REMOTE, current
        ))?;

        GitCommand::PullRebase {
            remote: DEFAULT_REMOTE.to_string(),
            branch: current.to_string(),
        }
        .run(self.shell)?;
        Ok(BaseUpdate::Rebased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::default_config;
    use crate::core::git::DefaultBranchLoader;
    use crate::test_utils::mocks::{MockPicker, MockShell};

    const MUTATIONS: [&str; 3] = ["pull", "push", "checkout"];

    /// Repository with `origin`, current branch `current`, and the given
    /// ahead/behind counts against `origin/<current>`.
    fn shell_for(current: &str, counts: Option<&str>) -> MockShell {
        let mut shell = MockShell::new()
            .on("branch --show-current", current)
            .on("remote", "origin")
            .on("fetch origin", "");

        let verify = format!("rev-parse --verify --quiet origin/{}", current);
        let count = format!("rev-list --left-right --count {0}...origin/{0}", current);
        shell = match counts {
            Some(counts) => shell.on(&verify, "abc").on(&count, counts),
            None => shell.fail(&verify),
        };
        shell
    }

    fn run(
        shell: &MockShell,
        picker: &MockPicker,
        config: &Config,
        name: &str,
    ) -> Result<NewBranchOutcome> {
        let loader = DefaultBranchLoader::new(shell, config.loading);
        NewBranchWorkflow::new(shell, picker, &loader, config).run(Some(name))
    }

    #[test]
    fn test_in_sync_creates_branch_immediately() {
        let shell = shell_for("main", Some("0\t0")).on("checkout -b feature/x", "");
        let picker = MockPicker::new();
        let config = default_config();

        let outcome = run(&shell, &picker, &config, "feature/x").unwrap();

        assert_eq!(outcome.name, "feature/x");
        assert_eq!(outcome.base, "main");
        assert_eq!(outcome.base_update, BaseUpdate::Unchanged);
        assert!(picker.prompts().is_empty());
        assert!(shell.was_called("checkout -b feature/x"));
    }

    #[test]
    fn test_no_remote_branch_proceeds() {
        let shell = shell_for("topic", None).on("checkout -b next", "");
        let picker = MockPicker::new();
        let config = default_config();

        let outcome = run(&shell, &picker, &config, "next").unwrap();
        assert_eq!(outcome.base_update, BaseUpdate::Unchanged);
        assert!(shell.was_called("checkout -b next"));
    }

    #[test]
    fn test_ahead_pushes_on_consent() {
        let shell = shell_for("topic", Some("2\t0"))
            .on("push origin topic", "")
            .on("checkout -b next", "");
        let picker = MockPicker::new().confirm_with(true);
        let config = default_config();

        let outcome = run(&shell, &picker, &config, "next").unwrap();
        assert_eq!(outcome.base_update, BaseUpdate::Pushed);
        assert!(shell.was_called("push origin topic"));
    }

    #[test]
    fn test_ahead_refusal_still_creates_branch() {
        let shell = shell_for("topic", Some("2\t0")).on("checkout -b next", "");
        let picker = MockPicker::new().confirm_with(false);
        let config = default_config();

        let outcome = run(&shell, &picker, &config, "next").unwrap();
        assert_eq!(outcome.base_update, BaseUpdate::PushSkipped);
        assert!(!shell.was_called("push origin topic"));
        assert!(shell.was_called("checkout -b next"));
    }

    #[test]
    fn test_behind_default_branch_merge_selection() {
        let shell = shell_for("main", Some("0\t3"))
            .on("pull --no-rebase origin main", "")
            .on("checkout -b next", "");
        let picker = MockPicker::new().select_with(0);
        let config = default_config();

        let outcome = run(&shell, &picker, &config, "next").unwrap();

        assert_eq!(outcome.base_update, BaseUpdate::Merged);
        let pulls = shell.calls_starting_with(&["pull"]);
        assert_eq!(pulls, vec!["pull --no-rebase origin main".to_string()]);
    }

    #[test]
    fn test_behind_default_branch_rebase_selection() {
        let shell = shell_for("main", Some("0\t3"))
            .on("pull --rebase origin main", "")
            .on("checkout -b next", "");
        let picker = MockPicker::new().select_with(1);
        let config = default_config();

        let outcome = run(&shell, &picker, &config, "next").unwrap();

        assert_eq!(outcome.base_update, BaseUpdate::Rebased);
        let pulls = shell.calls_starting_with(&["pull"]);
        assert_eq!(pulls, vec!["pull --rebase origin main".to_string()]);
    }

    #[test]
    fn test_behind_feature_branch_rebases_after_permission() {
        let shell = shell_for("feature/x", Some("0\t2"))
            .on("pull --rebase origin feature/x", "")
            .on("checkout -b feature/y", "");
        let picker = MockPicker::new().confirm_with(true);
        let config = default_config();

        let outcome = run(&shell, &picker, &config, "feature/y").unwrap();

        assert_eq!(outcome.base_update, BaseUpdate::Rebased);
        assert!(shell.was_called("pull --rebase origin feature/x"));
        assert!(shell.was_called("checkout -b feature/y"));
        assert_eq!(picker.prompts().len(), 1);
    }

    #[test]
    fn test_behind_feature_branch_refusal_aborts() {
        let shell = shell_for("feature/x", Some("0\t2"));
        let picker = MockPicker::new().confirm_with(false);
        let config = default_config();

        let err = run(&shell, &picker, &config, "feature/y").unwrap_err();

        assert!(matches!(err, GitmateError::Cancelled { .. }));
        assert!(shell.calls_starting_with(&MUTATIONS).is_empty());
    }

    #[test]
    fn test_diverged_fails_before_any_mutation() {
        let shell = shell_for("topic", Some("1\t1"));
        let picker = MockPicker::new();
        let config = default_config();

        let err = run(&shell, &picker, &config, "next").unwrap_err();

        assert!(matches!(err, GitmateError::BranchDiverged));
        assert!(shell.calls_starting_with(&MUTATIONS).is_empty());
        assert!(picker.prompts().is_empty());
    }

    #[test]
    fn test_undetermined_fails_before_any_mutation() {
        let shell = shell_for("topic", Some("garbage"));
        let picker = MockPicker::new();
        let config = default_config();

        let err = run(&shell, &picker, &config, "next").unwrap_err();

        assert!(matches!(err, GitmateError::BranchStatusUndetermined));
        assert!(shell.calls_starting_with(&MUTATIONS).is_empty());
    }

    #[test]
    fn test_detached_head_has_no_current_branch() {
        let shell = MockShell::new().on("branch --show-current", "");
        let picker = MockPicker::new();
        let config = default_config();

        let err = run(&shell, &picker, &config, "next").unwrap_err();
        assert!(matches!(err, GitmateError::NoCurrentBranch));
    }

    #[test]
    fn test_prefix_and_prompted_name() {
        let shell = shell_for("main", Some("0\t0")).on("checkout -b team/login", "");
        let picker = MockPicker::new().text_with("login");
        let mut config = default_config();
        config.git.branch_prefix = Some("team".to_string());

        let loader = DefaultBranchLoader::new(&shell, config.loading);
        let outcome = NewBranchWorkflow::new(&shell, &picker, &loader, &config)
            .run(None)
            .unwrap();

        assert_eq!(outcome.name, "team/login");
    }

    #[test]
    fn test_invalid_name_is_rejected_before_git() {
        let shell = MockShell::new();
        let picker = MockPicker::new();
        let config = default_config();

        let err = run(&shell, &picker, &config, "bad name").unwrap_err();
        assert!(matches!(err, GitmateError::InvalidBranchName { .. }));
        assert!(shell.calls().is_empty());
    }

    #[test]
    fn test_fetch_can_be_disabled() {
        let shell = shell_for("main", Some("0\t0")).on("checkout -b next", "");
        let picker = MockPicker::new();
        let mut config = default_config();
        config.behaviors.fetch_before_new_branch = false;

        run(&shell, &picker, &config, "next").unwrap();
        assert!(!shell.was_called("fetch origin"));
    }
}
