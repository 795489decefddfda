use super::command::GitCommand;
use super::sync::{SyncStatus, SyncStatusResolver};
use crate::config::LoadingOptions;
use crate::core::shell::ShellExecutor;
use crate::utils::Result;
use chrono::{DateTime, Utc};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchLocation {
    Local,
    Remote,
    Both,
}

/// One local branch as observed at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_merged: bool,
    pub is_current_branch: bool,
    pub creation_date: Option<DateTime<Utc>>,
    pub sync_status: SyncStatus,
}

impl Branch {
    /// Label used in selection lists.
    pub fn display_label(&self) -> String {
        let mut details = Vec::new();
        if self.is_current_branch {
            details.push("current".to_string());
        }
        details.push(if self.is_merged { "merged" } else { "unmerged" }.to_string());
        if self.sync_status != SyncStatus::Undetermined {
            details.push(self.sync_status.to_string());
        }
        if let Some(date) = self.creation_date {
            details.push(format!("created {}", date.format("%Y-%m-%d")));
        }

        format!("{} ({})", self.name, details.join(", "))
    }
}

pub trait BranchLoader {
    /// Raw branch names in git's order. Remote names keep their `origin/`
    /// prefix.
    fn load_branch_names(&self, location: BranchLocation) -> Result<Vec<String>>;

    /// The checked-out branch, or `None` when HEAD is detached.
    fn current_branch(&self) -> Result<Option<String>>;

    /// Metadata for `names`, or for every local branch when `names` is `None`.
    fn load_branches(&self, names: Option<&[String]>, main_branch: &str) -> Result<Vec<Branch>>;
}

pub struct DefaultBranchLoader<'a> {
    shell: &'a dyn ShellExecutor,
    options: LoadingOptions,
}

impl<'a> DefaultBranchLoader<'a> {
    pub fn new(shell: &'a dyn ShellExecutor, options: LoadingOptions) -> Self {
        Self { shell, options }
    }

    fn is_merged(&self, branch: &str, main_branch: &str) -> bool {
        if !self.options.load_merge_status {
            return false;
        }

        GitCommand::IsAncestor {
            branch: branch.to_string(),
            target: main_branch.to_string(),
        }
        .succeeds(self.shell)
    }

    fn creation_date(&self, branch: &str, main_branch: &str) -> Option<DateTime<Utc>> {
        if !self.options.load_creation_date {
            return None;
        }

        let from_reflog = GitCommand::BranchReflog {
            branch: branch.to_string(),
        }
        .run(self.shell)
        .ok()
        .and_then(|output| output.lines().last().and_then(parse_reflog_timestamp));

        from_reflog.or_else(|| {
            GitCommand::FirstUniqueCommitDate {
                branch: branch.to_string(),
                base: main_branch.to_string(),
            }
            .run(self.shell)
            .ok()
            .and_then(|output| output.lines().next().and_then(parse_unix_timestamp))
        })
    }

    fn sync_status(&self, branch: &str) -> SyncStatus {
        if !self.options.load_sync_status {
            return SyncStatus::Undetermined;
        }

        SyncStatusResolver::new(self.shell).sync_status(branch, None)
    }
}

impl BranchLoader for DefaultBranchLoader<'_> {
    fn load_branch_names(&self, location: BranchLocation) -> Result<Vec<String>> {
        let command = match location {
            BranchLocation::Local => GitCommand::ListLocalBranches,
            BranchLocation::Remote => GitCommand::ListRemoteBranches,
            BranchLocation::Both => GitCommand::ListAllBranches,
        };

        let output = command.run(self.shell)?;
        Ok(parse_branch_names(&output))
    }

    fn current_branch(&self) -> Result<Option<String>> {
        let output = GitCommand::CurrentBranch.run(self.shell)?;
        let name = output.trim();
        Ok((!name.is_empty()).then(|| name.to_string()))
    }

    fn load_branches(&self, names: Option<&[String]>, main_branch: &str) -> Result<Vec<Branch>> {
        let names = match names {
            Some(names) => names.to_vec(),
            None => self.load_branch_names(BranchLocation::Local)?,
        };
        let current = self.current_branch().ok().flatten();

        let mut branches: Vec<Branch> = Vec::with_capacity(names.len());
        for name in names {
            let name = clean_branch_name(&name);
            if name.is_empty() || branches.iter().any(|b| b.name == name) {
                continue;
            }

            let branch = Branch {
                is_current_branch: current.as_deref() == Some(name.as_str()),
                is_merged: self.is_merged(&name, main_branch),
                creation_date: self.creation_date(&name, main_branch),
                sync_status: self.sync_status(&name),
                name,
            };
            debug!(branch = %branch.name, merged = branch.is_merged, sync = %branch.sync_status, "loaded branch");
            branches.push(branch);
        }

        Ok(branches)
    }
}

/// Trims a listed name and drops the `*`/`+` markers git prints in front of
/// the checked-out branch.
pub fn clean_branch_name(line: &str) -> String {
    let line = line.trim();
    let line = line
        .strip_prefix("* ")
        .or_else(|| line.strip_prefix("+ "))
        .unwrap_or(line);
    line.trim().to_string()
}

/// Parses `git branch --list/--remotes/--all` output into names.
pub fn parse_branch_names(output: &str) -> Vec<String> {
    output
        .lines()
        .map(clean_branch_name)
        .filter(|name| !name.is_empty())
        .filter(|name| !name.starts_with('(') && !name.contains(" -> "))
        .map(|name| match name.strip_prefix("remotes/") {
            Some(remote) => remote.to_string(),
            None => name,
        })
        .collect()
}

/// Case-insensitive substring filter that keeps input order. An exact,
/// case-sensitive match wins alone.
pub fn filter_branch_names_by_search(names: &[String], search: &str) -> Vec<String> {
    if let Some(exact) = names.iter().find(|name| name.as_str() == search) {
        return vec![exact.clone()];
    }

    let needle = search.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Reads the unix time out of a reflog selector such as
/// `refs/heads/topic@{1700000000}`.
fn parse_reflog_timestamp(line: &str) -> Option<DateTime<Utc>> {
    let start = line.rfind("@{")? + 2;
    let end = line[start..].find('}')? + start;
    parse_unix_timestamp(&line[start..end])
}

fn parse_unix_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let seconds = value.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(seconds, 0)
}
