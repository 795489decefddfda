//! Classification of a local branch against its remote counterpart.

use super::command::GitCommand;
use crate::core::shell::ShellExecutor;
use std::fmt;
use tracing::debug;

pub const DEFAULT_REMOTE: &str = "origin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Behind,
    Ahead,
    InSync,
    Diverged,
    Undetermined,
    NoRemoteBranch,
}

impl SyncStatus {
    /// Classifies unique-commit counts for a comparison ref that exists.
    pub fn from_counts(ahead: u32, behind: u32) -> Self {
        match (ahead, behind) {
            (0, 0) => SyncStatus::InSync,
            (_, 0) => SyncStatus::Ahead,
            (0, _) => SyncStatus::Behind,
            _ => SyncStatus::Diverged,
        }
    }

    /// Full classification from raw `rev-list --left-right --count` output.
    ///
    /// `counts` is `None` when the command itself failed.
    pub fn classify(tracking_ref_exists: bool, counts: Option<&str>) -> Self {
        if !tracking_ref_exists {
            return SyncStatus::NoRemoteBranch;
        }

        match counts.and_then(parse_ahead_behind) {
            Some((ahead, behind)) => SyncStatus::from_counts(ahead, behind),
            None => SyncStatus::Undetermined,
        }
    }

    /// True when the comparison branch has commits the local branch lacks.
    pub fn is_behind(&self) -> bool {
        matches!(self, SyncStatus::Behind | SyncStatus::Diverged)
    }
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SyncStatus::Behind => "behind",
            SyncStatus::Ahead => "ahead",
            SyncStatus::InSync => "in sync",
            SyncStatus::Diverged => "diverged",
            SyncStatus::Undetermined => "undetermined",
            SyncStatus::NoRemoteBranch => "no remote branch",
        };
        write!(f, "{}", label)
    }
}

/// Parses `<ahead>\t<behind>` as printed by `git rev-list --left-right --count
/// local...remote`. Anything other than exactly two unsigned integers is
/// rejected.
pub fn parse_ahead_behind(output: &str) -> Option<(u32, u32)> {
    let mut parts = output.split_whitespace();
    let ahead = parts.next()?.parse::<u32>().ok()?;
    let behind = parts.next()?.parse::<u32>().ok()?;

    if parts.next().is_some() {
        return None;
    }

    Some((ahead, behind))
}

pub fn remote_ref(branch: &str) -> String {
    format!("{}/{}", DEFAULT_REMOTE, branch)
}

pub struct SyncStatusResolver<'a> {
    shell: &'a dyn ShellExecutor,
}

impl<'a> SyncStatusResolver<'a> {
    pub fn new(shell: &'a dyn ShellExecutor) -> Self {
        Self { shell }
    }

    /// Compares `branch` with `comparing`, or with `origin/<branch>` when no
    /// comparison branch is given.
    pub fn sync_status(&self, branch: &str, comparing: Option<&str>) -> SyncStatus {
        let comparing = comparing
            .map(str::to_string)
            .unwrap_or_else(|| remote_ref(branch));

        let tracking_ref_exists = GitCommand::VerifyRef {
            reference: comparing.clone(),
        }
        .succeeds(self.shell);

        let counts = if tracking_ref_exists {
            GitCommand::AheadBehind {
                local: branch.to_string(),
                remote: comparing.clone(),
            }
            .run(self.shell)
            .ok()
        } else {
            None
        };

        let status = SyncStatus::classify(tracking_ref_exists, counts.as_deref());
        debug!(branch, comparing = %comparing, %status, "resolved sync status");
        status
    }
}
