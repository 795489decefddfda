use super::command::{GitCommand, FIELD_SEPARATOR};
use crate::core::shell::ShellExecutor;
use crate::utils::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub hash: String,
    pub message: String,
    pub author: String,
    pub date: String,
    pub was_authored_by_current_user: bool,
}

pub struct CommitLoader<'a> {
    shell: &'a dyn ShellExecutor,
}

impl<'a> CommitLoader<'a> {
    pub fn new(shell: &'a dyn ShellExecutor) -> Self {
        Self { shell }
    }

    /// The newest `count` commits on HEAD, newest first.
    pub fn recent_commits(&self, count: usize) -> Result<Vec<CommitInfo>> {
        let current_user = GitCommand::UserName
            .run(self.shell)
            .unwrap_or_default();
        let output = GitCommand::RecentCommits { count }.run(self.shell)?;

        Ok(parse_commit_log(&output, &current_user))
    }
}

/// Parses `%h<US>%s<US>%an<US>%ad` lines. Lines with missing fields are
/// skipped.
pub fn parse_commit_log(output: &str, current_user: &str) -> Vec<CommitInfo> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split(FIELD_SEPARATOR);
            let hash = fields.next()?.trim();
            let message = fields.next()?;
            let author = fields.next()?.trim();
            let date = fields.next()?.trim();

            if hash.is_empty() {
                return None;
            }

            Some(CommitInfo {
                hash: hash.to_string(),
                message: message.to_string(),
                author: author.to_string(),
                date: date.to_string(),
                was_authored_by_current_user: !current_user.is_empty()
                    && author == current_user.trim(),
            })
        })
        .collect()
}
