use crate::core::shell::ShellExecutor;
use crate::utils::Result;

/// Every git invocation the workflows rely on.
///
/// This is the only place that knows git's argv; the rest of the crate names
/// operations by variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    ListLocalBranches,
    ListRemoteBranches,
    ListAllBranches,
    CurrentBranch,
    IsAncestor { branch: String, target: String },
    BranchReflog { branch: String },
    FirstUniqueCommitDate { branch: String, base: String },
    VerifyRef { reference: String },
    AheadBehind { local: String, remote: String },
    ListRemotes,
    Fetch { remote: String },
    PullMerge { remote: String, branch: String },
    PullRebase { remote: String, branch: String },
    Push { remote: String, branch: String },
    PushSetUpstream { remote: String, branch: String },
    CreateBranch { name: String },
    Checkout { branch: String },
    DeleteBranch { name: String, forced: bool },
    PruneRemote { remote: String },
    StatusPorcelain,
    RecentCommits { count: usize },
    UserName,
    Reset { count: usize, hard: bool },
}

/// Field separator used in `log --format` strings.
pub const FIELD_SEPARATOR: char = '\u{1f}';

impl GitCommand {
    pub fn args(&self) -> Vec<String> {
        let owned = |parts: &[&str]| parts.iter().map(|p| p.to_string()).collect::<Vec<_>>();

        match self {
            GitCommand::ListLocalBranches => owned(&["branch", "--list"]),
            GitCommand::ListRemoteBranches => owned(&["branch", "--remotes"]),
            GitCommand::ListAllBranches => owned(&["branch", "--all"]),
            GitCommand::CurrentBranch => owned(&["branch", "--show-current"]),
            GitCommand::IsAncestor { branch, target } => {
                owned(&["merge-base", "--is-ancestor", branch, target])
            }
            GitCommand::BranchReflog { branch } => owned(&[
                "reflog",
                "show",
                "--date=unix",
                "--format=%gd",
                &format!("refs/heads/{}", branch),
            ]),
            GitCommand::FirstUniqueCommitDate { branch, base } => owned(&[
                "log",
                "--reverse",
                "--format=%ct",
                &format!("{}..{}", base, branch),
            ]),
            GitCommand::VerifyRef { reference } => {
                owned(&["rev-parse", "--verify", "--quiet", reference])
            }
            GitCommand::AheadBehind { local, remote } => owned(&[
                "rev-list",
                "--left-right",
                "--count",
                &format!("{}...{}", local, remote),
            ]),
            GitCommand::ListRemotes => owned(&["remote"]),
            GitCommand::Fetch { remote } => owned(&["fetch", remote]),
            GitCommand::PullMerge { remote, branch } => {
                owned(&["pull", "--no-rebase", remote, branch])
            }
            GitCommand::PullRebase { remote, branch } => {
                owned(&["pull", "--rebase", remote, branch])
            }
            GitCommand::Push { remote, branch } => owned(&["push", remote, branch]),
            GitCommand::PushSetUpstream { remote, branch } => {
                owned(&["push", "-u", remote, branch])
            }
            GitCommand::CreateBranch { name } => owned(&["checkout", "-b", name]),
            GitCommand::Checkout { branch } => owned(&["checkout", branch]),
            GitCommand::DeleteBranch { name, forced } => {
                let flag = if *forced { "-D" } else { "-d" };
                owned(&["branch", flag, name])
            }
            GitCommand::PruneRemote { remote } => owned(&["remote", "prune", remote]),
            GitCommand::StatusPorcelain => owned(&["status", "--porcelain"]),
            GitCommand::RecentCommits { count } => owned(&[
                "log",
                "-n",
                &count.to_string(),
                "--format=%h%x1f%s%x1f%an%x1f%ad",
                "--date=short",
            ]),
            GitCommand::UserName => owned(&["config", "user.name"]),
            GitCommand::Reset { count, hard } => {
                let mode = if *hard { "--hard" } else { "--soft" };
                owned(&["reset", mode, &format!("HEAD~{}", count)])
            }
        }
    }

    pub fn run(&self, shell: &dyn ShellExecutor) -> Result<String> {
        let args = self.args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        shell.run(&args)
    }

    pub fn succeeds(&self, shell: &dyn ShellExecutor) -> bool {
        self.run(shell).is_ok()
    }
}
