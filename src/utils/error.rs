use std::fmt;
use thiserror::Error;

/// The selection pool a command needed but found empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOperation {
    Switching,
    Deletion,
}

impl fmt::Display for BranchOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchOperation::Switching => write!(f, "switching"),
            BranchOperation::Deletion => write!(f, "deletion"),
        }
    }
}

#[derive(Error, Debug)]
pub enum GitmateError {
    #[error("No branches available for {operation}")]
    NoBranchesAvailable { operation: BranchOperation },

    #[error("The current branch has diverged from its remote. Resolve the divergence manually before creating a new branch")]
    BranchDiverged,

    #[error("Unable to determine the sync status of the current branch")]
    BranchStatusUndetermined,

    #[error("No current branch (HEAD is detached)")]
    NoCurrentBranch,

    #[error("No remote repository named 'origin' is configured")]
    NoRemoteRepository,

    #[error("A remote branch named '{name}' already exists. Use a regular push instead")]
    RemoteBranchExists { name: String },

    #[error("You have uncommitted changes. Commit or stash them before pushing a new branch")]
    UncommittedChanges,

    #[error("Git command failed (git {command}, exit code {exit_code}): {stderr}")]
    Shell {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("{message}")]
    Cancelled { message: String },

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Invalid branch name: {name} - {reason}")]
    InvalidBranchName { name: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GitmateError>;

impl GitmateError {
    pub fn no_branches_available(operation: BranchOperation) -> Self {
        Self::NoBranchesAvailable { operation }
    }

    pub fn remote_branch_exists(name: impl Into<String>) -> Self {
        Self::RemoteBranchExists { name: name.into() }
    }

    pub fn shell(command: impl Into<String>, exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::Shell {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    pub fn cancelled(message: impl Into<String>) -> Self {
        Self::Cancelled {
            message: message.into(),
        }
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs {
            message: message.into(),
        }
    }

    pub fn invalid_branch_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBranchName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt {
            message: message.into(),
        }
    }

    /// Errors that end a command with a message but a clean exit status.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoBranchesAvailable { .. } | Self::Cancelled { .. }
        )
    }
}

impl From<dialoguer::Error> for GitmateError {
    fn from(error: dialoguer::Error) -> Self {
        Self::prompt(error.to_string())
    }
}
