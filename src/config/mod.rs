use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub git: GitConfig,
    #[serde(default)]
    pub behaviors: BehaviorOptions,
    #[serde(default)]
    pub loading: LoadingOptions,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GitConfig {
    pub default_branch: String,
    #[serde(default)]
    pub branch_prefix: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BehaviorOptions {
    /// Refresh remote-tracking refs before classifying the current branch.
    pub fetch_before_new_branch: bool,
    pub prune_after_delete: bool,
    pub undo_commit_limit: usize,
}

/// Which per-branch metadata the branch loader resolves.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct LoadingOptions {
    pub load_merge_status: bool,
    pub load_creation_date: bool,
    pub load_sync_status: bool,
}

impl Default for BehaviorOptions {
    fn default() -> Self {
        defaults::default_behavior_options()
    }
}

impl Default for LoadingOptions {
    fn default() -> Self {
        defaults::default_loading_options()
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl Config {
    pub fn load_or_create() -> Result<Self> {
        ConfigManager::load_or_create()
    }

    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub fn default_branch(&self) -> &str {
        &self.git.default_branch
    }

    pub fn branch_prefix(&self) -> Option<&str> {
        self.git
            .branch_prefix
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
    }

    /// Case-insensitive comparison against the configured default branch.
    pub fn is_default_branch(&self, name: &str) -> bool {
        name.eq_ignore_ascii_case(&self.git.default_branch)
    }
}
