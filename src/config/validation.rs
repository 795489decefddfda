use super::{BehaviorOptions, Config, ConfigError, GitConfig, Result};
use crate::core::git::BranchNameValidator;

pub fn validate_config(config: &Config) -> Result<()> {
    validate_git_config(&config.git)?;
    validate_behavior_options(&config.behaviors)?;
    Ok(())
}

pub fn validate_git_config(git: &GitConfig) -> Result<()> {
    if git.default_branch.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Default branch cannot be empty".to_string(),
        ));
    }

    if BranchNameValidator::validate(&git.default_branch).is_err() {
        return Err(ConfigError::Validation(format!(
            "Invalid default branch '{}'. Must be a valid Git branch name",
            git.default_branch
        )));
    }

    if let Some(prefix) = git.branch_prefix.as_deref().filter(|p| !p.is_empty()) {
        if BranchNameValidator::validate(prefix.trim_end_matches('/')).is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid branch prefix '{}'. Must be a valid Git reference name",
                prefix
            )));
        }
    }

    Ok(())
}

pub fn validate_behavior_options(behaviors: &BehaviorOptions) -> Result<()> {
    if behaviors.undo_commit_limit == 0 {
        return Err(ConfigError::Validation(
            "Undo commit limit must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
