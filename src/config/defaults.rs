use super::{BehaviorOptions, Config, GitConfig, LoadingOptions};

pub fn default_config() -> Config {
    Config {
        git: default_git_config(),
        behaviors: default_behavior_options(),
        loading: default_loading_options(),
    }
}

pub fn default_git_config() -> GitConfig {
    GitConfig {
        default_branch: "main".to_string(),
        branch_prefix: None,
    }
}

pub fn default_behavior_options() -> BehaviorOptions {
    BehaviorOptions {
        fetch_before_new_branch: true,
        prune_after_delete: true,
        undo_commit_limit: 7,
    }
}

pub fn default_loading_options() -> LoadingOptions {
    LoadingOptions {
        load_merge_status: true,
        load_creation_date: true,
        load_sync_status: true,
    }
}

pub fn get_default_config_dir() -> std::path::PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "gitmate") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".config")
            .join("gitmate")
    }
}

pub fn get_config_file_path() -> std::path::PathBuf {
    // Tests and scripted setups point this at a scratch file.
    if let Ok(config_path) = std::env::var("GITMATE_CONFIG_PATH") {
        return std::path::PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
