use super::defaults::{default_config, get_config_file_path};
use super::{Config, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigManager;

impl ConfigManager {
    pub fn get_config_path() -> PathBuf {
        get_config_file_path()
    }

    pub fn load_or_create() -> Result<Config> {
        Self::load_or_create_with_path(None)
    }

    pub fn load_or_create_with_path(config_path: Option<&Path>) -> Result<Config> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => get_config_file_path(),
        };

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            debug!(path = %config_path.display(), "creating default configuration");
            let config = default_config();
            Self::save_to_path(&config, &config_path)?;
            Ok(config)
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        let mut config = default_config();
        config.git.default_branch = "develop".to_string();
        config.git.branch_prefix = Some("team".to_string());
        config.behaviors.undo_commit_limit = 3;
        config
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let original_config = create_test_config();
        ConfigManager::save_to_path(&original_config, &config_path).unwrap();

        let loaded_config = ConfigManager::load_from_file(&config_path).unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.json");

        let result = ConfigManager::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.json");
        fs::write(&config_path, "invalid json content").unwrap();

        let result = ConfigManager::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{ "git": { "default_branch": "" } }"#).unwrap();

        let result = ConfigManager::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let test_config_path = temp_dir.path().join("nested/dir/config.json");

        let config = create_test_config();
        assert!(ConfigManager::save_to_path(&config, &test_config_path).is_ok());
        assert!(test_config_path.exists());
    }

    #[test]
    fn test_load_or_create_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let created = ConfigManager::load_or_create_with_path(Some(&config_path)).unwrap();
        assert!(config_path.exists());
        assert_eq!(created, default_config());

        let mut changed = created.clone();
        changed.git.default_branch = "trunk".to_string();
        ConfigManager::save_to_path(&changed, &config_path).unwrap();

        let loaded = ConfigManager::load_or_create_with_path(Some(&config_path)).unwrap();
        assert_eq!(loaded.git.default_branch, "trunk");
    }
}
