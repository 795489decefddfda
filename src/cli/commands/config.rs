use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::defaults::default_config;
use crate::config::{Config, ConfigManager};
use crate::core::prompt::{DialoguerPicker, Picker};
use crate::utils::{GitmateError, Result};
use std::path::Path;

pub fn execute(args: ConfigArgs) -> Result<()> {
    let path = ConfigManager::get_config_path();
    let message = execute_with_path(args, &path, &DialoguerPicker::new())?;
    println!("{}", message);
    Ok(())
}

/// Runs a config subcommand against the file at `path` and returns the line
/// to print.
pub fn execute_with_path(args: ConfigArgs, path: &Path, picker: &dyn Picker) -> Result<String> {
    match args.command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            let config = load(path)?;
            Ok(serde_json::to_string_pretty(&config)?)
        }
        ConfigCommands::Path => Ok(path.display().to_string()),
        ConfigCommands::SetDefaultBranch { name } => {
            let mut config = load(path)?;
            config.git.default_branch = name.trim().to_string();
            save(&config, path)?;
            Ok(format!(
                "Default branch set to '{}'",
                config.git.default_branch
            ))
        }
        ConfigCommands::SetPrefix { prefix } => {
            let mut config = load(path)?;
            config.git.branch_prefix = prefix
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty());
            save(&config, path)?;
            Ok(match config.branch_prefix() {
                Some(prefix) => format!("Branch prefix set to '{}'", prefix),
                None => "Branch prefix cleared".to_string(),
            })
        }
        ConfigCommands::Reset => {
            if !picker.confirm("Reset configuration to defaults? This cannot be undone.")? {
                return Ok("Configuration reset cancelled".to_string());
            }
            save(&default_config(), path)?;
            Ok("Configuration reset to defaults".to_string())
        }
    }
}

fn load(path: &Path) -> Result<Config> {
    ConfigManager::load_or_create_with_path(Some(path))
        .map_err(|e| GitmateError::config_error(format!("Failed to load configuration: {}", e)))
}

fn save(config: &Config, path: &Path) -> Result<()> {
    ConfigManager::save_to_path(config, path)
        .map_err(|e| GitmateError::config_error(format!("Failed to save configuration: {}", e)))
}
