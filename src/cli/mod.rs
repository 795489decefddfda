pub mod commands;
pub mod parser;


pub use parser::{Cli, Commands};

use crate::config::Config;
use crate::core::git::GitRepository;
use crate::core::prompt::DialoguerPicker;
use crate::utils::{GitmateError, Result};

/// Collaborators shared by every repository command.
pub struct CommandContext {
    pub repo: GitRepository,
    pub picker: DialoguerPicker,
    pub config: Config,
}

impl CommandContext {
    pub fn open(test_config: Option<Config>) -> Result<Self> {
        let config = match test_config {
            Some(cfg) => cfg,
            None => Config::load_or_create().map_err(|e| {
                GitmateError::config_error(format!("Failed to load config: {}", e))
            })?,
        };

        Ok(Self {
            repo: GitRepository::discover()?,
            picker: DialoguerPicker::new(),
            config,
        })
    }
}

pub fn execute_command(cli: Cli) -> Result<()> {
    execute_command_with_config(cli, None)
}

pub fn execute_command_with_config(cli: Cli, test_config: Option<Config>) -> Result<()> {
    match cli.command {
        Commands::NewBranch(args) => {
            args.validate()?;
            commands::new_branch::execute(&CommandContext::open(test_config)?, args)
        }
        Commands::DeleteBranch(args) => {
            commands::delete_branch::execute(&CommandContext::open(test_config)?, args)
        }
        Commands::NewPush => commands::new_push::execute(&CommandContext::open(test_config)?),
        Commands::SwitchBranch(args) => {
            commands::switch_branch::execute(&CommandContext::open(test_config)?, args)
        }
        Commands::Undo(args) => commands::undo::execute(&CommandContext::open(test_config)?, args),
        Commands::Config(args) => commands::config::execute(args),
        Commands::Completion(args) => commands::completion::execute(args),
    }
}
