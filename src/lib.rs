pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use crate::core::git::GitRepository;
pub use config::Config;
pub use utils::{GitmateError, Result};
