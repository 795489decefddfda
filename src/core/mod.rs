pub mod git;
pub mod prompt;
pub mod shell;
pub mod workflow;
