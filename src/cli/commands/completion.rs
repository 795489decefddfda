use crate::cli::parser::{Cli, CompletionArgs};
use crate::utils::{GitmateError, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};

pub fn execute(args: CompletionArgs) -> Result<()> {
    println!("{}", completion_script(args.shell)?);
    Ok(())
}

pub fn completion_script(shell: Shell) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    generate(shell, &mut cmd, "gitmate", &mut buf);

    String::from_utf8(buf).map_err(|e| {
        GitmateError::invalid_args(format!("UTF-8 error generating completion: {}", e))
    })
}
