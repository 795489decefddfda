use crate::cli::parser::SwitchBranchArgs;
use crate::cli::CommandContext;
use crate::core::git::DefaultBranchLoader;
use crate::core::workflow::{SwitchBranchWorkflow, SwitchOutcome};
use crate::utils::Result;

pub fn execute(ctx: &CommandContext, args: SwitchBranchArgs) -> Result<()> {
    let loader = DefaultBranchLoader::new(&ctx.repo, ctx.config.loading);
    let outcome =
        SwitchBranchWorkflow::new(&ctx.repo, &ctx.picker, &loader).run(args.search.as_deref())?;

    match outcome {
        SwitchOutcome::NoMatch { search } => println!("No branches match '{}'", search),
        SwitchOutcome::Switched { branch } => println!("Switched to '{}'", branch),
    }
    Ok(())
}
