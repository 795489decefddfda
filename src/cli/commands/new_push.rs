use crate::cli::CommandContext;
use crate::core::git::DefaultBranchLoader;
use crate::core::workflow::NewPushWorkflow;
use crate::utils::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let loader = DefaultBranchLoader::new(&ctx.repo, ctx.config.loading);
    let outcome = NewPushWorkflow::new(&ctx.repo, &ctx.picker, &loader, &ctx.config).run()?;

    println!(
        "Pushed '{}' to {} and set it as upstream",
        outcome.branch, outcome.remote
    );
    Ok(())
}
