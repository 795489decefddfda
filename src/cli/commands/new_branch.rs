use crate::cli::parser::NewBranchArgs;
use crate::cli::CommandContext;
use crate::core::git::DefaultBranchLoader;
use crate::core::workflow::{BaseUpdate, NewBranchWorkflow};
use crate::utils::Result;

pub fn execute(ctx: &CommandContext, args: NewBranchArgs) -> Result<()> {
    let loader = DefaultBranchLoader::new(&ctx.repo, ctx.config.loading);
    let outcome = NewBranchWorkflow::new(&ctx.repo, &ctx.picker, &loader, &ctx.config)
        .run(args.name.as_deref())?;

    match outcome.base_update {
        BaseUpdate::Pushed => println!("Pushed '{}' to origin", outcome.base),
        BaseUpdate::Merged => println!("Merged remote changes into '{}'", outcome.base),
        BaseUpdate::Rebased => println!("Rebased '{}' onto its remote", outcome.base),
        BaseUpdate::PushSkipped | BaseUpdate::Unchanged => {}
    }
    println!(
        "Created and switched to '{}' (from '{}')",
        outcome.name, outcome.base
    );
    Ok(())
}
