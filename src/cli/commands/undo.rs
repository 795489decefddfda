use crate::cli::parser::UndoArgs;
use crate::cli::CommandContext;
use crate::core::workflow::UndoCommitWorkflow;
use crate::utils::Result;

pub fn execute(ctx: &CommandContext, args: UndoArgs) -> Result<()> {
    let outcome =
        UndoCommitWorkflow::new(&ctx.repo, &ctx.picker, &ctx.config).run(args.count, args.hard)?;

    let kept = if outcome.hard {
        "changes discarded"
    } else {
        "changes kept staged"
    };
    println!(
        "Undid {} commit{} ({})",
        outcome.undone.len(),
        if outcome.undone.len() == 1 { "" } else { "s" },
        kept
    );
    Ok(())
}
