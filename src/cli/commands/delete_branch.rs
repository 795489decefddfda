use crate::cli::parser::DeleteBranchArgs;
use crate::cli::CommandContext;
use crate::core::git::DefaultBranchLoader;
use crate::core::workflow::{DeleteBranchWorkflow, DeleteOutcome};
use crate::utils::Result;

pub fn execute(ctx: &CommandContext, args: DeleteBranchArgs) -> Result<()> {
    let loader = DefaultBranchLoader::new(&ctx.repo, ctx.config.loading);
    let outcome = DeleteBranchWorkflow::new(&ctx.repo, &ctx.picker, &loader, &ctx.config)
        .run(args.search.as_deref(), args.all_merged)?;

    println!("{}", describe(&outcome));
    Ok(())
}

fn describe(outcome: &DeleteOutcome) -> String {
    match outcome {
        DeleteOutcome::NoMatch { search } => format!("No branches match '{}'", search),
        DeleteOutcome::NothingSelected => "No branches selected".to_string(),
        DeleteOutcome::Deleted {
            deleted,
            skipped,
            failed,
        } => {
            let mut line = if deleted.is_empty() {
                "No branches deleted".to_string()
            } else {
                format!("Deleted {}", deleted.join(", "))
            };
            if !skipped.is_empty() {
                line.push_str(&format!(" (kept {})", skipped.join(", ")));
            }
            if !failed.is_empty() {
                line.push_str(&format!(
                    "; git refused to delete {}",
                    failed.join(", ")
                ));
            }
            line
        }
    }
}
