//! The user-facing git routines. Each workflow receives its collaborators
//! at construction and owns no state beyond them.

pub mod delete_branch;
pub mod new_branch;
pub mod new_push;
pub mod switch_branch;
pub mod undo_commit;

pub use delete_branch::{DeleteBranchWorkflow, DeleteOutcome};
pub use new_branch::{BaseUpdate, NewBranchOutcome, NewBranchWorkflow};
pub use new_push::{NewPushOutcome, NewPushWorkflow};
pub use switch_branch::{SwitchBranchWorkflow, SwitchOutcome};
pub use undo_commit::{UndoCommitWorkflow, UndoOutcome};
