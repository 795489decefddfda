pub mod completion;
pub mod config;
pub mod delete_branch;
pub mod new_branch;
pub mod new_push;
pub mod switch_branch;
pub mod undo;
