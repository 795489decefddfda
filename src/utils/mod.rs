pub mod error;

pub use error::{BranchOperation, GitmateError, Result};
