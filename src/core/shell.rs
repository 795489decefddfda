use crate::utils::Result;

/// Runs `git` with the given arguments and hands back its trimmed stdout.
///
/// A non-zero exit surfaces as [`crate::utils::GitmateError::Shell`] carrying
/// the command line, exit code and captured stderr. Callers only look at the
/// success/failure boundary and stdout, never at stderr.
pub trait ShellExecutor {
    fn run(&self, args: &[&str]) -> Result<String>;
}
