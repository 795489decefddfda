use crate::utils::{GitmateError, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect, Select};

/// Interactive decisions the workflows ask for.
///
/// Refusing a required permission is an error (`Cancelled`); an empty
/// multi-selection is a normal answer.
pub trait Picker {
    fn confirm(&self, prompt: &str) -> Result<bool>;

    fn require_permission(&self, prompt: &str) -> Result<()> {
        if self.confirm(prompt)? {
            Ok(())
        } else {
            Err(GitmateError::cancelled("Operation cancelled"))
        }
    }

    /// Returns the index of the chosen item.
    fn select_one(&self, prompt: &str, items: &[String]) -> Result<usize>;

    /// Returns the indices of the chosen items, possibly none.
    fn select_many(&self, prompt: &str, items: &[String]) -> Result<Vec<usize>>;

    fn require_text(&self, prompt: &str) -> Result<String>;
}

pub fn is_non_interactive() -> bool {
    std::env::var("GITMATE_NON_INTERACTIVE").is_ok()
        || std::env::var("CI").is_ok()
        || !atty::is(atty::Stream::Stdin)
}

#[derive(Default)]
pub struct DialoguerPicker {
    theme: ColorfulTheme,
}

impl DialoguerPicker {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_interactive(prompt: &str) -> Result<()> {
        if is_non_interactive() {
            return Err(GitmateError::invalid_args(format!(
                "Cannot answer '{}' in non-interactive mode",
                prompt
            )));
        }
        Ok(())
    }
}

impl Picker for DialoguerPicker {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Self::ensure_interactive(prompt)?;

        Ok(Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }

    fn select_one(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Self::ensure_interactive(prompt)?;

        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()?)
    }

    fn select_many(&self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        Self::ensure_interactive(prompt)?;

        Ok(MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .interact()?)
    }

    fn require_text(&self, prompt: &str) -> Result<String> {
        Self::ensure_interactive(prompt)?;

        let text: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .interact_text()?;

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(GitmateError::invalid_args(format!(
                "'{}' requires a value",
                prompt
            )));
        }
        Ok(text)
    }
}
