use crate::utils::{GitmateError, Result};
use regex::Regex;

/// Branch naming rules, a subset of `git check-ref-format --branch`.
pub struct BranchNameValidator;

impl BranchNameValidator {
    pub fn validate(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(GitmateError::invalid_branch_name(name, "cannot be empty"));
        }

        if name.len() > 250 {
            return Err(GitmateError::invalid_branch_name(name, "too long"));
        }

        let invalid_patterns = [
            (r"\.\.", "contains '..'"),
            (r"^-", "starts with '-'"),
            (r"/$", "ends with '/'"),
            (r"\.lock$", "ends with '.lock'"),
            (r"\.$", "ends with '.'"),
            (r"[\x00-\x20\x7f]", "contains whitespace or control characters"),
            (r"~|\^|:|\\|\*|\?|\[", "contains one of ~ ^ : \\ * ? ["),
            (r"^@$", "is exactly '@'"),
            (r"/\.|^\.", "has a component starting with '.'"),
            (r"//", "contains an empty component"),
            (r"@\{", "contains '@{'"),
        ];

        for (pattern, reason) in invalid_patterns {
            let regex = Regex::new(pattern)
                .map_err(|e| GitmateError::invalid_args(format!("Regex error: {}", e)))?;
            if regex.is_match(name) {
                return Err(GitmateError::invalid_branch_name(name, reason));
            }
        }

        if name.starts_with("refs/") {
            return Err(GitmateError::invalid_branch_name(
                name,
                "cannot start with 'refs/'",
            ));
        }

        Ok(())
    }

    /// Joins the configured prefix and the requested name, then validates.
    pub fn prefixed(prefix: Option<&str>, name: &str) -> Result<String> {
        let name = name.trim();
        let full_name = match prefix.map(|p| p.trim_end_matches('/')) {
            Some(p) if !p.is_empty() && !name.starts_with(&format!("{}/", p)) => {
                format!("{}/{}", p, name)
            }
            _ => name.to_string(),
        };

        Self::validate(&full_name)?;
        Ok(full_name)
    }
}
