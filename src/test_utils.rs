pub mod test_helpers {
    use crate::core::git::GitRepository;
    use std::fs;
    use std::path::Path;
    use std::process::Command;
    use tempfile::TempDir;

    pub fn git(repo_path: &Path, args: &[&str]) {
        let status = Command::new("git")
            .current_dir(repo_path)
            .args(args)
            .status()
            .expect("Failed to run git");
        assert!(status.success(), "git {} failed", args.join(" "));
    }

    pub fn commit_file(repo_path: &Path, file: &str, content: &str, message: &str) {
        fs::write(repo_path.join(file), content).expect("Failed to write file");
        git(repo_path, &["add", file]);
        git(repo_path, &["commit", "-m", message]);
    }

    pub fn setup_test_repo() -> (TempDir, GitRepository) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let repo_path = temp_dir.path();

        git(repo_path, &["init", "--initial-branch=main"]);
        git(repo_path, &["config", "user.name", "Test User"]);
        git(repo_path, &["config", "user.email", "test@example.com"]);
        commit_file(repo_path, "README.md", "# Test Repository", "Initial commit");

        let repo = GitRepository::discover_from(repo_path).expect("Failed to discover repo");
        (temp_dir, repo)
    }
}

pub mod mocks {
    use crate::core::prompt::Picker;
    use crate::core::shell::ShellExecutor;
    use crate::utils::{GitmateError, Result};
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};

    /// Scripted git: each command line maps to stdout or a failure.
    /// Commands nobody scripted fail with exit code 1.
    #[derive(Default)]
    pub struct MockShell {
        responses: HashMap<String, std::result::Result<String, i32>>,
        calls: RefCell<Vec<String>>,
    }

    impl MockShell {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn on(mut self, command: &str, stdout: &str) -> Self {
            self.responses
                .insert(command.to_string(), Ok(stdout.to_string()));
            self
        }

        pub fn fail(mut self, command: &str) -> Self {
            self.responses.insert(command.to_string(), Err(1));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        pub fn was_called(&self, command: &str) -> bool {
            self.calls.borrow().iter().any(|c| c == command)
        }

        /// Calls whose command line starts with one of the given prefixes.
        pub fn calls_starting_with(&self, prefixes: &[&str]) -> Vec<String> {
            self.calls
                .borrow()
                .iter()
                .filter(|c| prefixes.iter().any(|p| c.starts_with(p)))
                .cloned()
                .collect()
        }
    }

    impl ShellExecutor for MockShell {
        fn run(&self, args: &[&str]) -> Result<String> {
            let command = args.join(" ");
            self.calls.borrow_mut().push(command.clone());

            match self.responses.get(&command) {
                Some(Ok(stdout)) => Ok(stdout.clone()),
                Some(Err(code)) => Err(GitmateError::shell(command, *code, "scripted failure")),
                None => Err(GitmateError::shell(command, 1, "unscripted command")),
            }
        }
    }

    /// Scripted answers for prompts, consumed in order.
    #[derive(Default)]
    pub struct MockPicker {
        confirms: RefCell<VecDeque<bool>>,
        selections: RefCell<VecDeque<usize>>,
        multi_selections: RefCell<VecDeque<Vec<usize>>>,
        texts: RefCell<VecDeque<String>>,
        prompts: RefCell<Vec<String>>,
    }

    impl MockPicker {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn confirm_with(self, answer: bool) -> Self {
            self.confirms.borrow_mut().push_back(answer);
            self
        }

        pub fn select_with(self, index: usize) -> Self {
            self.selections.borrow_mut().push_back(index);
            self
        }

        pub fn select_many_with(self, indices: Vec<usize>) -> Self {
            self.multi_selections.borrow_mut().push_back(indices);
            self
        }

        pub fn text_with(self, text: &str) -> Self {
            self.texts.borrow_mut().push_back(text.to_string());
            self
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.borrow().clone()
        }

        fn record(&self, prompt: &str) {
            self.prompts.borrow_mut().push(prompt.to_string());
        }
    }

    impl Picker for MockPicker {
        fn confirm(&self, prompt: &str) -> Result<bool> {
            self.record(prompt);
            self.confirms
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| GitmateError::prompt(format!("no scripted answer for: {prompt}")))
        }

        fn select_one(&self, prompt: &str, _items: &[String]) -> Result<usize> {
            self.record(prompt);
            self.selections
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| GitmateError::prompt(format!("no scripted answer for: {prompt}")))
        }

        fn select_many(&self, prompt: &str, _items: &[String]) -> Result<Vec<usize>> {
            self.record(prompt);
            self.multi_selections
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| GitmateError::prompt(format!("no scripted answer for: {prompt}")))
        }

        fn require_text(&self, prompt: &str) -> Result<String> {
            self.record(prompt);
            self.texts
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| GitmateError::prompt(format!("no scripted answer for: {prompt}")))
        }
    }
}
