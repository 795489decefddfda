#![allow(dead_code)]

use gitmate::core::git::GitRepository;
use gitmate::core::prompt::Picker;
use gitmate::utils::{GitmateError, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub fn git(repo_path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_path)
        .args(args)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

pub fn commit_file(repo_path: &Path, file: &str, content: &str, message: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message]);
}

fn configure_identity(repo_path: &Path, name: &str) {
    git(repo_path, &["config", "user.name", name]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
}

/// A bare `origin` plus a working clone with one pushed commit on `main`.
pub struct RemoteFixture {
    pub temp_dir: TempDir,
    pub origin: PathBuf,
    pub work: PathBuf,
    pub repo: GitRepository,
}

impl RemoteFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let origin = temp_dir.path().join("origin.git");
        let work = temp_dir.path().join("work");

        fs::create_dir_all(&origin).expect("Failed to create origin dir");
        git(&origin, &["init", "--bare", "--initial-branch=main"]);

        fs::create_dir_all(&work).expect("Failed to create work dir");
        git(&work, &["init", "--initial-branch=main"]);
        configure_identity(&work, "Test User");
        commit_file(&work, "README.md", "# Test Repository", "Initial commit");
        git(&work, &["remote", "add", "origin", path_str(&origin)]);
        git(&work, &["push", "-u", "origin", "main"]);

        let repo = GitRepository::discover_from(&work).expect("Failed to discover repo");
        Self {
            temp_dir,
            origin,
            work,
            repo,
        }
    }

    /// A second clone of `origin`, standing in for another developer.
    pub fn other_clone(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        git(
            self.temp_dir.path(),
            &["clone", path_str(&self.origin), path_str(&path)],
        );
        configure_identity(&path, "Other Dev");
        path
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

/// Answers prompts from a script; any unscripted prompt is an error.
#[derive(Default)]
pub struct ScriptedPicker {
    confirms: RefCell<VecDeque<bool>>,
    selections: RefCell<VecDeque<usize>>,
    multi_selections: RefCell<VecDeque<Vec<usize>>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedPicker {
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

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    fn next<T>(&self, queue: &RefCell<VecDeque<T>>, prompt: &str) -> Result<T> {
        self.prompts.borrow_mut().push(prompt.to_string());
        queue
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| GitmateError::prompt(format!("no scripted answer for: {prompt}")))
    }
}

impl Picker for ScriptedPicker {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.next(&self.confirms, prompt)
    }

    fn select_one(&self, prompt: &str, _items: &[String]) -> Result<usize> {
        self.next(&self.selections, prompt)
    }

    fn select_many(&self, prompt: &str, _items: &[String]) -> Result<Vec<usize>> {
        self.next(&self.multi_selections, prompt)
    }

    fn require_text(&self, prompt: &str) -> Result<String> {
        Err(GitmateError::prompt(format!("no scripted answer for: {prompt}")))
    }
}
