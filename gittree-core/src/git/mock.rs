use super::{
    error::GitResult,
    provider::GitProvider,
    repo::{Branch, Commit},
};
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

/// A request the mock received, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Open(PathBuf),
    History(PathBuf),
    Clone { source: String, destination: PathBuf },
    Create(PathBuf),
}

/// Scripted provider. The `*_result` slots are one-shot overrides; once taken, calls
/// fall back to `branches` / `commits`.
#[derive(Default)]
pub struct MockGitProvider {
    pub branches: Vec<Branch>,
    pub commits: Vec<Commit>,
    pub open_result: Mutex<Option<GitResult<Vec<Branch>>>>,
    pub history_result: Mutex<Option<GitResult<Vec<Commit>>>>,
    pub clone_result: Mutex<Option<GitResult<Vec<Branch>>>>,
    pub create_result: Mutex<Option<GitResult<Vec<Branch>>>>,
    pub calls: Mutex<Vec<GitCall>>,
}

impl MockGitProvider {
    pub fn with_branches(branches: Vec<Branch>) -> Self {
        Self {
            branches,
            ..Default::default()
        }
    }

    pub fn recorded_calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: GitCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl GitProvider for MockGitProvider {
    fn open_repository(&self, path: &Path) -> GitResult<Vec<Branch>> {
        self.record(GitCall::Open(path.to_path_buf()));
        self.open_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(self.branches.clone()))
    }

    fn commit_history(&self, repo_path: &Path) -> GitResult<Vec<Commit>> {
        self.record(GitCall::History(repo_path.to_path_buf()));
        self.history_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(self.commits.clone()))
    }

    fn clone_repository(&self, source: &str, destination: &Path) -> GitResult<Vec<Branch>> {
        self.record(GitCall::Clone {
            source: source.to_string(),
            destination: destination.to_path_buf(),
        });
        self.clone_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(self.branches.clone()))
    }

    fn create_repository(&self, destination: &Path) -> GitResult<Vec<Branch>> {
        self.record(GitCall::Create(destination.to_path_buf()));
        self.create_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
