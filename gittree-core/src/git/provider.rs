use super::{
    error::GitResult,
    repo::{Branch, Commit},
};
use std::path::Path;

/// The backend git engine. Every call blocks; callers that must stay responsive run
/// them off the main loop.
pub trait GitProvider: Send + Sync {
    /// Branches of the repository at `path`, local before remote.
    fn open_repository(&self, path: &Path) -> GitResult<Vec<Branch>>;
    /// History of the checked-out branch, newest first.
    fn commit_history(&self, repo_path: &Path) -> GitResult<Vec<Commit>>;
    fn clone_repository(&self, source: &str, destination: &Path) -> GitResult<Vec<Branch>>;
    fn create_repository(&self, destination: &Path) -> GitResult<Vec<Branch>>;
}
