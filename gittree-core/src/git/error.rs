use std::path::PathBuf;
use thiserror::Error;

/// Failures reported across the git request boundary
#[derive(Error, Debug)]
pub enum GitError {
    #[error("not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("path unreadable: {}", .0.display())]
    PathUnreadable(PathBuf),

    #[error("no checked-out branch")]
    NoCheckedOutBranch,

    #[error("clone failed: {0}")]
    CloneFailed(String),

    #[error("destination not writable: {}", .0.display())]
    DestinationNotWritable(PathBuf),

    #[error("already a repository: {}", .0.display())]
    AlreadyARepository(PathBuf),

    #[error("git {command} failed: {stderr}")]
    Command { command: String, stderr: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GitResult<T> = Result<T, GitError>;
