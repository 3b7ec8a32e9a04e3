use crate::{
    flow::BindOp,
    git::{Branch, Commit},
    picker::PickResult,
    session::TabId,
};
use std::path::PathBuf;

/// Results of background work, merged into the main loop alongside keyboard input.
/// Every variant names the tab it was started for; the tab may be gone by the time it
/// arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The directory picker returned
    DirectoryPicked { tab: TabId, result: PickResult },

    /// An open, clone or create request succeeded
    RepositoryBound {
        tab: TabId,
        op: BindOp,
        branches: Vec<Branch>,
    },

    /// An open, clone or create request failed
    BindFailed {
        tab: TabId,
        op: BindOp,
        error: String,
    },

    CommitsLoaded {
        tab: TabId,
        repo_path: PathBuf,
        commits: Vec<Commit>,
    },

    CommitsFailed {
        tab: TabId,
        repo_path: PathBuf,
        error: String,
    },
}
