use crate::{
    event::AppEvent,
    flow::BindOp,
    git::GitProvider,
    picker::{DirectoryPicker, PickResult},
    session::TabId,
};
use std::path::PathBuf;

/// Work the state container asks the runtime to do outside the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    PickDirectory { tab: TabId },
    Bind { tab: TabId, op: BindOp },
    LoadCommitHistory { tab: TabId, repo_path: PathBuf },
}

impl Effect {
    pub fn tab(&self) -> TabId {
        match self {
            Self::PickDirectory { tab }
            | Self::Bind { tab, .. }
            | Self::LoadCommitHistory { tab, .. } => *tab,
        }
    }
}

/// Perform one effect to completion and report the outcome as an event.
pub fn run_effect(effect: Effect, git: &dyn GitProvider, picker: &dyn DirectoryPicker) -> AppEvent {
    match effect {
        Effect::PickDirectory { tab } => {
            let result = PickResult::from(picker.pick_directory());
            AppEvent::DirectoryPicked { tab, result }
        }
        Effect::Bind { tab, op } => {
            let outcome = match &op {
                BindOp::Open { path } => git.open_repository(path),
                BindOp::Clone {
                    source,
                    destination,
                } => git.clone_repository(source, destination),
                BindOp::Create { destination } => git.create_repository(destination),
            };
            match outcome {
                Ok(branches) => AppEvent::RepositoryBound { tab, op, branches },
                Err(e) => {
                    log::warn!("tab {tab}: failed to {op}: {e}");
                    AppEvent::BindFailed {
                        tab,
                        op,
                        error: e.to_string(),
                    }
                }
            }
        }
        Effect::LoadCommitHistory { tab, repo_path } => match git.commit_history(&repo_path) {
            Ok(commits) => AppEvent::CommitsLoaded {
                tab,
                repo_path,
                commits,
            },
            Err(e) => {
                log::warn!(
                    "tab {tab}: commit history for {} failed: {e}",
                    repo_path.display()
                );
                AppEvent::CommitsFailed {
                    tab,
                    repo_path,
                    error: e.to_string(),
                }
            }
        },
    }
}
