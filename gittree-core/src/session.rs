use crate::{
    flow::InitFlow,
    git::{Branch, Commit},
    selection,
};
use serde::Serialize;
use std::{
    fmt,
    path::{Path, PathBuf},
};

pub const DEFAULT_TAB_NAME: &str = "New Tab";

/// Identifies a tab for the lifetime of the process. Never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TabId(pub u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A repository the session is bound to. Path and branches arrive together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub repo_path: PathBuf,
    pub branches: Vec<Branch>,
    /// Index into `branches`; `None` only when there are no branches
    pub selected: Option<usize>,
}

impl Binding {
    pub fn new(repo_path: PathBuf, branches: Vec<Branch>) -> Self {
        let selected = selection::initial_selection(&branches);
        Self {
            repo_path,
            branches,
            selected,
        }
    }

    pub fn selected_branch(&self) -> Option<&Branch> {
        self.selected.and_then(|idx| self.branches.get(idx))
    }
}

/// Per-session commit list. Rendering never triggers a load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CommitHistory {
    #[default]
    NotRequested,
    Loading,
    Loaded(Vec<Commit>),
    Failed(String),
}

impl CommitHistory {
    /// Commits to show; empty while loading or after a failure.
    pub fn commits(&self) -> &[Commit] {
        match self {
            Self::Loaded(commits) => commits,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: TabId,
    pub name: String,
    pub binding: Option<Binding>,
    pub flow: InitFlow,
    pub commits: CommitHistory,
    /// Last failure for this session, shown until the next action addressed to it
    pub error: Option<String>,
}

impl Session {
    pub fn new(id: TabId) -> Self {
        Self {
            id,
            name: DEFAULT_TAB_NAME.to_string(),
            binding: None,
            flow: InitFlow::Idle,
            commits: CommitHistory::NotRequested,
            error: None,
        }
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn repo_path(&self) -> Option<&Path> {
        self.binding.as_ref().map(|b| b.repo_path.as_path())
    }

    /// Replace the binding wholesale, rename the tab after the path and reset derived
    /// state (selection, cached history).
    pub fn bind(&mut self, repo_path: PathBuf, branches: Vec<Branch>) {
        self.name = display_name(&repo_path.to_string_lossy());
        self.binding = Some(Binding::new(repo_path, branches));
        self.commits = CommitHistory::NotRequested;
    }
}

/// Last non-empty segment of a `/`- or `\`-separated path, or `""` if it has none.
pub fn display_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_both_separators() {
        assert_eq!(display_name("C:\\repos\\proj"), "proj");
        assert_eq!(display_name("/home/user/proj"), "proj");
    }

    #[test]
    fn test_display_name_trailing_and_mixed_separators() {
        assert_eq!(display_name("/home/user/proj/"), "proj");
        assert_eq!(display_name("C:\\work/mixed\\repo"), "repo");
        assert_eq!(display_name("bare"), "bare");
    }

    #[test]
    fn test_display_name_without_segments() {
        assert_eq!(display_name("/"), "");
        assert_eq!(display_name("\\\\"), "");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_new_session_is_unbound() {
        let session = Session::new(TabId(3));
        assert_eq!(session.name, DEFAULT_TAB_NAME);
        assert!(!session.is_bound());
        assert!(session.repo_path().is_none());
        assert_eq!(session.flow, InitFlow::Idle);
    }

    #[test]
    fn test_bind_sets_name_selection_and_resets_history() {
        let mut session = Session::new(TabId(1));
        session.commits = CommitHistory::Failed("stale".into());
        session.bind(
            PathBuf::from("/a/b/my-repo"),
            vec![
                Branch::local("main", true),
                Branch::remote("origin/main"),
            ],
        );

        assert_eq!(session.name, "my-repo");
        assert_eq!(session.repo_path(), Some(Path::new("/a/b/my-repo")));
        let binding = session.binding.as_ref().unwrap();
        assert_eq!(binding.selected, Some(0));
        assert_eq!(binding.selected_branch().unwrap().name, "main");
        assert_eq!(session.commits, CommitHistory::NotRequested);
    }

    #[test]
    fn test_bind_without_branches_has_no_selection() {
        let mut session = Session::new(TabId(1));
        session.bind(PathBuf::from("/fresh"), Vec::new());
        let binding = session.binding.as_ref().unwrap();
        assert_eq!(binding.selected, None);
        assert!(binding.selected_branch().is_none());
    }

    #[test]
    fn test_commit_history_hides_commits_unless_loaded() {
        let commit = Commit {
            id: "abc".into(),
            message: "m".into(),
            author: "A <a@b>".into(),
        };
        assert!(CommitHistory::Loading.commits().is_empty());
        assert!(CommitHistory::Failed("x".into()).commits().is_empty());
        assert_eq!(CommitHistory::Loaded(vec![commit.clone()]).commits(), &[commit]);
    }
}
