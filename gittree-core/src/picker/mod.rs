pub mod cli;
pub mod mock;
pub mod provider;

pub use cli::CommandPicker;
pub use provider::{DirectoryPicker, NoPicker};

use std::path::PathBuf;

/// Whatever shape the picker handed back, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResponse {
    Cancelled,
    Single(PathBuf),
    Multiple(Vec<PathBuf>),
    /// The picker itself could not run
    Failed(String),
}

/// Outcome of a single-directory pick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    Selected(PathBuf),
    Cancelled,
    Failed(String),
}

impl From<PickResponse> for PickResult {
    /// Only a single non-empty path counts as a selection; the picker is configured for
    /// one directory, so a multi-selection is treated as a cancel.
    fn from(response: PickResponse) -> Self {
        match response {
            PickResponse::Single(path) if !path.as_os_str().is_empty() => Self::Selected(path),
            PickResponse::Single(_) | PickResponse::Multiple(_) | PickResponse::Cancelled => {
                Self::Cancelled
            }
            PickResponse::Failed(message) => Self::Failed(message),
        }
    }
}

impl PickResponse {
    /// Interpret the stdout of a picker process: one line is a path, none is a cancel,
    /// several are a multi-selection.
    pub fn from_output(stdout: &str) -> Self {
        let mut paths: Vec<PathBuf> = stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect();
        match paths.len() {
            0 => Self::Cancelled,
            1 => Self::Single(paths.remove(0)),
            _ => Self::Multiple(paths),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_path_is_selected() {
        let result = PickResult::from(PickResponse::Single(PathBuf::from("/tmp/repo")));
        assert_eq!(result, PickResult::Selected(PathBuf::from("/tmp/repo")));
    }

    #[test]
    fn multiple_paths_are_cancelled() {
        let result = PickResult::from(PickResponse::Multiple(vec![
            PathBuf::from("/a"),
            PathBuf::from("/b"),
        ]));
        assert_eq!(result, PickResult::Cancelled);
    }

    #[test]
    fn empty_path_is_cancelled() {
        let result = PickResult::from(PickResponse::Single(PathBuf::new()));
        assert_eq!(result, PickResult::Cancelled);
    }

    #[test]
    fn failure_is_kept() {
        let result = PickResult::from(PickResponse::Failed("no such program".into()));
        assert_eq!(result, PickResult::Failed("no such program".into()));
    }

    #[test]
    fn from_output_counts_non_empty_lines() {
        assert_eq!(PickResponse::from_output(""), PickResponse::Cancelled);
        assert_eq!(PickResponse::from_output("  \n\n"), PickResponse::Cancelled);
        assert_eq!(
            PickResponse::from_output("/home/me/proj\n"),
            PickResponse::Single(PathBuf::from("/home/me/proj"))
        );
        assert_eq!(
            PickResponse::from_output("/a\n/b\n"),
            PickResponse::Multiple(vec![PathBuf::from("/a"), PathBuf::from("/b")])
        );
    }
}
