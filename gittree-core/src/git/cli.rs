use super::{
    FIELD_SEPARATOR, RECORD_SEPARATOR,
    error::{GitError, GitResult},
    parse_branch_refs, parse_commit_log,
    provider::GitProvider,
    repo::{Branch, Commit},
};
use crate::config::DEFAULT_MAX_COMMITS;
use std::{
    ffi::OsStr,
    fs,
    path::Path,
    process::{Command, Output},
};

const GIT_DIR_ENTRY: &str = ".git";

/// Talks to the repository by running the `git` binary.
pub struct CliGitProvider {
    max_commits: usize,
}

impl Default for CliGitProvider {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COMMITS)
    }
}

impl CliGitProvider {
    pub fn new(max_commits: usize) -> Self {
        Self {
            max_commits: max_commits.max(1),
        }
    }

    fn run<I, S>(dir: Option<&Path>, args: I) -> GitResult<Output>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new("git");
        command.args(args);
        if let Some(dir) = dir {
            command.current_dir(dir);
        }
        Ok(command.output()?)
    }

    fn command_error(command: &str, output: &Output) -> GitError {
        GitError::Command {
            command: command.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

impl GitProvider for CliGitProvider {
    fn open_repository(&self, path: &Path) -> GitResult<Vec<Branch>> {
        if fs::read_dir(path).is_err() {
            return Err(GitError::PathUnreadable(path.to_path_buf()));
        }

        // Only the top of a work tree counts; subdirectories and `.git` itself don't.
        let output = Self::run(Some(path), ["rev-parse", "--show-toplevel"])?;
        if !output.status.success() || !is_same_dir(path, &output.stdout) {
            return Err(GitError::NotARepository(path.to_path_buf()));
        }

        let output = Self::run(
            Some(path),
            [
                "for-each-ref",
                "--format=%(HEAD)%00%(refname)%00%(refname:short)",
                "refs/heads",
                "refs/remotes",
            ],
        )?;
        if !output.status.success() {
            return Err(Self::command_error("for-each-ref", &output));
        }

        let branches = parse_branch_refs(&String::from_utf8_lossy(&output.stdout));
        log::debug!("{} branches in {}", branches.len(), path.display());
        Ok(branches)
    }

    fn commit_history(&self, repo_path: &Path) -> GitResult<Vec<Commit>> {
        let head = Self::run(
            Some(repo_path),
            ["rev-parse", "--verify", "--quiet", "HEAD"],
        )?;
        if !head.status.success() {
            return Err(GitError::NoCheckedOutBranch);
        }

        let format = format!(
            "--format=%H{FIELD_SEPARATOR}%an <%ae>{FIELD_SEPARATOR}%B{RECORD_SEPARATOR}"
        );
        let max_count = format!("--max-count={}", self.max_commits);
        let output = Self::run(
            Some(repo_path),
            ["log", max_count.as_str(), format.as_str(), "HEAD"],
        )?;
        if !output.status.success() {
            return Err(Self::command_error("log", &output));
        }

        Ok(parse_commit_log(&String::from_utf8_lossy(&output.stdout)))
    }

    fn clone_repository(&self, source: &str, destination: &Path) -> GitResult<Vec<Branch>> {
        let output = Self::run(
            None,
            [
                OsStr::new("clone"),
                OsStr::new("--"),
                OsStr::new(source),
                destination.as_os_str(),
            ],
        )?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(GitError::CloneFailed(stderr));
        }

        self.open_repository(destination)
    }

    fn create_repository(&self, destination: &Path) -> GitResult<Vec<Branch>> {
        if destination.join(GIT_DIR_ENTRY).exists() {
            return Err(GitError::AlreadyARepository(destination.to_path_buf()));
        }
        fs::create_dir_all(destination)
            .map_err(|_| GitError::DestinationNotWritable(destination.to_path_buf()))?;

        let output = Self::run(None, [OsStr::new("init"), destination.as_os_str()])?;
        if !output.status.success() {
            log::warn!(
                "git init failed in {}: {}",
                destination.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(GitError::DestinationNotWritable(destination.to_path_buf()));
        }

        self.open_repository(destination)
    }
}

fn is_same_dir(path: &Path, toplevel: &[u8]) -> bool {
    let toplevel = String::from_utf8_lossy(toplevel);
    let toplevel = Path::new(toplevel.trim_end_matches(['\n', '\r']));
    match (dunce::canonicalize(path), dunce::canonicalize(toplevel)) {
        (Ok(path), Ok(toplevel)) => path == toplevel,
        _ => false,
    }
}
