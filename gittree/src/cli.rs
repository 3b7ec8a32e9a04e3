use gittree_core::git::{Branch, Commit, GitError, GitProvider};
use serde::Serialize;
use std::{fmt::Write, path::Path};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone)]
pub struct CliError {
    message: String,
    code: i32,
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 2,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        Self::system(value.to_string())
    }
}

impl From<GitError> for CliError {
    /// Bad input paths are the caller's fault; everything else is the environment's.
    fn from(value: GitError) -> Self {
        match value {
            GitError::NotARepository(_)
            | GitError::PathUnreadable(_)
            | GitError::NoCheckedOutBranch => Self::user(value.to_string()),
            _ => Self::system(value.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogArgs {
    pub path: String,
    pub limit: Option<usize>,
    pub json: bool,
}

pub fn cmd_branches(git: &dyn GitProvider, path: &str, json: bool) -> CliResult<()> {
    print!("{}", branches_output(git, path, json)?);
    Ok(())
}

fn branches_output(git: &dyn GitProvider, path: &str, json: bool) -> CliResult<String> {
    let repo_path = resolve_path(path)?;
    let branches = git.open_repository(&repo_path)?;

    if json {
        to_json_line(&branches)
    } else {
        Ok(format_branch_table(&branches))
    }
}

pub fn cmd_log(git: &dyn GitProvider, args: &LogArgs) -> CliResult<()> {
    print!("{}", log_output(git, args)?);
    Ok(())
}

fn log_output(git: &dyn GitProvider, args: &LogArgs) -> CliResult<String> {
    if args.limit == Some(0) {
        return Err(CliError::user("--limit must be at least 1"));
    }
    let repo_path = resolve_path(&args.path)?;
    let mut commits = git.commit_history(&repo_path)?;
    if let Some(limit) = args.limit {
        commits.truncate(limit);
    }

    if args.json {
        to_json_line(&commits)
    } else {
        Ok(format_commit_table(&commits))
    }
}

/// Canonical form of a user-supplied path. A missing path is a user error.
pub fn resolve_path(path: &str) -> CliResult<std::path::PathBuf> {
    let expanded = gittree_core::paths::expand_tilde(path)
        .ok_or_else(|| CliError::system("Unable to find home directory"))?;
    dunce::canonicalize(&expanded)
        .map_err(|e| CliError::user(format!("{}: {e}", Path::new(path).display())))
}

fn format_branch_table(branches: &[Branch]) -> String {
    let name_header = "branch";
    let name_width = branches
        .iter()
        .map(|branch| branch.name.len())
        .max()
        .unwrap_or(name_header.len())
        .max(name_header.len());

    let mut out = String::new();
    let _ = writeln!(out, "{name_header:<name_width$}  {:<6}  current", "type");
    for branch in branches {
        let current = if branch.is_checked_out { "*" } else { "" };
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<6}  {current}",
            branch.name,
            branch.category.to_string()
        );
    }
    out
}

fn format_commit_table(commits: &[Commit]) -> String {
    let mut out = String::new();
    for commit in commits {
        let short_id: String = commit.id.chars().take(7).collect();
        let _ = writeln!(out, "{short_id}  {}  ({})", commit.summary(), commit.author);
    }
    out
}

fn to_json_line<T: Serialize>(value: &T) -> CliResult<String> {
    let json = serde_json::to_string(value).map_err(|e| CliError::system(e.to_string()))?;
    Ok(format!("{json}\n"))
}

pub fn print_error(error: &CliError, json: bool) {
    if json {
        let payload = serde_json::json!({ "error": error.message() });
        eprintln!("{payload}");
    } else {
        eprintln!("{}", error.message());
    }
}
