pub mod cli;
pub mod error;
pub mod mock;
pub mod provider;
pub mod repo;

pub use cli::CliGitProvider;
pub use error::{GitError, GitResult};
pub use provider::GitProvider;
pub use repo::{Branch, BranchCategory, Commit};

const LOCAL_REF_PREFIX: &str = "refs/heads/";
const REMOTE_REF_PREFIX: &str = "refs/remotes/";

pub(crate) const FIELD_SEPARATOR: char = '\u{1f}';
pub(crate) const RECORD_SEPARATOR: char = '\u{1e}';

/// Parse `git for-each-ref --format='%(HEAD)%00%(refname)%00%(refname:short)'` output.
///
/// Symbolic remote heads (`refs/remotes/<remote>/HEAD`) are skipped. Input order is kept.
pub fn parse_branch_refs(output: &str) -> Vec<Branch> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('\0');
            let head = fields.next()?;
            let refname = fields.next()?;
            let short = fields.next()?;
            if short.is_empty() {
                return None;
            }

            if refname.starts_with(LOCAL_REF_PREFIX) {
                Some(Branch::local(short, head.trim() == "*"))
            } else if let Some(rest) = refname.strip_prefix(REMOTE_REF_PREFIX) {
                if rest.ends_with("/HEAD") {
                    return None;
                }
                Some(Branch::remote(short))
            } else {
                None
            }
        })
        .collect()
}

/// Parse `git log` output written with
/// `--format=%H<US>%an <%ae><US>%B<RS>` (US = 0x1f, RS = 0x1e).
pub fn parse_commit_log(output: &str) -> Vec<Commit> {
    output
        .split(RECORD_SEPARATOR)
        .filter_map(|record| {
            let record = record.trim_start_matches(['\n', '\r']);
            if record.is_empty() {
                return None;
            }
            let mut fields = record.splitn(3, FIELD_SEPARATOR);
            let id = fields.next()?.trim();
            let author = fields.next()?.trim();
            let message = fields.next().unwrap_or_default().trim_end();
            if id.is_empty() {
                return None;
            }
            Some(Commit {
                id: id.to_string(),
                message: message.to_string(),
                author: author.to_string(),
            })
        })
        .collect()
}
