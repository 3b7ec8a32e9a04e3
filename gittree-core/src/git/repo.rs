use serde::{Deserialize, Serialize};

/// Which ref namespace a branch lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchCategory {
    Local,
    Remote,
}

impl std::fmt::Display for BranchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Remote => f.write_str("remote"),
        }
    }
}

/// A branch as reported by the backend.
///
/// Serializes as `{name, branch_type, is_checked_out}` so JSON output matches the
/// request boundary shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    #[serde(rename = "branch_type")]
    pub category: BranchCategory,
    pub is_checked_out: bool,
}

impl Branch {
    pub fn local(name: impl Into<String>, is_checked_out: bool) -> Self {
        Self {
            name: name.into(),
            category: BranchCategory::Local,
            is_checked_out,
        }
    }

    pub fn remote(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: BranchCategory::Remote,
            is_checked_out: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Object id as printed by git; opaque to everything above the provider
    pub id: String,
    pub message: String,
    pub author: String,
}

impl Commit {
    /// First line of the message
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}
