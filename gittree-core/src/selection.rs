use crate::git::{Branch, BranchCategory};
use std::fmt;

/// Navigation sections of the repository browser, in display order. Only `Local` and
/// `Remote` hold selectable branches; the rest are listed but stay empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSection {
    Local,
    Remote,
    Tags,
    Stashes,
    Submodules,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        NavSection::Local,
        NavSection::Remote,
        NavSection::Tags,
        NavSection::Stashes,
        NavSection::Submodules,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Remote => "Remote",
            Self::Tags => "Tags",
            Self::Stashes => "Stashes",
            Self::Submodules => "Submodules",
        }
    }
}

impl fmt::Display for NavSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The one section a branch is listed under.
pub const fn section_for(branch: &Branch) -> NavSection {
    match branch.category {
        BranchCategory::Local => NavSection::Local,
        BranchCategory::Remote => NavSection::Remote,
    }
}

/// First checked-out branch, else the first branch, else nothing.
pub fn initial_selection(branches: &[Branch]) -> Option<usize> {
    if branches.is_empty() {
        return None;
    }
    Some(branches.iter().position(|b| b.is_checked_out).unwrap_or(0))
}

/// Branches listed under `section`, paired with their index in the full list.
pub fn section_entries(
    branches: &[Branch],
    section: NavSection,
) -> impl Iterator<Item = (usize, &Branch)> {
    branches
        .iter()
        .enumerate()
        .filter(move |(_, branch)| section_for(branch) == section)
}

/// Branch indices in the order the browser shows them: section by section.
pub fn navigation_order(branches: &[Branch]) -> Vec<usize> {
    NavSection::ALL
        .iter()
        .flat_map(|section| section_entries(branches, *section).map(|(idx, _)| idx))
        .collect()
}

/// Move `selected` by `delta` rows through the displayed order, clamping at both ends.
/// A missing or stale selection starts from the first displayed branch.
pub fn move_selection(branches: &[Branch], selected: Option<usize>, delta: i32) -> Option<usize> {
    let order = navigation_order(branches);
    let last = order.len().checked_sub(1)?;
    let position = selected
        .and_then(|sel| order.iter().position(|idx| *idx == sel))
        .unwrap_or(0);

    let steps = delta.unsigned_abs() as usize;
    let target = if delta >= 0 {
        position.saturating_add(steps).min(last)
    } else {
        position.saturating_sub(steps)
    };
    Some(order[target])
}
