use std::{fs, path::PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// Returns `None` when the path starts with `~` but the home directory
/// cannot be determined. Other paths come back unchanged.
pub fn expand_tilde(path: &str) -> Option<PathBuf> {
    if path == "~" {
        dirs::home_dir()
    } else if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir().map(|home| home.join(rest))
    } else {
        Some(PathBuf::from(path))
    }
}

/// Split typed input into the directory to list and the partial entry name.
/// `~/Dev` gives `("~/", "Dev")`; a bare `proj` is looked up in `./`.
fn split_input(input: &str) -> (&str, &str) {
    match input.rfind('/') {
        Some(slash) => (&input[..=slash], &input[slash + 1..]),
        None => ("", input),
    }
}

/// Directory names under the typed parent that start with the typed prefix
/// (case-insensitive). Hidden directories only match a prefix starting with `.`.
/// Results keep the user's spelling of the parent, so `~/` stays unexpanded.
pub fn directory_candidates(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let (parent, prefix) = split_input(input);
    let listed = if parent.is_empty() {
        Some(PathBuf::from("."))
    } else {
        expand_tilde(parent)
    };
    let Some(entries) = listed.and_then(|dir| fs::read_dir(dir).ok()) else {
        return Vec::new();
    };

    let prefix_lower = prefix.to_lowercase();
    let mut candidates: Vec<String> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            let hidden = name.starts_with('.') && !prefix.starts_with('.');
            (!hidden && name.to_lowercase().starts_with(&prefix_lower))
                .then(|| format!("{parent}{name}"))
        })
        .collect();

    candidates.sort();
    candidates
}

/// Longest shared leading run of characters across all candidates.
pub fn common_prefix(candidates: &[String]) -> String {
    let Some((first, rest)) = candidates.split_first() else {
        return String::new();
    };

    let mut len = first.chars().count();
    for other in rest {
        let shared = first
            .chars()
            .zip(other.chars())
            .take_while(|(a, b)| a == b)
            .count();
        len = len.min(shared);
    }
    first.chars().take(len).collect()
}

/// Tab-complete a typed directory path. A unique match is completed with a trailing
/// `/` so the next press descends into it; several matches extend the input to their
/// common prefix. Returns `None` when nothing would change.
pub fn complete_directory(input: &str) -> Option<String> {
    let candidates = directory_candidates(input);
    let completed = match candidates.as_slice() {
        [] => return None,
        [only] => format!("{only}/"),
        _ => common_prefix(&candidates),
    };
    (completed.chars().count() > input.chars().count()).then_some(completed)
}
