use crate::{input::TextInput, paths};
use std::{
    fmt,
    path::{Path, PathBuf},
};

/// Where a session is in the open/clone/create interaction. A single tag, so at most one
/// prompt or request is ever in progress per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InitFlow {
    #[default]
    Idle,
    /// Waiting on the external directory picker
    Picking,
    Prompt(Prompt),
    /// A backend request is outstanding for this operation
    Binding(BindOp),
}

impl InitFlow {
    pub fn prompt(&self) -> Option<&Prompt> {
        match self {
            Self::Prompt(prompt) => Some(prompt),
            _ => None,
        }
    }

    pub fn prompt_mut(&mut self) -> Option<&mut Prompt> {
        match self {
            Self::Prompt(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// Picking or binding: the session is waiting on work outside the UI thread.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Picking | Self::Binding(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Open,
    Clone,
    Create,
}

impl PromptMode {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Open => "Open repository",
            Self::Clone => "Clone repository",
            Self::Create => "Create repository",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloneField {
    #[default]
    Source,
    Destination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Inline stand-in for the directory picker when none is configured
    Open { path: TextInput },
    Clone {
        source: TextInput,
        destination: TextInput,
        focus: CloneField,
    },
    Create { destination: TextInput },
}

/// What confirming a prompt asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The inline picker finished; `None` is a cancel.
    Picked(Option<PathBuf>),
    Bind(BindOp),
    /// Input is incomplete; the prompt stays open with this message.
    Invalid(String),
}

impl Prompt {
    pub fn open() -> Self {
        Self::Open {
            path: TextInput::default(),
        }
    }

    pub fn clone_repository() -> Self {
        Self::Clone {
            source: TextInput::default(),
            destination: TextInput::default(),
            focus: CloneField::Source,
        }
    }

    pub fn create() -> Self {
        Self::Create {
            destination: TextInput::default(),
        }
    }

    pub fn mode(&self) -> PromptMode {
        match self {
            Self::Open { .. } => PromptMode::Open,
            Self::Clone { .. } => PromptMode::Clone,
            Self::Create { .. } => PromptMode::Create,
        }
    }

    /// The field keyboard input goes to.
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        match self {
            Self::Open { path } => path,
            Self::Clone {
                source,
                destination,
                focus,
            } => match focus {
                CloneField::Source => source,
                CloneField::Destination => destination,
            },
            Self::Create { destination } => destination,
        }
    }

    /// Whether the focused field holds a local directory path.
    pub fn focus_is_path(&self) -> bool {
        !matches!(
            self,
            Self::Clone {
                focus: CloneField::Source,
                ..
            }
        )
    }

    /// Cycle focus between fields. Single-field prompts ignore this.
    pub fn next_field(&mut self) {
        if let Self::Clone { focus, .. } = self {
            *focus = match focus {
                CloneField::Source => CloneField::Destination,
                CloneField::Destination => CloneField::Source,
            };
        }
    }

    /// Complete the focused path field against the filesystem. Returns whether the
    /// input changed.
    pub fn complete_path(&mut self) -> bool {
        if !self.focus_is_path() {
            return false;
        }
        let input = self.focused_input_mut();
        match paths::complete_directory(input.as_str()) {
            Some(completed) => {
                input.set(completed);
                true
            }
            None => false,
        }
    }

    pub fn confirm(&self) -> PromptOutcome {
        match self {
            Self::Open { path } => {
                if path.is_blank() {
                    return PromptOutcome::Picked(None);
                }
                match resolve_existing_dir(path.as_str()) {
                    Ok(path) => PromptOutcome::Picked(Some(path)),
                    Err(message) => PromptOutcome::Invalid(message),
                }
            }
            Self::Clone {
                source,
                destination,
                ..
            } => {
                if source.is_blank() {
                    return PromptOutcome::Invalid("Enter a URL or path to clone from".into());
                }
                if destination.is_blank() {
                    return PromptOutcome::Invalid("Enter a destination directory".into());
                }
                match resolve_path(destination.as_str()) {
                    Ok(destination) => PromptOutcome::Bind(BindOp::Clone {
                        source: source.as_str().trim().to_string(),
                        destination,
                    }),
                    Err(message) => PromptOutcome::Invalid(message),
                }
            }
            Self::Create { destination } => {
                if destination.is_blank() {
                    return PromptOutcome::Invalid("Enter a directory for the new repository".into());
                }
                match resolve_path(destination.as_str()) {
                    Ok(destination) => PromptOutcome::Bind(BindOp::Create { destination }),
                    Err(message) => PromptOutcome::Invalid(message),
                }
            }
        }
    }
}

/// Absolute form of a typed path, relative input taken from the working directory.
fn resolve_path(typed: &str) -> Result<PathBuf, String> {
    let typed = typed.trim();
    let expanded = paths::expand_tilde(typed)
        .ok_or_else(|| format!("Cannot expand {typed}: no home directory"))?;
    std::path::absolute(&expanded).map_err(|e| format!("Cannot resolve {typed}: {e}"))
}

/// Canonical form of a typed path that must already exist.
fn resolve_existing_dir(typed: &str) -> Result<PathBuf, String> {
    let expanded = resolve_path(typed)?;
    dunce::canonicalize(&expanded).map_err(|e| format!("Cannot open {}: {e}", typed.trim()))
}

/// A backend request that binds a session to a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindOp {
    Open { path: PathBuf },
    Clone { source: String, destination: PathBuf },
    Create { destination: PathBuf },
}

impl BindOp {
    /// The directory the session is bound to on success.
    pub fn repo_path(&self) -> &Path {
        match self {
            Self::Open { path } => path,
            Self::Clone { destination, .. } | Self::Create { destination } => destination,
        }
    }
}

impl fmt::Display for BindOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path } => write!(f, "open {}", path.display()),
            Self::Clone {
                source,
                destination,
            } => write!(f, "clone {source} into {}", destination.display()),
            Self::Create { destination } => write!(f, "create {}", destination.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(prompt: &mut Prompt, text: &str) {
        for c in text.chars() {
            prompt.focused_input_mut().insert(c);
        }
    }

    #[test]
    fn test_open_prompt_blank_is_cancel() {
        let mut prompt = Prompt::open();
        assert_eq!(prompt.confirm(), PromptOutcome::Picked(None));
        typed(&mut prompt, "   ");
        assert_eq!(prompt.confirm(), PromptOutcome::Picked(None));
    }

    #[test]
    fn test_open_prompt_returns_canonical_path() {
        let tmp = tempfile::tempdir().unwrap();
        let repo = tmp.path().join("repo");
        std::fs::create_dir(&repo).unwrap();

        let mut prompt = Prompt::open();
        typed(&mut prompt, &format!(" {}/../repo ", repo.display()));
        assert_eq!(
            prompt.confirm(),
            PromptOutcome::Picked(Some(dunce::canonicalize(&repo).unwrap()))
        );
    }

    #[test]
    fn test_open_prompt_relative_path_is_made_absolute() {
        let mut prompt = Prompt::open();
        typed(&mut prompt, ".");
        let cwd = dunce::canonicalize(std::env::current_dir().unwrap()).unwrap();
        assert_eq!(prompt.confirm(), PromptOutcome::Picked(Some(cwd)));
    }

    #[test]
    fn test_open_prompt_missing_path_is_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let mut prompt = Prompt::open();
        typed(&mut prompt, &tmp.path().join("gone").to_string_lossy());
        assert!(matches!(prompt.confirm(), PromptOutcome::Invalid(m) if m.starts_with("Cannot open")));
    }

    #[test]
    fn test_create_relative_destination_is_made_absolute() {
        let mut prompt = Prompt::create();
        typed(&mut prompt, "fresh");
        assert_eq!(
            prompt.confirm(),
            PromptOutcome::Bind(BindOp::Create {
                destination: std::env::current_dir().unwrap().join("fresh")
            })
        );
    }

    #[test]
    fn test_clone_requires_both_fields() {
        let mut prompt = Prompt::clone_repository();
        assert!(matches!(prompt.confirm(), PromptOutcome::Invalid(_)));

        typed(&mut prompt, "https://example.com/r.git");
        assert!(matches!(prompt.confirm(), PromptOutcome::Invalid(m) if m.contains("destination")));

        prompt.next_field();
        typed(&mut prompt, "/tmp/r");
        assert_eq!(
            prompt.confirm(),
            PromptOutcome::Bind(BindOp::Clone {
                source: "https://example.com/r.git".into(),
                destination: PathBuf::from("/tmp/r"),
            })
        );
    }

    #[test]
    fn test_clone_field_focus_cycles() {
        let mut prompt = Prompt::clone_repository();
        assert!(!prompt.focus_is_path());
        prompt.next_field();
        assert!(prompt.focus_is_path());
        prompt.next_field();
        assert!(!prompt.focus_is_path());
    }

    #[test]
    fn test_next_field_ignored_by_single_field_prompts() {
        let mut prompt = Prompt::create();
        prompt.next_field();
        assert_eq!(prompt, Prompt::create());
    }

    #[test]
    fn test_create_confirm() {
        let mut prompt = Prompt::create();
        assert!(matches!(prompt.confirm(), PromptOutcome::Invalid(_)));
        typed(&mut prompt, "/tmp/new");
        assert_eq!(
            prompt.confirm(),
            PromptOutcome::Bind(BindOp::Create {
                destination: PathBuf::from("/tmp/new")
            })
        );
    }

    #[test]
    fn test_complete_path_skips_clone_source() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("only")).unwrap();
        let mut prompt = Prompt::clone_repository();
        typed(&mut prompt, &format!("{}/on", tmp.path().display()));
        assert!(!prompt.complete_path());
    }

    #[test]
    fn test_complete_path_fills_create_destination() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("only")).unwrap();
        let mut prompt = Prompt::create();
        typed(&mut prompt, &format!("{}/on", tmp.path().display()));
        assert!(prompt.complete_path());
        assert_eq!(
            prompt.focused_input_mut().as_str(),
            format!("{}/only/", tmp.path().display())
        );
    }

    #[test]
    fn test_bind_op_names_operation_and_path() {
        let op = BindOp::Clone {
            source: "git@host:r.git".into(),
            destination: PathBuf::from("/w/r"),
        };
        assert_eq!(op.to_string(), "clone git@host:r.git into /w/r");
        assert_eq!(op.repo_path(), Path::new("/w/r"));
        assert_eq!(
            BindOp::Open {
                path: PathBuf::from("/w/x")
            }
            .to_string(),
            "open /w/x"
        );
    }

    #[test]
    fn test_busy_states() {
        assert!(!InitFlow::Idle.is_busy());
        assert!(InitFlow::Picking.is_busy());
        assert!(!InitFlow::Prompt(Prompt::open()).is_busy());
        assert!(
            InitFlow::Binding(BindOp::Create {
                destination: PathBuf::from("/x")
            })
            .is_busy()
        );
    }
}
