pub mod action;
pub mod config;
pub mod effect;
pub mod event;
pub mod flow;
pub mod git;
pub mod input;
pub mod paths;
pub mod picker;
pub mod registry;
pub mod selection;
pub mod session;
pub mod state;
pub mod update;
pub mod view;

// Re-export commonly used types at crate root
pub use action::Action;
pub use config::Config;
pub use effect::{Effect, run_effect};
pub use event::AppEvent;
pub use git::{Branch, BranchCategory, Commit, GitError, GitProvider};
pub use picker::{DirectoryPicker, NoPicker, PickResponse, PickResult};
pub use registry::SessionRegistry;
pub use session::{Session, TabId};
pub use state::AppState;
pub use update::{apply_action, apply_event};
