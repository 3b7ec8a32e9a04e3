//! What the screen shows, derived from `AppState` alone. Holds no state of its own.

use crate::{
    flow::{CloneField, InitFlow, Prompt, PromptMode},
    git::{Branch, Commit},
    input::TextInput,
    selection::{self, NavSection},
    session::{CommitHistory, Session, TabId},
    state::AppState,
};
use std::path::Path;

#[derive(Debug)]
pub struct Screen<'a> {
    pub tabs: Vec<TabLabel<'a>>,
    pub body: Body<'a>,
    pub prompt: Option<PromptView<'a>>,
    /// Set while the active tab waits on the picker or a backend request
    pub busy: Option<String>,
    pub error: Option<&'a str>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct TabLabel<'a> {
    pub id: TabId,
    pub name: &'a str,
    pub active: bool,
    /// The last remaining tab cannot be closed
    pub closable: bool,
}

#[derive(Debug)]
pub enum Body<'a> {
    /// Unbound tab: offer open, clone and create
    Initializer,
    Browser(BrowserView<'a>),
}

#[derive(Debug)]
pub struct BrowserView<'a> {
    pub repo_path: &'a Path,
    pub sections: Vec<SectionView<'a>>,
    pub selected: Option<&'a Branch>,
    pub history: HistoryView<'a>,
}

#[derive(Debug)]
pub struct SectionView<'a> {
    pub section: NavSection,
    pub rows: Vec<BranchRow<'a>>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct BranchRow<'a> {
    /// Index into the session's branch list
    pub index: usize,
    pub branch: &'a Branch,
    pub selected: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum HistoryView<'a> {
    Loading,
    Commits(&'a [Commit]),
    /// Loaded fine, nothing to show
    Empty,
    Failed(&'a str),
}

#[derive(Debug)]
pub struct PromptView<'a> {
    pub mode: PromptMode,
    pub fields: Vec<FieldView<'a>>,
}

#[derive(Debug)]
pub struct FieldView<'a> {
    pub label: &'static str,
    pub input: &'a TextInput,
    pub focused: bool,
}

pub fn compose(state: &AppState) -> Screen<'_> {
    let registry = &state.registry;
    let active = registry.active();
    let closable = registry.len() > 1;

    let tabs = registry
        .sessions()
        .iter()
        .map(|session| TabLabel {
            id: session.id,
            name: &session.name,
            active: session.id == active.id,
            closable,
        })
        .collect();

    Screen {
        tabs,
        body: body(active),
        prompt: active.flow.prompt().map(prompt_view),
        busy: busy_message(&active.flow),
        error: active.error.as_deref(),
    }
}

fn body(session: &Session) -> Body<'_> {
    let Some(binding) = &session.binding else {
        return Body::Initializer;
    };

    let sections = NavSection::ALL
        .iter()
        .map(|section| SectionView {
            section: *section,
            rows: selection::section_entries(&binding.branches, *section)
                .map(|(index, branch)| BranchRow {
                    index,
                    branch,
                    selected: binding.selected == Some(index),
                })
                .collect(),
        })
        .collect();

    let history = match &session.commits {
        CommitHistory::NotRequested | CommitHistory::Loading => HistoryView::Loading,
        CommitHistory::Loaded(commits) if commits.is_empty() => HistoryView::Empty,
        CommitHistory::Loaded(commits) => HistoryView::Commits(commits),
        CommitHistory::Failed(error) => HistoryView::Failed(error),
    };

    Body::Browser(BrowserView {
        repo_path: &binding.repo_path,
        sections,
        selected: binding.selected_branch(),
        history,
    })
}

fn prompt_view(prompt: &Prompt) -> PromptView<'_> {
    let fields = match prompt {
        Prompt::Open { path } => vec![FieldView {
            label: "Repository path",
            input: path,
            focused: true,
        }],
        Prompt::Clone {
            source,
            destination,
            focus,
        } => vec![
            FieldView {
                label: "Clone from",
                input: source,
                focused: *focus == CloneField::Source,
            },
            FieldView {
                label: "Into directory",
                input: destination,
                focused: *focus == CloneField::Destination,
            },
        ],
        Prompt::Create { destination } => vec![FieldView {
            label: "New repository directory",
            input: destination,
            focused: true,
        }],
    };
    PromptView {
        mode: prompt.mode(),
        fields,
    }
}

fn busy_message(flow: &InitFlow) -> Option<String> {
    match flow {
        InitFlow::Picking => Some("Waiting for the directory picker".to_string()),
        InitFlow::Binding(op) => Some(format!("Working: {op}")),
        InitFlow::Idle | InitFlow::Prompt(_) => None,
    }
}
