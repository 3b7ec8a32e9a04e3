use crate::{
    action::Action,
    effect::Effect,
    event::AppEvent,
    flow::{BindOp, CloneField, InitFlow, Prompt, PromptOutcome},
    input::TextInput,
    picker::PickResult,
    selection,
    session::{CommitHistory, Session, TabId},
    state::AppState,
};
use std::path::Path;

/// Apply a user action. Returns the background work it started.
pub fn apply_action(state: &mut AppState, action: Action) -> Vec<Effect> {
    if addresses_active_session(&action) {
        state.registry.active_mut().error = None;
    }

    match action {
        Action::NewTab => {
            state.registry.create_session();
            Vec::new()
        }
        Action::CloseActiveTab => {
            let before = state.registry.active_id();
            state.registry.delete_session(before);
            after_activation(state, before)
        }
        Action::NextTab => {
            let before = state.registry.active_id();
            state.registry.activate_next();
            after_activation(state, before)
        }
        Action::PrevTab => {
            let before = state.registry.active_id();
            state.registry.activate_previous();
            after_activation(state, before)
        }
        Action::SelectTabPosition(position) => {
            let before = state.registry.active_id();
            state.registry.activate_position(position);
            after_activation(state, before)
        }

        Action::StartOpen => {
            let external = state.external_picker;
            let session = state.registry.active_mut();
            if session.flow != InitFlow::Idle {
                return Vec::new();
            }
            if external {
                session.flow = InitFlow::Picking;
                vec![Effect::PickDirectory { tab: session.id }]
            } else {
                session.flow = InitFlow::Prompt(Prompt::open());
                Vec::new()
            }
        }
        Action::StartClone => {
            start_prompt(state.registry.active_mut(), Prompt::clone_repository());
            Vec::new()
        }
        Action::StartCreate => {
            start_prompt(state.registry.active_mut(), Prompt::create());
            Vec::new()
        }
        Action::DismissPrompt => {
            let session = state.registry.active_mut();
            if session.flow.prompt().is_some() {
                session.flow = InitFlow::Idle;
            }
            Vec::new()
        }
        Action::ConfirmPrompt => confirm_prompt(state.registry.active_mut()),
        Action::PromptNextField => {
            if let Some(prompt) = state.registry.active_mut().flow.prompt_mut() {
                prompt.next_field();
            }
            Vec::new()
        }
        Action::OpenPath(path) => {
            let session = state.registry.active_mut();
            if session.flow.is_busy() {
                log::warn!("tab {} is busy, not opening {}", session.id, path.display());
                return Vec::new();
            }
            begin_bind(session, BindOp::Open { path })
        }

        Action::InputPush(c) => {
            edit_input(state, |input| input.insert(c));
            Vec::new()
        }
        Action::InputPop => {
            edit_input(state, |input| {
                input.backspace();
            });
            Vec::new()
        }
        Action::InputDeleteWord => {
            edit_input(state, TextInput::delete_word);
            Vec::new()
        }
        Action::CursorLeft => {
            edit_input(state, TextInput::cursor_left);
            Vec::new()
        }
        Action::CursorRight => {
            edit_input(state, TextInput::cursor_right);
            Vec::new()
        }
        Action::CursorStart => {
            edit_input(state, TextInput::cursor_start);
            Vec::new()
        }
        Action::CursorEnd => {
            edit_input(state, TextInput::cursor_end);
            Vec::new()
        }
        Action::CompletePath => {
            if let Some(prompt) = state.registry.active_mut().flow.prompt_mut()
                && !prompt.complete_path()
                && matches!(
                    prompt,
                    Prompt::Clone {
                        focus: CloneField::Source,
                        ..
                    }
                )
            {
                prompt.next_field();
            }
            Vec::new()
        }

        Action::MoveBranchSelection(delta) => {
            if let Some(binding) = state.registry.active_mut().binding.as_mut() {
                binding.selected =
                    selection::move_selection(&binding.branches, binding.selected, delta);
            }
            Vec::new()
        }

        Action::Quit => {
            state.should_quit = true;
            Vec::new()
        }
    }
}

/// Apply the outcome of background work. Events for tabs that no longer exist, or that
/// have moved on since the work started, are dropped.
pub fn apply_event(state: &mut AppState, event: AppEvent) -> Vec<Effect> {
    let active = state.registry.active_id();
    match event {
        AppEvent::DirectoryPicked { tab, result } => {
            let Some(session) = state.registry.get_mut(tab) else {
                log::debug!("dropping pick result for closed tab {tab}");
                return Vec::new();
            };
            if session.flow != InitFlow::Picking {
                log::debug!("tab {tab} is no longer picking, dropping pick result");
                return Vec::new();
            }
            match result {
                PickResult::Selected(path) => begin_bind(session, BindOp::Open { path }),
                PickResult::Cancelled => {
                    session.flow = InitFlow::Idle;
                    Vec::new()
                }
                PickResult::Failed(message) => {
                    session.flow = InitFlow::Idle;
                    session.error = Some(format!("Directory picker failed: {message}"));
                    Vec::new()
                }
            }
        }
        AppEvent::RepositoryBound { tab, op, branches } => {
            let Some(session) = state.registry.get_mut(tab) else {
                log::debug!("dropping bind result for closed tab {tab}");
                return Vec::new();
            };
            if !matches!(&session.flow, InitFlow::Binding(pending) if *pending == op) {
                log::debug!("tab {tab} is not waiting to {op}, dropping result");
                return Vec::new();
            }
            log::info!("tab {tab}: {op} succeeded, {} branches", branches.len());
            session.flow = InitFlow::Idle;
            session.bind(op.repo_path().to_path_buf(), branches);
            if tab == active {
                request_history(session).into_iter().collect()
            } else {
                Vec::new()
            }
        }
        AppEvent::BindFailed { tab, op, error } => {
            let Some(session) = state.registry.get_mut(tab) else {
                log::debug!("dropping bind failure for closed tab {tab}");
                return Vec::new();
            };
            if !matches!(&session.flow, InitFlow::Binding(pending) if *pending == op) {
                log::debug!("tab {tab} is not waiting to {op}, dropping failure");
                return Vec::new();
            }
            session.flow = InitFlow::Idle;
            session.error = Some(format!("Failed to {op}: {error}"));
            Vec::new()
        }
        AppEvent::CommitsLoaded {
            tab,
            repo_path,
            commits,
        } => {
            if let Some(session) = pending_history(state, tab, &repo_path) {
                log::info!(
                    "tab {tab}: loaded {} commits from {}",
                    commits.len(),
                    repo_path.display()
                );
                session.commits = CommitHistory::Loaded(commits);
            }
            Vec::new()
        }
        AppEvent::CommitsFailed {
            tab,
            repo_path,
            error,
        } => {
            if let Some(session) = pending_history(state, tab, &repo_path) {
                session.commits = CommitHistory::Failed(error);
            }
            Vec::new()
        }
    }
}

/// Tab strip actions and quit leave the active session's error in place.
fn addresses_active_session(action: &Action) -> bool {
    !matches!(
        action,
        Action::NewTab
            | Action::CloseActiveTab
            | Action::NextTab
            | Action::PrevTab
            | Action::SelectTabPosition(_)
            | Action::Quit
    )
}

fn start_prompt(session: &mut Session, prompt: Prompt) {
    if session.flow == InitFlow::Idle {
        session.flow = InitFlow::Prompt(prompt);
    }
}

fn confirm_prompt(session: &mut Session) -> Vec<Effect> {
    let Some(prompt) = session.flow.prompt() else {
        return Vec::new();
    };
    match prompt.confirm() {
        PromptOutcome::Picked(None) => {
            session.flow = InitFlow::Idle;
            Vec::new()
        }
        PromptOutcome::Picked(Some(path)) => begin_bind(session, BindOp::Open { path }),
        PromptOutcome::Bind(op) => begin_bind(session, op),
        PromptOutcome::Invalid(message) => {
            session.error = Some(message);
            Vec::new()
        }
    }
}

fn begin_bind(session: &mut Session, op: BindOp) -> Vec<Effect> {
    log::debug!("tab {}: starting {op}", session.id);
    session.flow = InitFlow::Binding(op.clone());
    vec![Effect::Bind {
        tab: session.id,
        op,
    }]
}

fn edit_input(state: &mut AppState, edit: impl FnOnce(&mut TextInput)) {
    if let Some(prompt) = state.registry.active_mut().flow.prompt_mut() {
        edit(prompt.focused_input_mut());
    }
}

/// Start a history load for a bound session that has none yet, or whose last load
/// failed. Loaded history stays cached until the session is rebound.
fn request_history(session: &mut Session) -> Option<Effect> {
    let repo_path = session.repo_path()?.to_path_buf();
    if matches!(
        session.commits,
        CommitHistory::Loading | CommitHistory::Loaded(_)
    ) {
        return None;
    }
    session.commits = CommitHistory::Loading;
    Some(Effect::LoadCommitHistory {
        tab: session.id,
        repo_path,
    })
}

/// After anything that may change the active tab: a newly active bound tab loads its
/// history if it has none.
fn after_activation(state: &mut AppState, before: TabId) -> Vec<Effect> {
    if state.registry.active_id() == before {
        return Vec::new();
    }
    request_history(state.registry.active_mut())
        .into_iter()
        .collect()
}

/// The session a history response belongs to, if it still exists, is still bound to
/// the same path and is still waiting.
fn pending_history<'a>(
    state: &'a mut AppState,
    tab: TabId,
    repo_path: &Path,
) -> Option<&'a mut Session> {
    let Some(session) = state.registry.get_mut(tab) else {
        log::debug!("dropping commit history for closed tab {tab}");
        return None;
    };
    if session.repo_path() != Some(repo_path) || session.commits != CommitHistory::Loading {
        log::debug!(
            "tab {tab} moved on, dropping commit history for {}",
            repo_path.display()
        );
        return None;
    }
    Some(session)
}
