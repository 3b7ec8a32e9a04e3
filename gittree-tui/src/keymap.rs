use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gittree_core::{action::Action, state::AppState};

/// Resolve a key press into an Action for the active tab's current mode.
pub fn resolve_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global quit
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if state.registry.active().flow.prompt().is_some() {
        resolve_prompt_key(key.code, ctrl)
    } else {
        resolve_browse_key(key.code)
    }
}

fn resolve_browse_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Char('t') => Some(Action::NewTab),
        KeyCode::Char('w') => Some(Action::CloseActiveTab),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::PrevTab),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::NextTab),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|n| Action::SelectTabPosition(n as usize)),

        KeyCode::Char('o') => Some(Action::StartOpen),
        KeyCode::Char('c') => Some(Action::StartClone),
        KeyCode::Char('n') => Some(Action::StartCreate),

        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveBranchSelection(1)),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveBranchSelection(-1)),
        _ => None,
    }
}

fn resolve_prompt_key(key: KeyCode, ctrl: bool) -> Option<Action> {
    if ctrl {
        return match key {
            KeyCode::Char('w') | KeyCode::Backspace => Some(Action::InputDeleteWord),
            KeyCode::Char('a') => Some(Action::CursorStart),
            KeyCode::Char('e') => Some(Action::CursorEnd),
            _ => None,
        };
    }

    match key {
        KeyCode::Esc => Some(Action::DismissPrompt),
        KeyCode::Enter => Some(Action::ConfirmPrompt),
        KeyCode::Tab => Some(Action::CompletePath),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Down => Some(Action::PromptNextField),
        KeyCode::Backspace => Some(Action::InputPop),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Home => Some(Action::CursorStart),
        KeyCode::End => Some(Action::CursorEnd),
        KeyCode::Char(c) => Some(Action::InputPush(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn prompting() -> AppState {
        let mut state = AppState::new(false);
        gittree_core::apply_action(&mut state, Action::StartCreate);
        state
    }

    #[test]
    fn test_browse_keys() {
        let state = AppState::new(false);
        assert_eq!(resolve_action(press(KeyCode::Char('t')), &state), Some(Action::NewTab));
        assert_eq!(
            resolve_action(press(KeyCode::Char('w')), &state),
            Some(Action::CloseActiveTab)
        );
        assert_eq!(resolve_action(press(KeyCode::Left), &state), Some(Action::PrevTab));
        assert_eq!(resolve_action(press(KeyCode::Char('l')), &state), Some(Action::NextTab));
        assert_eq!(
            resolve_action(press(KeyCode::Char('3')), &state),
            Some(Action::SelectTabPosition(3))
        );
        assert_eq!(resolve_action(press(KeyCode::Char('0')), &state), None);
        assert_eq!(resolve_action(press(KeyCode::Char('o')), &state), Some(Action::StartOpen));
        assert_eq!(
            resolve_action(press(KeyCode::Char('j')), &state),
            Some(Action::MoveBranchSelection(1))
        );
        assert_eq!(resolve_action(press(KeyCode::Esc), &state), Some(Action::Quit));
    }

    #[test]
    fn test_prompt_keys_type_text() {
        let state = prompting();
        assert_eq!(
            resolve_action(press(KeyCode::Char('q')), &state),
            Some(Action::InputPush('q'))
        );
        assert_eq!(
            resolve_action(press(KeyCode::Char('t')), &state),
            Some(Action::InputPush('t'))
        );
        assert_eq!(resolve_action(press(KeyCode::Esc), &state), Some(Action::DismissPrompt));
        assert_eq!(resolve_action(press(KeyCode::Enter), &state), Some(Action::ConfirmPrompt));
        assert_eq!(resolve_action(press(KeyCode::Tab), &state), Some(Action::CompletePath));
        assert_eq!(resolve_action(press(KeyCode::Down), &state), Some(Action::PromptNextField));
        assert_eq!(resolve_action(ctrl('w'), &state), Some(Action::InputDeleteWord));
        assert_eq!(resolve_action(ctrl('x'), &state), None);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        assert_eq!(resolve_action(ctrl('c'), &AppState::new(false)), Some(Action::Quit));
        assert_eq!(resolve_action(ctrl('c'), &prompting()), Some(Action::Quit));
    }
}
