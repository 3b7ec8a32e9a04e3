mod spawn;

use crate::{components, keymap, theme::Theme};
use crossterm::event::{self, Event, KeyEventKind};
use gittree_core::{
    AppEvent, AppState, Effect, GitProvider, apply_action, apply_event,
    action::Action,
    picker::DirectoryPicker,
    view::{self, Body, Screen},
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use spawn::spawn_effect;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc,
    },
    time::{Duration, Instant},
};

/// Handle for dispatching background work
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::Sender<AppEvent>,
    cancel: Arc<AtomicBool>,
}

impl EventSender {
    /// Send an event from a background thread to the main loop
    pub fn send(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }
}

/// Drive the UI until the user quits. `startup` actions are applied before the first
/// frame, e.g. to open paths given on the command line.
pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    picker: &Arc<dyn DirectoryPicker>,
    theme: &Theme,
    startup: Vec<Action>,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let cancel = Arc::new(AtomicBool::new(false));
    let event_sender = EventSender {
        tx,
        cancel: Arc::clone(&cancel),
    };
    let spinner_start = Instant::now();

    for action in startup {
        process_action(action, state, git, picker, &event_sender);
    }

    loop {
        if state.should_quit {
            // Results still in flight are dropped
            cancel.store(true, Ordering::Relaxed);
            return Ok(());
        }

        terminal.draw(|f| draw(f, state, theme, spinner_start.elapsed()))?;

        // Check background channel (non-blocking)
        if let Ok(app_event) = rx.try_recv() {
            process_app_event(app_event, state, git, picker, &event_sender);
            continue;
        }

        // Poll with a timeout so the spinner animates and the channel is checked
        if event::poll(Duration::from_millis(80))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = keymap::resolve_action(key, state) {
                process_action(action, state, git, picker, &event_sender);
            }
        }
    }
}

fn process_action(
    action: Action,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    picker: &Arc<dyn DirectoryPicker>,
    sender: &EventSender,
) {
    let effects = apply_action(state, action);
    dispatch(effects, git, picker, sender);
}

/// Handle events from background tasks
fn process_app_event(
    event: AppEvent,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    picker: &Arc<dyn DirectoryPicker>,
    sender: &EventSender,
) {
    let effects = apply_event(state, event);
    dispatch(effects, git, picker, sender);
}

fn dispatch(
    effects: Vec<Effect>,
    git: &Arc<dyn GitProvider>,
    picker: &Arc<dyn DirectoryPicker>,
    sender: &EventSender,
) {
    for effect in effects {
        spawn_effect(effect, git, picker, sender);
    }
}

fn draw(f: &mut Frame, state: &AppState, theme: &Theme, elapsed: Duration) {
    let screen = view::compose(state);

    let error_height = u16::from(screen.error.is_some());
    let [tabs_area, body_area, error_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(error_height),
        Constraint::Length(1),
    ])
    .areas(f.area());

    components::tab_bar::draw(f, tabs_area, &screen.tabs, theme);
    match &screen.body {
        Body::Initializer => components::initializer::draw(f, body_area, theme),
        Body::Browser(browser) => components::browser::draw(f, body_area, browser, theme),
    }
    if let Some(error) = screen.error {
        components::error_bar::draw(f, error_area, error, theme);
    }
    draw_footer(f, footer_area, &screen, theme);

    if let Some(prompt) = &screen.prompt {
        components::prompt::draw(f, f.area(), prompt, theme);
    } else if let Some(message) = &screen.busy {
        components::busy::draw(f, body_area, message, elapsed, theme);
    }
}

fn draw_footer(f: &mut Frame, area: Rect, screen: &Screen<'_>, theme: &Theme) {
    if screen.prompt.is_some() {
        return;
    }
    let mut pairs = vec![
        ("t", "new tab"),
        ("w", "close tab"),
        ("h/l", "switch tab"),
        ("o", "open"),
        ("c", "clone"),
        ("n", "create"),
    ];
    if matches!(screen.body, Body::Browser(_)) {
        pairs.push(("j/k", "select branch"));
    }
    pairs.push(("q", "quit"));

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, label)) in pairs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(key, theme.key_hint()));
        spans.push(Span::styled(
            format!(" {label}"),
            Style::default().fg(theme.muted),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
