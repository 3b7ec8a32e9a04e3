use super::dialog::Dialog;
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Padding,
};
use std::time::Duration;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_MILLIS: u128 = 80;

pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let idx = (elapsed.as_millis() / FRAME_MILLIS) % SPINNER_FRAMES.len() as u128;
    SPINNER_FRAMES[usize::try_from(idx).unwrap_or(0)]
}

/// Spinner popup shown while the active tab waits on background work.
pub fn draw(f: &mut Frame, area: Rect, message: &str, elapsed: Duration, theme: &Theme) {
    let text = Line::from(vec![
        Span::styled(
            format!("{} ", spinner_frame(elapsed)),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(message),
    ]);
    Dialog::new(vec![text])
        .border_color(theme.accent)
        .padding(Padding::horizontal(1))
        .alignment(Alignment::Center)
        .render(f, area);
}
