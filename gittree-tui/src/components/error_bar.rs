use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// One-line error for the active tab
pub fn draw(f: &mut Frame, area: Rect, error: &str, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(
            " Error: ",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(error, Style::default().fg(theme.error)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
