use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Body of a tab with no repository yet.
pub fn draw(f: &mut Frame, area: Rect, theme: &Theme) {
    let option = |key: &'static str, label: &'static str| {
        Line::from(vec![
            Span::styled(key, theme.key_hint()),
            Span::raw("  "),
            Span::raw(label),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "No repository open in this tab",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        option("o", "Open an existing repository"),
        option("c", "Clone a repository"),
        option("n", "Create a new repository"),
    ];
    // Vertically center the block of text.
    let pad = usize::from(area.height.saturating_sub(2)).saturating_sub(lines.len()) / 2;
    lines.splice(0..0, std::iter::repeat_n(Line::raw(""), pad));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_to_string;

    #[test]
    fn test_initializer_lists_entry_modes() {
        let output = render_to_string(60, 12, |f| draw(f, f.area(), &Theme::default()));
        assert!(output.contains("No repository open in this tab"));
        assert!(output.contains("Open an existing repository"));
        assert!(output.contains("Clone a repository"));
        assert!(output.contains("Create a new repository"));
    }
}
