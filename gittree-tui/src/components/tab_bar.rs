use crate::theme::Theme;
use gittree_core::view::TabLabel;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Tab strip: `1 name` per tab, numbered for the digit shortcuts. Closable tabs get a
/// close marker.
pub fn draw(f: &mut Frame, area: Rect, tabs: &[TabLabel<'_>], theme: &Theme) {
    let mut spans = Vec::with_capacity(tabs.len() * 2);
    for (position, tab) in tabs.iter().enumerate() {
        let name = if tab.name.is_empty() { "(unnamed)" } else { tab.name };
        let marker = if tab.closable { " ×" } else { "" };
        let style = if tab.active {
            theme.highlight()
        } else {
            Style::default().fg(theme.muted)
        };
        spans.push(Span::styled(format!(" {} {name}{marker} ", position + 1), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
