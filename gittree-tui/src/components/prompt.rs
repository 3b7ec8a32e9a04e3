use super::{centered_fixed_rect, dialog_width, text_field};
use crate::theme::Theme;
use gittree_core::{flow::PromptMode, view::PromptView};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

const FIELD_HEIGHT: u16 = 3;

/// Popup with one input per prompt field and a key hint line.
pub fn draw(f: &mut Frame, area: Rect, prompt: &PromptView<'_>, theme: &Theme) {
    let fields = u16::try_from(prompt.fields.len()).unwrap_or(u16::MAX);
    // Fields, hint row, borders and horizontal padding.
    let height = fields.saturating_mul(FIELD_HEIGHT) + 1 + 2;
    let popup = centered_fixed_rect(dialog_width(area.width), height, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", prompt.mode.title()))
        .border_style(Style::default().fg(theme.accent))
        .padding(Padding::horizontal(1));
    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); prompt.fields.len()];
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (field, row) in prompt.fields.iter().zip(rows.iter()) {
        text_field::draw(f, *row, field.label, field.input, field.focused, theme);
    }
    if let Some(hint_row) = rows.last() {
        f.render_widget(Paragraph::new(hints(prompt.mode, theme)), *hint_row);
    }
}

fn hints(mode: PromptMode, theme: &Theme) -> Line<'static> {
    let mut pairs = vec![("enter", "confirm"), ("tab", "complete")];
    if mode == PromptMode::Clone {
        pairs.push(("↑↓", "switch field"));
    }
    pairs.push(("esc", "cancel"));

    let mut spans = Vec::new();
    for (i, (key, label)) in pairs.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(theme.muted)));
        }
        spans.push(Span::styled(key, theme.key_hint()));
        spans.push(Span::raw(format!(" {label}")));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::test_support::render_to_string;
    use gittree_core::{input::TextInput, view::FieldView};

    #[test]
    fn test_open_prompt_renders_field() {
        let input = TextInput::new("~/src/api");
        let prompt = PromptView {
            mode: PromptMode::Open,
            fields: vec![FieldView {
                label: "Repository path",
                input: &input,
                focused: true,
            }],
        };
        let output = render_to_string(80, 12, |f| draw(f, f.area(), &prompt, &Theme::default()));
        assert!(output.contains("Open repository"));
        assert!(output.contains("Repository path"));
        assert!(output.contains("~/src/api"));
        assert!(output.contains("esc cancel"));
        assert!(!output.contains("switch field"));
    }

    #[test]
    fn test_clone_prompt_has_both_fields() {
        let source = TextInput::new("https://host/repo.git");
        let destination = TextInput::new("");
        let prompt = PromptView {
            mode: PromptMode::Clone,
            fields: vec![
                FieldView {
                    label: "Clone from",
                    input: &source,
                    focused: true,
                },
                FieldView {
                    label: "Into directory",
                    input: &destination,
                    focused: false,
                },
            ],
        };
        let output = render_to_string(80, 14, |f| draw(f, f.area(), &prompt, &Theme::default()));
        assert!(output.contains("Clone repository"));
        assert!(output.contains("Clone from"));
        assert!(output.contains("Into directory"));
        assert!(output.contains("https://host/repo.git"));
        assert!(output.contains("switch field"));
    }
}
