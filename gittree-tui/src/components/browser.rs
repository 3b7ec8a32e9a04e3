use crate::theme::Theme;
use gittree_core::view::{BrowserView, HistoryView};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const SHORT_ID_LEN: usize = 7;

/// Branch navigator on the left, commit history on the right.
pub fn draw(f: &mut Frame, area: Rect, view: &BrowserView<'_>, theme: &Theme) {
    let [branches, history] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);
    draw_branches(f, branches, view, theme);
    draw_history(f, history, &view.history, theme);
}

fn draw_branches(f: &mut Frame, area: Rect, view: &BrowserView<'_>, theme: &Theme) {
    let mut items = Vec::new();
    let mut selected_item = None;

    for section in &view.sections {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{} ({})", section.section, section.rows.len()),
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ))));
        if section.rows.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                "  none",
                Style::default().fg(theme.muted),
            ))));
        }
        for row in &section.rows {
            if row.selected {
                selected_item = Some(items.len());
            }
            let marker = if row.branch.is_checked_out {
                Span::styled("● ", Style::default().fg(theme.success))
            } else {
                Span::raw("  ")
            };
            items.push(ListItem::new(Line::from(vec![
                Span::raw("  "),
                marker,
                Span::raw(row.branch.name.as_str()),
            ])));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", view.repo_path.display()))
        .border_style(Style::default().fg(theme.border));
    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight());

    let mut state = ListState::default().with_selected(selected_item);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_history(f: &mut Frame, area: Rect, history: &HistoryView<'_>, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" History ")
        .border_style(Style::default().fg(theme.border));

    let message = |text: &str, color| {
        Paragraph::new(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color),
        )))
    };

    match history {
        HistoryView::Loading => {
            f.render_widget(message("Loading commits...", theme.muted).block(block), area);
        }
        HistoryView::Empty => {
            f.render_widget(message("No commits yet", theme.muted).block(block), area);
        }
        HistoryView::Failed(error) => {
            let text = format!("Could not load history: {error}");
            f.render_widget(message(&text, theme.error).block(block), area);
        }
        HistoryView::Commits(commits) => {
            let items: Vec<ListItem> = commits
                .iter()
                .map(|commit| {
                    let short_id: String = commit.id.chars().take(SHORT_ID_LEN).collect();
                    ListItem::new(Line::from(vec![
                        Span::styled(short_id, Style::default().fg(theme.warning)),
                        Span::raw(" "),
                        Span::raw(commit.summary()),
                        Span::styled(
                            format!(" ({})", commit.author),
                            Style::default().fg(theme.muted),
                        ),
                    ]))
                })
                .collect();
            f.render_widget(List::new(items).block(block), area);
        }
    }
}
