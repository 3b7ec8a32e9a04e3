use crate::theme::Theme;
use gittree_core::input::TextInput;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The part of a line of text that fits in `width` columns while keeping the cursor in
/// view, as a byte range plus the cursor's column inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    start: usize,
    end: usize,
    cursor_col: u16,
}

fn visible_window(text: &str, cursor: usize, width: u16) -> Window {
    let width = usize::from(width);
    if width == 0 {
        return Window {
            start: 0,
            end: 0,
            cursor_col: 0,
        };
    }

    let cells: Vec<(usize, usize)> = text
        .grapheme_indices(true)
        .map(|(offset, g)| (offset, g.width()))
        .collect();
    let cursor = cursor.min(text.len());
    let cursor_col: usize = cells
        .iter()
        .take_while(|(offset, _)| *offset < cursor)
        .map(|(_, w)| w)
        .sum();

    // Scroll just far enough that the cursor sits in the last column at most.
    let mut first = 0;
    let mut scrolled = 0;
    while cursor_col - scrolled > width - 1 && first < cells.len() {
        scrolled += cells[first].1;
        first += 1;
    }

    let mut last = first;
    let mut used = 0;
    while let Some((_, w)) = cells.get(last) {
        if used + w > width {
            break;
        }
        used += w;
        last += 1;
    }

    let offset_of = |idx: usize| cells.get(idx).map_or(text.len(), |(offset, _)| *offset);
    Window {
        start: offset_of(first),
        end: offset_of(last),
        cursor_col: u16::try_from(cursor_col - scrolled).unwrap_or(u16::MAX),
    }
}

/// A bordered single-line input. The focused field owns the terminal cursor.
pub fn draw(f: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool, theme: &Theme) {
    let border = if focused { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {label} "))
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let window = visible_window(input.as_str(), input.cursor, inner.width);
    let line = Line::from(Span::raw(&input.as_str()[window.start..window.end]));
    f.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position((inner.x.saturating_add(window.cursor_col), inner.y));
    }
}
