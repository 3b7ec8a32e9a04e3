use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::{centered_fixed_rect, dialog_width};

/// A centered popup sized to its wrapped content.
pub struct Dialog<'a> {
    lines: Vec<Line<'a>>,
    border_color: Color,
    padding: Padding,
    alignment: Alignment,
}

impl<'a> Dialog<'a> {
    #[must_use]
    pub fn new(lines: Vec<Line<'a>>) -> Self {
        Self {
            lines,
            border_color: Color::White,
            padding: Padding::ZERO,
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = color;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// `(width, height)` for a terminal `terminal_width` columns wide, borders included.
    pub fn size(&self, terminal_width: u16) -> (u16, u16) {
        let width = dialog_width(terminal_width);
        let text_width = width
            .saturating_sub(2 + self.padding.left + self.padding.right)
            .max(1);
        let body: u16 = self
            .lines
            .iter()
            .map(|line| wrapped_rows(line, text_width))
            .sum();
        (width, body + 2 + self.padding.top + self.padding.bottom)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let (width, height) = self.size(area.width);
        let popup = centered_fixed_rect(width, height, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .padding(self.padding);

        let paragraph = Paragraph::new(self.lines.clone())
            .block(block)
            .wrap(Wrap { trim: false })
            .alignment(self.alignment);
        f.render_widget(paragraph, popup);
    }
}

/// Rows a line occupies when word-wrapped to `max_width` columns. Words longer than a
/// row are split across rows.
pub fn wrapped_rows(line: &Line, max_width: u16) -> u16 {
    let max_width = usize::from(max_width);
    if max_width == 0 {
        return 1;
    }

    let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
    let mut rows: u16 = 1;
    let mut col = 0;
    for word in text.split(' ') {
        let w = word.width();
        let needed = if col == 0 { w } else { w + 1 };
        if col + needed <= max_width {
            col += needed;
            continue;
        }
        if col > 0 {
            rows += 1;
        }
        col = w;
        while col > max_width {
            rows += 1;
            col -= max_width;
        }
    }
    rows
}
