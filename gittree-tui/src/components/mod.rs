use ratatui::layout::Rect;

pub mod browser;
pub mod busy;
pub mod dialog;
pub mod error_bar;
pub mod initializer;
pub mod prompt;
pub mod tab_bar;
pub mod text_field;

/// Center a rect of an exact size within `r`, shrinking it to fit
pub fn centered_fixed_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

/// Popups take 80% of the terminal width, but never less than 40 columns when the
/// terminal has room for it.
pub fn dialog_width(terminal_width: u16) -> u16 {
    let preferred = terminal_width.saturating_mul(4) / 5;
    preferred.max(40).min(terminal_width)
}
