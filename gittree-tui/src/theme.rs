use gittree_core::config::{NamedColor, ThemeColor, ThemeConfig};
use ratatui::style::{Color, Modifier, Style};

/// Resolved terminal colors for every themed element.
pub struct Theme {
    pub accent: Color,
    pub secondary: Color,
    pub success: Color,
    pub error: Color,
    pub warning: Color,
    pub muted: Color,
    pub border: Color,
    pub hint: Color,
    pub highlight_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: terminal_color(&config.accent),
            secondary: terminal_color(&config.secondary),
            success: terminal_color(&config.success),
            error: terminal_color(&config.error),
            warning: terminal_color(&config.warning),
            muted: terminal_color(&config.muted),
            border: terminal_color(&config.border),
            hint: terminal_color(&config.hint),
            highlight_fg: terminal_color(&config.highlight_fg),
        }
    }

    /// Selected row / active tab
    pub fn highlight(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(self.highlight_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.hint).add_modifier(Modifier::BOLD)
    }
}

fn terminal_color(color: &ThemeColor) -> Color {
    match color {
        ThemeColor::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
        ThemeColor::Named(named) => match named {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::Red,
            NamedColor::Green => Color::Green,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::White => Color::White,
            NamedColor::Gray => Color::Gray,
            NamedColor::DarkGray => Color::DarkGray,
        },
    }
}
