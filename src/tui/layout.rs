//! Responsive layout and the help overlay.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::theme::Theme;

/// Layout mode based on terminal width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Every column (>= 80 cols)
    Full,
    /// Name, start date and status only
    Compact,
}

impl LayoutMode {
    pub fn from_terminal_width(width: u16) -> Self {
        if width < 80 {
            Self::Compact
        } else {
            Self::Full
        }
    }

    pub fn shows_all_columns(&self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Dashboard regions: summary cards, filter bar, table, pagination footer.
pub fn dashboard_areas(area: Rect) -> [Rect; 4] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(area)
}

/// Rect of `width_percent` of `area`, `height` rows tall, centered.
pub fn centered_rect(width_percent: u16, height: u16, area: Rect) -> Rect {
    let width = (u32::from(area.width) * u32::from(width_percent.min(100)) / 100) as u16;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

const HELP: &[(&str, &str)] = &[
    ("j/k, ↑/↓, wheel", "Scroll (loads more users near the bottom)"),
    ("g/G", "Top / bottom of page"),
    ("/", "Search by name"),
    ("s", "Cycle status filter"),
    ("d", "Start date range"),
    ("x", "Clear filters"),
    ("1-5", "Sort by column (again to reverse)"),
    ("b/a/i", "Block / activate / invite selected user"),
    ("←/→", "Previous / next page"),
    ("Home/End", "First / last page"),
    ("p", "Go to page"),
    ("q, Ctrl+C", "Quit"),
];

pub fn render_help_overlay(frame: &mut Frame) {
    let theme = Theme::default();
    let area = centered_rect(60, HELP.len() as u16 + 4, frame.area());

    let mut lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!("{:<18}", keys), theme.key_style()),
                Span::raw(*what),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.muted_style(),
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Keyboard Shortcuts")
            .border_style(theme.header_style()),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}
