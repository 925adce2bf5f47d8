//! Color theme and styling for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::model::Status;

pub struct Theme {
    /// Accent color for titles, keys and the active sort column
    pub primary: Color,
    /// Active users
    pub success: Color,
    /// Invited users and warnings
    pub warning: Color,
    /// Blocked users
    pub danger: Color,
    /// Secondary text and disabled controls
    pub muted: Color,
    pub text: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            muted: Color::DarkGray,
            text: Color::White,
        }
    }

    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Active => self.success,
            Status::Invited => self.warning,
            Status::Blocked => self.danger,
        }
    }

    /// Badge style for a status cell
    pub fn status_style(&self, status: Status) -> Style {
        Style::default()
            .fg(self.status_color(status))
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default().bg(self.muted)
    }

    pub fn key_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Pagination control, dimmed when it cannot be used
    pub fn control_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted).add_modifier(Modifier::DIM)
        }
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_are_distinct() {
        let theme = Theme::default();
        let colors: Vec<Color> = Status::all()
            .iter()
            .map(|s| theme.status_color(*s))
            .collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_disabled_control_is_muted() {
        let theme = Theme::default();
        assert_eq!(theme.control_style(false).fg, Some(theme.muted));
        assert_ne!(theme.control_style(true).fg, Some(theme.muted));
    }
}
