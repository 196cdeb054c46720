use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn subtitle() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn label_focused() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn field_error() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn submit_ready() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn submit_disabled() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn toast_success() -> Style {
        Style::default().fg(Color::White).bg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn toast_error() -> Style {
        Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn history_accepted() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn history_failed() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn contact_info() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn empty_hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
