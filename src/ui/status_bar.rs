use crate::app::state::{AppState, SubmissionStatus};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let status_fg = match state.status {
        SubmissionStatus::Idle => Color::Green,
        SubmissionStatus::Submitting => Color::Yellow,
        SubmissionStatus::Success => Color::Green,
        SubmissionStatus::Error => Color::Red,
    };
    parts.push(Span::styled(
        format!(" [{}] ", state.status_line()),
        Style::default().fg(status_fg).bg(Color::DarkGray),
    ));

    parts.push(Span::styled(
        " Tab/Shift-Tab move | Enter submit | Esc quit ",
        Theme::status_bar(),
    ));

    // Pad to fill remaining space, focus indicator on the right
    let focus_name = state.focus.name();
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.len() + 3);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" [{}] ", focus_name),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
