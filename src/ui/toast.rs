use crate::app::state::{AppState, SubmissionStatus};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Floating toast in the bottom-right corner. Visible only while the status
/// is `Success` or `Error`; the dismiss timer withdraws it by returning the
/// status to `Idle`. The two renderings are mutually exclusive.
pub fn render(frame: &mut Frame, state: &AppState) {
    let (text, style) = match state.status {
        SubmissionStatus::Success => ("Form submitted. Thank you!", Theme::toast_success()),
        SubmissionStatus::Error => ("Submission failed. Try again later.", Theme::toast_error()),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => return,
    };

    let area = frame.area();
    let width = (text.len() as u16 + 4).min(area.width);
    let height = 3u16.min(area.height);
    let toast_area = Rect {
        x: area.right().saturating_sub(width + 2),
        y: area.bottom().saturating_sub(height + 1),
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .style(style);
    let inner = block.inner(toast_area);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(block, toast_area);
    frame.render_widget(
        Paragraph::new(text).style(style).alignment(Alignment::Center),
        inner,
    );
}
