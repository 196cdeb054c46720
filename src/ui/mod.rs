mod form;
mod history;
mod layout;
mod status_bar;
mod theme;
mod toast;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area(), state.config.ui.layout);

    render_header(frame, app_layout.header);
    form::render(frame, app_layout.form, state);
    history::render(frame, app_layout.side, state);
    status_bar::render(frame, app_layout.status_bar, state);
    toast::render(frame, state);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("Join the Story", theme::Theme::title())),
        Line::from(Span::styled(
            "Ready to bring your vision to life? Let's talk.",
            theme::Theme::subtitle(),
        )),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
