use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let contact_lines = contact_line_count(state);
    let contact_height = if contact_lines == 0 { 0 } else { contact_lines + 2 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(contact_height)])
        .split(area);

    render_submissions(frame, chunks[0], state);
    render_contact_info(frame, chunks[1], state);
}

fn render_submissions(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Submissions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut items: Vec<ListItem> = Vec::new();
    if state.history.is_empty() {
        items.push(ListItem::new(Span::styled(
            " No submissions yet",
            Theme::empty_hint(),
        )));
    } else {
        // Newest first
        for record in state.history.iter().rev() {
            let (marker, style) = if record.accepted {
                ("+", Theme::history_accepted())
            } else {
                ("x", Theme::history_failed())
            };
            items.push(ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", record.timestamp), Theme::timestamp()),
                Span::styled(format!("{} {}", marker, record.summary), style),
            ])));
        }
    }

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

fn contact_line_count(state: &AppState) -> u16 {
    let contact = &state.config.contact;
    (contact.email.is_some() as u16) + (contact.phone.is_some() as u16)
}

fn render_contact_info(frame: &mut Frame, area: Rect, state: &AppState) {
    let contact = &state.config.contact;
    if contact.email.is_none() && contact.phone.is_none() {
        return;
    }

    let block = Block::default()
        .title(" Reach us ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut lines: Vec<Line> = Vec::new();
    if let Some(ref email) = contact.email {
        lines.push(Line::from(Span::styled(
            format!(" {}", email),
            Theme::contact_info(),
        )));
    }
    if let Some(ref phone) = contact.phone {
        lines.push(Line::from(Span::styled(
            format!(" {}", phone),
            Theme::contact_info(),
        )));
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(ratatui::widgets::Paragraph::new(lines), inner);
}
