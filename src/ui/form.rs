use crate::app::state::{AppState, Focus};
use crate::form::Field;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // name
            Constraint::Length(1),
            Constraint::Length(3), // email
            Constraint::Length(1),
            Constraint::Length(3), // phone
            Constraint::Length(1),
            Constraint::Length(3), // message
            Constraint::Length(1),
            Constraint::Length(3), // submit
        ])
        .split(area);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        render_field(frame, rows[i * 2], state, field);
        render_error_line(frame, rows[i * 2 + 1], state, field);
    }
    render_submit(frame, rows[8], state);
}

fn render_field(frame: &mut Frame, area: Rect, state: &AppState, field: Field) {
    let focused = state.focus.field() == Some(field);
    let (border_style, title_style) = if focused {
        (Theme::border_focused(), Theme::label_focused())
    } else {
        (Theme::border(), Theme::label())
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .title_style(title_style)
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let input = state.inputs.get(field);
    let paragraph = Paragraph::new(input.text.as_str()).style(Theme::input_text());
    frame.render_widget(paragraph, inner);

    if focused {
        let cursor_col = input.text[..input.cursor].width() as u16;
        let cursor_x = inner.x + cursor_col;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), inner.y));
    }
}

fn render_error_line(frame: &mut Frame, area: Rect, state: &AppState, field: Field) {
    if let Some(message) = state.errors.get(&field) {
        let paragraph = Paragraph::new(format!("  {}", message)).style(Theme::field_error());
        frame.render_widget(paragraph, area);
    }
}

fn render_submit(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == Focus::Submit;
    let submitting = state.status.is_submitting();

    let label = if submitting {
        let frame_char = SPINNER[(state.tick_count as usize) % SPINNER.len()];
        format!("{} Submitting...", frame_char)
    } else {
        "Submit".to_string()
    };

    let label_style = if submitting {
        Theme::submit_disabled()
    } else if focused {
        Theme::submit_ready()
    } else {
        Theme::input_text()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused && !submitting {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(Line::from(Span::styled(label, label_style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
