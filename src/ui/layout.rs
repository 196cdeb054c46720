use crate::config::model::LayoutVariant;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub side: Rect,
    pub status_bar: Rect,
}

/// Four fields at 4 rows each (bordered input + error line) plus the
/// submit button.
const FORM_HEIGHT: u16 = 4 * 4 + 3;

pub fn compute_layout(area: Rect, variant: LayoutVariant) -> AppLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    let (form, side) = match variant {
        LayoutVariant::TwoColumn => {
            let h_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .spacing(1)
                .constraints([
                    Constraint::Min(40),    // Form
                    Constraint::Length(36), // Submissions / contact info
                ])
                .split(content);
            (h_chunks[0], h_chunks[1])
        }
        LayoutVariant::SingleColumn => {
            let v_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(FORM_HEIGHT), // Form
                    Constraint::Min(3),              // Submissions / contact info
                ])
                .split(content);
            (v_chunks[0], v_chunks[1])
        }
    };

    AppLayout {
        header,
        form,
        side,
        status_bar,
    }
}
