//! Layout calculations for the Thought-O-Meter TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Calculate the main layout areas
pub struct AppLayout {
    pub title_area: Rect,
    pub content_area: Rect,
    pub status_bar: Rect,
    pub hint_bar: Rect,
    /// Present only on the demo slide.
    pub input_area: Option<Rect>,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect, with_input: bool) -> Self {
        let mut constraints = vec![
            Constraint::Length(2), // Title + subtitle
            Constraint::Min(8),    // Slide content
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Hint bar
        ];
        if with_input {
            constraints.push(Constraint::Length(3)); // Sentence input
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        Self {
            title_area: chunks[0],
            content_area: chunks[1],
            status_bar: chunks[2],
            hint_bar: chunks[3],
            input_area: with_input.then(|| chunks[4]),
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
