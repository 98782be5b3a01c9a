//! Feedback popup widget

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use meter_core::{Feedback, FeedbackKind};

use crate::ui::theme::MeterTheme;

/// Centered popup showing grading feedback or an info/error message.
pub struct MessageWidget<'a> {
    feedback: &'a Feedback,
    theme: &'a MeterTheme,
}

impl<'a> MessageWidget<'a> {
    pub fn new(feedback: &'a Feedback, theme: &'a MeterTheme) -> Self {
        Self { feedback, theme }
    }

    fn emoji(&self) -> &'static str {
        match self.feedback.kind {
            FeedbackKind::Correct => "👍",
            FeedbackKind::Incorrect => "👎",
            FeedbackKind::Info | FeedbackKind::Error => "💬",
        }
    }
}

impl Widget for MessageWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.theme.feedback_color(self.feedback.kind);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);

        let text = vec![
            Line::from(""),
            Line::from(self.emoji()).alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(
                self.feedback.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
            Line::from(Span::styled(
                "Got it! (press any key)",
                Style::default().add_modifier(Modifier::DIM),
            ))
            .alignment(Alignment::Center),
        ];

        Paragraph::new(text)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
