//! Sentiment result badge for the demo slide

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use meter_core::Sentiment;

use crate::ui::theme::MeterTheme;

/// The machine's verdict, shown as a colored tag. Display only.
pub struct SentimentWidget<'a> {
    sentiment: Sentiment,
    theme: &'a MeterTheme,
}

impl<'a> SentimentWidget<'a> {
    pub fn new(sentiment: Sentiment, theme: &'a MeterTheme) -> Self {
        Self { sentiment, theme }
    }

    fn emoji(&self) -> &'static str {
        match self.sentiment {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😔",
            Sentiment::Neutral => "😐",
        }
    }
}

impl Widget for SentimentWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.theme.sentiment_color(self.sentiment);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(vec![
            Span::raw(self.emoji()),
            Span::raw(" "),
            Span::styled(
                self.sentiment.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center);

        Paragraph::new(line).render(inner, buf);
    }
}
