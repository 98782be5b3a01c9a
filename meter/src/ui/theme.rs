//! Color theme and styling for the Thought-O-Meter TUI

use ratatui::style::{Color, Modifier, Style};

use meter_core::{FeedbackKind, Sentiment};

/// UI color theme
#[derive(Debug, Clone)]
pub struct MeterTheme {
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,

    pub story_text: Color,
    pub option: Color,
    pub hint: Color,

    pub correct: Color,
    pub incorrect: Color,
    pub info: Color,
    pub error: Color,

    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,
}

impl Default for MeterTheme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Cyan,

            story_text: Color::White,
            option: Color::Magenta,
            hint: Color::DarkGray,

            correct: Color::Green,
            incorrect: Color::Red,
            info: Color::Gray,
            error: Color::Red,

            positive: Color::Green,
            negative: Color::Red,
            neutral: Color::Gray,
        }
    }
}

impl MeterTheme {
    /// Get style for the big title
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.title)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for story text
    pub fn story_style(&self) -> Style {
        Style::default().fg(self.story_text)
    }

    /// Get style for exercise options
    pub fn option_style(&self) -> Style {
        Style::default().fg(self.option)
    }

    /// Get style for the hint bar
    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint).add_modifier(Modifier::DIM)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Color for a feedback popup
    pub fn feedback_color(&self, kind: FeedbackKind) -> Color {
        match kind {
            FeedbackKind::Correct => self.correct,
            FeedbackKind::Incorrect => self.incorrect,
            FeedbackKind::Info => self.info,
            FeedbackKind::Error => self.error,
        }
    }

    /// Color tag for a sentiment label
    pub fn sentiment_color(&self, sentiment: Sentiment) -> Color {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}
