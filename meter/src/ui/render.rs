//! Render orchestration for the Thought-O-Meter TUI

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use meter_core::{Content, Feedback, StoryItem};

use crate::app::{App, InputMode};
use crate::html::fragment_to_lines;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{InputWidget, MessageWidget, SentimentWidget};

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.navigator.content() {
        Content::Loading => render_loading(frame, area),
        Content::Failed(message) => render_error(frame, app, message, area),
        Content::Ready(_) => render_slide(frame, app, area),
    }

    // Feedback popup sits on top of everything
    if let Some(feedback) = app.navigator.feedback() {
        render_feedback_popup(frame, app, feedback, area);
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let popup = centered_rect_fixed(30, 3, area);
    let text = Line::from(Span::styled(
        "Loading the story...",
        Style::default().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(Paragraph::new(vec![Line::from(""), text]), popup);
}

fn render_error(frame: &mut Frame, app: &App, message: &str, area: Rect) {
    let popup = centered_rect_fixed(60, 5, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.error));
    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(app.theme.error)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "Press q to quit",
            Style::default().add_modifier(Modifier::DIM),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}

fn render_slide(frame: &mut Frame, app: &App, area: Rect) {
    let layout = AppLayout::calculate(area, app.on_demo_slide());

    render_title(frame, app, layout.title_area);

    match app.navigator.current() {
        Some(StoryItem::Story { text }) => render_story(frame, app, text, layout.content_area),
        Some(StoryItem::Exercise { text, options, .. }) => {
            render_exercise(frame, app, text, options, layout.content_area);
        }
        Some(StoryItem::Demo { text }) => {
            render_demo(frame, app, text, layout.content_area);
            if let Some(input_area) = layout.input_area {
                render_input(frame, app, input_area);
            }
        }
        None => {
            let empty = Paragraph::new("No story content available.")
                .style(Style::default().add_modifier(Modifier::DIM))
                .alignment(Alignment::Center);
            frame.render_widget(empty, layout.content_area);
        }
    }

    render_status(frame, app, layout.status_bar);
    render_hints(frame, app, layout.hint_bar);
}

/// Render the title bar
fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("The Thought-O-Meter", app.theme.title_style()))
            .alignment(Alignment::Center),
        Line::from(Span::styled(
            "A story about feelings in words!",
            app.theme.hint_style(),
        ))
        .alignment(Alignment::Center),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn content_block(app: &App) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(false))
}

fn render_story(frame: &mut Frame, app: &App, text: &str, area: Rect) {
    let lines = fragment_to_lines(text, app.theme.story_style());
    let paragraph = Paragraph::new(lines)
        .block(content_block(app))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_exercise(frame: &mut Frame, app: &App, text: &str, options: &[String], area: Rect) {
    let mut lines = fragment_to_lines(text, app.theme.story_style());
    lines.push(Line::from(""));
    for (index, option) in options.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("  {}. {option}", index + 1),
            app.theme.option_style(),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(content_block(app))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_demo(frame: &mut Frame, app: &App, text: &str, area: Rect) {
    // Reserve a badge row under the prompt once a verdict exists
    let (text_area, badge_area) = if app.navigator.sentiment().is_some() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(3)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let lines = fragment_to_lines(text, app.theme.story_style());
    let paragraph = Paragraph::new(lines)
        .block(content_block(app))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, text_area);

    if let (Some(badge_area), Some(sentiment)) = (badge_area, app.navigator.sentiment()) {
        frame.render_widget(SentimentWidget::new(sentiment, &app.theme), badge_area);
    }
}

/// Render the sentence input on the demo slide
fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_widget = InputWidget::new(app.input_buffer(), &app.theme)
        .cursor_position(app.cursor_position())
        .active(matches!(app.input_mode, InputMode::Insert));
    frame.render_widget(input_widget, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.status_message() {
        let line = Line::from(Span::styled(
            format!(" {message}"),
            Style::default().add_modifier(Modifier::DIM),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Render the hint bar with context-appropriate keys and the slide counter
fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.navigator.current() {
        Some(StoryItem::Story { .. }) if app.navigator.can_advance() => "n/Enter next  q quit",
        Some(StoryItem::Story { .. }) => "q quit",
        Some(StoryItem::Exercise { options, .. }) => {
            return render_hint_line(
                frame,
                app,
                &format!("1-{} choose an answer  q quit", options.len()),
                area,
            );
        }
        Some(StoryItem::Demo { .. }) => match app.input_mode {
            InputMode::Normal => "i type  Enter analyze  q quit",
            InputMode::Insert => "Esc done  Enter analyze",
        },
        None => "q quit",
    };
    render_hint_line(frame, app, hints, area);
}

fn render_hint_line(frame: &mut Frame, app: &App, hints: &str, area: Rect) {
    let counter = match app.navigator.items() {
        Some(items) if !items.is_empty() => {
            format!("slide {}/{}", app.navigator.index() + 1, items.len())
        }
        _ => String::new(),
    };

    let line = Line::from(Span::styled(
        format!(" {hints}    {counter}"),
        app.theme.hint_style(),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the feedback popup over the current slide
fn render_feedback_popup(frame: &mut Frame, app: &App, feedback: &Feedback, area: Rect) {
    let width = (feedback.text.chars().count() as u16 + 8)
        .max(30)
        .min(area.width);
    let popup_area = centered_rect_fixed(width, 8, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);
    frame.render_widget(MessageWidget::new(feedback, &app.theme), popup_area);
}
