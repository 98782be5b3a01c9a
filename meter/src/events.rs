//! Event handling for the Thought-O-Meter TUI

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use meter_core::Content;

use crate::app::{App, InputMode};

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
    /// Send this sentence to the classifier.
    Analyze(String),
}

/// Handle a terminal event
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Global shortcut (always works)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    // An open popup swallows everything: any key dismisses it, which also
    // applies the auto-advance rule for correct answers.
    if app.navigator.feedback().is_some() {
        app.navigator.dismiss_feedback();
        app.enter_normal_mode();
        return EventResult::NeedsRedraw;
    }

    // Before content is ready only quitting makes sense
    if !matches!(app.navigator.content(), Content::Ready(_)) {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,
            _ => EventResult::Continue,
        };
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Insert => handle_insert_mode(app, key),
    }
}

/// Handle keys in NORMAL mode (navigation and hotkeys)
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') => EventResult::Quit,

        // Advance through narration
        KeyCode::Char('n') | KeyCode::Enter | KeyCode::Right => {
            if app.on_demo_slide() {
                return try_analyze(app);
            }
            app.navigator.next();
            EventResult::NeedsRedraw
        }

        // Exercise option selection (1-9 keys)
        KeyCode::Char(c @ '1'..='9') => {
            let number = c.to_digit(10).unwrap() as usize;
            app.select_option_number(number);
            EventResult::NeedsRedraw
        }

        // Edit the demo sentence
        KeyCode::Char('i') => {
            app.enter_insert_mode();
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Handle keys in INSERT mode (demo sentence editing)
fn handle_insert_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        // Exit insert mode
        KeyCode::Esc => {
            app.enter_normal_mode();
            EventResult::NeedsRedraw
        }

        // Submit for analysis
        KeyCode::Enter => try_analyze(app),

        // Input editing
        KeyCode::Left => {
            app.cursor_left();
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Home => {
            app.cursor_home();
            EventResult::NeedsRedraw
        }
        KeyCode::End => {
            app.cursor_end();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Delete => {
            app.delete();
            EventResult::NeedsRedraw
        }

        // Character input
        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

/// Gate the analyze request on non-blank input; blank input pops the info
/// message instead of hitting the backend.
fn try_analyze(app: &mut App) -> EventResult {
    let input = app.input_buffer().to_string();
    if app.navigator.request_analyze(&input) {
        EventResult::Analyze(input)
    } else {
        EventResult::NeedsRedraw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meter_api::MeterApi;
    use meter_core::{seed_story, FeedbackKind, StoryItem};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ready_app() -> App {
        let mut app = App::new(MeterApi::new("http://localhost:0/api"));
        app.navigator.resolve(seed_story());
        app
    }

    fn demo_app() -> App {
        let mut app = App::new(MeterApi::new("http://localhost:0/api"));
        app.navigator.resolve(vec![StoryItem::Demo {
            text: "<p>Try it.</p>".to_string(),
        }]);
        app
    }

    #[test]
    fn test_quit_keys() {
        let mut app = ready_app();
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);

        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&mut app, ctrl_c), EventResult::Quit);
    }

    #[test]
    fn test_enter_advances_story() {
        let mut app = ready_app();
        handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.navigator.index(), 1);
    }

    #[test]
    fn test_digit_grades_exercise_and_popup_swallows_keys() {
        let mut app = ready_app();
        for _ in 0..4 {
            app.navigator.next();
        }

        handle_event(&mut app, key(KeyCode::Char('1'))); // "Terrible"
        assert_eq!(
            app.navigator.feedback().unwrap().kind,
            FeedbackKind::Incorrect
        );

        // With the popup open, 'q' dismisses instead of quitting.
        let result = handle_event(&mut app, key(KeyCode::Char('q')));
        assert_eq!(result, EventResult::NeedsRedraw);
        assert!(app.navigator.feedback().is_none());
        assert_eq!(app.navigator.index(), 4);
    }

    #[test]
    fn test_correct_answer_dismiss_advances() {
        let mut app = ready_app();
        for _ in 0..4 {
            app.navigator.next();
        }

        handle_event(&mut app, key(KeyCode::Char('2'))); // "Wonderful"
        handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.navigator.index(), 5);
    }

    #[test]
    fn test_blank_analyze_shows_info_instead_of_request() {
        let mut app = demo_app();
        let result = handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(result, EventResult::NeedsRedraw);
        assert_eq!(app.navigator.feedback().unwrap().kind, FeedbackKind::Info);
    }

    #[test]
    fn test_typed_sentence_is_submitted() {
        let mut app = demo_app();
        handle_event(&mut app, key(KeyCode::Char('i')));
        assert_eq!(app.input_mode, InputMode::Insert);

        for c in "happy".chars() {
            handle_event(&mut app, key(KeyCode::Char(c)));
        }
        let result = handle_event(&mut app, key(KeyCode::Enter));
        assert_eq!(result, EventResult::Analyze("happy".to_string()));
    }

    #[test]
    fn test_loading_state_only_quits() {
        let mut app = App::new(MeterApi::new("http://localhost:0/api"));
        assert_eq!(
            handle_event(&mut app, key(KeyCode::Enter)),
            EventResult::Continue
        );
        assert_eq!(handle_event(&mut app, key(KeyCode::Char('q'))), EventResult::Quit);
    }
}
