//! Main application state and logic

use meter_api::MeterApi;
use meter_core::{Navigator, StoryItem};

use crate::ui::theme::MeterTheme;

/// Input modes for the demo slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - navigation and hotkeys (default)
    #[default]
    Normal,
    /// Insert mode - editing the demo sentence
    Insert,
}

/// Main application state
pub struct App {
    pub api: MeterApi,
    pub navigator: Navigator,
    pub theme: MeterTheme,

    // Input state (demo slide)
    pub input_mode: InputMode,
    input_buffer: String,
    cursor_position: usize,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    /// Create a new application in the loading state.
    pub fn new(api: MeterApi) -> Self {
        Self {
            api,
            navigator: Navigator::new(),
            theme: MeterTheme::default(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Whether the current slide is the demo.
    pub fn on_demo_slide(&self) -> bool {
        matches!(self.navigator.current(), Some(StoryItem::Demo { .. }))
    }

    /// Select an exercise option by its 1-based display number.
    pub fn select_option_number(&mut self, number: usize) {
        let Some(StoryItem::Exercise { options, .. }) = self.navigator.current() else {
            return;
        };
        let Some(option) = options.get(number.saturating_sub(1)).cloned() else {
            return;
        };
        self.navigator.select_option(&option);
    }

    /// Enter insert mode to edit the demo sentence.
    pub fn enter_insert_mode(&mut self) {
        if self.on_demo_slide() {
            self.input_mode = InputMode::Insert;
        }
    }

    /// Exit to normal mode
    pub fn enter_normal_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Handle a typed character (unicode-safe)
    pub fn type_char(&mut self, c: char) {
        // Convert cursor position (character index) to byte index
        let byte_pos = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Handle backspace (unicode-safe)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position)
            {
                self.input_buffer
                    .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    /// Handle delete (unicode-safe)
    pub fn delete(&mut self) {
        let char_count = self.input_buffer.chars().count();
        if self.cursor_position < char_count {
            if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position)
            {
                self.input_buffer
                    .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end (unicode-safe)
    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Get the current input buffer
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Get the current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Get the current status message
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meter_core::{seed_story, FeedbackKind};

    fn ready_app() -> App {
        let mut app = App::new(MeterApi::new("http://localhost:0/api"));
        app.navigator.resolve(seed_story());
        app
    }

    #[test]
    fn test_unicode_safe_editing() {
        let mut app = ready_app();
        app.type_char('é');
        app.type_char('🙂');
        app.type_char('!');
        assert_eq!(app.input_buffer(), "é🙂!");

        app.cursor_left();
        app.backspace();
        assert_eq!(app.input_buffer(), "é!");
        assert_eq!(app.cursor_position(), 1);

        app.cursor_home();
        app.delete();
        assert_eq!(app.input_buffer(), "!");
    }

    #[test]
    fn test_select_option_number_maps_to_option() {
        let mut app = ready_app();
        // Walk to Exercise 1 (four story slides first).
        for _ in 0..4 {
            assert!(app.navigator.next());
        }

        app.select_option_number(2); // "Wonderful"
        assert_eq!(
            app.navigator.feedback().unwrap().kind,
            FeedbackKind::Correct
        );
    }

    #[test]
    fn test_out_of_range_option_ignored() {
        let mut app = ready_app();
        for _ in 0..4 {
            assert!(app.navigator.next());
        }

        app.select_option_number(9);
        assert!(app.navigator.feedback().is_none());
    }

    #[test]
    fn test_insert_mode_only_on_demo_slide() {
        let mut app = ready_app();
        app.enter_insert_mode();
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
