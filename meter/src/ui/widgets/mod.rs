//! Widgets for the Thought-O-Meter TUI

pub mod input;
pub mod message;
pub mod sentiment;

pub use input::InputWidget;
pub use message::MessageWidget;
pub use sentiment::SentimentWidget;
