//! UI module for the Thought-O-Meter TUI

pub mod layout;
pub mod render;
pub mod theme;
pub mod widgets;
