//! Thought-O-Meter core engine.
//!
//! This crate provides:
//! - The story content model (story, exercise, and demo slides)
//! - The rule-based sentiment scorer behind the "machine"
//! - The slide navigator state machine driven by the frontend
//! - The built-in Lily & Robo story used to seed an empty store
//!
//! # Quick Start
//!
//! ```
//! use meter_core::{analyze, Navigator, Sentiment};
//!
//! let mut nav = Navigator::with_items(meter_core::seed_story());
//! assert_eq!(nav.index(), 0);
//! nav.next();
//!
//! assert_eq!(analyze("I am so happy today!").unwrap(), Sentiment::Positive);
//! ```

pub mod content;
pub mod item;
pub mod navigator;
pub mod sentiment;

// Primary public API
pub use content::seed_story;
pub use item::StoryItem;
pub use navigator::{Content, Feedback, FeedbackKind, Navigator};
pub use sentiment::{analyze, ScoreError, Sentiment};
