//! Story content model.
//!
//! One `StoryItem` is one slide: plain narration, a multiple-choice
//! exercise, or the free-text sentiment demo. The JSON wire format uses a
//! `"type"` tag, matching the document schema the store was seeded with.

use serde::{Deserialize, Serialize};

/// One unit of narrative, exercise, or demo content, displayed in sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoryItem {
    /// Narrative text. The only slide type the reader can advance past.
    Story { text: String },

    /// A multiple-choice question. `answer` is the exact string of the
    /// correct option.
    Exercise {
        text: String,
        options: Vec<String>,
        answer: String,
    },

    /// The free-text sentiment analysis demo.
    Demo { text: String },
}

impl StoryItem {
    /// The slide body as an HTML fragment.
    pub fn text(&self) -> &str {
        match self {
            StoryItem::Story { text }
            | StoryItem::Exercise { text, .. }
            | StoryItem::Demo { text } => text,
        }
    }

    /// Whether this slide is plain narration.
    pub fn is_story(&self) -> bool {
        matches!(self, StoryItem::Story { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_wire_format() {
        let item = StoryItem::Story {
            text: "<p>Hello there!</p>".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "story");
        assert_eq!(json["text"], "<p>Hello there!</p>");
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_exercise_wire_format() {
        let item = StoryItem::Exercise {
            text: "<p>Pick one.</p>".to_string(),
            options: vec!["A".to_string(), "B".to_string()],
            answer: "B".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "exercise");
        assert_eq!(json["options"][1], "B");
        assert_eq!(json["answer"], "B");
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let items = vec![
            StoryItem::Story {
                text: "first".to_string(),
            },
            StoryItem::Demo {
                text: "second".to_string(),
            },
        ];
        let json = serde_json::to_string(&items).unwrap();
        let back: Vec<StoryItem> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, items);
    }

    #[test]
    fn test_unknown_type_rejected() {
        let result: Result<StoryItem, _> =
            serde_json::from_str(r#"{"type":"quiz","text":"nope"}"#);
        assert!(result.is_err());
    }
}
