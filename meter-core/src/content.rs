//! The built-in Lily & Robo story.
//!
//! Nine slides: four opening story slides, a word-detective exercise, a
//! neutral-sentence story slide, a fact-or-feeling exercise, a hand-off
//! slide, and the live demo. Slide bodies are HTML fragments; the frontend
//! converts them to styled text at render time.

use crate::item::StoryItem;

fn story(text: &str) -> StoryItem {
    StoryItem::Story {
        text: text.to_string(),
    }
}

/// The initial story content, in narrative order. Used to seed an empty
/// store; never consulted once the store has data.
pub fn seed_story() -> Vec<StoryItem> {
    vec![
        story(
            "<p>Hello there! I'm Lily, and this is my best friend, Robo. One sunny afternoon, \
             we found a strange machine in my grandpa's dusty old workshop. It was big and \
             colorful, with a screen that said \"Thought-O-Meter\".</p>",
        ),
        story(
            "<p>Lily pushed a button and the screen flickered to life. \"Robo, what do you think \
             this machine does?\" she asked. Robo thought for a moment. \"My sensors tell me it's \
             not a toaster or a space rocket. Let's try putting a sentence in!\"</p>\
             <p>They typed: \"I am so happy today!\"</p>\
             <p>The machine whirred and the screen flashed a big, smiley face! It said: \
             <strong>POSITIVE</strong>.</p>\
             <p>Then they typed: \"The rain is making me so sad.\"</p>\
             <p>The machine showed a little rain cloud and said: <strong>NEGATIVE</strong>.</p>",
        ),
        story(
            "<p>Lily gasped. \"It's like it can read the feelings in our words!\"</p>\
             <p>Robo explained, \"Exactly! It's not magic, it's called \
             <strong>Sentiment Analysis</strong>. It's a way for computers to figure out if a \
             sentence is happy (positive), sad (negative), or just so-so (neutral). It does this \
             by looking for special words.\"</p>",
        ),
        story(
            "<p>\"So, happy words like 'love', 'great', and 'fun' make it positive,\" Lily said. \
             \"And words like 'hate', 'boring', or 'difficult' make it negative?\"</p>\
             <p>\"You've got it!\" Robo replied with a happy beep. \"It's a lot like a \
             super-smart word detective.\"</p>",
        ),
        StoryItem::Exercise {
            text: "<p><strong>Exercise 1: Word Detective!</strong></p>\
                   <p>Which of these words would make the Thought-O-Meter show \
                   <strong>POSITIVE</strong>?</p>"
                .to_string(),
            options: vec![
                "Terrible".to_string(),
                "Wonderful".to_string(),
                "Average".to_string(),
                "Bad".to_string(),
            ],
            answer: "Wonderful".to_string(),
        },
        story(
            "<p>They decided to try another one. They typed: \"The sky is blue today.\"</p>\
             <p>The machine just showed a plain blue square and said: <strong>NEUTRAL</strong>.</p>\
             <p>\"That makes sense!\" Lily said. \"It's not a happy or sad thought, just a \
             fact.\"</p>",
        ),
        StoryItem::Exercise {
            text: "<p><strong>Exercise 2: Fact or Feeling?</strong></p>\
                   <p>Which of these sentences is most likely to be <strong>NEUTRAL</strong>?</p>"
                .to_string(),
            options: vec![
                "I love my new shoes.".to_string(),
                "My shoes are red.".to_string(),
                "I hate my old shoes.".to_string(),
                "This is the best day ever.".to_string(),
            ],
            answer: "My shoes are red.".to_string(),
        },
        story(
            "<p>Now that you know the secret of the Thought-O-Meter, it's your turn to be the \
             word detective!</p>\
             <p>Type a sentence into the machine below and see if it can tell if your words are \
             positive, negative, or neutral. Have fun!</p>",
        ),
        StoryItem::Demo {
            text: "<p><strong>Your Own Thought-O-Meter</strong></p>\
                   <p>Type a sentence below and press 'Analyze' to see what the machine \
                   thinks!</p>"
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let items = seed_story();
        assert_eq!(items.len(), 9);

        // The narrative opens with story slides and ends on the demo.
        assert!(items[0].is_story());
        assert!(matches!(items.last(), Some(StoryItem::Demo { .. })));

        let exercises: Vec<_> = items
            .iter()
            .filter(|item| matches!(item, StoryItem::Exercise { .. }))
            .collect();
        assert_eq!(exercises.len(), 2);
    }

    #[test]
    fn test_every_answer_is_an_option() {
        for item in seed_story() {
            if let StoryItem::Exercise { options, answer, .. } = item {
                assert!(options.contains(&answer), "answer {answer:?} not offered");
            }
        }
    }

    #[test]
    fn test_exercise_answers() {
        let items = seed_story();
        let StoryItem::Exercise { answer, .. } = &items[4] else {
            panic!("item 4 should be an exercise");
        };
        assert_eq!(answer, "Wonderful");

        let StoryItem::Exercise { answer, .. } = &items[6] else {
            panic!("item 6 should be an exercise");
        };
        assert_eq!(answer, "My shoes are red.");
    }
}
