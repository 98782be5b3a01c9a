//! Rule-based sentiment scorer.
//!
//! The "Thought-O-Meter" itself: a fixed-word-list lookup with integer
//! scoring. Tokens must match a list word exactly after lower-casing —
//! no stemming, no punctuation stripping, so "great!" scores nothing.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static::lazy_static! {
    static ref POSITIVE_WORDS: HashSet<&'static str> = [
        "happy", "love", "great", "awesome", "wonderful", "fun", "excited",
        "amazing", "best", "like", "good", "nice", "kind", "joyful",
        "cheerful", "pleasant", "excellent", "perfect", "beautiful",
    ]
    .into_iter()
    .collect();

    static ref NEGATIVE_WORDS: HashSet<&'static str> = [
        "sad", "hate", "awful", "terrible", "bad", "difficult", "boring",
        "worst", "dislike", "angry", "scared", "tired", "bored", "mean",
        "broken", "ugly", "lazy", "cruel", "selfish", "rude", "tough",
    ]
    .into_iter()
    .collect();
}

/// Errors from sentiment scoring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Text is required for sentiment analysis.")]
    EmptyText,
}

/// The three labels the machine can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// The label as shown on the machine's screen.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        }
    }
}

/// Score free text against the fixed word lists.
///
/// Lower-cases the input, splits on whitespace, and sums +1 per positive
/// word and -1 per negative word. A positive sum is `Positive`, a negative
/// sum is `Negative`, and zero (including no matches at all) is `Neutral`.
///
/// # Errors
///
/// Returns `ScoreError::EmptyText` when the input is empty or whitespace-only;
/// blank input gets an error, never a label.
pub fn analyze(text: &str) -> Result<Sentiment, ScoreError> {
    if text.trim().is_empty() {
        return Err(ScoreError::EmptyText);
    }

    let lowered = text.to_lowercase();
    let mut score: i32 = 0;
    for word in lowered.split_whitespace() {
        if POSITIVE_WORDS.contains(word) {
            score += 1;
        } else if NEGATIVE_WORDS.contains(word) {
            score -= 1;
        }
    }

    Ok(match score.cmp(&0) {
        Ordering::Greater => Sentiment::Positive,
        Ordering::Less => Sentiment::Negative,
        Ordering::Equal => Sentiment::Neutral,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_outweighs() {
        assert_eq!(analyze("I am happy and love this").unwrap(), Sentiment::Positive);
    }

    #[test]
    fn test_negative_outweighs() {
        assert_eq!(analyze("This is sad and awful").unwrap(), Sentiment::Negative);
    }

    #[test]
    fn test_no_matches_is_neutral() {
        assert_eq!(analyze("The sky is blue").unwrap(), Sentiment::Neutral);
    }

    #[test]
    fn test_balanced_score_is_neutral() {
        assert_eq!(analyze("I love but hate it").unwrap(), Sentiment::Neutral);
    }

    #[test]
    fn test_empty_text_is_an_error() {
        assert_eq!(analyze(""), Err(ScoreError::EmptyText));
        assert_eq!(analyze("   \t\n"), Err(ScoreError::EmptyText));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(analyze("HAPPY").unwrap(), Sentiment::Positive);
        assert_eq!(analyze("Terrible").unwrap(), Sentiment::Negative);
    }

    #[test]
    fn test_no_partial_matching() {
        // Trailing punctuation prevents an exact match.
        assert_eq!(analyze("great!").unwrap(), Sentiment::Neutral);
        // Substrings do not count either.
        assert_eq!(analyze("unhappy greatness").unwrap(), Sentiment::Neutral);
    }

    #[test]
    fn test_repeated_words_accumulate() {
        assert_eq!(analyze("sad sad happy").unwrap(), Sentiment::Negative);
    }

    #[test]
    fn test_wire_labels() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"POSITIVE\""
        );
        let parsed: Sentiment = serde_json::from_str("\"NEUTRAL\"").unwrap();
        assert_eq!(parsed, Sentiment::Neutral);
    }
}
