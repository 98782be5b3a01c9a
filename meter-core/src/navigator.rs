//! Slide navigator state machine.
//!
//! Tracks the client's position in the content list and the transient UI
//! state around it: the feedback popup, and the last sentiment shown by the
//! demo. The navigator is pure state — fetching content and calling the
//! analyze endpoint are the frontend's job; the results are fed back in
//! through [`Navigator::resolve`], [`Navigator::set_sentiment`], and friends.

use crate::item::StoryItem;
use crate::sentiment::Sentiment;

/// Where the content list currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// The startup fetch has not completed yet.
    Loading,
    /// The startup fetch failed; the message is shown as a banner.
    Failed(String),
    /// Content arrived, in insertion order.
    Ready(Vec<StoryItem>),
}

/// What kind of popup message is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Correct,
    Incorrect,
    Info,
    Error,
}

/// A popup message with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub text: String,
}

impl Feedback {
    fn new(kind: FeedbackKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Client-side slide navigation state machine.
#[derive(Debug)]
pub struct Navigator {
    content: Content,
    index: usize,
    feedback: Option<Feedback>,
    sentiment: Option<Sentiment>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start in the loading state, before the content fetch completes.
    pub fn new() -> Self {
        Self {
            content: Content::Loading,
            index: 0,
            feedback: None,
            sentiment: None,
        }
    }

    /// Start directly on a fetched content list.
    pub fn with_items(items: Vec<StoryItem>) -> Self {
        let mut nav = Self::new();
        nav.resolve(items);
        nav
    }

    /// Record the fetched content list.
    pub fn resolve(&mut self, items: Vec<StoryItem>) {
        self.content = Content::Ready(items);
        self.index = 0;
    }

    /// Record a failed content fetch. Terminal; there are no retries.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.content = Content::Failed(message.into());
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The fetched items, if the fetch has completed.
    pub fn items(&self) -> Option<&[StoryItem]> {
        match &self.content {
            Content::Ready(items) => Some(items),
            _ => None,
        }
    }

    /// The slide currently displayed.
    pub fn current(&self) -> Option<&StoryItem> {
        self.items().and_then(|items| items.get(self.index))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the current slide is the final one.
    pub fn is_last(&self) -> bool {
        match self.items() {
            Some(items) => self.index + 1 >= items.len(),
            None => true,
        }
    }

    /// "Next" is only offered on story slides that are not the last item.
    pub fn can_advance(&self) -> bool {
        self.current().is_some_and(StoryItem::is_story) && !self.is_last()
    }

    /// Advance to the next slide. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if self.can_advance() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Grade a selected exercise option against the slide's answer.
    ///
    /// Exact string comparison. Ignored when the current slide is not an
    /// exercise or a popup is already showing.
    pub fn select_option(&mut self, option: &str) {
        if self.feedback.is_some() {
            return;
        }
        let Some(StoryItem::Exercise { answer, .. }) = self.current() else {
            return;
        };
        self.feedback = Some(if option == answer {
            Feedback::new(FeedbackKind::Correct, "Correct! You're a great detective!")
        } else {
            Feedback::new(FeedbackKind::Incorrect, "Not quite, try again!")
        });
    }

    /// Gate a demo analyze request on non-blank input.
    ///
    /// Blank input shows an info popup and returns `false`; the frontend
    /// should only call the analyze endpoint when this returns `true`.
    pub fn request_analyze(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            self.feedback = Some(Feedback::new(
                FeedbackKind::Info,
                "Please type a sentence first.",
            ));
            false
        } else {
            true
        }
    }

    /// Record the label returned by the analyze endpoint.
    pub fn set_sentiment(&mut self, sentiment: Sentiment) {
        self.sentiment = Some(sentiment);
    }

    /// Record a failed analyze call.
    pub fn analysis_failed(&mut self) {
        self.feedback = Some(Feedback::new(
            FeedbackKind::Error,
            "An error occurred during sentiment analysis.",
        ));
    }

    pub fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Dismiss the popup. Dismissing "correct" feedback auto-advances to the
    /// next slide; dismissing any other kind stays put.
    pub fn dismiss_feedback(&mut self) {
        if let Some(feedback) = self.feedback.take() {
            if feedback.kind == FeedbackKind::Correct && !self.is_last() {
                self.index += 1;
            }
        }
    }
}
