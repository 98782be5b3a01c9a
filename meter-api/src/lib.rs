//! Minimal Thought-O-Meter backend client.
//!
//! Two calls, matching the backend's two endpoints:
//! - `GET /story` for the ordered content list
//! - `POST /analyze-sentiment` for the classifier
//!
//! Every failure is terminal for the triggering call; there are no retries.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use meter_core::{Sentiment, StoryItem};

const DEFAULT_BASE_URL: &str = "http://localhost:10000/api";

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Thought-O-Meter API client.
#[derive(Debug, Clone)]
pub struct MeterApi {
    client: reqwest::Client,
    base_url: String,
}

impl MeterApi {
    /// Create a client against the given API base URL (e.g.
    /// `http://localhost:10000/api`). A trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Create a client from the `METER_API_BASE_URL` environment variable,
    /// falling back to the local development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("METER_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full content list, in insertion order.
    pub async fn story(&self) -> Result<Vec<StoryItem>, Error> {
        let response = self
            .client
            .get(format!("{}/story", self.base_url))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    /// Ask the backend to score a sentence.
    pub async fn analyze(&self, text: &str) -> Result<Sentiment, Error> {
        let response = self
            .client
            .post(format!("{}/analyze-sentiment", self.base_url))
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let response = check_status(response).await?;
        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;
        Ok(body.sentiment)
    }
}

/// Turn a non-success status into `Error::Api`, pulling the server's
/// human-readable `message` out of the body when there is one.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .map(|m| m.message)
        .unwrap_or(body);
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    sentiment: Sentiment,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let api = MeterApi::new("http://example.test/api");
        assert_eq!(api.base_url(), "http://example.test/api");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = MeterApi::new("http://example.test/api/");
        assert_eq!(api.base_url(), "http://example.test/api");
    }

    #[test]
    fn test_analyze_request_shape() {
        let body = serde_json::to_value(AnalyzeRequest { text: "I am happy" }).unwrap();
        assert_eq!(body, serde_json::json!({ "text": "I am happy" }));
    }

    #[test]
    fn test_analyze_response_parsing() {
        let body: AnalyzeResponse =
            serde_json::from_str(r#"{"sentiment":"NEGATIVE"}"#).unwrap();
        assert_eq!(body.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_api_message_extraction() {
        let parsed: ApiMessage =
            serde_json::from_str(r#"{"message":"Text is required for sentiment analysis."}"#)
                .unwrap();
        assert_eq!(parsed.message, "Text is required for sentiment analysis.");
    }
}
