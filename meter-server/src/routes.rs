//! Request handling for the two API endpoints.
//!
//! Handlers are plain functions from inputs to an [`ApiResponse`]
//! (status + JSON body); the tiny_http plumbing in `main.rs` stays a thin
//! adapter around them.

use serde::Deserialize;
use serde_json::json;

use meter_core::StoryItem;
use meter_store::StoreError;

/// A computed response: HTTP status plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn json(status: u16, value: &serde_json::Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }

    /// A single human-readable message, the shape every failure takes.
    fn message(status: u16, text: &str) -> Self {
        Self::json(status, &json!({ "message": text }))
    }
}

/// `GET /api/story` — the full ordered content list, or 500 on store failure.
pub fn story_response(result: Result<Vec<StoryItem>, StoreError>) -> ApiResponse {
    match result {
        Ok(items) => match serde_json::to_string(&items) {
            Ok(body) => ApiResponse { status: 200, body },
            Err(e) => {
                tracing::error!(error = %e, "failed to encode story items");
                ApiResponse::message(500, "Error fetching story data.")
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "story store read failed");
            ApiResponse::message(500, "Error fetching story data.")
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    #[serde(default)]
    text: Option<String>,
}

/// `POST /api/analyze-sentiment` — score the submitted text.
///
/// 400 when the body is not a JSON object or `text` is missing/empty.
pub fn analyze_response(body: &str) -> ApiResponse {
    let Ok(parsed) = serde_json::from_str::<AnalyzeBody>(body) else {
        return ApiResponse::message(400, "Request body must be a JSON object.");
    };

    let text = parsed.text.unwrap_or_default();
    match meter_core::analyze(&text) {
        Ok(sentiment) => ApiResponse::json(200, &json!({ "sentiment": sentiment })),
        Err(e) => ApiResponse::message(400, &e.to_string()),
    }
}

/// CORS preflight: empty 204, headers are added by the adapter.
pub fn preflight_response() -> ApiResponse {
    ApiResponse {
        status: 204,
        body: String::new(),
    }
}

pub fn not_found_response(path: &str) -> ApiResponse {
    ApiResponse::message(404, &format!("No route for {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use meter_core::seed_story;

    fn body_json(response: &ApiResponse) -> serde_json::Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_story_ok_returns_ordered_array() {
        let response = story_response(Ok(seed_story()));
        assert_eq!(response.status, 200);

        let items: Vec<StoryItem> = serde_json::from_str(&response.body).unwrap();
        assert_eq!(items, seed_story());
    }

    #[test]
    fn test_story_store_failure_is_500() {
        let response = story_response(Err(StoreError::NoResult));
        assert_eq!(response.status, 500);
        assert_eq!(body_json(&response)["message"], "Error fetching story data.");
    }

    #[test]
    fn test_analyze_positive() {
        let response = analyze_response(r#"{"text":"I am happy and love this"}"#);
        assert_eq!(response.status, 200);
        assert_eq!(body_json(&response)["sentiment"], "POSITIVE");
    }

    #[test]
    fn test_analyze_negative() {
        let response = analyze_response(r#"{"text":"This is sad and awful"}"#);
        assert_eq!(body_json(&response)["sentiment"], "NEGATIVE");
    }

    #[test]
    fn test_analyze_neutral_on_no_matches() {
        let response = analyze_response(r#"{"text":"The sky is blue"}"#);
        assert_eq!(body_json(&response)["sentiment"], "NEUTRAL");
    }

    #[test]
    fn test_analyze_neutral_on_balance() {
        let response = analyze_response(r#"{"text":"I love but hate it"}"#);
        assert_eq!(body_json(&response)["sentiment"], "NEUTRAL");
    }

    #[test]
    fn test_analyze_missing_text_is_400() {
        let response = analyze_response("{}");
        assert_eq!(response.status, 400);
        assert_eq!(
            body_json(&response)["message"],
            "Text is required for sentiment analysis."
        );
    }

    #[test]
    fn test_analyze_empty_text_is_400() {
        let response = analyze_response(r#"{"text":""}"#);
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_analyze_malformed_body_is_400() {
        let response = analyze_response("this is not json");
        assert_eq!(response.status, 400);
    }

    #[test]
    fn test_preflight_is_empty_204() {
        let response = preflight_response();
        assert_eq!(response.status, 204);
        assert!(response.body.is_empty());
    }

    #[test]
    fn test_unknown_route_is_404() {
        let response = not_found_response("/api/unknown");
        assert_eq!(response.status, 404);
    }
}
