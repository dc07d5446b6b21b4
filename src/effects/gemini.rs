//! Google Gemini backend for the solver relay.

use crate::config::SolverConfig;
use crate::effects::error::ServiceError;
use crate::effects::solver::{SolveRequest, SolverBackend};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use tracing::{debug, warn};

const ERROR_BODY_LIMIT: usize = 320;

/// [`SolverBackend`] calling the Gemini `generateContent` API.
#[derive(Clone, Debug)]
pub struct GeminiBackend {
    client: Client,
    config: SolverConfig,
}

impl GeminiBackend {
    /// Build a backend with an HTTP client using the configured timeout.
    ///
    /// Succeeds without an API key; each request then fails instead.
    pub fn new(config: SolverConfig) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        if !config.has_api_key() {
            warn!(model = %config.model, "no API key configured; solver requests will fail");
        }
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// URL of the `generateContent` call, including the key parameter.
    pub fn endpoint_url(&self, api_key: &str) -> Result<Url, ServiceError> {
        let base = self.config.endpoint.trim_end_matches('/');
        let raw = format!("{}/v1beta/models/{}:generateContent", base, self.config.model);
        let mut url = Url::parse(&raw)
            .map_err(|e| ServiceError::new(format!("Invalid AI endpoint {raw}: {e}")))?;
        url.query_pairs_mut().append_pair("key", api_key);
        Ok(url)
    }
}

/// JSON body for a `generateContent` call.
pub fn request_body(request: &SolveRequest) -> Value {
    json!({
        "contents": [
            {
                "parts": [
                    { "text": request.prompt }
                ]
            }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": request.response_schema
        }
    })
}

/// Concatenated text of the first candidate's parts.
pub fn extract_text(body: &Value) -> String {
    body.pointer("/candidates/0/content/parts")
        .and_then(Value::as_array)
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[async_trait]
impl SolverBackend for GeminiBackend {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &SolveRequest) -> Result<String, ServiceError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ServiceError::new("AI solver is not configured: missing API key"))?;
        let url = self.endpoint_url(api_key)?;

        debug!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(url)
            .json(&request_body(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini returned an error status");
            return Err(ServiceError::new(format!(
                "AI service error {}: {}",
                status,
                truncate(&body, ERROR_BODY_LIMIT)
            )));
        }

        let body: Value = response.json().await?;
        let text = extract_text(&body);
        if text.trim().is_empty() {
            return Err(ServiceError::new("No response from AI"));
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend(config: SolverConfig) -> GeminiBackend {
        GeminiBackend::new(config).unwrap()
    }

    #[test]
    fn url_includes_model_and_key() {
        let backend = backend(
            SolverConfig::default()
                .with_endpoint("https://example.test/")
                .with_model("gemini-test"),
        );
        let url = backend.endpoint_url("abc").unwrap();

        assert_eq!(url.path(), "/v1beta/models/gemini-test:generateContent");
        assert_eq!(url.query(), Some("key=abc"));
        assert_eq!(url.host_str(), Some("example.test"));
    }

    #[test]
    fn invalid_endpoint_is_an_error() {
        let backend = backend(SolverConfig::default().with_endpoint("not a url"));
        assert!(backend.endpoint_url("abc").is_err());
    }

    #[test]
    fn body_carries_prompt_and_schema() {
        let request = SolveRequest::for_problem("1 + 1");
        let body = request_body(&request);

        assert_eq!(body["contents"][0]["parts"][0]["text"], request.prompt);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            body["generationConfig"]["responseSchema"],
            request.response_schema
        );
    }

    #[test]
    fn text_is_joined_across_parts() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [ { "text": "{\"a\":" }, { "text": "1}" } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        });
        assert_eq!(extract_text(&body), "{\"a\":1}");
    }

    #[test]
    fn missing_candidates_yield_empty_text() {
        assert_eq!(extract_text(&json!({})), "");
        assert_eq!(extract_text(&json!({ "candidates": [] })), "");
    }

    #[test]
    fn truncate_marks_cut_bodies() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[tokio::test]
    async fn missing_key_fails_at_call_time() {
        let backend = backend(SolverConfig::default());
        let err = backend
            .generate(&SolveRequest::for_problem("1 + 1"))
            .await
            .unwrap_err();

        assert!(err.message().contains("missing API key"));
    }
}
