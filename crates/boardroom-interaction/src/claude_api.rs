//! Direct REST client for the Claude messages API.
//!
//! Configuration is passed in explicitly; the only ambient lookup is the
//! optional `from_env` constructor reading `ANTHROPIC_API_KEY`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

use crate::completion::{CompletionBackend, CompletionError, CompletionRequest};

const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const BASE_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Explicit configuration for the Claude client.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub model: String,
}

impl CompletionConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Builds a configuration from environment variables
    /// (`ANTHROPIC_API_KEY`, optional `CLAUDE_MODEL_NAME`).
    pub fn from_env() -> Result<Self, CompletionError> {
        let api_key = env::var("ANTHROPIC_API_KEY").map_err(|_| {
            CompletionError::Transport("ANTHROPIC_API_KEY not set in environment".into())
        })?;
        let model = env::var("CLAUDE_MODEL_NAME").unwrap_or_else(|_| DEFAULT_CLAUDE_MODEL.into());
        Ok(Self::new(api_key, model))
    }
}

/// Completion backend that talks to the Claude HTTP API.
#[derive(Clone)]
pub struct ClaudeApiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl ClaudeApiClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key,
            model: config.model,
        }
    }

    async fn send_request(&self, body: &CreateMessageRequest) -> Result<String, CompletionError> {
        tracing::debug!(model = %self.model, max_tokens = body.max_tokens, "sending completion request");
        let response = self
            .client
            .post(BASE_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| CompletionError::Transport(format!("Claude API request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Claude error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: CreateMessageResponse = response.json().await.map_err(|err| {
            CompletionError::Transport(format!("Failed to parse Claude response: {err}"))
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionBackend for ClaudeApiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let body = CreateMessageRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: request.user_prompt,
            }],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: Some(request.system_prompt),
        };
        self.send_request(&body).await
    }
}

#[derive(Serialize)]
struct CreateMessageRequest {
    model: String,
    messages: Vec<ApiMessage>,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct CreateMessageResponse {
    content: Vec<ContentBlockResponse>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum ContentBlockResponse {
    #[serde(rename = "text")]
    Text { text: String },
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    r#type: String,
    message: String,
}

fn extract_text_response(response: CreateMessageResponse) -> Result<String, CompletionError> {
    response
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlockResponse::Text { text } => Some(text),
        })
        .ok_or(CompletionError::EmptyResponse)
}

fn map_http_error(status: StatusCode, body: String) -> CompletionError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);
    CompletionError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_carries_sampling_params() {
        let body = CreateMessageRequest {
            model: DEFAULT_CLAUDE_MODEL.to_string(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            max_tokens: 200,
            temperature: 0.75,
            system: Some("persona".to_string()),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["max_tokens"], 200);
        assert_eq!(json["system"], "persona");
        assert!((json["temperature"].as_f64().unwrap() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn api_error_body_message_is_extracted() {
        let err = map_http_error(
            StatusCode::TOO_MANY_REQUESTS,
            r#"{"error":{"type":"rate_limit_error","message":"slow down"}}"#.to_string(),
        );
        match err {
            CompletionError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparseable_error_body_is_passed_through() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream exploded".to_string());
        match err {
            CompletionError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_content_maps_to_empty_response() {
        let response = CreateMessageResponse { content: vec![] };
        assert!(matches!(
            extract_text_response(response),
            Err(CompletionError::EmptyResponse)
        ));
    }
}
