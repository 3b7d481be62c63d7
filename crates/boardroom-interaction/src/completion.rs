//! Completion endpoint seam.
//!
//! The conversation driver only knows this trait; the real client talks to
//! the Anthropic API, tests plug in mocks. Calls are at-most-once: no retry,
//! no backoff - a failed call falls through to the role fallback text.

use async_trait::async_trait;
use thiserror::Error;

/// A single completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Errors from the completion endpoint.
#[derive(Error, Debug, Clone)]
pub enum CompletionError {
    /// The request never produced an HTTP response
    #[error("completion request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status
    #[error("completion API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// A success response that carried no usable text
    #[error("completion response contained no text")]
    EmptyResponse,
}

/// Something that can turn a prompt pair into generated text.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError>;
}
