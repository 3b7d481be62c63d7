//! External interaction layer.
//!
//! Everything that turns domain state into text or audio via an external
//! collaborator: prompt construction, the completion API client behind the
//! [`completion::CompletionBackend`] seam, the speech synthesis capability,
//! and the deterministic fallback lines used when the completion endpoint
//! fails.

pub mod agent;
pub mod claude_api;
pub mod completion;
pub mod fallback;
pub mod prompt;
pub mod speech;

pub use agent::ExecutiveAgent;
pub use claude_api::{ClaudeApiClient, CompletionConfig};
pub use completion::{CompletionBackend, CompletionError, CompletionRequest};
pub use fallback::fallback_text;
pub use speech::{SpeechConfig, SpeechError, SpeechSynthesizer};
