//! Speech synthesis client.
//!
//! A session-scoped capability object: it is constructed from explicit
//! configuration and reports itself disabled when no endpoint or key is
//! available, so callers can degrade to silence without probing anything
//! ambient. Synthesis failures are never fatal to the meeting.

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use boardroom_core::agent::ExecutiveRole;

/// Voice parameters for one executive role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoiceProfile {
    pub voice: &'static str,
    pub rate: f32,
    pub pitch: f32,
}

/// Returns the voice profile for a role.
pub fn voice_for(role: ExecutiveRole) -> VoiceProfile {
    match role {
        ExecutiveRole::Ceo => VoiceProfile {
            voice: "en-US-AriaNeural",
            rate: 1.0,
            pitch: 1.1,
        },
        ExecutiveRole::Cto => VoiceProfile {
            voice: "en-US-ChristopherNeural",
            rate: 1.0,
            pitch: 0.9,
        },
        ExecutiveRole::Cfo => VoiceProfile {
            voice: "en-US-SaraNeural",
            rate: 0.95,
            pitch: 1.0,
        },
        ExecutiveRole::Hr => VoiceProfile {
            voice: "en-US-GuyNeural",
            rate: 1.05,
            pitch: 1.0,
        },
    }
}

/// Explicit speech configuration; both fields must be present for the
/// capability to come up enabled.
#[derive(Debug, Clone, Default)]
pub struct SpeechConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

/// Errors from the speech endpoint.
#[derive(Error, Debug, Clone)]
pub enum SpeechError {
    /// Synthesis capability is not configured
    #[error("speech synthesis is not available")]
    Disabled,

    #[error("speech request failed: {0}")]
    Transport(String),

    #[error("speech API returned {status}: {message}")]
    Api { status: u16, message: String },
}

struct EnabledSynth {
    client: Client,
    endpoint: String,
    api_key: String,
}

/// Session-scoped speech synthesizer.
pub struct SpeechSynthesizer {
    inner: Option<EnabledSynth>,
}

#[derive(Serialize)]
struct SynthesisRequest<'a> {
    text: &'a str,
    voice: &'static str,
    rate: f32,
    pitch: f32,
}

impl SpeechSynthesizer {
    /// Capability check: enabled only when both endpoint and key exist.
    pub fn from_config(config: SpeechConfig) -> Self {
        let inner = match (config.endpoint, config.api_key) {
            (Some(endpoint), Some(api_key)) => Some(EnabledSynth {
                client: Client::new(),
                endpoint,
                api_key,
            }),
            _ => None,
        };
        Self { inner }
    }

    /// A synthesizer that always reports [`SpeechError::Disabled`].
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Synthesizes a message into audio bytes using the role's voice.
    pub async fn synthesize(
        &self,
        text: &str,
        role: ExecutiveRole,
    ) -> Result<Vec<u8>, SpeechError> {
        let Some(inner) = &self.inner else {
            return Err(SpeechError::Disabled);
        };

        let spoken = humanize(text);
        let profile = voice_for(role);
        let body = SynthesisRequest {
            text: &spoken,
            voice: profile.voice,
            rate: profile.rate,
            pitch: profile.pitch,
        };

        let response = inner
            .client
            .post(&inner.endpoint)
            .bearer_auth(&inner.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| SpeechError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(SpeechError::Api { status, message });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| SpeechError::Transport(err.to_string()))?;
        Ok(bytes.to_vec())
    }
}

static MARKDOWN_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)(^#+\s+|^\s*[-*]\s+|\*\*|\*|`)").expect("regex must compile"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("regex must compile"));

/// Strips markdown artifacts so the synthesized voice does not read
/// formatting characters aloud.
pub fn humanize(text: &str) -> String {
    let stripped = MARKDOWN_NOISE.replace_all(text, "");
    WHITESPACE_RUNS.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_a_distinct_voice() {
        let voices = [
            voice_for(ExecutiveRole::Ceo).voice,
            voice_for(ExecutiveRole::Cto).voice,
            voice_for(ExecutiveRole::Cfo).voice,
            voice_for(ExecutiveRole::Hr).voice,
        ];
        let mut unique = voices.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), voices.len());
    }

    #[test]
    fn capability_check_requires_endpoint_and_key() {
        assert!(!SpeechSynthesizer::from_config(SpeechConfig::default()).is_enabled());
        assert!(!SpeechSynthesizer::from_config(SpeechConfig {
            endpoint: Some("https://tts.example".to_string()),
            api_key: None,
        })
        .is_enabled());
        assert!(SpeechSynthesizer::from_config(SpeechConfig {
            endpoint: Some("https://tts.example".to_string()),
            api_key: Some("key".to_string()),
        })
        .is_enabled());
    }

    #[tokio::test]
    async fn disabled_synthesizer_reports_disabled() {
        let synth = SpeechSynthesizer::disabled();
        assert!(matches!(
            synth.synthesize("hello", ExecutiveRole::Ceo).await,
            Err(SpeechError::Disabled)
        ));
    }

    #[test]
    fn humanize_strips_markdown_noise() {
        let text = "## Update\n- We **shipped** the `gateway`\n- Costs are *down*";
        assert_eq!(humanize(text), "Update We shipped the gateway Costs are down");
    }
}
