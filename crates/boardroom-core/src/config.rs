//! Application configuration.
//!
//! Loaded from `~/.config/boardroom/config.toml` when present; every field
//! has a default so a missing file is not an error. API keys are not kept
//! here - they are passed explicitly into the clients that need them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BoardroomError, Result};

/// Hard cap on the configurable message ceiling.
pub const MAX_MESSAGE_CEILING: usize = 30;

/// Settings for the external completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for CompletionSettings {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 200,
            temperature: 0.75,
        }
    }
}

/// Turn pacing and termination settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingSettings {
    /// Conversation stops once the log reaches this many messages
    pub message_ceiling: usize,
    /// Presentation pacing before an agent starts speaking
    pub thinking_delay_ms: u64,
    /// How long an agent stays in the speaking state after its message
    pub speaking_delay_ms: u64,
    /// Gap between one turn ending and the next beginning
    pub turn_gap_ms: u64,
}

impl Default for MeetingSettings {
    fn default() -> Self {
        Self {
            message_ceiling: 8,
            thinking_delay_ms: 2000,
            speaking_delay_ms: 2000,
            turn_gap_ms: 2000,
        }
    }
}

impl MeetingSettings {
    /// The effective ceiling, clamped to [`MAX_MESSAGE_CEILING`].
    pub fn ceiling(&self) -> usize {
        self.message_ceiling.min(MAX_MESSAGE_CEILING)
    }
}

/// Speech synthesis settings. Synthesis stays disabled unless an endpoint
/// is configured and a key is provided at construction time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardroomConfig {
    pub completion: CompletionSettings,
    pub meeting: MeetingSettings,
    pub speech: SpeechSettings,
}

impl BoardroomConfig {
    /// Returns the boardroom configuration directory
    /// (e.g. `~/.config/boardroom/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join("boardroom"))
            .ok_or_else(|| BoardroomError::config("Cannot find config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default location, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = BoardroomConfig::default();
        assert_eq!(config.meeting.message_ceiling, 8);
        assert!((0.7..=0.8).contains(&config.completion.temperature));
        assert!((150..=250).contains(&config.completion.max_tokens));
        assert!(config.speech.endpoint.is_none());
    }

    #[test]
    fn ceiling_is_clamped() {
        let meeting = MeetingSettings {
            message_ceiling: 500,
            ..Default::default()
        };
        assert_eq!(meeting.ceiling(), MAX_MESSAGE_CEILING);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: BoardroomConfig = toml::from_str(
            r#"
            [meeting]
            message_ceiling = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.meeting.message_ceiling, 12);
        assert_eq!(config.meeting.thinking_delay_ms, 2000);
        assert_eq!(config.completion.max_tokens, 200);
    }

    #[test]
    fn load_from_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[completion]\nmax_tokens = 180\n").unwrap();
        let config = BoardroomConfig::load_from(&path).unwrap();
        assert_eq!(config.completion.max_tokens, 180);
    }
}
