//! Transcript export.
//!
//! One entry per message, `[timestamp] Name (Role): text`, entries
//! separated by blank lines, written to `meeting-transcript-<date>.txt`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use boardroom_core::session::{MeetingState, Message};
use boardroom_core::Result;

/// Display name and role for a message author.
///
/// The human observer has no roster entry and renders as `You (Observer)`.
pub fn author_of(message: &Message, state: &MeetingState) -> (String, String) {
    if message.is_from_user() {
        return ("You".to_string(), "Observer".to_string());
    }
    match state.agent(&message.agent_id) {
        Some(agent) => (agent.name.clone(), agent.role.to_string()),
        None => ("Unknown".to_string(), "Unknown".to_string()),
    }
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Formats the whole message log as a plain-text transcript.
pub fn format_transcript(state: &MeetingState) -> String {
    state
        .messages
        .iter()
        .map(|message| {
            let (name, role) = author_of(message, state);
            format!(
                "[{}] {} ({}): {}",
                format_timestamp(&message.timestamp),
                name,
                role,
                message.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// The dated transcript filename, e.g. `meeting-transcript-2026-08-06.txt`.
pub fn transcript_filename() -> String {
    format!("meeting-transcript-{}.txt", Utc::now().format("%Y-%m-%d"))
}

/// Writes the transcript into `dir` and returns the file path.
pub fn write_transcript(dir: &Path, state: &MeetingState) -> Result<PathBuf> {
    let path = dir.join(transcript_filename());
    std::fs::write(&path, format_transcript(state))?;
    tracing::info!(path = %path.display(), "transcript exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_core::agent::default_roster;
    use boardroom_core::session::MeetingState;
    use regex::Regex;

    fn meeting_with_messages() -> MeetingState {
        let roster = default_roster();
        let mut state = MeetingState::new(roster.clone()).start_discussion(None);
        state = state.receive_message(Message::opening(&roster[0], None));
        state = state.receive_message(Message::executive(
            &roster[1],
            "The platform is holding up well.",
        ));
        state = state.receive_message(Message::from_user("what about costs?"));
        state = state.receive_message(Message::executive(
            &roster[2],
            "Margins are at thirty percent.",
        ));
        state
    }

    /// Parses an exported transcript back into (name, role, text) entries.
    fn parse_transcript(transcript: &str) -> Vec<(String, String, String)> {
        let line = Regex::new(r"^\[[^\]]+\] (.+) \(([^)]+)\): (.*)$").unwrap();
        transcript
            .split("\n\n")
            .map(|entry| {
                let caps = line.captures(entry).expect("entry must match the format");
                (caps[1].to_string(), caps[2].to_string(), caps[3].to_string())
            })
            .collect()
    }

    #[test]
    fn transcript_round_trips_names_roles_and_text_in_order() {
        let state = meeting_with_messages();
        let parsed = parse_transcript(&format_transcript(&state));

        assert_eq!(parsed.len(), state.messages.len());
        for (entry, message) in parsed.iter().zip(&state.messages) {
            let (name, role) = author_of(message, &state);
            assert_eq!(entry.0, name);
            assert_eq!(entry.1, role);
            assert_eq!(entry.2, message.text);
        }
        assert_eq!(parsed[2].0, "You");
        assert_eq!(parsed[2].1, "Observer");
        assert_eq!(parsed[3].1, "CFO");
    }

    #[test]
    fn write_transcript_creates_a_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = meeting_with_messages();
        let path = write_transcript(dir.path(), &state).unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("meeting-transcript-"));
        assert!(name.ends_with(".txt"));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Alexandra Chen (CEO)"));
    }
}
