//! Meeting state aggregate.
//!
//! All transitions are whole-object replacements: each method takes `&self`
//! and returns the next snapshot, so frontends can re-render
//! deterministically from a single value and no caller ever observes a
//! half-applied update.

use serde::{Deserialize, Serialize};

use super::message::Message;
use crate::agent::{Agent, AgentStatus};

/// Lifecycle status of a meeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingStatus {
    Initializing,
    Active,
    Paused,
    Ended,
}

/// The single mutable aggregate describing a meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingState {
    pub status: MeetingStatus,
    pub agents: Vec<Agent>,
    pub messages: Vec<Message>,
    pub current_speaker_id: Option<String>,
    pub transcript_visible: bool,
    pub discussion_topic: Option<String>,
}

impl MeetingState {
    /// Creates a fresh meeting in the `Initializing` state.
    pub fn new(agents: Vec<Agent>) -> Self {
        Self {
            status: MeetingStatus::Initializing,
            agents,
            messages: Vec::new(),
            current_speaker_id: None,
            transcript_visible: true,
            discussion_topic: None,
        }
    }

    /// Activates the meeting, optionally recording the discussion topic.
    pub fn start_discussion(&self, topic: Option<String>) -> Self {
        let mut next = self.clone();
        next.status = MeetingStatus::Active;
        if topic.is_some() {
            next.discussion_topic = topic;
        }
        next
    }

    /// Appends a message to the log and points the current speaker at its
    /// author. The log never shrinks.
    pub fn receive_message(&self, message: Message) -> Self {
        let mut next = self.clone();
        next.current_speaker_id = Some(message.agent_id.clone());
        next.messages.push(message);
        next
    }

    /// Updates one agent's status.
    ///
    /// Setting an agent to `Speaking` demotes any other speaker to `Idle`,
    /// so at most one agent speaks at a time.
    pub fn set_agent_status(&self, agent_id: &str, status: AgentStatus) -> Self {
        let mut next = self.clone();
        for agent in &mut next.agents {
            if agent.id == agent_id {
                agent.status = status;
            } else if status == AgentStatus::Speaking && agent.status == AgentStatus::Speaking {
                agent.status = AgentStatus::Idle;
            }
        }
        if status == AgentStatus::Speaking && next.agents.iter().any(|a| a.id == agent_id) {
            next.current_speaker_id = Some(agent_id.to_string());
        }
        next
    }

    /// Toggles transcript visibility.
    pub fn toggle_transcript(&self) -> Self {
        let mut next = self.clone();
        next.transcript_visible = !next.transcript_visible;
        next
    }

    /// Flips between `Active` and `Paused`; any other status is unchanged.
    pub fn pause_resume(&self) -> Self {
        let mut next = self.clone();
        next.status = match next.status {
            MeetingStatus::Active => MeetingStatus::Paused,
            MeetingStatus::Paused => MeetingStatus::Active,
            other => other,
        };
        next
    }

    /// Ends the meeting: terminal status, all agents idle, no speaker.
    /// Accepted from any state.
    pub fn end_meeting(&self) -> Self {
        let mut next = self.clone();
        next.status = MeetingStatus::Ended;
        next.current_speaker_id = None;
        for agent in &mut next.agents {
            agent.status = AgentStatus::Idle;
        }
        next
    }

    /// Looks up a roster agent by id.
    pub fn agent(&self, agent_id: &str) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == agent_id)
    }

    /// Number of agents currently marked `Speaking`.
    pub fn speaking_count(&self) -> usize {
        self.agents
            .iter()
            .filter(|a| a.status == AgentStatus::Speaking)
            .count()
    }
}
