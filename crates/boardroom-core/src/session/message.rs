//! Conversation message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::{Agent, ExecutiveRole, USER_AGENT_ID};

/// Delivery state of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Sending,
    Sent,
    Error,
}

/// A single entry in the meeting's message log.
///
/// Messages are immutable once created; the log is append-only and is the
/// sole conversation history fed back into prompt construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Author agent id; `"user"` for the human observer
    pub agent_id: String,
    /// Executive role of the author; `None` for the human observer
    pub role: Option<ExecutiveRole>,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub delivery: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entities: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

impl Message {
    /// Creates a message authored by an executive agent.
    pub fn executive(agent: &Agent, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            agent_id: agent.id.clone(),
            role: Some(agent.role),
            text: text.into(),
            timestamp: Utc::now(),
            delivery: DeliveryStatus::Sent,
            sentiment: None,
            entities: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Creates a message authored by the human observer.
    pub fn from_user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            agent_id: USER_AGENT_ID.to_string(),
            role: None,
            text: text.into(),
            timestamp: Utc::now(),
            delivery: DeliveryStatus::Sent,
            sentiment: None,
            entities: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// The CEO's scripted opening line that seeds the conversation.
    pub fn opening(agent: &Agent, topic: Option<&str>) -> Self {
        let text = match topic {
            Some(topic) => format!("Good morning everyone. Let's discuss {topic}."),
            None => "Good morning everyone. Let's discuss our Q3 strategy and the upcoming \
                     product launch."
                .to_string(),
        };
        Self::executive(agent, text)
    }

    /// Whether the human observer authored this message.
    pub fn is_from_user(&self) -> bool {
        self.agent_id == USER_AGENT_ID
    }
}
