//! Agent domain model.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The executive role an agent holds in the boardroom.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ExecutiveRole {
    #[strum(serialize = "CEO")]
    #[serde(rename = "CEO")]
    Ceo,
    #[strum(serialize = "CTO")]
    #[serde(rename = "CTO")]
    Cto,
    #[strum(serialize = "CFO")]
    #[serde(rename = "CFO")]
    Cfo,
    #[strum(serialize = "HR")]
    #[serde(rename = "HR")]
    Hr,
}

/// Presence state of an agent within the meeting.
///
/// The conversation driver is the only writer; at most one agent is
/// `Speaking` at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "lowercase")]
pub enum AgentStatus {
    Idle,
    Listening,
    Thinking,
    Speaking,
}

/// A simulated executive participating in the meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identifier, e.g. `"ceo-1"`
    pub id: String,
    pub role: ExecutiveRole,
    /// Display name, e.g. "Alexandra Chen"
    pub name: String,
    /// Avatar asset reference for frontends that render one
    pub avatar: String,
    pub status: AgentStatus,
    /// Display color (hex) associated with this agent
    pub color: String,
}

impl Agent {
    /// Returns a copy of this agent with a different status.
    pub fn with_status(&self, status: AgentStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}
