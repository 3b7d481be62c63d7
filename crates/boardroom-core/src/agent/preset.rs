//! Default executive roster.

use super::model::{Agent, AgentStatus, ExecutiveRole};

/// Sentinel agent id for the human observer.
///
/// The human never appears in the turn-taking roster; messages carrying this
/// id route the next turn to the CEO.
pub const USER_AGENT_ID: &str = "user";

/// Returns the default four-executive roster.
pub fn default_roster() -> Vec<Agent> {
    vec![
        Agent {
            id: "ceo-1".to_string(),
            role: ExecutiveRole::Ceo,
            name: "Alexandra Chen".to_string(),
            avatar: "avatar-ceo.png".to_string(),
            status: AgentStatus::Idle,
            color: "#0A84FF".to_string(),
        },
        Agent {
            id: "cto-1".to_string(),
            role: ExecutiveRole::Cto,
            name: "Michael Reynolds".to_string(),
            avatar: "avatar-cto.png".to_string(),
            status: AgentStatus::Idle,
            color: "#30D158".to_string(),
        },
        Agent {
            id: "cfo-1".to_string(),
            role: ExecutiveRole::Cfo,
            name: "Sarah Williams".to_string(),
            avatar: "avatar-cfo.png".to_string(),
            status: AgentStatus::Idle,
            color: "#FFD60A".to_string(),
        },
        Agent {
            id: "hr-1".to_string(),
            role: ExecutiveRole::Hr,
            name: "David Martinez".to_string(),
            avatar: "avatar-hr.png".to_string(),
            status: AgentStatus::Idle,
            color: "#BF5AF2".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_covers_every_role_once() {
        let roster = default_roster();
        assert_eq!(roster.len(), 4);
        for role in [
            ExecutiveRole::Ceo,
            ExecutiveRole::Cto,
            ExecutiveRole::Cfo,
            ExecutiveRole::Hr,
        ] {
            assert_eq!(roster.iter().filter(|a| a.role == role).count(), 1);
        }
    }

    #[test]
    fn user_sentinel_is_not_in_roster() {
        assert!(default_roster().iter().all(|a| a.id != USER_AGENT_ID));
    }
}
