//! Executive agent: a roster entry bound to its persona, its slice of the
//! dataset, and a completion backend.

use std::sync::Arc;

use boardroom_core::agent::Agent;
use boardroom_core::config::CompletionSettings;
use boardroom_core::data::BusinessData;
use boardroom_core::insights::{role_insights, role_projection, RoleInsights, RoleProjection};
use boardroom_core::persona::{profile_for, PersonaProfile};
use boardroom_core::session::Message;

use crate::completion::{CompletionBackend, CompletionError, CompletionRequest};
use crate::prompt::{self, Register};

/// One executive persona ready to take turns in a meeting.
pub struct ExecutiveAgent {
    agent: Agent,
    profile: &'static PersonaProfile,
    insights: RoleInsights,
    projection: RoleProjection,
    backend: Arc<dyn CompletionBackend>,
    settings: CompletionSettings,
}

impl ExecutiveAgent {
    /// Binds a roster agent to its persona tables and dataset slices.
    pub fn new(
        agent: Agent,
        data: &BusinessData,
        backend: Arc<dyn CompletionBackend>,
        settings: CompletionSettings,
    ) -> Self {
        let insights = role_insights(agent.role, data);
        let projection = role_projection(agent.role, data);
        Self {
            profile: profile_for(agent.role),
            agent,
            insights,
            projection,
            backend,
            settings,
        }
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Produces this executive's next line.
    ///
    /// The register follows the most recent human message in the history;
    /// with no human input the room stays businesslike. Single attempt -
    /// callers substitute fallback text on error.
    pub async fn respond(
        &self,
        history: &[Message],
        roster: &[Agent],
        topic: Option<&str>,
    ) -> Result<String, CompletionError> {
        let register = history
            .iter()
            .rev()
            .find(|m| m.is_from_user())
            .map(|m| prompt::detect_register(&m.text))
            .unwrap_or(Register::Business);

        let request = CompletionRequest {
            system_prompt: prompt::system_prompt(
                &self.agent,
                self.profile,
                &self.insights,
                &self.projection,
            ),
            user_prompt: prompt::user_prompt(history, roster, topic, register),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };
        self.backend.complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use boardroom_core::agent::default_roster;
    use boardroom_core::data::sample_business_data;
    use std::sync::Mutex;

    struct RecordingBackend {
        requests: Mutex<Vec<CompletionRequest>>,
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend {
        async fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
            self.requests.lock().unwrap().push(request);
            Ok("I agree with the direction.".to_string())
        }
    }

    #[tokio::test]
    async fn respond_sends_persona_prompt_with_configured_sampling() {
        let backend = Arc::new(RecordingBackend {
            requests: Mutex::new(Vec::new()),
        });
        let data = sample_business_data();
        let roster = default_roster();
        let exec = ExecutiveAgent::new(
            roster[1].clone(),
            &data,
            backend.clone(),
            CompletionSettings::default(),
        );

        let history = vec![Message::opening(&roster[0], None)];
        let text = exec.respond(&history, &roster, None).await.unwrap();
        assert_eq!(text, "I agree with the direction.");

        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].system_prompt.contains("Michael Reynolds"));
        assert!(requests[0].user_prompt.contains("40-60 words"));
        assert_eq!(requests[0].max_tokens, 200);
    }

    #[tokio::test]
    async fn casual_human_message_switches_register() {
        let backend = Arc::new(RecordingBackend {
            requests: Mutex::new(Vec::new()),
        });
        let data = sample_business_data();
        let roster = default_roster();
        let exec = ExecutiveAgent::new(
            roster[0].clone(),
            &data,
            backend.clone(),
            CompletionSettings::default(),
        );

        let history = vec![
            Message::opening(&roster[0], None),
            Message::from_user("hey guys, what's up"),
        ];
        exec.respond(&history, &roster, None).await.unwrap();

        let requests = backend.requests.lock().unwrap();
        assert!(requests[0].user_prompt.contains("20-40 words"));
    }
}
