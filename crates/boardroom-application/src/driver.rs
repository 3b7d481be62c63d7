//! Conversation driver.
//!
//! The turn-taking state machine: round-robin speaker selection (with
//! CEO-first routing after a human question), thinking→speaking→idle
//! pacing, a single completion attempt per turn with deterministic
//! fallback text on failure, and termination at the message ceiling or on
//! cancellation. Every delay and the in-flight completion call are raced
//! against the session's cancellation token, so ending the meeting
//! abandons the loop without letting a stale continuation touch the log.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use boardroom_core::agent::{Agent, AgentStatus, ExecutiveRole};
use boardroom_core::config::{CompletionSettings, MeetingSettings};
use boardroom_core::data::BusinessData;
use boardroom_core::session::{MeetingStatus, Message};
use boardroom_interaction::{fallback_text, CompletionBackend, ExecutiveAgent};

use crate::session::MeetingSession;

/// Drives one meeting's conversation until it terminates.
pub struct ConversationDriver {
    session: MeetingSession,
    executives: Vec<ExecutiveAgent>,
    settings: MeetingSettings,
    cancel: CancellationToken,
}

/// Picks the index of the next speaker in the roster.
///
/// Round-robin from the last executive speaker; a human-authored last
/// message routes the turn to the CEO (roster index 0 if there is none).
fn next_speaker_index(roster: &[Agent], messages: &[Message]) -> usize {
    let ceo_index = roster
        .iter()
        .position(|a| a.role == ExecutiveRole::Ceo)
        .unwrap_or(0);

    match messages.last() {
        None => ceo_index,
        Some(last) if last.is_from_user() => ceo_index,
        Some(last) => roster
            .iter()
            .position(|a| a.id == last.agent_id)
            .map(|pos| (pos + 1) % roster.len())
            .unwrap_or(ceo_index),
    }
}

impl ConversationDriver {
    /// Builds a driver for the session's roster.
    ///
    /// Executives are constructed in roster order, each bound to its
    /// persona tables and dataset slices.
    pub fn new(
        session: MeetingSession,
        data: &BusinessData,
        backend: Arc<dyn CompletionBackend>,
        completion: CompletionSettings,
        settings: MeetingSettings,
    ) -> Self {
        let cancel = session.cancel_token();
        let executives = session
            .snapshot()
            .agents
            .iter()
            .map(|agent| {
                ExecutiveAgent::new(agent.clone(), data, backend.clone(), completion.clone())
            })
            .collect();
        Self {
            session,
            executives,
            settings,
            cancel,
        }
    }

    /// Runs the turn loop to completion.
    ///
    /// Returns when the message ceiling is reached, the meeting ends, or
    /// the session is cancelled.
    pub async fn run(self) {
        let ceiling = self.settings.ceiling();
        loop {
            if self.cancel.is_cancelled() || !self.wait_until_active().await {
                break;
            }

            let snapshot = self.session.snapshot();
            if snapshot.messages.len() >= ceiling {
                tracing::info!(ceiling, "message ceiling reached");
                break;
            }

            let index = next_speaker_index(&snapshot.agents, &snapshot.messages);
            if !self.take_turn(index).await {
                break;
            }
        }
        tracing::debug!("conversation loop stopped");
    }

    /// Runs one agent's thinking→speaking→idle cycle.
    ///
    /// Returns `false` when the loop should stop.
    async fn take_turn(&self, index: usize) -> bool {
        let executive = &self.executives[index];
        let agent_id = executive.agent().id.clone();
        let role = executive.agent().role;

        self.session
            .set_agent_status(&agent_id, AgentStatus::Thinking);
        if !self.sleep_checked(self.settings.thinking_delay_ms).await {
            return false;
        }

        self.session
            .set_agent_status(&agent_id, AgentStatus::Speaking);

        let snapshot = self.session.snapshot();
        let topic = snapshot.discussion_topic.clone();
        let turn_index = snapshot.messages.len();

        // Race the completion call against cancellation so end_meeting()
        // abandons the in-flight request instead of waiting it out.
        let text = tokio::select! {
            _ = self.cancel.cancelled() => return false,
            result = executive.respond(&snapshot.messages, &snapshot.agents, topic.as_deref()) => {
                match result {
                    Ok(text) => text,
                    Err(err) => {
                        tracing::warn!(%role, error = %err, "completion failed, using fallback");
                        fallback_text(role, turn_index).to_string()
                    }
                }
            }
        };

        if self.cancel.is_cancelled() {
            return false;
        }
        self.session
            .receive_message(Message::executive(executive.agent(), text));

        if !self.sleep_checked(self.settings.speaking_delay_ms).await {
            return false;
        }
        self.session.set_agent_status(&agent_id, AgentStatus::Idle);

        self.sleep_checked(self.settings.turn_gap_ms).await
    }

    /// Blocks while the meeting is paused or still initializing.
    ///
    /// Returns `true` once the meeting is active, `false` when it ended or
    /// the session was cancelled.
    async fn wait_until_active(&self) -> bool {
        let mut rx = self.session.subscribe();
        loop {
            let status = rx.borrow_and_update().status;
            match status {
                MeetingStatus::Active => return true,
                MeetingStatus::Ended => return false,
                MeetingStatus::Paused | MeetingStatus::Initializing => {
                    tokio::select! {
                        _ = self.cancel.cancelled() => return false,
                        changed = rx.changed() => {
                            if changed.is_err() {
                                return false;
                            }
                        }
                    }
                }
            }
        }
    }

    /// Cancellable sleep; returns `false` when cancelled.
    async fn sleep_checked(&self, ms: u64) -> bool {
        if ms == 0 {
            return !self.cancel.is_cancelled();
        }
        tokio::select! {
            _ = self.cancel.cancelled() => false,
            _ = tokio::time::sleep(Duration::from_millis(ms)) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use boardroom_core::agent::default_roster;
    use boardroom_core::config::CompletionSettings;
    use boardroom_core::data::sample_business_data;
    use boardroom_interaction::{CompletionError, CompletionRequest};

    struct OkBackend;

    #[async_trait]
    impl CompletionBackend for OkBackend {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            Ok("We should stay the course this quarter.".to_string())
        }
    }

    struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            Err(CompletionError::Transport("connection refused".to_string()))
        }
    }

    struct SlowBackend;

    #[async_trait]
    impl CompletionBackend for SlowBackend {
        async fn complete(&self, _request: CompletionRequest) -> Result<String, CompletionError> {
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok("Slow but steady.".to_string())
        }
    }

    fn fast_settings(ceiling: usize) -> MeetingSettings {
        MeetingSettings {
            message_ceiling: ceiling,
            thinking_delay_ms: 0,
            speaking_delay_ms: 0,
            turn_gap_ms: 0,
        }
    }

    fn seeded_session(topic: Option<&str>) -> MeetingSession {
        let session = MeetingSession::new(default_roster());
        session.start_discussion(topic.map(|t| t.to_string()));
        let roster = session.snapshot().agents;
        session.receive_message(Message::opening(&roster[0], topic));
        session
    }

    fn driver_for(session: &MeetingSession, backend: Arc<dyn CompletionBackend>, ceiling: usize) -> ConversationDriver {
        ConversationDriver::new(
            session.clone(),
            &sample_business_data(),
            backend,
            CompletionSettings::default(),
            fast_settings(ceiling),
        )
    }

    fn roles(session: &MeetingSession) -> Vec<Option<ExecutiveRole>> {
        session.snapshot().messages.iter().map(|m| m.role).collect()
    }

    #[tokio::test]
    async fn round_robin_visits_every_agent_in_order() {
        let session = seeded_session(None);
        driver_for(&session, Arc::new(OkBackend), 8).run().await;

        use ExecutiveRole::*;
        assert_eq!(
            roles(&session),
            vec![
                Some(Ceo),
                Some(Cto),
                Some(Cfo),
                Some(Hr),
                Some(Ceo),
                Some(Cto),
                Some(Cfo),
                Some(Hr)
            ]
        );
    }

    #[tokio::test]
    async fn loop_halts_exactly_at_the_ceiling() {
        let session = seeded_session(None);
        driver_for(&session, Arc::new(OkBackend), 8).run().await;

        let state = session.snapshot();
        assert_eq!(state.messages.len(), 8);
        // current speaker tracks the last appended message
        assert_eq!(
            state.current_speaker_id.as_deref(),
            Some(state.messages.last().unwrap().agent_id.as_str())
        );
    }

    #[tokio::test]
    async fn human_question_routes_the_next_turn_to_the_ceo() {
        let session = seeded_session(None);
        session.ask_question("What is our runway looking like?");
        driver_for(&session, Arc::new(OkBackend), 5).run().await;

        let roles = roles(&session);
        assert_eq!(roles[1], None); // the human question
        assert_eq!(roles[2], Some(ExecutiveRole::Ceo));
        assert_eq!(roles[3], Some(ExecutiveRole::Cto));
        assert_eq!(roles[4], Some(ExecutiveRole::Cfo));
    }

    #[tokio::test]
    async fn failures_produce_schema_conforming_fallback_messages() {
        let session = seeded_session(None);
        driver_for(&session, Arc::new(FailingBackend), 8).run().await;

        let state = session.snapshot();
        assert_eq!(state.messages.len(), 8);
        for message in &state.messages {
            assert!(!message.text.is_empty());
            assert_eq!(
                message.delivery,
                boardroom_core::session::DeliveryStatus::Sent
            );
            // the fallback line matches the author's role table
            if let Some(role) = message.role {
                if message.id != state.messages[0].id {
                    let expected: Vec<&str> =
                        (0..8).map(|i| fallback_text(role, i)).collect();
                    assert!(expected.contains(&message.text.as_str()));
                }
            }
        }
    }

    #[tokio::test]
    async fn end_meeting_stops_the_loop_and_seals_the_log() {
        let session = seeded_session(None);
        let driver = ConversationDriver::new(
            session.clone(),
            &sample_business_data(),
            Arc::new(SlowBackend),
            CompletionSettings::default(),
            fast_settings(30),
        );
        let handle = tokio::spawn(driver.run());

        // let a couple of turns land, then end the meeting mid-flight
        tokio::time::sleep(Duration::from_millis(50)).await;
        session.end_meeting();
        handle.await.unwrap();

        let len_at_end = session.snapshot().messages.len();
        tokio::time::sleep(Duration::from_millis(60)).await;

        let state = session.snapshot();
        assert_eq!(state.status, MeetingStatus::Ended);
        assert_eq!(state.messages.len(), len_at_end);
        assert!(state.agents.iter().all(|a| a.status == AgentStatus::Idle));
        assert_eq!(state.current_speaker_id, None);
    }

    #[tokio::test]
    async fn pause_holds_the_loop_until_resume() {
        let session = seeded_session(None);
        session.pause_resume(); // paused before the driver starts
        let driver = driver_for(&session, Arc::new(OkBackend), 3);
        let handle = tokio::spawn(driver.run());

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(session.snapshot().messages.len(), 1, "no turns while paused");

        session.pause_resume(); // resume
        handle.await.unwrap();
        assert_eq!(session.snapshot().messages.len(), 3);
    }

    #[test]
    fn next_speaker_defaults_to_the_ceo_with_an_empty_log() {
        let roster = default_roster();
        assert_eq!(next_speaker_index(&roster, &[]), 0);
    }

    #[test]
    fn next_speaker_wraps_around_the_roster() {
        let roster = default_roster();
        let last = Message::executive(&roster[3], "closing thought");
        assert_eq!(next_speaker_index(&roster, &[last]), 0);
    }
}
