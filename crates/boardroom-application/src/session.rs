//! Meeting session manager.
//!
//! Serializes all state transitions and publishes whole
//! [`MeetingState`] snapshots over a watch channel, so every frontend
//! re-renders from one consistent value. Transitions are total: they apply
//! the copy-on-write methods from the core aggregate and always succeed.

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use boardroom_core::agent::{Agent, AgentStatus};
use boardroom_core::session::{MeetingState, MeetingStatus, Message};

/// Shared handle to one meeting's state.
#[derive(Clone)]
pub struct MeetingSession {
    state: Arc<watch::Sender<MeetingState>>,
    cancel: CancellationToken,
}

impl MeetingSession {
    /// Creates a session in the `Initializing` state with the given roster.
    pub fn new(agents: Vec<Agent>) -> Self {
        let (tx, _rx) = watch::channel(MeetingState::new(agents));
        Self {
            state: Arc::new(tx),
            cancel: CancellationToken::new(),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> MeetingState {
        self.state.borrow().clone()
    }

    /// Subscribes to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<MeetingState> {
        self.state.subscribe()
    }

    /// The cancellation token tripped by [`MeetingSession::end_meeting`].
    ///
    /// Every scheduled continuation in the driver checks this token, so a
    /// stale timer or in-flight completion can never touch an ended session.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    fn apply(&self, f: impl FnOnce(&MeetingState) -> MeetingState) {
        self.state.send_modify(|state| *state = f(state));
    }

    /// Activates the meeting, optionally recording a topic.
    pub fn start_discussion(&self, topic: Option<String>) {
        self.apply(move |s| s.start_discussion(topic));
        tracing::info!("meeting started");
    }

    /// Appends a message to the log.
    ///
    /// The log is sealed once the meeting has ended: a continuation that
    /// raced past the cancellation token still cannot resurrect the
    /// session.
    pub fn receive_message(&self, message: Message) {
        self.apply(move |s| {
            if s.status == MeetingStatus::Ended {
                tracing::warn!("message dropped: meeting already ended");
                return s.clone();
            }
            s.receive_message(message)
        });
    }

    /// Updates one agent's status.
    pub fn set_agent_status(&self, agent_id: &str, status: AgentStatus) {
        self.apply(|s| s.set_agent_status(agent_id, status));
    }

    /// Toggles transcript visibility.
    pub fn toggle_transcript(&self) {
        self.apply(|s| s.toggle_transcript());
    }

    /// Flips between active and paused.
    pub fn pause_resume(&self) {
        self.apply(|s| s.pause_resume());
        tracing::info!(status = ?self.snapshot().status, "meeting pause toggled");
    }

    /// Ends the meeting and cancels every pending continuation.
    pub fn end_meeting(&self) {
        self.apply(|s| s.end_meeting());
        self.cancel.cancel();
        tracing::info!("meeting ended");
    }

    /// Appends a question from the human observer.
    ///
    /// Returns `false` when the meeting has already ended.
    pub fn ask_question(&self, text: impl Into<String>) -> bool {
        if self.snapshot().status == MeetingStatus::Ended {
            tracing::warn!("question ignored: meeting already ended");
            return false;
        }
        self.receive_message(Message::from_user(text));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_core::agent::default_roster;

    #[test]
    fn transitions_flow_through_the_watch_channel() {
        let session = MeetingSession::new(default_roster());
        let rx = session.subscribe();

        session.start_discussion(Some("Q3".to_string()));
        assert_eq!(rx.borrow().status, MeetingStatus::Active);
        assert_eq!(rx.borrow().discussion_topic.as_deref(), Some("Q3"));

        session.set_agent_status("cto-1", AgentStatus::Speaking);
        assert_eq!(rx.borrow().current_speaker_id.as_deref(), Some("cto-1"));
    }

    #[test]
    fn end_meeting_trips_the_cancellation_token() {
        let session = MeetingSession::new(default_roster());
        let token = session.cancel_token();
        assert!(!token.is_cancelled());
        session.end_meeting();
        assert!(token.is_cancelled());
        assert_eq!(session.snapshot().status, MeetingStatus::Ended);
    }

    #[test]
    fn questions_are_sealed_out_after_the_meeting_ends() {
        let session = MeetingSession::new(default_roster());
        session.start_discussion(None);
        assert!(session.ask_question("how is the runway?"));
        assert_eq!(session.snapshot().messages.len(), 1);

        session.end_meeting();
        assert!(!session.ask_question("one more thing"));
        assert_eq!(session.snapshot().messages.len(), 1);
    }

    #[test]
    fn stale_messages_cannot_resurrect_an_ended_session() {
        let session = MeetingSession::new(default_roster());
        session.start_discussion(None);
        let roster = session.snapshot().agents;
        session.end_meeting();

        // a continuation that raced past the token delivers late
        session.receive_message(Message::executive(&roster[0], "am I too late?"));
        assert_eq!(session.snapshot().messages.len(), 0);
        assert_eq!(session.snapshot().status, MeetingStatus::Ended);
    }
}
