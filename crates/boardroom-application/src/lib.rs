//! Boardroom application layer.
//!
//! The conversation driver, the session state manager that publishes
//! meeting snapshots, dataset intake, and the transcript/summary exports.

pub mod dataset;
pub mod driver;
pub mod export;
pub mod session;
pub mod summary;

pub use dataset::load_dataset;
pub use driver::ConversationDriver;
pub use session::MeetingSession;
pub use summary::{DecisionSummary, SummaryGenerator};
