//! Executive agent roster.
//!
//! The four simulated executives (CEO, CTO, CFO, HR) that participate in a
//! meeting, plus the sentinel identity for the human observer.

pub mod model;
pub mod preset;

pub use model::{Agent, AgentStatus, ExecutiveRole};
pub use preset::{default_roster, USER_AGENT_ID};
