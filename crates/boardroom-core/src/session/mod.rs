//! Meeting session state.
//!
//! The `MeetingState` aggregate and its copy-on-write transitions, plus the
//! immutable message log entries.

pub mod message;
pub mod model;

pub use message::{DeliveryStatus, Message};
pub use model::{MeetingState, MeetingStatus};
