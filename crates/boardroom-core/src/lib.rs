//! Boardroom domain layer.
//!
//! Pure domain types and logic for the simulated executive boardroom:
//! the business dataset and its role-scoped insight projections, the
//! executive roster and persona tables, the meeting state aggregate with
//! copy-on-write transitions, and application configuration. No I/O beyond
//! config loading; the driver, external clients, and frontends live in the
//! sibling crates.

pub mod agent;
pub mod config;
pub mod data;
pub mod error;
pub mod insights;
pub mod persona;
pub mod session;

pub use error::{BoardroomError, Result};
