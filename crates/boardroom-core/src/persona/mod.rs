//! Persona trait tables.
//!
//! Persona behavior is expressed as data (trait lists, speaking styles,
//! catchphrases) looked up by role, not as a type hierarchy. The prompt
//! builder turns these tables into system prompts.

pub mod model;
pub mod preset;

pub use model::PersonaProfile;
pub use preset::profile_for;
