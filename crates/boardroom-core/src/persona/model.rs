//! Persona profile model.

use crate::agent::ExecutiveRole;

/// Static description of how an executive persona behaves.
///
/// Consumed by the prompt builder; the fields are prompt material, not
/// runtime state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaProfile {
    pub role: ExecutiveRole,
    /// Full title, e.g. "Chief Executive Officer"
    pub title: &'static str,
    /// Personality traits woven into the system prompt
    pub traits: &'static [&'static str],
    /// Register and delivery the persona should keep to
    pub speaking_style: &'static str,
    /// Topics the persona keeps steering toward
    pub focus_areas: &'static [&'static str],
    /// Phrases the persona is allowed to fall back on
    pub catchphrases: &'static [&'static str],
}
