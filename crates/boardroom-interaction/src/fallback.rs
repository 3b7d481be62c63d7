//! Deterministic role-specific fallback lines.
//!
//! Substituted when the completion endpoint fails so the meeting keeps its
//! rhythm. Selection is by turn index, so a given failure sequence always
//! produces the same transcript.

use boardroom_core::agent::ExecutiveRole;

static CEO_LINES: &[&str] = &[
    "I want to see us focus on increasing market share this quarter.",
    "Our main priority should be launching the new product line on schedule.",
    "Customer retention metrics look good, but we need to improve acquisition.",
    "What are your thoughts on expanding into the European market by Q4?",
];

static CTO_LINES: &[&str] = &[
    "The development team is on track to deliver the new features by next month.",
    "We need to address some technical debt before scaling further.",
    "I recommend we invest more in our cloud infrastructure to support growth.",
    "The AI integration is showing promising results in our initial tests.",
];

static CFO_LINES: &[&str] = &[
    "Our Q2 revenue exceeded projections by 12%, but expenses also increased.",
    "I suggest we allocate more budget to R&D given the competitive landscape.",
    "The current burn rate is sustainable given our runway and growth metrics.",
    "We should consider raising another round of funding in the next 6 months.",
];

static HR_LINES: &[&str] = &[
    "Employee satisfaction scores are up 15% since implementing the new benefits.",
    "We need to address the high turnover in the marketing department.",
    "The new remote work policy has been well-received across all departments.",
    "I recommend expanding our talent acquisition team to support our growth plans.",
];

/// Returns the fallback line for a role at a given turn index.
pub fn fallback_text(role: ExecutiveRole, turn_index: usize) -> &'static str {
    let lines = match role {
        ExecutiveRole::Ceo => CEO_LINES,
        ExecutiveRole::Cto => CTO_LINES,
        ExecutiveRole::Cfo => CFO_LINES,
        ExecutiveRole::Hr => HR_LINES,
    };
    lines[turn_index % lines.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn fallback_is_deterministic_and_non_empty() {
        for role in ExecutiveRole::iter() {
            for index in 0..10 {
                let line = fallback_text(role, index);
                assert!(!line.is_empty());
                assert_eq!(line, fallback_text(role, index));
            }
        }
    }

    #[test]
    fn fallback_cycles_through_the_table() {
        assert_eq!(
            fallback_text(ExecutiveRole::Ceo, 0),
            fallback_text(ExecutiveRole::Ceo, 4)
        );
        assert_ne!(
            fallback_text(ExecutiveRole::Ceo, 0),
            fallback_text(ExecutiveRole::Ceo, 1)
        );
    }
}
