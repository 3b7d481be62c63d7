//! Decision summary.
//!
//! Builds the end-of-meeting recommendation: decisive statements are
//! scanned out of the transcript, the completion endpoint is asked for a
//! structured JSON summary, and the response is parsed defensively - any
//! failure falls back to a canned structured summary so this path never
//! fails.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use boardroom_core::config::CompletionSettings;
use boardroom_core::session::MeetingState;
use boardroom_core::Result;
use boardroom_interaction::{CompletionBackend, CompletionRequest};

use crate::export::author_of;

/// One row of the recommended action plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub action: String,
    pub owner: String,
    pub timeline: String,
}

/// The structured meeting summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecisionSummary {
    pub executive_summary: String,
    /// Keyed by role label (CEO/CFO/CTO/HR)
    pub agent_insights: BTreeMap<String, String>,
    pub risk_assessment: String,
    pub action_plan: Vec<ActionItem>,
    pub follow_up_suggestion: String,
    pub final_message: String,
}

/// Statements that sound like decisions.
static DECISIVE_KEYWORDS: &[&str] = &[
    "decided",
    "agreed",
    "concluded",
    "determined",
    "resolved",
    "approved",
    "confirmed",
    "finalized",
    "selected",
    "chosen",
    "we will",
    "we should",
    "let's",
    "we need to",
    "we must",
];

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("regex"));

/// Scans the message log for sentences that read as decisions, attributed
/// to their author. A keyword heuristic, not NLP.
pub fn extract_decisions(state: &MeetingState) -> Vec<String> {
    let mut decisions = Vec::new();
    for message in &state.messages {
        if message.is_from_user() {
            continue;
        }
        let (name, role) = author_of(message, state);
        for sentence in SENTENCE_SPLIT.split(&message.text) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }
            let lower = sentence.to_lowercase();
            if DECISIVE_KEYWORDS.iter().any(|k| lower.contains(k)) {
                decisions.push(format!("{name} ({role}): \"{sentence}\""));
            }
        }
    }
    decisions
}

static JSON_OBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").expect("regex"));

/// Pulls the outermost JSON object out of a completion response that may
/// be wrapped in prose or code fences.
fn extract_json(text: &str) -> Option<&str> {
    JSON_OBJECT.find(text).map(|m| m.as_str())
}

/// Parses a completion response into a summary; `None` when the response
/// has no usable JSON.
pub fn parse_summary(text: &str) -> Option<DecisionSummary> {
    let json = extract_json(text)?;
    let summary: DecisionSummary = serde_json::from_str(json).ok()?;
    if summary.executive_summary.trim().is_empty() {
        return None;
    }
    Some(summary)
}

/// The canned structured summary used when generation or parsing fails.
pub fn fallback_summary(topic: Option<&str>) -> DecisionSummary {
    let topic = topic.unwrap_or("business performance");
    let mut agent_insights = BTreeMap::new();
    agent_insights.insert(
        "CEO".to_string(),
        "Strategic alignment with company goals is critical.".to_string(),
    );
    agent_insights.insert(
        "CFO".to_string(),
        "Budget considerations must be prioritized.".to_string(),
    );
    agent_insights.insert(
        "CTO".to_string(),
        "Technical infrastructure changes will be required.".to_string(),
    );
    agent_insights.insert(
        "HR".to_string(),
        "Workforce planning needs attention.".to_string(),
    );
    DecisionSummary {
        executive_summary: format!("The board has concluded the discussion on {topic}."),
        agent_insights,
        risk_assessment: "Several risks were identified that require further analysis."
            .to_string(),
        action_plan: vec![
            ActionItem {
                action: "Review detailed financial projections".to_string(),
                owner: "CFO".to_string(),
                timeline: "Next 2 weeks".to_string(),
            },
            ActionItem {
                action: "Assess technical requirements".to_string(),
                owner: "CTO".to_string(),
                timeline: "Next 3 weeks".to_string(),
            },
            ActionItem {
                action: "Develop talent acquisition plan".to_string(),
                owner: "HR".to_string(),
                timeline: "Next month".to_string(),
            },
            ActionItem {
                action: "Finalize strategic roadmap".to_string(),
                owner: "CEO".to_string(),
                timeline: "Next quarter".to_string(),
            },
        ],
        follow_up_suggestion: "A follow-up meeting to review progress is recommended in 30 days."
            .to_string(),
        final_message: "This recommendation represents our collective analysis based on current \
                        business metrics and market conditions."
            .to_string(),
    }
}

/// Generates decision summaries through the completion endpoint.
pub struct SummaryGenerator {
    backend: Arc<dyn CompletionBackend>,
    settings: CompletionSettings,
}

const SUMMARY_MAX_TOKENS: u32 = 600;

impl SummaryGenerator {
    pub fn new(backend: Arc<dyn CompletionBackend>, settings: CompletionSettings) -> Self {
        Self { backend, settings }
    }

    fn build_prompt(state: &MeetingState, topic: Option<&str>) -> String {
        let transcript = crate::export::format_transcript(state);
        let decisions = extract_decisions(state);
        let decisions_block = if decisions.is_empty() {
            "(none detected)".to_string()
        } else {
            decisions.join("\n")
        };
        format!(
            "Summarize this executive meeting about {topic} as JSON with exactly these keys: \
             executiveSummary (string), agentInsights (object keyed CEO/CFO/CTO/HR), \
             riskAssessment (string), actionPlan (array of {{action, owner, timeline}}), \
             followUpSuggestion (string), finalMessage (string). \
             Respond with the JSON object only.\n\n\
             # Transcript\n{transcript}\n\n\
             # Detected decisions\n{decisions_block}",
            topic = topic.unwrap_or("business performance"),
        )
    }

    /// Produces a summary; never fails - generation or parse errors fall
    /// back to the canned summary.
    pub async fn generate(&self, state: &MeetingState, topic: Option<&str>) -> DecisionSummary {
        let request = CompletionRequest {
            system_prompt: "You are the meeting secretary of an executive boardroom. You produce \
                            terse, factual JSON summaries."
                .to_string(),
            user_prompt: Self::build_prompt(state, topic),
            max_tokens: SUMMARY_MAX_TOKENS,
            temperature: self.settings.temperature,
        };

        match self.backend.complete(request).await {
            Ok(text) => parse_summary(&text).unwrap_or_else(|| {
                tracing::warn!("summary response was not valid JSON, using fallback");
                fallback_summary(topic)
            }),
            Err(err) => {
                tracing::warn!(error = %err, "summary generation failed, using fallback");
                fallback_summary(topic)
            }
        }
    }
}

/// Renders a summary as the fixed-section Markdown document.
pub fn render_markdown(summary: &DecisionSummary, topic: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str("## Final Recommendation by AI Boardroom\n\n");
    out.push_str(&format!(
        "Topic: {}\n\n",
        topic.unwrap_or("Business Performance Review")
    ));

    out.push_str("### Executive Summary\n");
    out.push_str(&summary.executive_summary);
    out.push_str("\n\n### Agent Insights\n");
    for (role, insight) in &summary.agent_insights {
        out.push_str(&format!("- **{role}**: {insight}\n"));
    }

    out.push_str("\n### Risk Assessment\n");
    out.push_str(&summary.risk_assessment);

    out.push_str("\n\n### Recommended Action Plan\n");
    out.push_str("| Action | Owner | Timeline |\n| --- | --- | --- |\n");
    for item in &summary.action_plan {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            item.action, item.owner, item.timeline
        ));
    }

    out.push_str("\n### Follow-up Suggestion\n");
    out.push_str(&summary.follow_up_suggestion);

    out.push_str("\n\n---\n*");
    out.push_str(&summary.final_message);
    out.push_str("*\n");
    out
}

/// The dated summary filename, e.g. `decision-summary-2026-08-06.txt`.
pub fn summary_filename() -> String {
    format!("decision-summary-{}.txt", Utc::now().format("%Y-%m-%d"))
}

/// Writes the rendered summary into `dir` and returns the file path.
pub fn write_summary(
    dir: &Path,
    summary: &DecisionSummary,
    topic: Option<&str>,
) -> Result<PathBuf> {
    let path = dir.join(summary_filename());
    std::fs::write(&path, render_markdown(summary, topic))?;
    tracing::info!(path = %path.display(), "decision summary exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use boardroom_core::agent::default_roster;
    use boardroom_core::session::Message;
    use boardroom_interaction::CompletionError;

    fn meeting() -> MeetingState {
        let roster = default_roster();
        let mut state = MeetingState::new(roster.clone()).start_discussion(None);
        state = state.receive_message(Message::executive(
            &roster[0],
            "We agreed to expand into Europe. Market share is climbing.",
        ));
        state = state.receive_message(Message::executive(
            &roster[2],
            "Margins look healthy. We should allocate more budget to R&D.",
        ));
        state
    }

    #[test]
    fn decisions_are_extracted_and_attributed() {
        let decisions = extract_decisions(&meeting());
        assert_eq!(decisions.len(), 2);
        assert!(decisions[0].starts_with("Alexandra Chen (CEO):"));
        assert!(decisions[0].contains("agreed to expand into Europe"));
        assert!(decisions[1].starts_with("Sarah Williams (CFO):"));
    }

    #[test]
    fn parse_summary_handles_fenced_json() {
        let response = "Here is the summary:\n```json\n{\"executiveSummary\": \"All good.\", \
                        \"agentInsights\": {\"CEO\": \"ok\"}, \"riskAssessment\": \"low\", \
                        \"actionPlan\": [{\"action\": \"a\", \"owner\": \"CEO\", \
                        \"timeline\": \"now\"}], \"followUpSuggestion\": \"none\", \
                        \"finalMessage\": \"done\"}\n```";
        let summary = parse_summary(response).unwrap();
        assert_eq!(summary.executive_summary, "All good.");
        assert_eq!(summary.action_plan.len(), 1);
    }

    #[test]
    fn parse_summary_rejects_garbage() {
        assert!(parse_summary("no json here at all").is_none());
        assert!(parse_summary("{not even close}").is_none());
    }

    #[tokio::test]
    async fn generator_falls_back_when_the_endpoint_fails() {
        struct FailingBackend;

        #[async_trait]
        impl CompletionBackend for FailingBackend {
            async fn complete(
                &self,
                _request: CompletionRequest,
            ) -> std::result::Result<String, CompletionError> {
                Err(CompletionError::Transport("down".to_string()))
            }
        }

        let generator =
            SummaryGenerator::new(Arc::new(FailingBackend), CompletionSettings::default());
        let summary = generator.generate(&meeting(), Some("the roadmap")).await;
        assert!(summary.executive_summary.contains("the roadmap"));
        assert_eq!(summary.action_plan.len(), 4);
        assert_eq!(summary.agent_insights.len(), 4);
    }

    #[tokio::test]
    async fn generator_falls_back_on_malformed_json() {
        struct ProseBackend;

        #[async_trait]
        impl CompletionBackend for ProseBackend {
            async fn complete(
                &self,
                _request: CompletionRequest,
            ) -> std::result::Result<String, CompletionError> {
                Ok("I could not produce JSON today, sorry.".to_string())
            }
        }

        let generator =
            SummaryGenerator::new(Arc::new(ProseBackend), CompletionSettings::default());
        let summary = generator.generate(&meeting(), None).await;
        assert!(summary
            .executive_summary
            .contains("business performance"));
    }

    #[test]
    fn markdown_rendering_has_the_fixed_sections() {
        let rendered = render_markdown(&fallback_summary(None), None);
        for header in [
            "### Executive Summary",
            "### Agent Insights",
            "### Risk Assessment",
            "### Recommended Action Plan",
            "### Follow-up Suggestion",
        ] {
            assert!(rendered.contains(header), "missing {header}");
        }
        assert!(rendered.contains("| Action | Owner | Timeline |"));
    }

    #[test]
    fn write_summary_creates_a_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_summary(dir.path(), &fallback_summary(None), None).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("decision-summary-"));
        assert!(name.ends_with(".txt"));
    }
}
