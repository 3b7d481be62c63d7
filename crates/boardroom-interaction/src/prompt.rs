//! Prompt construction.
//!
//! Pure string assembly: a persona system prompt built from the profile
//! tables and role insights, and a user prompt built from the conversation
//! history, optional topic, and the detected register.

use once_cell::sync::Lazy;
use regex::Regex;

use boardroom_core::agent::Agent;
use boardroom_core::insights::{RoleInsights, RoleProjection};
use boardroom_core::persona::PersonaProfile;
use boardroom_core::session::Message;

/// How the executives are instructed to speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// Boardroom voice, 40-60 words
    Business,
    /// Hallway voice, 20-40 words
    Casual,
}

/// Casual-input allowlist. A heuristic: false positives and negatives are
/// expected and acceptable.
static CASUAL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)what'?s up",
        r"(?i)how'?s it going",
        r"(?i)\b(tired|bored)\b",
        r"(?i)\b(hey|hi|hello)\b.*\b(guys|everyone|all|team|folks)\b",
        r"(?i)\blol\b",
        r"(?i)\bbtw\b",
        r"(?i)by the way",
        r"(?i)what do you think",
        r"(?i)how do you feel",
        r"(?i)\banyway\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("casual pattern must compile"))
    .collect()
});

/// Classifies a human message as business or casual input.
///
/// Short trailing-question-mark messages also read as casual so a quick
/// "thoughts?" does not get a 60-word briefing back.
pub fn detect_register(input: &str) -> Register {
    let trimmed = input.trim();
    if CASUAL_PATTERNS.iter().any(|p| p.is_match(trimmed)) {
        return Register::Casual;
    }
    if trimmed.ends_with('?') && trimmed.chars().count() <= 30 {
        return Register::Casual;
    }
    Register::Business
}

fn render_list(items: &[String]) -> String {
    items.join("; ")
}

/// Renders the role insight projection as prompt material.
fn render_insights(insights: &RoleInsights) -> String {
    match insights {
        RoleInsights::Ceo(i) => {
            let mut out = format!("{}\n", i.company_overview);
            if let Some(growth) = &i.revenue_growth {
                out.push_str(&format!("Latest revenue growth: {:.2}% ({}).\n", growth.growth, growth.year));
            }
            out.push_str(&format!("Profit margin: {:.1}%.\n", i.profit_margin));
            if let Some(growth) = &i.market_share_growth {
                out.push_str(&format!("Market share growth: {:.2}%.\n", growth.growth));
            }
            if let Some(csat) = i.customer_satisfaction {
                out.push_str(&format!("Customer satisfaction: {csat}/10.\n"));
            }
            out.push_str(&format!("Strategic focus: {}.\n", render_list(&i.strategic_focus)));
            out.push_str(&format!("Challenges: {}.\n", render_list(&i.challenges)));
            out.push_str(&format!("Opportunities: {}.", render_list(&i.opportunities)));
            out
        }
        RoleInsights::Cfo(i) => format!(
            "{}\nProfit margin: {:.1}%. Cash flow: ${:.0}. ROI: {:.0}%.\n\
             Budgets - marketing: ${:.0}, R&D: ${:.0}, infrastructure: ${:.0}.\n\
             Financial challenges: {}.\nInvestment priorities: {}.",
            i.financial_summary,
            i.profit_margin,
            i.cash_flow,
            i.roi,
            i.marketing_budget,
            i.rnd_budget,
            i.infrastructure_cost,
            render_list(&i.financial_challenges),
            render_list(&i.investment_priorities),
        ),
        RoleInsights::Cto(i) => format!(
            "{}\nDevelopment velocity: {} points/sprint. Technical debt: {}/10. \
             Security incidents: {}. Uptime: {}%.\n\
             Completed: {}.\nPlanned: {}.\nChallenges: {}.",
            i.technology_summary,
            i.development_velocity,
            i.technical_debt,
            i.security_incidents,
            i.uptime,
            render_list(&i.completed_projects),
            render_list(&i.planned_projects),
            render_list(&i.tech_challenges),
        ),
        RoleInsights::Hr(i) => format!(
            "{}\nAttrition: {:.0}%. Employee satisfaction: {}/10. \
             Average salary: ${:.0}. Training budget: ${:.0}.\n\
             HR challenges: {}.\nTalent initiatives: {}.",
            i.workforce_summary,
            i.attrition_rate,
            i.employee_satisfaction,
            i.average_salary,
            i.training_budget,
            render_list(&i.hr_challenges),
            render_list(&i.talent_initiatives),
        ),
    }
}

/// Renders the role's raw data series, most recent years last.
fn render_projection(projection: &RoleProjection) -> String {
    projection
        .series
        .iter()
        .map(|series| {
            let points = series
                .points
                .iter()
                .map(|p| format!("{}: {}", p.year, p.value))
                .collect::<Vec<_>>()
                .join(", ");
            format!("- {}: {}", series.label, points)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the persona system prompt for one executive.
pub fn system_prompt(
    agent: &Agent,
    profile: &PersonaProfile,
    insights: &RoleInsights,
    projection: &RoleProjection,
) -> String {
    format!(
        "You are {name}, the {title} ({role}) of the company, in a live executive \
         boardroom meeting.\n\n\
         # Persona\n\
         Personality: {traits}.\n\
         Speaking style: {style}\n\
         You keep steering toward: {focus}.\n\
         Phrases you sometimes use: {catchphrases}\n\n\
         # Your view of the business\n\
         {insights}\n\n\
         # Data you may cite\n\
         {projection}",
        name = agent.name,
        title = profile.title,
        role = agent.role,
        traits = profile.traits.join(", "),
        style = profile.speaking_style,
        focus = profile.focus_areas.join(", "),
        catchphrases = profile.catchphrases.join(" / "),
        insights = render_insights(insights),
        projection = render_projection(projection),
    )
}

/// How many trailing messages are replayed into the prompt.
const HISTORY_WINDOW: usize = 10;

fn author_line(message: &Message, roster: &[Agent]) -> String {
    if message.is_from_user() {
        return format!("Observer: {}", message.text);
    }
    match roster.iter().find(|a| a.id == message.agent_id) {
        Some(agent) => format!("{} ({}): {}", agent.name, agent.role, message.text),
        None => message.text.clone(),
    }
}

/// Builds the user prompt: recent history plus turn instructions.
pub fn user_prompt(
    history: &[Message],
    roster: &[Agent],
    topic: Option<&str>,
    register: Register,
) -> String {
    let window_start = history.len().saturating_sub(HISTORY_WINDOW);
    let rendered_history = history[window_start..]
        .iter()
        .map(|m| author_line(m, roster))
        .collect::<Vec<_>>()
        .join("\n");

    let topic_line = topic
        .map(|t| format!("The meeting topic is: {t}.\n"))
        .unwrap_or_default();

    let register_line = match register {
        Register::Business => {
            "Stay businesslike. Keep your response to 40-60 words."
        }
        Register::Casual => {
            "The room has gone informal - answer very casually, 20-40 words, like a quick \
             hallway exchange."
        }
    };

    format!(
        "# Conversation so far\n{rendered_history}\n\n\
         # Your turn\n\
         {topic_line}\
         {register_line} Speak in first person, in character, without naming yourself. \
         Reference the data relevant to your role where it supports your point. \
         It is fine to occasionally disagree with a colleague. \
         Do not use bullet points or headings."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardroom_core::agent::{default_roster, ExecutiveRole};
    use boardroom_core::data::sample_business_data;
    use boardroom_core::insights::{role_insights, role_projection};
    use boardroom_core::persona::profile_for;

    #[test]
    fn greetings_and_slang_read_as_casual() {
        for input in [
            "hey guys, what's up",
            "hello everyone!",
            "lol that was rough",
            "btw did we ship it",
            "how's it going, team",
            "thoughts?",
        ] {
            assert_eq!(detect_register(input), Register::Casual, "input: {input}");
        }
    }

    #[test]
    fn substantive_questions_stay_business() {
        for input in [
            "What is our plan to bring customer acquisition cost down next year?",
            "Please walk me through the infrastructure budget.",
            "We need a decision on the European expansion.",
        ] {
            assert_eq!(detect_register(input), Register::Business, "input: {input}");
        }
    }

    #[test]
    fn system_prompt_includes_persona_and_metrics() {
        let data = sample_business_data();
        let roster = default_roster();
        let cfo = roster.iter().find(|a| a.role == ExecutiveRole::Cfo).unwrap();
        let prompt = system_prompt(
            cfo,
            profile_for(cfo.role),
            &role_insights(cfo.role, &data),
            &role_projection(cfo.role, &data),
        );
        assert!(prompt.contains("Sarah Williams"));
        assert!(prompt.contains("Chief Financial Officer"));
        assert!(prompt.contains("$12.5M in revenue"));
        assert!(prompt.contains("Data you may cite"));
    }

    #[test]
    fn user_prompt_windows_history_and_sets_word_cap() {
        let roster = default_roster();
        let mut history = Vec::new();
        for i in 0..20 {
            history.push(boardroom_core::session::Message::executive(
                &roster[i % roster.len()],
                format!("point number {i}"),
            ));
        }
        let prompt = user_prompt(&history, &roster, Some("Q3 planning"), Register::Business);
        assert!(prompt.contains("40-60 words"));
        assert!(prompt.contains("Q3 planning"));
        assert!(prompt.contains("point number 19"));
        // outside the window
        assert!(!prompt.contains("point number 5\n"));
    }

    #[test]
    fn casual_register_relaxes_the_cap() {
        let roster = default_roster();
        let history = vec![boardroom_core::session::Message::from_user("what's up team")];
        let prompt = user_prompt(&history, &roster, None, Register::Casual);
        assert!(prompt.contains("20-40 words"));
        assert!(prompt.contains("Observer: what's up team"));
    }
}
