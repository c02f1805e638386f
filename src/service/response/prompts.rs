//! Prompt for Socratic follow-up generation

use crate::model::{ChatTurn, IntegratedAnalysis};

pub const RESPONSE_PREAMBLE: &str = "You are a Belief Explorer, a helpful and curious AI \
assistant using the Socratic method. Your goal is to help the user reflect on their beliefs. \
Do NOT debate, agree, disagree, or give opinions.";

/// How many trailing history turns are included in the prompt
const HISTORY_WINDOW: usize = 3;

/// Build the follow-up prompt from the claim, its analysis, and recent history
pub fn build_response_prompt(
    claim: &str,
    analysis: &IntegratedAnalysis,
    history: &[ChatTurn],
) -> String {
    let components = &analysis.verifact_score.components;

    let perspective_insights = analysis
        .perspectives
        .first()
        .map(|p| {
            format!(
                "From a {} perspective: {}\n",
                p.name.to_lowercase(),
                p.assessment
            )
        })
        .unwrap_or_default();

    let mut formatted_history = String::new();
    let window_start = history.len().saturating_sub(HISTORY_WINDOW);
    for turn in &history[window_start..] {
        if turn.role.is_empty() || turn.content.is_empty() {
            continue;
        }
        formatted_history.push_str(&format!("{}: {}\n", capitalize(&turn.role), turn.content));
    }

    format!(
        r#"The user stated the belief: "{claim}"

Analysis insights:
- Empirical verifiability: {empirical:.2}
- Logical consistency: {logical:.2}
- Overall Verifact score: {verifact:.2}
{perspective_insights}
Recent conversation:
{formatted_history}
Generate a thoughtful, non-judgmental response that:
1. Acknowledges the user's belief without agreeing or disagreeing
2. Asks one or two open-ended, reflective questions about this specific belief
3. Encourages the user to think about their reasoning or the evidence
4. Uses a warm, curious tone that invites further exploration

Your response should be 2-4 sentences long and end with a question."#,
        empirical = components.empirical_verifiability,
        logical = components.logical_consistency,
        verifact = analysis.verifact_score.overall_score,
    )
}

fn capitalize(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::IntegratedAnalysis;

    #[test]
    fn prompt_keeps_last_three_turns_only() {
        let history: Vec<ChatTurn> = (1..=5)
            .map(|i| ChatTurn {
                role: "user".to_string(),
                content: format!("turn {i}"),
            })
            .collect();

        let analysis = IntegratedAnalysis::default_for("claim");
        let prompt = build_response_prompt("claim", &analysis, &history);

        assert!(!prompt.contains("turn 2"));
        assert!(prompt.contains("User: turn 3"));
        assert!(prompt.contains("User: turn 5"));
    }

    #[test]
    fn prompt_embeds_first_perspective_and_scores() {
        let mut analysis = IntegratedAnalysis::default_for("claim");
        analysis.perspectives = vec![crate::model::Perspective {
            name: "Scientific".to_string(),
            description: "d".to_string(),
            assessment: "Needs evidence.".to_string(),
            score: 0.4,
        }];

        let prompt = build_response_prompt("claim", &analysis, &[]);
        assert!(prompt.contains("From a scientific perspective: Needs evidence."));
        assert!(prompt.contains("Overall Verifact score: 0.50"));
    }
}
