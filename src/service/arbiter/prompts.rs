//! Prompts for the three arbiters

use super::ArbiterKind;

const EMPIRICAL_PREAMBLE: &str = "You are the Empirical Arbiter, a specialized analytical system \
that evaluates claims based on empirical evidence, measurement, and observation.";

const LOGICAL_PREAMBLE: &str = "You are the Logical Arbiter, a specialized analytical system \
that evaluates claims based on logical structure, consistency, and reasoning patterns.";

const PRAGMATIC_PREAMBLE: &str = "You are the Pragmatic Arbiter, a specialized analytical system \
that evaluates claims based on practical utility, real-world implications, and functional value.";

/// System prompt for an arbiter
pub fn preamble(kind: ArbiterKind) -> &'static str {
    match kind {
        ArbiterKind::Empirical => EMPIRICAL_PREAMBLE,
        ArbiterKind::Logical => LOGICAL_PREAMBLE,
        ArbiterKind::Pragmatic => PRAGMATIC_PREAMBLE,
    }
}

/// Build the analysis prompt for a claim
pub fn build_analysis_prompt(kind: ArbiterKind, claim: &str) -> String {
    match kind {
        ArbiterKind::Empirical => format!(
            r#"Analyze the following claim from an empirical perspective:
"{claim}"

Focus your analysis on:
1. Evidence availability: Is there empirical evidence available to evaluate this claim?
2. Measurability: Can the claim be measured or quantified?
3. Observability: Can the phenomena in the claim be directly or indirectly observed?
4. Testability: Can experiments be designed to test this claim?

Provide your analysis in JSON format with the following structure:
{{
    "empiricalScore": 0.0 to 1.0,
    "components": {{
        "evidenceAvailability": 0.0 to 1.0,
        "measurability": 0.0 to 1.0,
        "observability": 0.0 to 1.0,
        "testability": 0.0 to 1.0
    }},
    "reasoning": "Your detailed reasoning explaining the scores"
}}

Ensure your analysis is balanced, nuanced, and focused solely on empirical considerations."#
        ),
        ArbiterKind::Logical => format!(
            r#"Analyze the following claim from a logical perspective:
"{claim}"

Focus your analysis on:
1. Premise-conclusion structure: Does the claim have clear premises and conclusion?
2. Internal consistency: Is the claim free from contradictions?
3. Deductive validity: If structured as a deductive argument, is it valid?
4. Inductive strength: If structured as an inductive argument, is it strong?
5. Fallacies: Does the claim contain logical fallacies?

Provide your analysis in JSON format with the following structure:
{{
    "logicalScore": 0.0 to 1.0,
    "components": {{
        "structure": 0.0 to 1.0,
        "consistency": 0.0 to 1.0,
        "validity": 0.0 to 1.0,
        "fallacies": 0.0 to 1.0
    }},
    "reasoning": "Your detailed reasoning explaining the scores",
    "identifiedFallacies": ["fallacy1", "fallacy2"]
}}

A higher "fallacies" component score means fewer fallacies. The "identifiedFallacies"
list is optional and names any fallacies you found.
Ensure your analysis is balanced, nuanced, and focused solely on logical considerations."#
        ),
        ArbiterKind::Pragmatic => format!(
            r#"Analyze the following claim from a pragmatic perspective:
"{claim}"

Focus your analysis on:
1. Practical utility: Does the claim have practical applications or usefulness?
2. Consequences: What are the potential consequences of accepting this claim?
3. Stakeholder impact: How does this claim affect different stakeholders?
4. Alternative framings: Are there more useful ways to frame this issue?

Provide your analysis in JSON format with the following structure:
{{
    "pragmaticScore": 0.0 to 1.0,
    "components": {{
        "utility": 0.0 to 1.0,
        "consequences": 0.0 to 1.0,
        "stakeholderValue": 0.0 to 1.0,
        "adaptability": 0.0 to 1.0
    }},
    "reasoning": "Your detailed reasoning explaining the scores",
    "keyStakeholders": ["stakeholder1", "stakeholder2"]
}}

The "keyStakeholders" list is optional and names the stakeholders most affected.
Ensure your analysis is balanced, nuanced, and focused solely on pragmatic considerations."#
        ),
    }
}
