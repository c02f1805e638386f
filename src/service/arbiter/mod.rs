//! The three arbiters: empirical, logical, pragmatic
//!
//! Each scores one claim along its own named dimensions via a single model
//! call. Failures are absorbed, not surfaced: an empty claim, a missing
//! credential, a transport error, or an unparseable response all yield the
//! arbiter's static neutral default. No retries.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::model::{DimensionScore, NEUTRAL_SCORE};
use crate::service::llm::{resolve_model, GenerationParams, LlmClient};
use crate::service::parse::{self, ObjectSchema, ParsedAnalysis};

pub mod prompts;

/// Environment variable for the arbiter model
const ENV_ARBITER_MODEL: &str = "ARBITER_MODEL";

/// Very low randomness for consistent scoring
const GENERATION: GenerationParams = GenerationParams {
    temperature: 0.1,
    top_p: 0.8,
    max_tokens: 1024,
};

/// The three fixed rhetorical stances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArbiterKind {
    Empirical,
    Logical,
    Pragmatic,
}

impl ArbiterKind {
    /// Key holding the arbiter's headline score in the model's response
    pub const fn overall_key(self) -> &'static str {
        match self {
            ArbiterKind::Empirical => "empiricalScore",
            ArbiterKind::Logical => "logicalScore",
            ArbiterKind::Pragmatic => "pragmaticScore",
        }
    }

    /// Fixed component keys the arbiter scores
    pub const fn component_keys(self) -> &'static [&'static str] {
        match self {
            ArbiterKind::Empirical => &[
                "evidenceAvailability",
                "measurability",
                "observability",
                "testability",
            ],
            ArbiterKind::Logical => &["structure", "consistency", "validity", "fallacies"],
            ArbiterKind::Pragmatic => &["utility", "consequences", "stakeholderValue", "adaptability"],
        }
    }

    /// Key of the arbiter's optional list field, if it has one
    pub const fn notes_key(self) -> Option<&'static str> {
        match self {
            ArbiterKind::Empirical => None,
            ArbiterKind::Logical => Some("identifiedFallacies"),
            ArbiterKind::Pragmatic => Some("keyStakeholders"),
        }
    }

    const fn schema(self) -> ObjectSchema {
        ObjectSchema {
            overall_key: self.overall_key(),
            component_keys: self.component_keys(),
        }
    }

    /// Static default verdict: every score neutral, empty notes
    pub fn default_score(self) -> DimensionScore {
        let components: BTreeMap<String, f64> = self
            .component_keys()
            .iter()
            .map(|key| ((*key).to_string(), NEUTRAL_SCORE))
            .collect();

        DimensionScore {
            overall: NEUTRAL_SCORE,
            components,
            reasoning: format!("Unable to perform {self} analysis. This is a default response."),
            notes: Vec::new(),
        }
    }
}

impl fmt::Display for ArbiterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ArbiterKind::Empirical => "empirical",
            ArbiterKind::Logical => "logical",
            ArbiterKind::Pragmatic => "pragmatic",
        };
        f.write_str(label)
    }
}

/// One claim-scoring arbiter
pub struct Arbiter {
    kind: ArbiterKind,
    llm_client: Option<LlmClient>,
    model: String,
}

impl Arbiter {
    pub fn new(kind: ArbiterKind, llm_client: Option<LlmClient>) -> Self {
        let model = resolve_model(ENV_ARBITER_MODEL);
        Self {
            kind,
            llm_client,
            model,
        }
    }

    /// Score a claim along this arbiter's dimensions
    ///
    /// Total: always returns a well-shaped `DimensionScore`.
    pub async fn analyze(&self, claim: &str) -> DimensionScore {
        if claim.trim().is_empty() {
            return self.kind.default_score();
        }
        let Some(llm_client) = &self.llm_client else {
            return self.kind.default_score();
        };

        let prompt = prompts::build_analysis_prompt(self.kind, claim);
        let response = match llm_client
            .generate(&self.model, prompts::preamble(self.kind), &prompt, &GENERATION)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    arbiter = %self.kind,
                    error = %e,
                    "Arbiter call failed, using default analysis"
                );
                return self.kind.default_score();
            }
        };

        match parse::parse_scored_object(&response, &self.kind.schema()) {
            Some(parsed) => {
                tracing::debug!(arbiter = %self.kind, overall = parsed.overall, "Completed analysis");
                self.assemble_score(parsed)
            }
            None => {
                tracing::warn!(
                    arbiter = %self.kind,
                    "Could not parse analysis from response, using default analysis"
                );
                self.kind.default_score()
            }
        }
    }

    fn assemble_score(&self, mut parsed: ParsedAnalysis) -> DimensionScore {
        let notes = self
            .kind
            .notes_key()
            .and_then(|key| parsed.extra.remove(key))
            .map(string_list)
            .unwrap_or_default();

        DimensionScore {
            overall: parsed.overall,
            components: parsed.components,
            reasoning: parsed.reasoning,
            notes,
        }
    }
}

fn string_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_score_is_neutral_and_complete() {
        for kind in [ArbiterKind::Empirical, ArbiterKind::Logical, ArbiterKind::Pragmatic] {
            let score = kind.default_score();
            assert_eq!(score.overall, NEUTRAL_SCORE);
            assert_eq!(score.components.len(), 4);
            assert!(score.components.values().all(|s| *s == NEUTRAL_SCORE));
            assert!(score.notes.is_empty());
            assert!(score.reasoning.contains("default response"));
        }
    }

    #[tokio::test]
    async fn empty_claim_yields_default() {
        let arbiter = Arbiter::new(ArbiterKind::Empirical, None);
        let score = arbiter.analyze("  ").await;
        assert_eq!(score, ArbiterKind::Empirical.default_score());
    }

    #[tokio::test]
    async fn missing_credential_yields_default() {
        let arbiter = Arbiter::new(ArbiterKind::Logical, None);
        let score = arbiter.analyze("All swans are white.").await;
        assert_eq!(score, ArbiterKind::Logical.default_score());
    }

    #[test]
    fn notes_are_pulled_from_extra_keys() {
        let kind = ArbiterKind::Logical;
        let arbiter = Arbiter::new(kind, None);
        let parsed = parse::parse_scored_object(
            r#"{
                "logicalScore": 0.3,
                "components": {"structure": 0.4},
                "reasoning": "Weak structure.",
                "identifiedFallacies": ["hasty generalization", 7]
            }"#,
            &kind.schema(),
        )
        .unwrap();

        let score = arbiter.assemble_score(parsed);
        assert_eq!(score.overall, 0.3);
        assert_eq!(score.notes, vec!["hasty generalization"]);
        // Partial components keep their value, missing keys get the neutral default
        assert_eq!(score.component("structure"), 0.4);
        assert_eq!(score.component("validity"), NEUTRAL_SCORE);
    }
}
