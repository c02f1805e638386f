use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Universal neutral default for any score the model failed to provide
pub const NEUTRAL_SCORE: f64 = 0.5;

/// A single turn of conversation history sent with an analysis request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

// One arbiter's validated verdict on a claim
// - overall: the arbiter's headline score
// - components: the arbiter's fixed named sub-scores
// - notes: arbiter-specific list (identified fallacies / key stakeholders)
// All numeric values lie in [0, 1] after parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionScore {
    pub overall: f64,
    pub components: BTreeMap<String, f64>,
    pub reasoning: String,
    pub notes: Vec<String>,
}

impl DimensionScore {
    /// Read a named component, falling back to the neutral default
    pub fn component(&self, key: &str) -> f64 {
        self.components.get(key).copied().unwrap_or(NEUTRAL_SCORE)
    }
}

/// A named alternative viewpoint on a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Perspective {
    pub name: String,
    pub description: String,
    pub assessment: String,
    pub score: f64,
}

/// Complete analysis of one claim, assembled by the integrator
///
/// Field names serialize in the camelCase wire format the frontend expects.
/// Immutable once built, except for the `perspectives` list which the
/// orchestrator fills in after perspective generation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedAnalysis {
    pub claim: String,
    pub domain: String,
    pub assumptions: String,
    pub verifact_score: VerifactScore,
    pub empirical_analysis: ArbiterSummary,
    pub logical_analysis: LogicalSummary,
    pub pragmatic_analysis: PragmaticSummary,
    #[serde(default)]
    pub perspectives: Vec<Perspective>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifactScore {
    pub overall_score: f64,
    pub components: VerifactComponents,
}

/// The seven composite metrics, rounded to 2 decimals for presentation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifactComponents {
    pub empirical_verifiability: f64,
    pub logical_consistency: f64,
    pub pragmatic_utility: f64,
    pub model_diversity: f64,
    pub contextual_sensitivity: f64,
    pub reflective_index: f64,
    pub falsifiability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArbiterSummary {
    pub score: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogicalSummary {
    pub score: f64,
    pub reasoning: String,
    pub fallacies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PragmaticSummary {
    pub score: f64,
    pub reasoning: String,
    pub stakeholders: Vec<String>,
}

impl IntegratedAnalysis {
    /// Fully-populated neutral record for when no real analysis is available
    pub fn default_for(claim: &str) -> Self {
        Self {
            claim: claim.to_string(),
            domain: "general".to_string(),
            assumptions: "Analysis could not determine assumptions".to_string(),
            verifact_score: VerifactScore {
                overall_score: NEUTRAL_SCORE,
                components: VerifactComponents {
                    empirical_verifiability: NEUTRAL_SCORE,
                    logical_consistency: NEUTRAL_SCORE,
                    pragmatic_utility: NEUTRAL_SCORE,
                    model_diversity: NEUTRAL_SCORE,
                    contextual_sensitivity: NEUTRAL_SCORE,
                    reflective_index: NEUTRAL_SCORE,
                    falsifiability: NEUTRAL_SCORE,
                },
            },
            empirical_analysis: ArbiterSummary {
                score: NEUTRAL_SCORE,
                reasoning: "Default empirical analysis".to_string(),
            },
            logical_analysis: LogicalSummary {
                score: NEUTRAL_SCORE,
                reasoning: "Default logical analysis".to_string(),
                fallacies: Vec::new(),
            },
            pragmatic_analysis: PragmaticSummary {
                score: NEUTRAL_SCORE,
                reasoning: "Default pragmatic analysis".to_string(),
                stakeholders: Vec::new(),
            },
            perspectives: Vec::new(),
        }
    }
}
