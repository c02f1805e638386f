//! Perspective generation
//!
//! Asks the model for three alternative viewpoints on a claim at higher
//! randomness, keeping whatever valid objects survive parsing. The static
//! fallback mirrors the three arbiter stances and quotes the claim verbatim.

use crate::model::{Perspective, NEUTRAL_SCORE};
use crate::service::llm::{resolve_model, GenerationParams, LlmClient};
use crate::service::parse;

pub mod prompts;

/// Environment variable for the perspective model
const ENV_PERSPECTIVE_MODEL: &str = "PERSPECTIVE_MODEL";

/// Higher randomness for more diverse viewpoints
const GENERATION: GenerationParams = GenerationParams {
    temperature: 0.7,
    top_p: 0.9,
    max_tokens: 1024,
};

/// Service generating alternative viewpoints on a claim
pub struct PerspectiveGenerator {
    llm_client: Option<LlmClient>,
    model: String,
}

impl PerspectiveGenerator {
    pub fn new(llm_client: Option<LlmClient>) -> Self {
        let model = resolve_model(ENV_PERSPECTIVE_MODEL);
        Self { llm_client, model }
    }

    /// Generate perspectives for a claim; always returns at least one
    pub async fn generate(&self, claim: &str) -> Vec<Perspective> {
        if claim.trim().is_empty() {
            return default_perspectives(claim);
        }
        let Some(llm_client) = &self.llm_client else {
            return default_perspectives(claim);
        };

        let prompt = prompts::build_perspective_prompt(claim);
        let response = match llm_client
            .generate(&self.model, prompts::PERSPECTIVE_PREAMBLE, &prompt, &GENERATION)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Perspective call failed, using default perspectives");
                return default_perspectives(claim);
            }
        };

        match parse::parse_perspective_list(&response) {
            Some(perspectives) => {
                tracing::info!(perspective_count = perspectives.len(), "Generated perspectives");
                perspectives
            }
            None => {
                tracing::warn!("No valid perspectives in response, using default perspectives");
                default_perspectives(claim)
            }
        }
    }
}

/// The three fixed fallback perspectives, quoting the claim verbatim
fn default_perspectives(claim: &str) -> Vec<Perspective> {
    vec![
        Perspective {
            name: "Empirical".to_string(),
            description: "Based on observable evidence and data.".to_string(),
            assessment: format!(
                "The claim '{claim}' would need to be evaluated against empirical evidence."
            ),
            score: NEUTRAL_SCORE,
        },
        Perspective {
            name: "Logical".to_string(),
            description: "Concerned with consistent reasoning and structure.".to_string(),
            assessment: format!(
                "The logical structure and premises of '{claim}' require examination."
            ),
            score: NEUTRAL_SCORE,
        },
        Perspective {
            name: "Pragmatic".to_string(),
            description: "Focused on practical implications and utility.".to_string(),
            assessment: format!(
                "The practical consequences of accepting '{claim}' should be considered."
            ),
            score: NEUTRAL_SCORE,
        },
    ]
}
