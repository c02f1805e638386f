//! Socratic follow-up generation
//!
//! Composes the final user-facing message from the claim, its integrated
//! analysis, and recent conversation history.

use crate::model::{ChatTurn, IntegratedAnalysis};
use crate::service::llm::{resolve_model, GenerationParams, LlmClient};

pub mod prompts;

/// Environment variable for the response model
const ENV_RESPONSE_MODEL: &str = "RESPONSE_MODEL";

/// Balanced randomness for natural-sounding responses
const GENERATION: GenerationParams = GenerationParams {
    temperature: 0.7,
    top_p: 0.9,
    max_tokens: 1024,
};

/// Role-label prefixes the model sometimes echoes back
const LABEL_PREFIXES: &[&str] = &["Response:", "Assistant:"];

/// Service generating the user-facing Socratic follow-up
pub struct ResponseGenerator {
    llm_client: Option<LlmClient>,
    model: String,
}

impl ResponseGenerator {
    pub fn new(llm_client: Option<LlmClient>) -> Self {
        let model = resolve_model(ENV_RESPONSE_MODEL);
        Self { llm_client, model }
    }

    /// Generate a follow-up message; always returns usable text
    pub async fn generate(
        &self,
        claim: &str,
        analysis: &IntegratedAnalysis,
        history: &[ChatTurn],
    ) -> String {
        if claim.trim().is_empty() {
            return default_response(claim);
        }
        let Some(llm_client) = &self.llm_client else {
            return default_response(claim);
        };

        let prompt = prompts::build_response_prompt(claim, analysis, history);
        match llm_client
            .generate(&self.model, prompts::RESPONSE_PREAMBLE, &prompt, &GENERATION)
            .await
        {
            Ok(text) => strip_label_prefixes(&text),
            Err(e) => {
                tracing::warn!(error = %e, "Response call failed, using default response");
                default_response(claim)
            }
        }
    }
}

/// Remove echoed role labels and surrounding whitespace
fn strip_label_prefixes(text: &str) -> String {
    let mut cleaned = text.trim().to_string();
    for prefix in LABEL_PREFIXES {
        cleaned = cleaned.replace(prefix, "");
    }
    cleaned.trim().to_string()
}

/// Fixed templated fallback embedding the claim
fn default_response(claim: &str) -> String {
    if claim.is_empty() {
        "I'm interested in exploring your perspective further. Could you share more about your reasoning on this topic?".to_string()
    } else {
        format!(
            "I find your statement that \"{claim}\" interesting to explore. What led you to this viewpoint? What evidence or reasoning supports it?"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefixes_are_stripped() {
        assert_eq!(
            strip_label_prefixes("  Response: What makes you sure?  "),
            "What makes you sure?"
        );
        assert_eq!(
            strip_label_prefixes("Assistant: Response: Both labels."),
            "Both labels."
        );
        assert_eq!(strip_label_prefixes("No labels here."), "No labels here.");
    }

    #[tokio::test]
    async fn missing_credential_yields_templated_fallback() {
        let generator = ResponseGenerator::new(None);
        let analysis = IntegratedAnalysis::default_for("cats are liquid");
        let response = generator.generate("cats are liquid", &analysis, &[]).await;

        assert!(response.contains("cats are liquid"));
        assert!(response.ends_with('?'));
    }
}
