//! Claim extraction service
//!
//! Turns a free-text belief statement into an ordered list of up to 3 claim
//! strings. The model path can fail at any step; the fallback is naive
//! sentence splitting so the caller always gets a usable answer.

use crate::service::llm::{resolve_model, GenerationParams, LlmClient};
use crate::service::parse;

pub mod prompts;

/// Environment variable for the claim extraction model
const ENV_CLAIM_EXTRACTION_MODEL: &str = "CLAIM_EXTRACTION_MODEL";

/// Low randomness for deterministic claim lists
const GENERATION: GenerationParams = GenerationParams {
    temperature: 0.2,
    top_p: 0.8,
    max_tokens: 1024,
};

/// At most this many claims are returned; the first is the primary claim
const MAX_CLAIMS: usize = 3;

/// Sentence fragments at or below this length are noise, not claims
const MIN_FRAGMENT_LEN: usize = 10;

/// Service for extracting claims from user statements
pub struct ClaimExtractor {
    llm_client: Option<LlmClient>,
    model: String,
}

impl ClaimExtractor {
    pub fn new(llm_client: Option<LlmClient>) -> Self {
        let model = resolve_model(ENV_CLAIM_EXTRACTION_MODEL);
        Self { llm_client, model }
    }

    /// Extract up to 3 claims from a statement
    ///
    /// An empty statement or a missing credential yields an empty list, which
    /// the caller must treat as "no claims found". A model or parse failure
    /// falls back to period splitting instead.
    pub async fn extract_claims(&self, statement: &str) -> Vec<String> {
        if statement.trim().is_empty() {
            return Vec::new();
        }
        let Some(llm_client) = &self.llm_client else {
            return Vec::new();
        };

        let prompt = prompts::build_extraction_prompt(statement);
        let response = match llm_client
            .generate(&self.model, prompts::EXTRACTION_PREAMBLE, &prompt, &GENERATION)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Claim extraction call failed, using fallback splitting");
                return fallback_extraction(statement);
            }
        };

        match parse::parse_string_list(&response) {
            Some(claims) => {
                let claims: Vec<String> = claims.into_iter().take(MAX_CLAIMS).collect();
                tracing::info!(claim_count = claims.len(), "Extracted claims from statement");
                claims
            }
            None => {
                tracing::warn!("Could not parse claim list from response, using fallback splitting");
                fallback_extraction(statement)
            }
        }
    }
}

/// Split the statement on periods, keeping substantive fragments
///
/// Returns the whole statement as the sole claim when nothing qualifies.
fn fallback_extraction(statement: &str) -> Vec<String> {
    let sentences: Vec<String> = statement
        .split('.')
        .map(str::trim)
        .filter(|s| s.len() > MIN_FRAGMENT_LEN)
        .take(MAX_CLAIMS)
        .map(str::to_string)
        .collect();

    if sentences.is_empty() {
        vec![statement.to_string()]
    } else {
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_statement_yields_no_claims() {
        let extractor = ClaimExtractor::new(None);
        assert!(extractor.extract_claims("").await.is_empty());
        assert!(extractor.extract_claims("   ").await.is_empty());
    }

    #[tokio::test]
    async fn missing_credential_yields_no_claims() {
        let extractor = ClaimExtractor::new(None);
        let claims = extractor.extract_claims("Vaccines cause autism.").await;
        assert!(claims.is_empty());
    }

    #[test]
    fn fallback_splits_on_periods() {
        let claims =
            fallback_extraction("The earth is round. Water boils at 100 degrees. Ok. Cats are mammals. One more claim here.");
        assert_eq!(
            claims,
            vec![
                "The earth is round",
                "Water boils at 100 degrees",
                "Cats are mammals"
            ]
        );
    }

    #[test]
    fn fallback_keeps_whole_statement_when_no_fragment_qualifies() {
        let claims = fallback_extraction("Too short.");
        assert_eq!(claims, vec!["Too short."]);
    }
}
