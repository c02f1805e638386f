//! Shared LLM client and interaction utilities
//!
//! Provides a common free-text completion interface for the OpenAI API used
//! across all model-backed components. The credential is optional: without it
//! every consumer degrades to its static default instead of failing.

use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;
use thiserror::Error;

/// Environment variable holding the API credential
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Default model for all components unless overridden per component
pub const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// Per-call generation parameters
///
/// Each consuming component carries its own fixed parameters as a constant.
#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u64,
}

/// Error type for LLM completions
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LlmError {
    #[error("completion request failed: {0}")]
    CompletionFailed(String),
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a client from the environment credential
    ///
    /// Returns `None` when the credential is absent or invalid; callers treat
    /// a missing client as "always answer with the neutral default".
    pub fn from_env() -> Option<Self> {
        let api_key = match std::env::var(ENV_OPENAI_API_KEY) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                tracing::warn!(
                    "{} not set, model-backed components will return neutral defaults",
                    ENV_OPENAI_API_KEY
                );
                return None;
            }
        };

        Some(Self {
            client: openai::Client::new(&api_key),
        })
    }

    /// Run a single free-text completion
    pub async fn generate(
        &self,
        model: &str,
        preamble: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, LlmError> {
        let start_time = std::time::Instant::now();
        let prompt_length = prompt.len();

        let agent = self
            .client
            .agent(model)
            .preamble(preamble)
            .temperature(params.temperature)
            .max_tokens(params.max_tokens)
            .additional_params(serde_json::json!({ "top_p": params.top_p }))
            .build();

        match agent.prompt(prompt).await {
            Ok(text) => {
                tracing::debug!(
                    model = %model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    response_length = text.len(),
                    "Completion succeeded"
                );
                Ok(text)
            }
            Err(e) => {
                tracing::error!(
                    model = %model,
                    elapsed_ms = start_time.elapsed().as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "Completion failed"
                );
                Err(LlmError::CompletionFailed(e.to_string()))
            }
        }
    }
}

/// Resolve a component's model from its env var, falling back to the default
pub fn resolve_model(env_var: &str) -> String {
    std::env::var(env_var).unwrap_or_else(|_| DEFAULT_MODEL.to_string())
}
