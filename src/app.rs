//! Application state and service initialization
//!
//! Centralizes service construction and dependency injection. The LLM client
//! is created once at startup and shared by every model-backed component; a
//! missing credential degrades all of them to neutral defaults.

use std::sync::Arc;

use crate::service::{AnalysisService, LlmClient};

/// Application state shared with Actix-web handlers
pub struct AppState {
    /// The full belief-analysis pipeline
    pub analysis_service: Arc<AnalysisService>,
}

impl AppState {
    /// Initialize all services and build application state
    pub fn new() -> Self {
        let llm_client = LlmClient::from_env();
        if llm_client.is_some() {
            tracing::info!("LLM client initialized");
        }

        Self {
            analysis_service: Arc::new(AnalysisService::new(llm_client)),
        }
    }
}
