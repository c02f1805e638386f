//! Belief analysis orchestration
//!
//! Sequences the full pipeline for one statement: claim extraction, the three
//! arbiters (run concurrently, they are mutually independent), integration,
//! perspective generation, and the Socratic follow-up. Component failures are
//! absorbed inside each component; this service never fails.

use crate::model::{ChatTurn, IntegratedAnalysis};
use crate::service::arbiter::{Arbiter, ArbiterKind};
use crate::service::claims::ClaimExtractor;
use crate::service::integrator;
use crate::service::llm::LlmClient;
use crate::service::perspectives::PerspectiveGenerator;
use crate::service::response::ResponseGenerator;

/// Outcome of analyzing one statement
pub enum AnalysisOutcome {
    /// No claims could be identified in the statement
    NoClaims,
    /// The primary claim was analyzed end to end
    Analyzed {
        response: String,
        analyses: Vec<IntegratedAnalysis>,
    },
}

/// Top-level service wiring all belief-analysis components together
pub struct AnalysisService {
    claim_extractor: ClaimExtractor,
    empirical_arbiter: Arbiter,
    logical_arbiter: Arbiter,
    pragmatic_arbiter: Arbiter,
    perspective_generator: PerspectiveGenerator,
    response_generator: ResponseGenerator,
    llm_configured: bool,
}

impl AnalysisService {
    pub fn new(llm_client: Option<LlmClient>) -> Self {
        let llm_configured = llm_client.is_some();
        Self {
            claim_extractor: ClaimExtractor::new(llm_client.clone()),
            empirical_arbiter: Arbiter::new(ArbiterKind::Empirical, llm_client.clone()),
            logical_arbiter: Arbiter::new(ArbiterKind::Logical, llm_client.clone()),
            pragmatic_arbiter: Arbiter::new(ArbiterKind::Pragmatic, llm_client.clone()),
            perspective_generator: PerspectiveGenerator::new(llm_client.clone()),
            response_generator: ResponseGenerator::new(llm_client),
            llm_configured,
        }
    }

    /// Whether an LLM credential is configured (readiness reporting)
    pub fn llm_configured(&self) -> bool {
        self.llm_configured
    }

    /// Analyze a belief statement against the three arbiters
    pub async fn analyze_statement(
        &self,
        statement: &str,
        history: &[ChatTurn],
    ) -> AnalysisOutcome {
        let claims = self.claim_extractor.extract_claims(statement).await;

        let Some(primary_claim) = claims.first() else {
            tracing::warn!("No claims extracted from statement");
            return AnalysisOutcome::NoClaims;
        };
        tracing::info!(claim = %primary_claim, "Analyzing primary claim");

        let (empirical, logical, pragmatic) = tokio::join!(
            self.empirical_arbiter.analyze(primary_claim),
            self.logical_arbiter.analyze(primary_claim),
            self.pragmatic_arbiter.analyze(primary_claim),
        );

        let mut analysis = integrator::integrate(primary_claim, &empirical, &logical, &pragmatic);
        analysis.perspectives = self.perspective_generator.generate(primary_claim).await;

        let response = self
            .response_generator
            .generate(primary_claim, &analysis, history)
            .await;

        tracing::info!("Analysis completed successfully");
        AnalysisOutcome::Analyzed {
            response,
            analyses: vec![analysis],
        }
    }
}
