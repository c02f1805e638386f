//! REST API endpoint for belief analysis

use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::api::error::ApiError;
use crate::model::{ChatTurn, IntegratedAnalysis};
use crate::service::{AnalysisOutcome, AnalysisService};

/// Apology returned when no claim could be identified
const NO_CLAIMS_RESPONSE: &str = "I couldn't identify a specific claim to analyze in your \
statement. Could you rephrase it as a more specific belief or claim?";

/// Request body for belief analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// The belief statement to analyze
    pub statement: String,
    /// Previous conversation turns, oldest first
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Response envelope, in the wire format the frontend expects
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    /// Assistant's Socratic follow-up to the user
    #[serde(rename = "Response")]
    pub response: String,
    /// Integrated analyses, one per analyzed claim (empty when no claims)
    #[serde(rename = "AnalysisJSON")]
    pub analysis: Vec<IntegratedAnalysis>,
}

/// Analyze a belief statement using the multi-arbiter system
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Statement analyzed (or no claims identified)", body = AnalyzeResponse),
        (status = 400, description = "Missing or empty statement"),
        (status = 500, description = "Internal server error")
    ),
    tag = "analysis"
)]
#[post("/api/analyze")]
pub async fn analyze(
    service: web::Data<AnalysisService>,
    body: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let statement = body.statement.trim();
    if statement.is_empty() {
        return Err(ApiError::BadRequest("No statement provided".to_string()));
    }

    tracing::info!(
        statement_length = statement.len(),
        history_turns = body.history.len(),
        "Received statement for analysis"
    );

    let envelope = match service.analyze_statement(statement, &body.history).await {
        AnalysisOutcome::NoClaims => AnalyzeResponse {
            response: NO_CLAIMS_RESPONSE.to_string(),
            analysis: Vec::new(),
        },
        AnalysisOutcome::Analyzed { response, analyses } => AnalyzeResponse {
            response,
            analysis: analyses,
        },
    };

    Ok(HttpResponse::Ok().json(envelope))
}

/// OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    paths(
        analyze,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(AnalyzeRequest, AnalyzeResponse, ChatTurn, IntegratedAnalysis)),
    tags(
        (name = "analysis", description = "Belief analysis"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "Belief Explorer API",
        description = "Multi-arbiter belief analysis backed by a hosted LLM"
    )
)]
pub struct ApiDoc;

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(analyze);
}
