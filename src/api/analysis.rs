//! REST API endpoint for the aggregate strategy analysis

use std::sync::Arc;

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::service::orchestrator::{AnalysisOrchestrator, AnalysisProvider};

/// Request body for an analysis
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalysisRequest {
    /// The legal strategy to analyze, including case information
    pub strategy: String,
}

/// Run the aggregate analysis for a strategy description
///
/// Issues the strategy analysis and the opponent prediction concurrently
/// and returns both, or a single tagged error.
#[utoipa::path(
    post,
    path = "/v1/analysis",
    request_body = AnalysisRequest,
    responses(
        (status = 200, description = "Aggregate analysis produced", body = crate::model::FullAnalysis),
        (status = 400, description = "Empty strategy", body = crate::api::error::ErrorResponse),
        (status = 502, description = "LLM call failed or returned an invalid response", body = crate::api::error::ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/v1/analysis")]
pub async fn get_analysis(
    orchestrator: web::Data<Arc<AnalysisOrchestrator>>,
    body: web::Json<AnalysisRequest>,
) -> Result<HttpResponse, ApiError> {
    let full_analysis = orchestrator.get_analysis(&body.strategy).await?;
    Ok(HttpResponse::Ok().json(full_analysis))
}

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_analysis);
}
