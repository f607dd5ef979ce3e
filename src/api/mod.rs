pub mod analysis;
pub mod conversation;
pub mod error;
pub mod health;
pub mod openapi;
pub mod terms;

use utoipa::OpenApi;

/// OpenAPI document for the service
#[derive(OpenApi)]
#[openapi(
    paths(
        analysis::get_analysis,
        conversation::create_conversation,
        conversation::get_conversation,
        conversation::submit_message,
        conversation::get_cited_cases,
        terms::get_terms,
        terms::put_terms,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        analysis::AnalysisRequest,
        conversation::ConversationCreated,
        terms::TermsResponse,
        error::ErrorResponse,
        health::HealthStatus,
        health::ReadinessStatus,
        health::DependencyHealth,
        crate::model::CaseLaw,
        crate::model::LegalAnalysis,
        crate::model::OpponentPrediction,
        crate::model::FullAnalysis,
        crate::model::Message,
        crate::model::MessageRole,
        crate::model::Conversation,
    )),
    tags(
        (name = "analysis", description = "Aggregate strategy analysis"),
        (name = "conversations", description = "Conversation log and turn submission"),
        (name = "terms", description = "Terms-acceptance flag"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
