//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Standard error response format
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Conversation not found (404)
    #[error("Conversation not found: {0}")]
    ConversationNotFound(String),

    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Terms of use not accepted (403)
    #[error("{0}")]
    TermsNotAccepted(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// LLM backend error (502)
    #[error("Analysis service error: {0}")]
    AnalysisService(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ConversationNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::TermsNotAccepted(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::AnalysisService(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::ConversationNotFound(_) => "conversation_not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::TermsNotAccepted(_) => "terms_not_accepted",
            ApiError::Internal(_) => "internal_error",
            ApiError::AnalysisService(_) => "analysis_service_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<crate::service::orchestrator::AnalysisError> for ApiError {
    fn from(err: crate::service::orchestrator::AnalysisError) -> Self {
        use crate::service::orchestrator::AnalysisError;
        match err {
            AnalysisError::EmptyStrategy => ApiError::BadRequest(err.to_string()),
            AnalysisError::InvalidAnalysis
            | AnalysisError::InvalidPrediction
            | AnalysisError::Upstream(_) => ApiError::AnalysisService(err.to_string()),
        }
    }
}

impl From<crate::service::conversation::SubmissionError> for ApiError {
    fn from(err: crate::service::conversation::SubmissionError) -> Self {
        use crate::service::conversation::SubmissionError;
        match err {
            SubmissionError::TermsNotAccepted => ApiError::TermsNotAccepted(err.to_string()),
            SubmissionError::InputRequired
            | SubmissionError::AttachmentTooLarge { .. }
            | SubmissionError::Attachment(_) => ApiError::BadRequest(err.to_string()),
            SubmissionError::Analysis(e) => e.into(),
            SubmissionError::NotFound(id) => ApiError::ConversationNotFound(id.to_string()),
        }
    }
}

impl From<crate::service::terms::TermsError> for ApiError {
    fn from(err: crate::service::terms::TermsError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
