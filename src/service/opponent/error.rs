//! Error types for opponent strategy prediction

use thiserror::Error;

/// Error type for opponent strategy prediction
#[derive(Debug, Error)]
pub enum OpponentPredictionError {
    #[error("LLM prediction failed: {0}")]
    PredictionFailed(String),

    #[error("OpenAI client not configured (missing OPENAI_API_KEY)")]
    NotConfigured,
}
