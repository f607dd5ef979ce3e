//! Error types for strategy analysis

use thiserror::Error;

/// Error type for legal strategy analysis
#[derive(Debug, Error)]
pub enum StrategyAnalysisError {
    #[error("LLM analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("OpenAI client not configured (missing OPENAI_API_KEY)")]
    NotConfigured,
}
