//! Analysis orchestration
//!
//! One entry point per user turn: reject empty input, run the strategy
//! analysis and the opponent prediction concurrently, and join them into a
//! single aggregate or a single error. The action is stateless between
//! invocations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::analysis::FullAnalysis;
use crate::service::opponent::OpponentPredictor;
use crate::service::strategy::StrategyAnalyzer;

/// Error type for the aggregate analysis action
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// No input after trimming; nothing was sent to the LLM.
    #[error("Legal strategy cannot be empty")]
    EmptyStrategy,

    /// The analysis call succeeded but the result is structurally incomplete.
    #[error("Received an invalid response from the analysis service")]
    InvalidAnalysis,

    /// The prediction call succeeded but the result is structurally incomplete.
    #[error("Received an invalid response from the prediction service")]
    InvalidPrediction,

    /// One of the underlying LLM calls failed.
    #[error("An unexpected error occurred: {0}")]
    Upstream(String),
}

/// Provider of the aggregate analysis, as consumed by the conversation layer
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn get_analysis(&self, strategy: &str) -> Result<FullAnalysis, AnalysisError>;
}

/// Orchestrates the two analysis contracts for one turn
pub struct AnalysisOrchestrator {
    analyzer: Arc<dyn StrategyAnalyzer>,
    predictor: Arc<dyn OpponentPredictor>,
}

impl AnalysisOrchestrator {
    pub fn new(analyzer: Arc<dyn StrategyAnalyzer>, predictor: Arc<dyn OpponentPredictor>) -> Self {
        Self {
            analyzer,
            predictor,
        }
    }
}

/// Message of the originating failure, or a generic fallback when the
/// failure carries no message.
fn upstream_message(error: impl std::fmt::Display) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        "An unknown error occurred".to_string()
    } else {
        message
    }
}

#[async_trait]
impl AnalysisProvider for AnalysisOrchestrator {
    async fn get_analysis(&self, strategy: &str) -> Result<FullAnalysis, AnalysisError> {
        if strategy.trim().is_empty() {
            return Err(AnalysisError::EmptyStrategy);
        }

        let start_time = std::time::Instant::now();

        tracing::debug!(
            strategy_length = strategy.len(),
            "Starting aggregate strategy analysis"
        );

        // The two contracts depend only on the same input string; no data
        // dependency between them, so they run concurrently and the turn
        // fails if either fails.
        let (analysis, prediction) = tokio::join!(
            self.analyzer.analyze(strategy),
            self.predictor.predict(strategy),
        );

        let analysis = analysis.map_err(|e| AnalysisError::Upstream(upstream_message(e)))?;
        let prediction = prediction.map_err(|e| AnalysisError::Upstream(upstream_message(e)))?;

        // Minimal well-formedness probes: a structurally incomplete success
        // is a failure even though no call rejected.
        if analysis.strengths.trim().is_empty() {
            tracing::warn!("Analysis result is missing strengths, rejecting turn");
            return Err(AnalysisError::InvalidAnalysis);
        }
        if prediction.overall_opponent_strategy.trim().is_empty() {
            tracing::warn!("Prediction result is blank, rejecting turn");
            return Err(AnalysisError::InvalidPrediction);
        }

        tracing::info!(
            elapsed_ms = start_time.elapsed().as_millis(),
            cited_cases = analysis.relevant_case_laws.len(),
            "Aggregate strategy analysis completed"
        );

        Ok(FullAnalysis {
            legal_analysis: analysis,
            opponent_prediction: prediction,
        })
    }
}
