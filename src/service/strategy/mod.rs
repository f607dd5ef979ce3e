//! Legal strategy analysis contract
//!
//! Turns a free-text strategy description into a structured `LegalAnalysis`
//! via a typed LLM extraction.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::providers::openai;

use crate::model::analysis::LegalAnalysis;
use crate::model::extracted::ExtractedLegalAnalysis;
use crate::service::llm::LlmClient;
use crate::service::strategy::converters::convert_legal_analysis;
use crate::service::strategy::prompts::{ANALYSIS_SYSTEM_PROMPT, build_analysis_prompt};
use crate::service::strategy::validation::validate_extracted_analysis;

/// Environment variable for the analysis model (defaults to GPT-4O-mini if not set)
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Default model for strategy analysis
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

pub mod converters;
pub mod error;
pub mod prompts;
pub mod validation;

pub use error::StrategyAnalysisError;

/// Contract for analyzing a legal strategy
#[async_trait]
pub trait StrategyAnalyzer: Send + Sync {
    /// Analyze the strategy text into a structured breakdown
    async fn analyze(&self, legal_strategy: &str) -> Result<LegalAnalysis, StrategyAnalysisError>;
}

/// LLM-backed strategy analysis service
pub struct StrategyAnalysisService {
    llm_client: Option<LlmClient>,
    model: String,
}

impl StrategyAnalysisService {
    /// Creates a new strategy analysis service
    ///
    /// Optionally uses the ANALYSIS_MODEL env var (defaults to gpt-4o-mini).
    pub fn new(llm_client: Option<LlmClient>) -> Self {
        let model =
            std::env::var(ENV_ANALYSIS_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        if llm_client.is_none() {
            tracing::warn!("OpenAI API key not found, strategy analysis disabled");
        }

        tracing::info!(
            model = %model,
            "Strategy analysis service initialized"
        );

        Self { llm_client, model }
    }
}

#[async_trait]
impl StrategyAnalyzer for StrategyAnalysisService {
    async fn analyze(&self, legal_strategy: &str) -> Result<LegalAnalysis, StrategyAnalysisError> {
        let client = self
            .llm_client
            .as_ref()
            .ok_or(StrategyAnalysisError::NotConfigured)?;

        let start_time = std::time::Instant::now();

        tracing::debug!(
            model = %self.model,
            strategy_length = legal_strategy.len(),
            "Initiating OpenAI API call for strategy analysis"
        );

        let prompt = build_analysis_prompt(legal_strategy);
        let prompt_length = prompt.len();

        let extractor = client
            .openai_client()
            .extractor::<ExtractedLegalAnalysis>(&self.model)
            .preamble(ANALYSIS_SYSTEM_PROMPT)
            .build();

        let extracted = match extractor.extract(&prompt).await {
            Ok(result) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    "OpenAI API call for strategy analysis completed successfully"
                );
                result
            }
            Err(e) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    error = %e,
                    "OpenAI API call for strategy analysis failed"
                );
                return Err(StrategyAnalysisError::AnalysisFailed(e.to_string()));
            }
        };

        // The orchestration layer decides what an incomplete analysis means;
        // here quality issues are only logged.
        let validation = validate_extracted_analysis(&extracted);
        for warning in &validation.warnings {
            tracing::warn!(warning = %warning, "Strategy analysis quality issue");
        }
        for error in &validation.errors {
            tracing::warn!(error = %error, "Strategy analysis incomplete");
        }

        Ok(convert_legal_analysis(extracted))
    }
}
