//! Opponent strategy prediction contract
//!
//! Reads the user's strategy from the opposing side's perspective and
//! predicts the counter-strategy.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::providers::openai;

use crate::model::analysis::OpponentPrediction;
use crate::model::extracted::ExtractedOpponentPrediction;
use crate::service::llm::LlmClient;
use crate::service::opponent::converters::convert_opponent_prediction;
use crate::service::opponent::prompts::{PREDICTION_SYSTEM_PROMPT, build_prediction_prompt};

/// Environment variable for the prediction model (defaults to GPT-4O-mini if not set)
const ENV_OPPONENT_MODEL: &str = "OPPONENT_MODEL";

/// Default model for opponent prediction (can be different from analysis)
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

pub mod converters;
pub mod error;
pub mod prompts;

pub use error::OpponentPredictionError;

/// Contract for predicting the opponent's strategy
#[async_trait]
pub trait OpponentPredictor: Send + Sync {
    /// Predict the opponent's counter-strategy for the given strategy text
    async fn predict(
        &self,
        legal_strategy: &str,
    ) -> Result<OpponentPrediction, OpponentPredictionError>;
}

/// LLM-backed opponent prediction service
pub struct OpponentStrategyService {
    llm_client: Option<LlmClient>,
    model: String,
}

impl OpponentStrategyService {
    /// Creates a new opponent prediction service
    ///
    /// Optionally uses the OPPONENT_MODEL env var (defaults to gpt-4o-mini).
    pub fn new(llm_client: Option<LlmClient>) -> Self {
        let model =
            std::env::var(ENV_OPPONENT_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        if llm_client.is_none() {
            tracing::warn!("OpenAI API key not found, opponent prediction disabled");
        }

        tracing::info!(
            model = %model,
            "Opponent prediction service initialized"
        );

        Self { llm_client, model }
    }
}

#[async_trait]
impl OpponentPredictor for OpponentStrategyService {
    async fn predict(
        &self,
        legal_strategy: &str,
    ) -> Result<OpponentPrediction, OpponentPredictionError> {
        let client = self
            .llm_client
            .as_ref()
            .ok_or(OpponentPredictionError::NotConfigured)?;

        let start_time = std::time::Instant::now();

        tracing::debug!(
            model = %self.model,
            strategy_length = legal_strategy.len(),
            "Initiating OpenAI API call for opponent prediction"
        );

        let prompt = build_prediction_prompt(legal_strategy);
        let prompt_length = prompt.len();

        let extractor = client
            .openai_client()
            .extractor::<ExtractedOpponentPrediction>(&self.model)
            .preamble(PREDICTION_SYSTEM_PROMPT)
            .build();

        let extracted = match extractor.extract(&prompt).await {
            Ok(result) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    prompt_length = prompt_length,
                    "OpenAI API call for opponent prediction completed successfully"
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
                    "OpenAI API call for opponent prediction failed"
                );
                return Err(OpponentPredictionError::PredictionFailed(e.to_string()));
            }
        };

        Ok(convert_opponent_prediction(extracted))
    }
}
