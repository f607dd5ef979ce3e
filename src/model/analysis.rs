//! Domain models for strategy analysis results

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A cited case with an explanation of why it matters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CaseLaw {
    /// Full name or citation of the case
    pub case_name: String,
    /// Why this case is relevant to the strategy under analysis
    pub relevance: String,
}

/// Structured breakdown of the user's legal strategy
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LegalAnalysis {
    /// Type of arbitration (e.g. Commercial, Investment Treaty)
    pub type_of_arbitration: String,
    /// Amount and currency of damages claimed
    pub damages_claimed: String,
    /// Names of the parties involved in the arbitration
    pub parties: Vec<String>,
    /// Legal place or seat of the arbitration
    pub seat_of_arbitration: String,
    /// Laws applicable to the substance of the dispute
    pub applicable_laws: Vec<String>,
    /// Neutral summary of the key facts of the case
    pub statement_of_facts: String,
    /// Number of expert witnesses involved
    pub number_of_expert_witnesses: u32,
    /// Main contentions or arguments of the case
    pub contentions: String,
    /// Strengths in the provided legal position
    pub strengths: String,
    /// Weaknesses in the provided legal position
    pub weaknesses: String,
    /// Case laws relevant to the strategy, with relevance notes
    pub relevant_case_laws: Vec<CaseLaw>,
    /// Concise summary of the overall legal arguments
    pub summary_of_arguments: String,
    /// Final cautions or potential risks to be aware of
    pub final_cautions: String,
}

/// Predicted strategy of the opposing side
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OpponentPrediction {
    /// Counter-arguments the opponent is likely to raise
    pub predicted_counter_arguments: String,
    /// Procedural or strategic tactics the opponent might employ
    pub potential_tactics: String,
    /// Case laws the opponent is likely to rely on
    pub key_case_law_for_opponent: Vec<CaseLaw>,
    /// Summary of the opponent's most probable overall strategy
    pub overall_opponent_strategy: String,
}

/// Aggregate result of one analysis turn
///
/// Produced atomically: both halves come from the same submission and are
/// never partially populated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FullAnalysis {
    pub legal_analysis: LegalAnalysis,
    pub opponent_prediction: OpponentPrediction,
}
