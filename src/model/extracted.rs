//! LLM-extractable shapes for the analysis contracts
//!
//! These structs define the JSON schema handed to the model. They are
//! converted to the domain models in `model::analysis` after extraction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A cited case as returned by the model
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedCaseLaw {
    #[schemars(description = "The full name or citation of the case law")]
    pub case_name: String,

    #[schemars(
        description = "A brief explanation of why this case is relevant to the provided legal strategy"
    )]
    pub relevance: String,
}

/// Complete legal strategy breakdown from the LLM
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedLegalAnalysis {
    #[schemars(description = "The type of arbitration (e.g., Commercial, Investment Treaty)")]
    pub type_of_arbitration: String,

    #[schemars(description = "The amount and currency of damages claimed")]
    pub damages_claimed: String,

    #[schemars(description = "The names of the parties involved in the arbitration")]
    pub parties: Vec<String>,

    #[schemars(description = "The legal place or seat of the arbitration")]
    pub seat_of_arbitration: String,

    #[schemars(description = "The laws applicable to the substance of the dispute")]
    pub applicable_laws: Vec<String>,

    #[schemars(description = "A neutral summary of the key facts of the case")]
    pub statement_of_facts: String,

    #[schemars(description = "The number of expert witnesses involved")]
    pub number_of_expert_witnesses: u32,

    #[schemars(description = "The main contentions or arguments of the case")]
    pub contentions: String,

    #[schemars(description = "Strengths in the provided legal argument or case position")]
    pub strengths: String,

    #[schemars(description = "Weaknesses in the provided legal argument or case position")]
    pub weaknesses: String,

    #[schemars(
        description = "List of relevant case laws with brief explanations of their relevance"
    )]
    pub relevant_case_laws: Vec<ExtractedCaseLaw>,

    #[schemars(description = "A concise summary of the overall legal arguments")]
    pub summary_of_arguments: String,

    #[schemars(description = "Final cautions or potential risks to be aware of")]
    pub final_cautions: String,
}

/// Opponent strategy prediction from the LLM
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedOpponentPrediction {
    #[schemars(description = "The likely counter-arguments the opponent will raise")]
    pub predicted_counter_arguments: String,

    #[schemars(
        description = "Potential procedural or strategic tactics the opponent might employ"
    )]
    pub potential_tactics: String,

    #[schemars(
        description = "Key case laws the opponent is likely to rely on, with explanations"
    )]
    pub key_case_law_for_opponent: Vec<ExtractedCaseLaw>,

    #[schemars(description = "A summary of the opponent's most probable overall strategy")]
    pub overall_opponent_strategy: String,
}
