//! Prompts for opponent strategy prediction

/// System prompt for opponent prediction
pub const PREDICTION_SYSTEM_PROMPT: &str = r#"You are an expert legal strategist playing the role of opposing counsel.

You have been given your opponent's legal strategy. Your task is to analyze
it from a critical perspective and predict the counter-strategy you would
employ.

You must:
- Attack the weakest points of the provided strategy
- Consider both substantive counter-arguments and procedural tactics
- Cite real, verifiable case law only

Your output must be structured JSON only and conform to the requested schema."#;

/// Build the prediction prompt from the user's strategy text
pub fn build_prediction_prompt(legal_strategy: &str) -> String {
    format!(
        r#"Analyze the following legal strategy:
{legal_strategy}

Structure your prediction in a valid JSON object with the following fields:
- predicted_counter_arguments: What are the main arguments you would use to counter their position?
- potential_tactics: What procedural or strategic tactics would you use (e.g., motions, discovery requests, settlement approaches)?
- key_case_law_for_opponent: What key case laws would you cite to support your counter-arguments? Provide the case name and its relevance.
- overall_opponent_strategy: Summarize your overall strategic approach to defeating the user's case."#,
        legal_strategy = legal_strategy
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolates_strategy() {
        let prompt = build_prediction_prompt("We will rely on the arbitration clause.");
        assert!(prompt.contains("We will rely on the arbitration clause."));
        assert!(prompt.contains("overall_opponent_strategy"));
    }
}
