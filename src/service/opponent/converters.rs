//! Converters from extracted LLM models to domain models

use crate::model::analysis::{CaseLaw, OpponentPrediction};
use crate::model::extracted::ExtractedOpponentPrediction;

/// Convert an extracted opponent prediction to the domain model
pub fn convert_opponent_prediction(
    extracted: ExtractedOpponentPrediction,
) -> OpponentPrediction {
    OpponentPrediction {
        predicted_counter_arguments: extracted.predicted_counter_arguments,
        potential_tactics: extracted.potential_tactics,
        key_case_law_for_opponent: extracted
            .key_case_law_for_opponent
            .into_iter()
            .map(|c| CaseLaw {
                case_name: c.case_name,
                relevance: c.relevance,
            })
            .collect(),
        overall_opponent_strategy: extracted.overall_opponent_strategy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::ExtractedCaseLaw;

    #[test]
    fn test_convert_preserves_fields() {
        let extracted = ExtractedOpponentPrediction {
            predicted_counter_arguments: "Waiver of the claim.".to_string(),
            potential_tactics: "Bifurcation request.".to_string(),
            key_case_law_for_opponent: vec![ExtractedCaseLaw {
                case_name: "Delta v Epsilon".to_string(),
                relevance: "Waiver by conduct.".to_string(),
            }],
            overall_opponent_strategy: "Undermine jurisdiction first.".to_string(),
        };

        let prediction = convert_opponent_prediction(extracted);

        assert_eq!(prediction.predicted_counter_arguments, "Waiver of the claim.");
        assert_eq!(prediction.key_case_law_for_opponent.len(), 1);
        assert_eq!(
            prediction.key_case_law_for_opponent[0].case_name,
            "Delta v Epsilon"
        );
    }
}
