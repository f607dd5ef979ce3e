//! Converters from extracted LLM models to domain models

use crate::model::analysis::{CaseLaw, LegalAnalysis};
use crate::model::extracted::{ExtractedCaseLaw, ExtractedLegalAnalysis};

/// Convert an extracted case law reference to the domain model
pub fn convert_case_law(extracted: ExtractedCaseLaw) -> CaseLaw {
    CaseLaw {
        case_name: extracted.case_name,
        relevance: extracted.relevance,
    }
}

/// Convert an extracted legal analysis to the domain model
pub fn convert_legal_analysis(extracted: ExtractedLegalAnalysis) -> LegalAnalysis {
    LegalAnalysis {
        type_of_arbitration: extracted.type_of_arbitration,
        damages_claimed: extracted.damages_claimed,
        parties: extracted.parties,
        seat_of_arbitration: extracted.seat_of_arbitration,
        applicable_laws: extracted.applicable_laws,
        statement_of_facts: extracted.statement_of_facts,
        number_of_expert_witnesses: extracted.number_of_expert_witnesses,
        contentions: extracted.contentions,
        strengths: extracted.strengths,
        weaknesses: extracted.weaknesses,
        relevant_case_laws: extracted
            .relevant_case_laws
            .into_iter()
            .map(convert_case_law)
            .collect(),
        summary_of_arguments: extracted.summary_of_arguments,
        final_cautions: extracted.final_cautions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_preserves_fields() {
        let extracted = ExtractedLegalAnalysis {
            type_of_arbitration: "Commercial".to_string(),
            damages_claimed: "EUR 2,500,000".to_string(),
            parties: vec!["Alpha GmbH".to_string(), "Beta SA".to_string()],
            seat_of_arbitration: "Paris".to_string(),
            applicable_laws: vec!["French law".to_string()],
            statement_of_facts: "Dispute over a distribution agreement.".to_string(),
            number_of_expert_witnesses: 1,
            contentions: "Wrongful termination.".to_string(),
            strengths: "Documented course of dealing.".to_string(),
            weaknesses: "Ambiguous termination clause.".to_string(),
            relevant_case_laws: vec![ExtractedCaseLaw {
                case_name: "Alpha v Gamma".to_string(),
                relevance: "Termination notice requirements.".to_string(),
            }],
            summary_of_arguments: "Termination breached the agreement.".to_string(),
            final_cautions: "Counterclaim risk.".to_string(),
        };

        let analysis = convert_legal_analysis(extracted);

        assert_eq!(analysis.type_of_arbitration, "Commercial");
        assert_eq!(analysis.parties.len(), 2);
        assert_eq!(analysis.relevant_case_laws.len(), 1);
        assert_eq!(analysis.relevant_case_laws[0].case_name, "Alpha v Gamma");
        assert_eq!(analysis.number_of_expert_witnesses, 1);
    }
}
