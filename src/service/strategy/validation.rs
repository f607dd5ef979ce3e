//! Validation logic for LLM-extracted legal analyses
//!
//! The model is trusted to populate every field; these checks flag the
//! responses where it did not so callers can reject or log them.

use crate::model::extracted::ExtractedLegalAnalysis;

/// Result of analysis validation
#[derive(Debug)]
pub struct AnalysisValidationResult {
    /// Whether the analysis passed validation
    pub is_valid: bool,
    /// Critical errors that indicate invalid output
    pub errors: Vec<String>,
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl AnalysisValidationResult {
    /// Create a new validation result with no issues
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error to the validation result
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    /// Add a warning to the validation result
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }
}

/// Validate an extracted legal analysis
///
/// Checks:
/// 1. Strengths field is populated (the minimal well-formedness probe)
/// 2. Summary and statement of facts are populated
/// 3. Cited case laws carry both a name and a relevance note
pub fn validate_extracted_analysis(
    extracted: &ExtractedLegalAnalysis,
) -> AnalysisValidationResult {
    let mut result = AnalysisValidationResult::valid();

    if extracted.strengths.trim().is_empty() {
        result.add_error("Analysis is missing the strengths field".to_string());
    }

    if extracted.summary_of_arguments.trim().is_empty() {
        result.add_warning("Analysis has an empty summary of arguments".to_string());
    }

    if extracted.statement_of_facts.trim().is_empty() {
        result.add_warning("Analysis has an empty statement of facts".to_string());
    }

    if extracted.relevant_case_laws.is_empty() {
        result.add_warning("Analysis cites no case law".to_string());
    }

    for (i, case) in extracted.relevant_case_laws.iter().enumerate() {
        if case.case_name.trim().is_empty() {
            result.add_warning(format!("Case law {} has an empty case name", i + 1));
        }
        if case.relevance.trim().is_empty() {
            result.add_warning(format!(
                "Case law {} ({}) has no relevance note",
                i + 1,
                case.case_name
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::extracted::ExtractedCaseLaw;

    fn sample_analysis() -> ExtractedLegalAnalysis {
        ExtractedLegalAnalysis {
            type_of_arbitration: "Commercial".to_string(),
            damages_claimed: "USD 500,000".to_string(),
            parties: vec!["Claimant Co".to_string(), "Respondent Co".to_string()],
            seat_of_arbitration: "Singapore".to_string(),
            applicable_laws: vec!["Singapore law".to_string()],
            statement_of_facts: "A joint venture soured.".to_string(),
            number_of_expert_witnesses: 0,
            contentions: "Breach of fiduciary duty.".to_string(),
            strengths: "Strong documentary record.".to_string(),
            weaknesses: "No direct witness.".to_string(),
            relevant_case_laws: vec![ExtractedCaseLaw {
                case_name: "Lim v Tan".to_string(),
                relevance: "Fiduciary duty in joint ventures.".to_string(),
            }],
            summary_of_arguments: "Respondent diverted opportunities.".to_string(),
            final_cautions: "Document authenticity may be challenged.".to_string(),
        }
    }

    #[test]
    fn test_complete_analysis_is_valid() {
        let result = validate_extracted_analysis(&sample_analysis());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_strengths_is_an_error() {
        let mut analysis = sample_analysis();
        analysis.strengths = "   ".to_string();

        let result = validate_extracted_analysis(&analysis);
        assert!(!result.is_valid);
        assert!(result.errors[0].contains("strengths"));
    }

    #[test]
    fn test_no_case_law_is_a_warning() {
        let mut analysis = sample_analysis();
        analysis.relevant_case_laws.clear();

        let result = validate_extracted_analysis(&analysis);
        assert!(result.is_valid);
        assert!(!result.warnings.is_empty());
        assert!(result.warnings[0].contains("no case law"));
    }

    #[test]
    fn test_case_law_without_relevance_is_a_warning() {
        let mut analysis = sample_analysis();
        analysis.relevant_case_laws[0].relevance = String::new();

        let result = validate_extracted_analysis(&analysis);
        assert!(result.is_valid);
        assert!(result.warnings[0].contains("relevance"));
    }
}
