//! Case database linking contract
//!
//! Links legal arguments to relevant cases in a provided case database and
//! suggests citations. Not reachable from the orchestration action or the
//! API in this revision.

use rig::client::CompletionClient;
use rig::providers::openai;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::service::llm::LlmClient;

/// Environment variable for the case linking model (defaults to GPT-4O-mini if not set)
const ENV_CASELINK_MODEL: &str = "CASELINK_MODEL";

/// Default model for case linking
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

/// System prompt for case linking
const CASELINK_SYSTEM_PROMPT: &str = r#"You are an expert legal assistant.

You will analyze the provided legal arguments and search the case database
for relevant cases that support these arguments.

Your output must be structured JSON only and conform to the requested schema."#;

/// Input for a case linking request
#[derive(Debug, Clone)]
pub struct CaseLinkRequest {
    /// The legal arguments for which to find supporting cases
    pub legal_arguments: String,
    /// The linked case database to search for relevant cases
    pub case_database: String,
}

/// LLM-extractable citation suggestions
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedCaseLinks {
    #[schemars(description = "Suggested case citations to support the legal arguments")]
    pub suggested_citations: Vec<String>,

    #[schemars(description = "Explanation of why these cases are relevant")]
    pub reasoning: String,
}

/// Suggested citations for a set of legal arguments
#[derive(Debug, Clone, Serialize)]
pub struct CaseLinkSuggestions {
    pub suggested_citations: Vec<String>,
    pub reasoning: String,
}

/// Error type for case linking
#[derive(Debug, thiserror::Error)]
pub enum CaseLinkError {
    #[error("LLM case linking failed: {0}")]
    LinkingFailed(String),

    #[error("OpenAI client not configured (missing OPENAI_API_KEY)")]
    NotConfigured,
}

/// LLM-backed citation suggestion service
pub struct CaseLinkService {
    llm_client: Option<LlmClient>,
    model: String,
}

impl CaseLinkService {
    /// Creates a new case linking service
    pub fn new(llm_client: Option<LlmClient>) -> Self {
        let model =
            std::env::var(ENV_CASELINK_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self { llm_client, model }
    }

    /// Suggest citations from the case database for the given arguments
    pub async fn link_case_data(
        &self,
        request: &CaseLinkRequest,
    ) -> Result<CaseLinkSuggestions, CaseLinkError> {
        let client = self
            .llm_client
            .as_ref()
            .ok_or(CaseLinkError::NotConfigured)?;

        let prompt = build_caselink_prompt(request);

        let extractor = client
            .openai_client()
            .extractor::<ExtractedCaseLinks>(&self.model)
            .preamble(CASELINK_SYSTEM_PROMPT)
            .build();

        let extracted = extractor
            .extract(&prompt)
            .await
            .map_err(|e| CaseLinkError::LinkingFailed(e.to_string()))?;

        Ok(CaseLinkSuggestions {
            suggested_citations: extracted.suggested_citations,
            reasoning: extracted.reasoning,
        })
    }
}

/// Build the case linking prompt
fn build_caselink_prompt(request: &CaseLinkRequest) -> String {
    format!(
        r#"Provide a list of suggested case citations and explain why these cases are relevant.

Legal Arguments:
{legal_arguments}

Case Database:
{case_database}"#,
        legal_arguments = request.legal_arguments,
        case_database = request.case_database
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_interpolates_both_inputs() {
        let prompt = build_caselink_prompt(&CaseLinkRequest {
            legal_arguments: "Estoppel bars the defense.".to_string(),
            case_database: "Case A; Case B; Case C".to_string(),
        });

        assert!(prompt.contains("Estoppel bars the defense."));
        assert!(prompt.contains("Case A; Case B; Case C"));
    }
}
