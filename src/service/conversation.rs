//! Conversation submission pipeline
//!
//! Holds the in-memory conversations and drives one turn end to end:
//! terms gate, attachment extraction, loading placeholder, aggregate
//! analysis, and resolution or failure. A failed turn leaves the log
//! consistent: the placeholder is removed and no assistant message is
//! appended.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::analysis::CaseLaw;
use crate::model::conversation::{Conversation, Message};
use crate::service::extraction::{extract_text, ExtractionError};
use crate::service::orchestrator::{AnalysisError, AnalysisProvider};
use crate::service::terms::TermsStore;

/// An uploaded file accompanying a submission
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// One submission: typed text, an attachment, or both
#[derive(Debug, Clone, Default)]
pub struct NewTurn {
    pub text: Option<String>,
    pub attachment: Option<Attachment>,
}

/// Error type for turn submission
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("You must accept the terms and conditions to use the app")]
    TermsNotAccepted,

    #[error("Please provide a legal strategy or attach a document")]
    InputRequired,

    #[error("Attachment exceeds the {limit} byte limit")]
    AttachmentTooLarge { limit: usize },

    #[error(transparent)]
    Attachment(#[from] ExtractionError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Conversation not found: {0}")]
    NotFound(Uuid),
}

/// In-memory conversation registry and submission pipeline
pub struct ConversationService {
    provider: Arc<dyn AnalysisProvider>,
    terms: Arc<TermsStore>,
    conversations: RwLock<HashMap<Uuid, Conversation>>,
    max_attachment_bytes: usize,
}

impl ConversationService {
    pub fn new(
        provider: Arc<dyn AnalysisProvider>,
        terms: Arc<TermsStore>,
        max_attachment_bytes: usize,
    ) -> Self {
        Self {
            provider,
            terms,
            conversations: RwLock::new(HashMap::new()),
            max_attachment_bytes,
        }
    }

    /// Create a new conversation and return its id
    pub async fn create(&self) -> Uuid {
        let conversation = Conversation::new();
        let id = conversation.id;
        self.conversations.write().await.insert(id, conversation);
        tracing::debug!(conversation = %id, "Conversation created");
        id
    }

    /// Snapshot of a conversation, if it exists
    pub async fn get(&self, id: Uuid) -> Option<Conversation> {
        self.conversations.read().await.get(&id).cloned()
    }

    /// The cached cited-case list of a conversation's latest turn
    pub async fn cited_cases(&self, id: Uuid) -> Result<Vec<CaseLaw>, SubmissionError> {
        self.conversations
            .read()
            .await
            .get(&id)
            .map(|c| c.cited_cases().to_vec())
            .ok_or(SubmissionError::NotFound(id))
    }

    /// Submit one turn and drive it to resolution
    ///
    /// Rejections before any state transition: terms not accepted, blank
    /// submission, oversized or unreadable attachment, unknown
    /// conversation.
    pub async fn submit(
        &self,
        conversation_id: Uuid,
        turn: NewTurn,
    ) -> Result<Message, SubmissionError> {
        if !self.terms.is_accepted() {
            return Err(SubmissionError::TermsNotAccepted);
        }

        let typed_text = turn.text.unwrap_or_default();
        if typed_text.trim().is_empty() && turn.attachment.is_none() {
            return Err(SubmissionError::InputRequired);
        }

        // Extraction happens before the conversation is touched, so a bad
        // file aborts the submission with nothing appended.
        let mut prompt_content = typed_text.clone();
        let mut user_text = typed_text.clone();
        if let Some(attachment) = &turn.attachment {
            if attachment.bytes.len() > self.max_attachment_bytes {
                return Err(SubmissionError::AttachmentTooLarge {
                    limit: self.max_attachment_bytes,
                });
            }

            let extracted = extract_text(&attachment.filename, &attachment.bytes)?;
            prompt_content = format!("{}\n\n{}", extracted, typed_text);

            if typed_text.trim().is_empty() {
                user_text = format!("File attached: {}", attachment.filename);
            }
        }

        {
            let mut conversations = self.conversations.write().await;
            let conversation = conversations
                .get_mut(&conversation_id)
                .ok_or(SubmissionError::NotFound(conversation_id))?;
            conversation.begin_turn(Message::user(user_text));
        }

        // The lock is not held across the LLM round trip; the placeholder
        // marks the in-flight turn in the log.
        match self.provider.get_analysis(&prompt_content).await {
            Ok(full_analysis) => {
                let message = Message::assistant(full_analysis);
                let mut conversations = self.conversations.write().await;
                let conversation = conversations
                    .get_mut(&conversation_id)
                    .ok_or(SubmissionError::NotFound(conversation_id))?;
                conversation.resolve_turn(message.clone());
                tracing::info!(
                    conversation = %conversation_id,
                    cited_cases = message.relevant_case_laws.len(),
                    "Turn resolved"
                );
                Ok(message)
            }
            Err(e) => {
                let mut conversations = self.conversations.write().await;
                if let Some(conversation) = conversations.get_mut(&conversation_id) {
                    conversation.fail_turn();
                }
                tracing::warn!(conversation = %conversation_id, error = %e, "Turn failed");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::model::analysis::{FullAnalysis, LegalAnalysis, OpponentPrediction};
    use crate::model::conversation::MessageRole;

    fn sample_full_analysis(cases: Vec<CaseLaw>) -> FullAnalysis {
        FullAnalysis {
            legal_analysis: LegalAnalysis {
                type_of_arbitration: "Commercial".to_string(),
                damages_claimed: "USD 1,000,000".to_string(),
                parties: vec!["Acme Corp".to_string()],
                seat_of_arbitration: "London".to_string(),
                applicable_laws: vec!["English law".to_string()],
                statement_of_facts: "A supply contract dispute.".to_string(),
                number_of_expert_witnesses: 2,
                contentions: "Breach of delivery obligations.".to_string(),
                strengths: "Clear contractual language.".to_string(),
                weaknesses: "Late notice of claim.".to_string(),
                relevant_case_laws: cases,
                summary_of_arguments: "Claimant seeks damages.".to_string(),
                final_cautions: "Limitation period is close.".to_string(),
            },
            opponent_prediction: OpponentPrediction {
                predicted_counter_arguments: "Force majeure.".to_string(),
                potential_tactics: "Jurisdictional challenge.".to_string(),
                key_case_law_for_opponent: vec![],
                overall_opponent_strategy: "Delay and settle.".to_string(),
            },
        }
    }

    /// Provider stub recording the prompts it receives
    struct StubProvider {
        calls: AtomicUsize,
        last_prompt: std::sync::Mutex<Option<String>>,
        response: Result<FullAnalysis, String>,
    }

    impl StubProvider {
        fn ok(analysis: FullAnalysis) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(None),
                response: Ok(analysis),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                last_prompt: std::sync::Mutex::new(None),
                response: Err(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl AnalysisProvider for StubProvider {
        async fn get_analysis(&self, strategy: &str) -> Result<FullAnalysis, AnalysisError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(strategy.to_string());
            self.response.clone().map_err(AnalysisError::Upstream)
        }
    }

    fn accepted_terms() -> (tempfile::TempDir, Arc<TermsStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = TermsStore::open(dir.path().join("terms.json"));
        store.set_accepted(true).unwrap();
        (dir, Arc::new(store))
    }

    fn pending_terms() -> (tempfile::TempDir, Arc<TermsStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = TermsStore::open(dir.path().join("terms.json"));
        (dir, Arc::new(store))
    }

    const MAX_BYTES: usize = 10 * 1024 * 1024;

    #[tokio::test]
    async fn test_terms_gate_blocks_submission_without_any_call() {
        let provider = Arc::new(StubProvider::ok(sample_full_analysis(vec![])));
        let (_dir, terms) = pending_terms();
        let service = ConversationService::new(provider.clone(), terms, MAX_BYTES);
        let id = service.create().await;

        let result = service
            .submit(
                id,
                NewTurn {
                    text: Some("a perfectly good strategy".to_string()),
                    attachment: None,
                },
            )
            .await;

        assert!(matches!(result, Err(SubmissionError::TermsNotAccepted)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(service.get(id).await.unwrap().messages().is_empty());
    }

    #[tokio::test]
    async fn test_blank_submission_is_rejected() {
        let provider = Arc::new(StubProvider::ok(sample_full_analysis(vec![])));
        let (_dir, terms) = accepted_terms();
        let service = ConversationService::new(provider.clone(), terms, MAX_BYTES);
        let id = service.create().await;

        let result = service
            .submit(
                id,
                NewTurn {
                    text: Some("   ".to_string()),
                    attachment: None,
                },
            )
            .await;

        assert!(matches!(result, Err(SubmissionError::InputRequired)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_turn_appends_user_and_assistant() {
        let cases = vec![CaseLaw {
            case_name: "Smith v Jones".to_string(),
            relevance: "Similar breach pattern.".to_string(),
        }];
        let provider = Arc::new(StubProvider::ok(sample_full_analysis(cases.clone())));
        let (_dir, terms) = accepted_terms();
        let service = ConversationService::new(provider, terms, MAX_BYTES);
        let id = service.create().await;

        let message = service
            .submit(
                id,
                NewTurn {
                    text: Some("Claimant relies on clause 12.".to_string()),
                    attachment: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.relevant_case_laws, cases);

        let conversation = service.get(id).await.unwrap();
        let roles: Vec<_> = conversation.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![MessageRole::User, MessageRole::Assistant]);
        assert_eq!(service.cited_cases(id).await.unwrap(), cases);
    }

    #[tokio::test]
    async fn test_failed_turn_removes_placeholder_and_appends_nothing() {
        let provider = Arc::new(StubProvider::failing("provider unreachable"));
        let (_dir, terms) = accepted_terms();
        let service = ConversationService::new(provider, terms, MAX_BYTES);
        let id = service.create().await;

        let result = service
            .submit(
                id,
                NewTurn {
                    text: Some("a strategy".to_string()),
                    attachment: None,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(SubmissionError::Analysis(AnalysisError::Upstream(_)))
        ));

        let conversation = service.get(id).await.unwrap();
        let roles: Vec<_> = conversation.messages().iter().map(|m| m.role).collect();
        // The user message stays; the placeholder is gone, nothing else appended.
        assert_eq!(roles, vec![MessageRole::User]);
    }

    #[tokio::test]
    async fn test_unsupported_attachment_aborts_before_any_call() {
        let provider = Arc::new(StubProvider::ok(sample_full_analysis(vec![])));
        let (_dir, terms) = accepted_terms();
        let service = ConversationService::new(provider.clone(), terms, MAX_BYTES);
        let id = service.create().await;

        let result = service
            .submit(
                id,
                NewTurn {
                    text: None,
                    attachment: Some(Attachment {
                        filename: "notes.xyz".to_string(),
                        bytes: b"whatever".to_vec(),
                    }),
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(SubmissionError::Attachment(
                ExtractionError::UnsupportedType(_)
            ))
        ));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
        assert!(service.get(id).await.unwrap().messages().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_attachment_is_rejected() {
        let provider = Arc::new(StubProvider::ok(sample_full_analysis(vec![])));
        let (_dir, terms) = accepted_terms();
        let service = ConversationService::new(provider.clone(), terms, 8);
        let id = service.create().await;

        let result = service
            .submit(
                id,
                NewTurn {
                    text: None,
                    attachment: Some(Attachment {
                        filename: "strategy.txt".to_string(),
                        bytes: b"far too many bytes".to_vec(),
                    }),
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(SubmissionError::AttachmentTooLarge { limit: 8 })
        ));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_attachment_text_is_prepended_to_prompt() {
        let provider = Arc::new(StubProvider::ok(sample_full_analysis(vec![])));
        let (_dir, terms) = accepted_terms();
        let service = ConversationService::new(provider.clone(), terms, MAX_BYTES);
        let id = service.create().await;

        service
            .submit(
                id,
                NewTurn {
                    text: Some("Focus on the delivery terms.".to_string()),
                    attachment: Some(Attachment {
                        filename: "contract.txt".to_string(),
                        bytes: b"Clause 12: delivery within 30 days.".to_vec(),
                    }),
                },
            )
            .await
            .unwrap();

        let prompt = provider.last_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(
            prompt,
            "Clause 12: delivery within 30 days.\n\nFocus on the delivery terms."
        );
    }

    #[tokio::test]
    async fn test_attachment_only_turn_labels_user_message_with_filename() {
        let provider = Arc::new(StubProvider::ok(sample_full_analysis(vec![])));
        let (_dir, terms) = accepted_terms();
        let service = ConversationService::new(provider, terms, MAX_BYTES);
        let id = service.create().await;

        service
            .submit(
                id,
                NewTurn {
                    text: None,
                    attachment: Some(Attachment {
                        filename: "contract.txt".to_string(),
                        bytes: b"Clause 12: delivery within 30 days.".to_vec(),
                    }),
                },
            )
            .await
            .unwrap();

        let conversation = service.get(id).await.unwrap();
        assert_eq!(
            conversation.messages()[0].text.as_deref(),
            Some("File attached: contract.txt")
        );
    }

    #[tokio::test]
    async fn test_unknown_conversation_is_not_found() {
        let provider = Arc::new(StubProvider::ok(sample_full_analysis(vec![])));
        let (_dir, terms) = accepted_terms();
        let service = ConversationService::new(provider, terms, MAX_BYTES);

        let result = service
            .submit(
                Uuid::new_v4(),
                NewTurn {
                    text: Some("a strategy".to_string()),
                    attachment: None,
                },
            )
            .await;

        assert!(matches!(result, Err(SubmissionError::NotFound(_))));
    }
}
