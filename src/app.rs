//! Application state and service initialization
//!
//! This module centralizes all service initialization and dependency injection,
//! making it easier to manage the application lifecycle and test services.

use std::sync::Arc;

use crate::api::health::LlmHealth;
use crate::model::Config;
use crate::service::{
    AnalysisOrchestrator, ConversationService, LlmClient, OpponentStrategyService,
    StrategyAnalysisService, TermsStore,
};

/// Application state containing all services and shared resources
///
/// This struct centralizes service initialization and makes it easy to inject
/// dependencies into Actix-web handlers.
pub struct AppState {
    /// Aggregate analysis orchestrator
    pub orchestrator: Arc<AnalysisOrchestrator>,
    /// Conversation registry and submission pipeline
    pub conversation_service: Arc<ConversationService>,
    /// Persisted terms-acceptance flag
    pub terms_store: Arc<TermsStore>,
    /// LLM configuration status for the readiness probe
    pub llm_health: LlmHealth,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// This performs:
    /// 1. LLM client initialization (requires OPENAI_API_KEY; absent key
    ///    degrades submissions to a typed error rather than refusing to start)
    /// 2. Terms-state loading from the configured path
    /// 3. Service dependency graph construction
    pub fn new(config: &Config) -> Self {
        let llm_client = LlmClient::from_env();
        let llm_health = LlmHealth {
            configured: llm_client.is_some(),
        };

        let strategy_service = Arc::new(StrategyAnalysisService::new(llm_client.clone()));
        let opponent_service = Arc::new(OpponentStrategyService::new(llm_client));
        let orchestrator = Arc::new(AnalysisOrchestrator::new(
            strategy_service,
            opponent_service,
        ));

        let terms_store = Arc::new(TermsStore::open(&config.terms_path));

        let conversation_service = Arc::new(ConversationService::new(
            orchestrator.clone(),
            terms_store.clone(),
            config.attachments.max_bytes,
        ));

        Self {
            orchestrator,
            conversation_service,
            terms_store,
            llm_health,
        }
    }
}
