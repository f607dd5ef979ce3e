// Defined but not wired into the orchestration action; kept per the
// product decision to leave case linking dormant.
#[allow(dead_code)]
pub mod caselink;
pub mod conversation;
pub mod extraction;
pub mod llm;
pub mod opponent;
pub mod orchestrator;
pub mod strategy;
pub mod terms;

pub use conversation::ConversationService;
pub use llm::LlmClient;
pub use opponent::OpponentStrategyService;
pub use orchestrator::AnalysisOrchestrator;
pub use strategy::StrategyAnalysisService;
pub use terms::TermsStore;
