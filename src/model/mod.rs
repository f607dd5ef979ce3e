pub mod analysis;
pub mod config;
pub mod conversation;
pub mod extracted;

pub use analysis::{CaseLaw, FullAnalysis, LegalAnalysis, OpponentPrediction};
pub use config::Config;
pub use conversation::{Conversation, Message, MessageRole};
