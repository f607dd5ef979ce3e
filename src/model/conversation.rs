//! Conversation log and per-turn state transitions
//!
//! A conversation is an append-only message sequence. The only entry ever
//! removed is the loading placeholder that stands in for an in-flight turn.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::analysis::{CaseLaw, FullAnalysis};

/// Role of a conversation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    Loading,
}

/// One conversation entry
///
/// A user message owns plain text, an assistant message owns a
/// `FullAnalysis` plus a denormalized copy of its cited-case list, and a
/// loading message is a transient placeholder with no payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<FullAnalysis>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relevant_case_laws: Vec<CaseLaw>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::User,
            text: Some(text.into()),
            analysis: None,
            relevant_case_laws: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Assistant message; the cited-case list is denormalized out of the
    /// analysis for quick display.
    pub fn assistant(analysis: FullAnalysis) -> Self {
        let relevant_case_laws = analysis.legal_analysis.relevant_case_laws.clone();
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Assistant,
            text: None,
            analysis: Some(analysis),
            relevant_case_laws,
            created_at: Utc::now(),
        }
    }

    pub fn loading() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Loading,
            text: None,
            analysis: None,
            relevant_case_laws: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Append-only in-memory message log for one conversation
///
/// Also caches the latest successful turn's cited-case list for the side
/// panel.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Conversation {
    pub id: Uuid,
    messages: Vec<Message>,
    cited_cases: Vec<CaseLaw>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            cited_cases: Vec::new(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn cited_cases(&self) -> &[CaseLaw] {
        &self.cited_cases
    }

    /// Start a turn: append the user message and a loading placeholder.
    pub fn begin_turn(&mut self, user_message: Message) {
        debug_assert_eq!(user_message.role, MessageRole::User);
        self.messages.push(user_message);
        self.messages.push(Message::loading());
    }

    /// Resolve the in-flight turn: drop the placeholder, append the
    /// assistant message, and cache its cited cases.
    pub fn resolve_turn(&mut self, assistant_message: Message) {
        debug_assert_eq!(assistant_message.role, MessageRole::Assistant);
        self.remove_loading();
        self.cited_cases = assistant_message.relevant_case_laws.clone();
        self.messages.push(assistant_message);
    }

    /// Fail the in-flight turn: drop the placeholder, append nothing.
    pub fn fail_turn(&mut self) {
        self.remove_loading();
    }

    fn remove_loading(&mut self) {
        self.messages.retain(|m| m.role != MessageRole::Loading);
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
