//! Conversation relay: prepend the system instruction, forward the turns
//! to a completion provider, translate the reply.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::error::AppError;
use crate::message::{ChatResponse, MessageTurn};

/// Sampling temperature submitted with every completion request.
pub const TEMPERATURE: f32 = 0.2;

/// A message in the wire format the upstream API expects. Unlike
/// [`MessageTurn`], the role is an open string so the system instruction
/// can be represented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpstreamMessage {
    pub role: String,
    pub content: String,
}

impl UpstreamMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_owned(),
            content: content.into(),
        }
    }
}

impl From<&MessageTurn> for UpstreamMessage {
    fn from(turn: &MessageTurn) -> Self {
        Self {
            role: turn.role.as_str().to_owned(),
            content: turn.content.clone(),
        }
    }
}

/// Capability seam over the upstream chat-completion API. Implemented by
/// the real HTTP provider and by recording fakes in tests.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        messages: &[UpstreamMessage],
        model: &str,
        temperature: f32,
    ) -> Result<String, AppError>;
}

/// Forwards validated conversations upstream. Holds no per-request state;
/// one instance is shared across all requests.
pub struct ChatRelay {
    provider: Option<Arc<dyn CompletionProvider>>,
    system_prompt: String,
    model: String,
}

impl ChatRelay {
    /// `provider` is `None` when the upstream credential was absent at
    /// startup; every relay attempt then fails before any network call.
    pub fn new(
        provider: Option<Arc<dyn CompletionProvider>>,
        system_prompt: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            system_prompt: system_prompt.into(),
            model: model.into(),
        }
    }

    /// Forward `turns` upstream with the system instruction prepended,
    /// preserving the caller's order. Exactly one outbound call.
    pub async fn relay(&self, turns: &[MessageTurn]) -> Result<ChatResponse, AppError> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            AppError::Config("server is missing its OPENAI_API_KEY".to_owned())
        })?;

        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages.push(UpstreamMessage::system(&self.system_prompt));
        messages.extend(turns.iter().map(UpstreamMessage::from));

        debug!(turns = turns.len(), model = %self.model, "forwarding conversation upstream");
        let reply = provider
            .complete(&messages, &self.model, TEMPERATURE)
            .await?;

        Ok(ChatResponse {
            reply,
            citations: Vec::new(),
        })
    }
}
