// src/message.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;

/// Speaker of a conversation turn. Anything other than `"user"` or
/// `"assistant"` fails deserialization at the JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One message in a conversation, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageTurn {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub turns: Vec<MessageTurn>,
}

impl ChatRequest {
    /// Boundary checks that serde cannot express: a conversation must have
    /// at least one turn and no blank content.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.turns.is_empty() {
            return Err(AppError::Validation(
                "turns must contain at least one message".to_owned(),
            ));
        }
        if let Some(i) = self.turns.iter().position(|t| t.content.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "turns[{i}].content must not be empty"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Placeholder for future evidence linking. Always empty today, but
    /// serialized so clients can rely on the field being present.
    pub citations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactAck {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub time: DateTime<Utc>,
}
