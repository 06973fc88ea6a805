//! Contact-form intake.

use async_trait::async_trait;
use tracing::debug;

use crate::error::AppError;
use crate::message::ContactMessage;

/// Destination for validated contact messages. The handler only depends on
/// this seam, so a mailer or datastore can be wired in without touching it.
#[async_trait]
pub trait ContactSink: Send + Sync {
    async fn submit(&self, message: &ContactMessage) -> Result<(), AppError>;
}

/// Accepts and discards.
// TODO: replace with a Supabase or SMTP-backed sink once one is provisioned.
pub struct NullContactSink;

#[async_trait]
impl ContactSink for NullContactSink {
    async fn submit(&self, message: &ContactMessage) -> Result<(), AppError> {
        debug!(from = %message.email, "contact message accepted (not persisted)");
        Ok(())
    }
}
