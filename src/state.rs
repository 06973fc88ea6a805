// src/state.rs
use std::sync::Arc;

use anyhow::Context;

use crate::config::AppConfig;
use crate::rules;
use crate::services::contact::{ContactSink, NullContactSink};
use crate::services::openai::OpenAiProvider;
use crate::services::relay::{ChatRelay, CompletionProvider};

pub type SharedState = Arc<AppState>;

/// Read-only after startup; shared across all in-flight requests.
pub struct AppState {
    pub relay: ChatRelay,
    pub contact: Arc<dyn ContactSink>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let provider: Option<Arc<dyn CompletionProvider>> = match &config.openai_api_key {
            Some(key) => Some(Arc::new(
                OpenAiProvider::new(key.as_str(), config.upstream_url.as_str())
                    .context("failed to build the upstream HTTP client")?,
            )),
            // Deferred failure: the server starts, /api/chat reports the
            // missing credential per request.
            None => None,
        };

        Ok(Self {
            relay: ChatRelay::new(provider, rules::SYSTEM_PROMPT, config.model.as_str()),
            contact: Arc::new(NullContactSink),
        })
    }
}
