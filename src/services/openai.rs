//! OpenAI-compatible completion provider.
//!
//! The request and response structures mirror the chat-completions REST
//! contract: `{model, messages, temperature}` out,
//! `{choices: [{message: {content}}]}` back.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::services::relay::{CompletionProvider, UpstreamMessage};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [UpstreamMessage],
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiProvider {
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[UpstreamMessage],
        model: &str,
        temperature: f32,
    ) -> Result<String, AppError> {
        let request = CompletionRequest {
            model,
            messages,
            temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| AppError::Upstream {
                status: status.as_u16(),
                body: format!("unparseable completion body ({e}): {body}"),
            })?;

        match completion.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(AppError::Upstream {
                status: status.as_u16(),
                body: "completion contained no choices".to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_choice_content() {
        let body = r#"{"id":"cmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"X"},"finish_reason":"stop"}]}"#;
        let completion: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(completion.choices[0].message.content, "X");
    }
}
