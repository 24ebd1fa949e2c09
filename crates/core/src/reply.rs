//! Client for the hosted reply model.
//!
//! One non-streaming chat completion per turn: the session's persona
//! instructions ride as the system message and the per-turn instructions
//! as the user message. Any OpenAI-compatible endpoint works; the service
//! points this at Groq by default.

use anyhow::{Context, Result};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;

/// A model that turns per-turn instructions into reply text.
#[async_trait]
pub trait ReplyModel: Send + Sync {
    /// Produces one reply constrained by `instructions`, under the
    /// session-wide `system_prompt`.
    async fn complete(&self, system_prompt: &str, instructions: &str) -> Result<String>;
}

/// An implementation of `ReplyModel` for any OpenAI-compatible API.
pub struct OpenAICompatibleModel {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAICompatibleModel {
    /// Creates a new client for an OpenAI-compatible service.
    ///
    /// # Arguments
    ///
    /// * `config` - API key and base URL of the endpoint.
    /// * `model` - Chat model identifier (e.g. "llama-3.3-70b-versatile").
    pub fn new(config: OpenAIConfig, model: String) -> Self {
        Self {
            client: Client::with_config(config),
            model,
        }
    }
}

#[async_trait]
impl ReplyModel for OpenAICompatibleModel {
    async fn complete(&self, system_prompt: &str, instructions: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(instructions)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .context("No response choice from reply model")?
            .message
            .content
            .clone()
            .context("No content in reply model response")
    }
}
