//! Socket-backed implementation of the core voice-session surface.

use super::{protocol::ServerMessage, session::send_msg};
use anyhow::Result;
use async_trait::async_trait;
use axum::extract::ws::{Message, WebSocket};
use futures_util::stream::SplitSink;
use proctor_core::{reply::ReplyModel, voice::VoiceSession};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Speaks through the session's WebSocket. Generated replies and scripted
/// phrases are forwarded as text to the media host, which owns synthesis
/// and playback.
pub struct WsVoiceSession {
    sink: Arc<Mutex<SplitSink<WebSocket, Message>>>,
    model: Arc<dyn ReplyModel>,
    /// Session-wide persona instructions, fixed at session start.
    persona_instructions: String,
}

impl WsVoiceSession {
    pub fn new(
        sink: Arc<Mutex<SplitSink<WebSocket, Message>>>,
        model: Arc<dyn ReplyModel>,
        persona_instructions: String,
    ) -> Self {
        Self {
            sink,
            model,
            persona_instructions,
        }
    }
}

#[async_trait]
impl VoiceSession for WsVoiceSession {
    async fn generate_reply(&self, instructions: &str) -> Result<()> {
        let text = self
            .model
            .complete(&self.persona_instructions, instructions)
            .await?;
        debug!(chars = text.len(), "Reply model produced text");

        let mut sink = self.sink.lock().await;
        send_msg(&mut sink, ServerMessage::AgentReply { text }).await
    }

    async fn say(&self, text: &str, allow_interruptions: bool) -> Result<()> {
        let mut sink = self.sink.lock().await;
        send_msg(
            &mut sink,
            ServerMessage::AgentSay {
                text: text.to_string(),
                allow_interruptions,
            },
        )
        .await
    }
}
