//! Manages the WebSocket connection lifecycle for an interview session.

use super::{
    protocol::{ClientMessage, ServerMessage},
    voice::WsVoiceSession,
};
use crate::state::AppState;
use anyhow::Result;
use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::{
    SinkExt, StreamExt,
    stream::{SplitSink, SplitStream},
};
use proctor_core::{
    engine::{self, SilenceMonitor},
    prompt,
    state::CandidateState,
    voice::VoiceSession,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, error, info, instrument, warn};
use uuid::Uuid;

/// Snapshots at or below this many trimmed characters carry nothing worth
/// analyzing and are dropped at the transport boundary.
const MIN_SNAPSHOT_CHARS: usize = 20;

/// Axum handler to upgrade an HTTP connection to a WebSocket.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Main handler for an individual interview session.
///
/// This function is the composition root for one session: it selects a
/// problem, builds the persona instructions, wires the policy engine to
/// the socket-backed voice session, starts the silence monitor, and runs
/// the receive loop until the peer disconnects.
#[instrument(name = "interview_session", skip_all, fields(session_id, problem))]
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let session_id = Uuid::new_v4();
    tracing::Span::current().record("session_id", session_id.to_string());

    let problem = state.catalog.choose().clone();
    tracing::Span::current().record("problem", problem.name);
    info!(difficulty = %problem.difficulty, "Starting interview session");

    let (socket_tx, socket_rx) = socket.split();
    let socket_tx = Arc::new(Mutex::new(socket_tx));

    // Tell the media host which problem this session runs before any
    // speech goes out.
    let started = ServerMessage::SessionStarted {
        session_id,
        problem: problem.name.to_string(),
        difficulty: problem.difficulty.to_string(),
        description: problem.description.to_string(),
    };
    if send_msg(&mut *socket_tx.lock().await, started).await.is_err() {
        error!("Failed to send session_started; closing session");
        return;
    }

    let voice: Arc<dyn VoiceSession> = Arc::new(WsVoiceSession::new(
        socket_tx.clone(),
        state.reply_model.clone(),
        prompt::interviewer_instructions(&problem),
    ));

    let candidate = Arc::new(Mutex::new(CandidateState::new()));

    let cancel = CancellationToken::new();
    let monitor = SilenceMonitor::new(candidate.clone(), voice.clone());
    let monitor_handle = tokio::spawn(monitor.run(cancel.clone()).in_current_span());

    // Opening turn. A failed greeting degrades to a silent start; the
    // session itself stays up.
    if let Err(e) = voice
        .generate_reply(&prompt::greeting_instructions(&problem))
        .await
    {
        warn!(error = ?e, "Failed to deliver opening greeting");
    }

    run_session(socket_rx, &candidate, voice.as_ref()).await;

    // Teardown: cancel the monitor and abort rather than join, so a speech
    // call still in flight is abandoned instead of blocking shutdown.
    cancel.cancel();
    monitor_handle.abort();
    info!("Interview session ended");
}

/// Routes inbound transport messages until the peer disconnects.
///
/// Code updates are awaited inline, so at most one runs per session at a
/// time and its state mutation lands before the next event is read.
async fn run_session(
    mut socket_rx: SplitStream<WebSocket>,
    candidate: &Mutex<CandidateState>,
    voice: &dyn VoiceSession,
) {
    while let Some(msg_result) = socket_rx.next().await {
        let ws_msg = match msg_result {
            Ok(ws_msg) => ws_msg,
            Err(e) => {
                error!(error = ?e, "Error receiving from session WebSocket");
                break;
            }
        };

        match ws_msg {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(ClientMessage::CodeUpdate { code }) => {
                    if code.trim().chars().count() > MIN_SNAPSHOT_CHARS {
                        engine::handle_code_update(code, candidate, voice).await;
                    }
                }
                Ok(ClientMessage::UserTranscribed { text }) => {
                    if let Some(text) = text {
                        info!(%text, "Candidate speech transcribed");
                    }
                    candidate.lock().await.mark_activity();
                }
                Ok(ClientMessage::AgentSpeechCommitted) => {
                    candidate.lock().await.mark_activity();
                }
                Err(e) => warn!(error = %e, "Dropping malformed client message"),
            },
            Message::Close(_) => {
                info!("Client sent close frame. Shutting down session.");
                break;
            }
            Message::Binary(_) => warn!("Ignoring unexpected binary frame"),
            Message::Ping(_) | Message::Pong(_) => {}
        }
    }
}

/// A helper function to serialize and send a `ServerMessage` to the media host.
pub(crate) async fn send_msg(
    socket_tx: &mut SplitSink<WebSocket, Message>,
    msg: ServerMessage,
) -> Result<()> {
    let serialized = serde_json::to_string(&msg)?;
    socket_tx.send(Message::Text(serialized.into())).await?;
    Ok(())
}
