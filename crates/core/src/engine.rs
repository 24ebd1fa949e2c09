//! When-to-speak policy: code-change follow-ups and silence nudges.
//!
//! Two cooperating pieces share one `CandidateState` per session: the
//! code-update handler reacts to inbound editor snapshots, and the
//! `SilenceMonitor` polls for prolonged inactivity. Both complete every
//! state mutation before awaiting a speech call, so neither ever observes
//! the other's update half-applied.

use crate::diff::{self, ChangeKind};
use crate::prompt;
use crate::state::CandidateState;
use crate::voice::VoiceSession;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Minimum gap between model follow-ups triggered by code changes.
const COMMENT_COOLDOWN: Duration = Duration::from_secs(30);
/// Candidate inactivity required before a nudge is considered.
const SILENCE_THRESHOLD: Duration = Duration::from_secs(45);
/// Minimum gap between consecutive nudges.
const NUDGE_COOLDOWN: Duration = Duration::from_secs(45);
/// How often the silence monitor re-evaluates the session.
const POLL_INTERVAL: Duration = Duration::from_secs(20);

/// Fixed rotation of nudge phrases, spoken verbatim in order.
const NUDGE_MESSAGES: [&str; 4] = [
    "I notice you've been quiet for a bit. Would you like to talk through your approach?",
    "Take your time, but feel free to think out loud if it helps.",
    "I'm here if you have any questions or want to discuss your solution.",
    "No pressure, but sharing your thought process can help me give you better feedback.",
];

/// Applies an inbound editor snapshot and, when the change is significant
/// and the comment cooldown has elapsed, asks the voice runtime for a
/// short follow-up about the candidate's approach.
///
/// This is the only path that ever triggers an approach question from code
/// activity. Callers invoke it at most once per inbound snapshot and never
/// concurrently for the same session. A failed reply is logged and leaves
/// the state valid for the next event.
pub async fn handle_code_update(
    code: String,
    state: &Mutex<CandidateState>,
    voice: &dyn VoiceSession,
) {
    let instructions = {
        let mut candidate = state.lock().await;
        candidate.apply_snapshot(code);
        let result = diff::analyze(&candidate.previous_code, &candidate.current_code);
        debug!(kind = ?result.kind, significant = result.significant, "Analyzed code snapshot");

        let now = Instant::now();
        if result.significant && now.duration_since(candidate.last_code_comment) > COMMENT_COOLDOWN {
            candidate.last_code_comment = now;
            if result.kind == ChangeKind::DrasticChange {
                info!("Drastic code change detected");
            }
            Some(prompt::code_comment_instructions(&candidate.current_code))
        } else {
            None
        }
    };

    if let Some(instructions) = instructions {
        if let Err(e) = voice.generate_reply(&instructions).await {
            warn!(error = ?e, "Failed to generate code follow-up");
        }
    }
}

/// Periodic watcher that nudges a candidate who has gone quiet.
///
/// Runs until its token is cancelled. Nudge phrases rotate in fixed order
/// through a counter owned by the monitor, so the fifth nudge repeats the
/// first.
pub struct SilenceMonitor {
    state: Arc<Mutex<CandidateState>>,
    voice: Arc<dyn VoiceSession>,
    nudge_index: usize,
}

impl SilenceMonitor {
    pub fn new(state: Arc<Mutex<CandidateState>>, voice: Arc<dyn VoiceSession>) -> Self {
        Self {
            state,
            voice,
            nudge_index: 0,
        }
    }

    /// Re-evaluates the session every 20 seconds until cancelled.
    pub async fn run(mut self, cancel: CancellationToken) {
        let mut poll = time::interval(POLL_INTERVAL);
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            tokio::select! {
                // The interval's first tick completes immediately; at
                // session start neither threshold is met, so it no-ops.
                _ = poll.tick() => self.tick().await,
                () = cancel.cancelled() => {
                    info!("Silence monitor stopped");
                    return;
                }
            }
        }
    }

    async fn tick(&mut self) {
        let message = {
            let mut candidate = self.state.lock().await;
            let now = Instant::now();
            let idle = now.duration_since(candidate.last_activity);
            let since_nudge = now.duration_since(candidate.last_nudge);

            if idle > SILENCE_THRESHOLD && since_nudge > NUDGE_COOLDOWN {
                candidate.last_nudge = now;
                let message = NUDGE_MESSAGES[self.nudge_index % NUDGE_MESSAGES.len()];
                self.nudge_index += 1;
                debug!(idle = ?idle, "Nudging silent candidate");
                Some(message)
            } else {
                None
            }
        };

        if let Some(message) = message {
            if let Err(e) = self.voice.say(message, true).await {
                warn!(error = ?e, "Failed to speak nudge");
            }
        }
    }
}
