//! Per-session candidate tracking.

use tokio::time::Instant;

/// Mutable record of one candidate's code and activity, owned exclusively
/// by a single session behind its mutex.
///
/// `current_code` always holds the latest snapshot applied through
/// `apply_snapshot`, `previous_code` the one immediately before it. The
/// three timestamps only ever move forward.
#[derive(Debug)]
pub struct CandidateState {
    pub current_code: String,
    pub previous_code: String,
    /// When the agent last commented on a code change.
    pub last_code_comment: Instant,
    /// When the agent last nudged a silent candidate.
    pub last_nudge: Instant,
    /// Last candidate speech, agent speech, or code edit.
    pub last_activity: Instant,
}

impl CandidateState {
    /// Creates state for a session starting now. Code fields start empty
    /// and all timestamps at the session-start instant.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            current_code: String::new(),
            previous_code: String::new(),
            last_code_comment: now,
            last_nudge: now,
            last_activity: now,
        }
    }

    /// Applies a fresh editor snapshot, shifting the current one into
    /// `previous_code`, and refreshes the activity timestamp.
    pub fn apply_snapshot(&mut self, code: String) {
        self.previous_code = std::mem::replace(&mut self.current_code, code);
        self.last_activity = Instant::now();
    }

    /// Records candidate or agent speech activity.
    pub fn mark_activity(&mut self) {
        self.last_activity = Instant::now();
    }
}

impl Default for CandidateState {
    fn default() -> Self {
        Self::new()
    }
}
