//! The narrow surface of the external voice runtime.
//!
//! The policy engine never talks to a transport or speech provider
//! directly; it issues speech through this trait, which the hosting
//! service implements and tests mock.

use anyhow::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// The two ways the agent produces speech.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VoiceSession: Send + Sync {
    /// Asks the hosted model to produce and speak a reply constrained by
    /// `instructions`, scoped to this single turn. May fail transiently.
    async fn generate_reply(&self, instructions: &str) -> Result<()>;

    /// Speaks fixed text verbatim, with no model inference. May fail
    /// transiently.
    async fn say(&self, text: &str, allow_interruptions: bool) -> Result<()>;
}
