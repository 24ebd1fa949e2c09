//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds all shared,
//! clonable resources like the problem catalog and the reply-model client.

use crate::config::Config;
use proctor_core::{problem::ProblemCatalog, reply::ReplyModel};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// sessions.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ProblemCatalog>,
    pub reply_model: Arc<dyn ReplyModel>,
    pub config: Arc<Config>,
}
