//! Policy core of the Proctor voice interviewer.
//!
//! Everything that decides *when the agent speaks* lives here: the problem
//! catalog, the snapshot diff heuristic, the per-session candidate state,
//! the code-update and silence policies, and the instruction templates.
//! The transport, speech pipeline, and model are external collaborators
//! reached through the `voice` and `reply` traits.

pub mod context;
pub mod diff;
pub mod engine;
pub mod problem;
pub mod prompt;
pub mod reply;
pub mod state;
pub mod voice;
