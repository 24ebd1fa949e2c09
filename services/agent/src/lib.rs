//! Proctor Agent Service Library
//!
//! This library contains the composition layer of the Proctor voice
//! interviewer: configuration, shared application state, the WebSocket
//! transport that hosts interview sessions, and routing. The `agent`
//! binary is a thin wrapper around this library.

pub mod config;
pub mod router;
pub mod state;
pub mod ws;
