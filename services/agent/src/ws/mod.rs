//! WebSocket Session Hosting
//!
//! This module contains the transport side of an interview session. It is
//! structured into submodules:
//!
//! - `protocol`: Defines the JSON message format exchanged with the media host.
//! - `session`: Manages the connection lifecycle, from upgrade to teardown.
//! - `voice`: Implements the core's voice-session surface on top of the socket.

pub mod protocol;
pub mod session;
mod voice;

pub use session::ws_handler;
