//! Defines the WebSocket message protocol between the media host and the agent.
//!
//! The media host (browser or media bridge) owns audio capture, playback
//! and the speech pipeline; the agent only exchanges structured JSON with
//! it. The `code_update` shape is the one contract shared with editor
//! clients and must not change.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Messages sent from the media host to the agent.
#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// A full snapshot of the candidate's code editor.
    #[serde(rename = "code_update")]
    CodeUpdate { code: String },
    /// The candidate's speech was transcribed.
    #[serde(rename = "user_transcribed")]
    UserTranscribed {
        #[serde(default)]
        text: Option<String>,
    },
    /// The agent's speech finished playing out.
    #[serde(rename = "agent_speech_committed")]
    AgentSpeechCommitted,
}

/// Messages sent from the agent to the media host.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Confirms the session is live and describes the selected problem.
    /// The expected approach is interviewer-side only and never included.
    SessionStarted {
        session_id: Uuid,
        problem: String,
        difficulty: String,
        description: String,
    },
    /// A model-generated reply for the speech pipeline to voice.
    AgentReply { text: String },
    /// Fixed text to speak verbatim, with no model inference.
    AgentSay {
        text: String,
        allow_interruptions: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_update_wire_shape_parses() {
        let raw = r#"{"type": "code_update", "code": "def solve():\n    pass"}"#;
        let msg: ClientMessage = serde_json::from_str(raw).unwrap();
        match msg {
            ClientMessage::CodeUpdate { code } => assert!(code.starts_with("def solve()")),
            other => panic!("Expected CodeUpdate, got {other:?}"),
        }
    }

    #[test]
    fn transcription_notice_parses_with_and_without_text() {
        let bare: ClientMessage = serde_json::from_str(r#"{"type": "user_transcribed"}"#).unwrap();
        assert!(matches!(bare, ClientMessage::UserTranscribed { text: None }));

        let with_text: ClientMessage =
            serde_json::from_str(r#"{"type": "user_transcribed", "text": "I would use a map"}"#)
                .unwrap();
        match with_text {
            ClientMessage::UserTranscribed { text } => {
                assert_eq!(text.as_deref(), Some("I would use a map"));
            }
            other => panic!("Expected UserTranscribed, got {other:?}"),
        }
    }

    #[test]
    fn speech_committed_notice_parses() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type": "agent_speech_committed"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::AgentSpeechCommitted));
    }

    #[test]
    fn unknown_message_type_is_rejected() {
        let result =
            serde_json::from_str::<ClientMessage>(r#"{"type": "cursor_moved", "line": 3}"#);
        assert!(result.is_err());
    }

    #[test]
    fn server_messages_serialize_with_snake_case_tags() {
        let say = ServerMessage::AgentSay {
            text: "Take your time.".to_string(),
            allow_interruptions: true,
        };
        let json = serde_json::to_string(&say).unwrap();
        assert!(json.contains(r#""type":"agent_say""#));
        assert!(json.contains(r#""allow_interruptions":true"#));

        let reply = ServerMessage::AgentReply {
            text: "How does your loop terminate?".to_string(),
        };
        let json = serde_json::to_string(&reply).unwrap();
        assert!(json.contains(r#""type":"agent_reply""#));
    }

    #[test]
    fn session_started_omits_the_expected_approach() {
        let msg = ServerMessage::SessionStarted {
            session_id: Uuid::nil(),
            problem: "Two Sum".to_string(),
            difficulty: "Easy".to_string(),
            description: "Find two numbers that add up to the target.".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""type":"session_started""#));
        assert!(json.contains("Two Sum"));
        assert!(!json.to_lowercase().contains("approach"));
    }
}
